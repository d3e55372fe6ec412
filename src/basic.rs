use std::fmt;

use crate::{encoder::EngineKind, error::Error};

/// Login configuration for the Basic authentication scheme. The username and
/// password are stored exactly as given; no trimming or escaping is applied.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct BasicLogin {
    username: String,
    password: String,
    /// Which base64 engine encodes the credentials. The default detects an
    /// available engine; forcing one exists to pin down a single code path
    /// deterministically.
    #[serde(default)]
    encoder: EngineKind,
}

impl BasicLogin {
    /// Builds a login from any values with a textual representation, taken
    /// via `ToString` at construction time. The wire format allows exactly
    /// one colon separator, so a username containing a colon changes which
    /// credentials the server reads; no validation of this is performed.
    pub fn new(username: impl ToString, password: impl ToString) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            encoder: EngineKind::default(),
        }
    }

    /// Replaces the base64 engine selector.
    pub fn with_encoder(mut self, encoder: EngineKind) -> Self {
        self.encoder = encoder;
        self
    }

    /// Encodes the credentials into an `Authorization` header value.
    pub fn authorization(&self) -> Result<BasicAuth, Error> {
        BasicAuth::new(self)
    }
}

/// An encoded credential pair. Both fields are computed together at
/// construction and never diverge: the header value is always `Basic `
/// followed by the encoded credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    credentials: String,
    header_value: String,
}

impl BasicAuth {
    /// Constructs the Authorization header value for the given login, by
    /// base64-encoding the UTF-8 bytes of the string `username:password`.
    pub fn new(login: &BasicLogin) -> Result<Self, Error> {
        let raw = format!("{}:{}", login.username, login.password);
        let credentials = login.encoder.select()?.encode(&raw)?;
        let header_value = format!("Basic {credentials}");
        Ok(Self {
            credentials,
            header_value,
        })
    }

    /// The base64-encoded `username:password` string.
    pub fn credentials(&self) -> &str {
        &self.credentials
    }

    /// The full header value: `Basic ` followed by the encoded credentials.
    pub fn header_value(&self) -> &str {
        &self.header_value
    }
}

/// Yields the header value, so an encoded login can be passed directly
/// wherever header text is expected.
impl fmt::Display for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header_value)
    }
}
