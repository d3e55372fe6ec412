//! Base64 engine selection. The wire format needs the base64 encoding of a
//! byte sequence, but hosts differ in which primitive they offer: an engine
//! that consumes bytes directly, or a text-oriented engine that consumes a
//! string whose characters all lie in the 0-255 code point range and treats
//! each character as one byte. Both are provided here behind the
//! [`CredentialEncoder`] trait and chosen through [`EngineKind`]; the cargo
//! features `buffer-encoder` and `text-encoder` control which engines are
//! compiled in.

use crate::error::Error;

#[cfg(feature = "buffer-encoder")]
pub mod buffer;
#[cfg(feature = "text-encoder")]
pub mod text;

/// A base64 primitive capable of encoding the raw `username:password`
/// credential string. Implementations must produce identical output for
/// identical input.
pub trait CredentialEncoder {
    /// Encodes the UTF-8 byte sequence of `raw` as base64 text, using the
    /// standard alphabet with `=` padding.
    fn encode(&self, raw: &str) -> Result<String, Error>;
}

/// Selects which base64 engine encodes the credentials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EngineKind {
    /// Use the byte-buffer engine when compiled in, the text engine
    /// otherwise.
    #[default]
    Detect,
    /// Force the byte-buffer engine.
    Buffer,
    /// Force the text-code-point engine.
    Text,
}

impl EngineKind {
    /// Resolves the selector to an engine. Fails with
    /// [`Error::EncoderUnavailable`] when the requested engine (or, for
    /// `Detect`, any engine at all) is compiled out.
    #[allow(unreachable_code)]
    pub fn select(self) -> Result<&'static dyn CredentialEncoder, Error> {
        match self {
            EngineKind::Detect => {
                #[cfg(feature = "buffer-encoder")]
                return Ok(&buffer::BufferEncoder);
                #[cfg(feature = "text-encoder")]
                return Ok(&text::TextEncoder);
                Err(Error::EncoderUnavailable(self))
            }
            EngineKind::Buffer => {
                #[cfg(feature = "buffer-encoder")]
                return Ok(&buffer::BufferEncoder);
                Err(Error::EncoderUnavailable(self))
            }
            EngineKind::Text => {
                #[cfg(feature = "text-encoder")]
                return Ok(&text::TextEncoder);
                Err(Error::EncoderUnavailable(self))
            }
        }
    }
}
