//! Produces HTTP header collections from encoded credentials. The encoder
//! itself only formats a string; this module is the seam where that string
//! enters a Reqwest HeaderMap, for callers that configure an HTTP client
//! with default headers.

use anyhow::{Context, Result};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::basic::BasicAuth;

/// A value that can be rendered as HTTP header text. Header-construction
/// code accepts this capability rather than relying on implicit string
/// conversion.
pub trait HeaderSource {
    /// The exact text to place in the header.
    fn header_text(&self) -> &str;
}

impl HeaderSource for BasicAuth {
    fn header_text(&self) -> &str {
        self.header_value()
    }
}

/// Plain strings are accepted as header sources as-is.
impl HeaderSource for str {
    fn header_text(&self) -> &str {
        self
    }
}

/// Builds a header map containing the `Authorization` entry for the given
/// source.
pub fn authorization_headers(source: &(impl HeaderSource + ?Sized)) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(source.header_text()).with_context(|| {
            format!("Can't parse {:?} as header value", source.header_text())
        })?,
    );
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use reqwest::header::AUTHORIZATION;

    use super::authorization_headers;
    use crate::basic::{BasicAuth, BasicLogin};

    const EXPECTED: &str = "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==";

    fn auth() -> BasicAuth {
        BasicLogin::new("Aladdin", "open sesame")
            .authorization()
            .unwrap()
    }

    #[test]
    fn header_map_reads_back_the_encoded_value() {
        let headers = authorization_headers(&auth()).unwrap();
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value.to_str().unwrap(), EXPECTED);
    }

    #[test]
    fn plain_strings_are_accepted_as_sources() {
        let headers = authorization_headers(EXPECTED).unwrap();
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value.to_str().unwrap(), EXPECTED);
    }

    #[test]
    fn control_characters_are_rejected_as_header_values() {
        assert!(authorization_headers("Basic \n").is_err());
    }

    #[test]
    fn request_carries_the_authorization_header() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/")
            .match_header("authorization", EXPECTED)
            .with_status(200)
            .create();

        let client = reqwest::blocking::Client::builder()
            .default_headers(authorization_headers(&auth()).unwrap())
            .build()
            .unwrap();
        let response = client.get(server.url()).send().unwrap();

        mock.assert();
        assert!(response.status().is_success());
    }
}
