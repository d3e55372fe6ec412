use base64::{Engine as _, engine::general_purpose::STANDARD as base64};

use super::CredentialEncoder;
use crate::error::Error;

/// Engine that base64-encodes the credential's UTF-8 byte sequence directly.
pub struct BufferEncoder;

impl CredentialEncoder for BufferEncoder {
    fn encode(&self, raw: &str) -> Result<String, Error> {
        Ok(base64.encode(raw.as_bytes()))
    }
}
