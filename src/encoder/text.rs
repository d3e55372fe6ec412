use base64::{Engine as _, engine::general_purpose::STANDARD as base64};

use super::CredentialEncoder;
use crate::error::Error;

/// Engine for hosts whose base64 primitive consumes text rather than bytes.
/// The primitive ([`encode_text`]) accepts only strings whose characters all
/// lie in the 0-255 code point range and encodes each character as one byte,
/// so the credential's UTF-8 bytes are first mapped to a synthetic string in
/// that range. This recovers byte-for-byte fidelity for input containing
/// characters above U+00FF.
pub struct TextEncoder;

impl CredentialEncoder for TextEncoder {
    fn encode(&self, raw: &str) -> Result<String, Error> {
        encode_text(&to_binary_string(raw.as_bytes()))
    }
}

/// Maps every byte to the character with the same code point, yielding a
/// string that [`encode_text`] accepts regardless of the original input.
fn to_binary_string(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Base64-encodes a string one character per byte. Fails on any character
/// with a code point above U+00FF, since such a character does not denote a
/// single byte.
pub fn encode_text(text: &str) -> Result<String, Error> {
    let mut bytes = Vec::with_capacity(text.len());
    for (index, character) in text.chars().enumerate() {
        let code = u32::from(character);
        if code > 0xFF {
            return Err(Error::NonLatin1 { character, index });
        }
        bytes.push(code as u8);
    }
    Ok(base64.encode(bytes))
}
