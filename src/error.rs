use crate::encoder::EngineKind;

/// Errors produced while encoding credentials.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The selected base64 engine is not compiled into this build. This is a
    /// fatal configuration error; selection cannot be retried.
    #[error("the '{0}' base64 engine is not compiled into this build")]
    EncoderUnavailable(EngineKind),

    /// The text-oriented engine was handed a character it cannot treat as a
    /// single byte. Unreachable through [`crate::BasicLogin`], which only
    /// feeds the engine strings with code points in 0-255.
    #[error("character {character:?} at index {index} has a code point above U+00FF")]
    NonLatin1 { character: char, index: usize },
}
