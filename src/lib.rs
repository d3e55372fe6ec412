//! Construction of HTTP `Authorization` header values for the Basic
//! authentication scheme, as defined in RFC 7617. The username and password
//! are joined with a colon, the UTF-8 byte sequence of the joined string is
//! base64-encoded, and the result is prefixed with `Basic `.
//!
//! The encoding runs on one of two base64 engines (a byte-buffer engine and
//! a text-code-point engine), selected per login; see [`encoder`]. Both
//! engines produce identical output for identical credentials.

pub mod basic;
pub mod configuration;
pub mod encoder;
pub mod error;
pub mod header;

pub use basic::{BasicAuth, BasicLogin};
pub use encoder::EngineKind;
pub use error::Error;
pub use header::{HeaderSource, authorization_headers};
