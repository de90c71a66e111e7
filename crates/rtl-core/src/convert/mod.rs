//! Conversions between strings, numbers and bytes.
//!
//! Every parsing function comes in two forms: one returning
//! `Result<_, ConvertError>` and a `_def` variant that returns a caller
//! supplied default on failure.  None of them panic.
//!
//! - [`strings`] – bool / integer / float ⇄ text.
//! - [`bytes`] – fixed-width little-endian integer encoding.
//! - [`encode`] – whole-struct encoding through `serde` + `bincode`.

use thiserror::Error;

pub mod bytes;
pub mod encode;
pub mod strings;

pub use bytes::*;
pub use encode::{bytes_to_struct, struct_to_bytes};
pub use strings::*;

/// Errors produced by the conversion helpers.
#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    /// The text is not a valid representation of the target type.
    #[error("cannot convert {input:?} to {target}")]
    Parse { input: String, target: &'static str },

    /// The byte slice is shorter than the value being decoded.
    #[error("insufficient data: need at least {needed} bytes, got {available}")]
    InsufficientData { needed: usize, available: usize },

    /// `bincode` rejected the value or the bytes.
    #[error("struct encoding failed: {0}")]
    Encoding(String),
}
