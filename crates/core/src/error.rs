//! Error taxonomy shared by the containers, the hex codec and the chain.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::algorithm::Algorithm;

/// Errors surfaced by this crate. Nothing is logged or retried internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A fixed-width container was built from a buffer of the wrong length.
    #[error("size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Hex text with an odd number of characters.
    #[error("invalid hex length {length}: must be even")]
    InvalidHexLength { length: usize },

    /// Hex text containing a character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit {character:?} at index {index}")]
    InvalidHexDigit { character: char, index: usize },

    /// A primitive backend could not process its input.
    #[error("{algorithm} failed: {reason}")]
    PrimitiveFailure { algorithm: Algorithm, reason: String },
}

pub type Result<T> = core::result::Result<T, Error>;
