//! Hex codec: lowercase on encode, case-insensitive on decode.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use hex::FromHexError;

use crate::error::{Error, Result};
use crate::fixed::FixedBytes;

/// Lowercase hex, most significant nibble first, no prefix or separators.
pub fn hex_encode(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decode hex text. The whole input is rejected on the first problem.
///
/// Length and digit checks count characters, not UTF-8 bytes, so errors
/// point at what the caller actually wrote.
pub fn hex_decode(text: &str) -> Result<Vec<u8>> {
    let length = text.chars().count();
    if length % 2 != 0 {
        return Err(Error::InvalidHexLength { length });
    }
    if let Some((index, character)) = text
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(Error::InvalidHexDigit { character, index });
    }
    hex::decode(text).map_err(|e| map_error(length, e))
}

/// Decode hex text straight into a fixed-width container.
pub fn hex_decode_fixed<const N: usize>(text: &str) -> Result<FixedBytes<N>> {
    let bytes = hex_decode(text)?;
    FixedBytes::from_slice(&bytes)
}

// Not reachable once the character checks pass.
fn map_error(length: usize, err: FromHexError) -> Error {
    match err {
        FromHexError::InvalidHexCharacter { c, index } => Error::InvalidHexDigit {
            character: c,
            index,
        },
        FromHexError::OddLength | FromHexError::InvalidStringLength => {
            Error::InvalidHexLength { length }
        }
    }
}
