//! Fixed-width byte containers for digests.
//!
//! Lengths are part of the type, so a 32-byte digest can never be handed to
//! something expecting 64 bytes. The only way to go from 64 to 32 bytes is
//! [`FixedBytes64::truncate`].

use core::fmt;
use core::ops::Deref;
use core::str::FromStr;

use crate::codec::{hex_decode_fixed, hex_encode};
use crate::error::{Error, Result};

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Immutable value of exactly `N` bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedBytes<const N: usize>([u8; N]);

/// 256-bit digest (chain output).
pub type FixedBytes32 = FixedBytes<32>;

/// 512-bit digest (primitive output).
pub type FixedBytes64 = FixedBytes<64>;

impl<const N: usize> FixedBytes<N> {
    /// Number of bytes held.
    pub const LEN: usize = N;

    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Copy from a slice of exactly `N` bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let array: [u8; N] = bytes.try_into().map_err(|_| Error::SizeMismatch {
            expected: N,
            actual: bytes.len(),
        })?;
        Ok(Self(array))
    }

    /// Parse from hex text of exactly `2 * N` digits.
    pub fn from_hex(text: &str) -> Result<Self> {
        hex_decode_fixed(text)
    }

    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub const fn into_inner(self) -> [u8; N] {
        self.0
    }

    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        N
    }

    /// Lowercase hex, two characters per byte.
    pub fn to_hex(&self) -> String {
        hex_encode(self.0)
    }

    /// Byte-reversed copy, the order block explorers display 256-bit hashes in.
    pub fn reversed(&self) -> Self {
        let mut bytes = self.0;
        bytes.reverse();
        Self(bytes)
    }
}

impl FixedBytes64 {
    /// First 32 bytes. This is the pipeline's final step, not a re-hash.
    pub fn truncate(&self) -> FixedBytes32 {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.0[..32]);
        FixedBytes(out)
    }
}

impl<const N: usize> Default for FixedBytes<N> {
    fn default() -> Self {
        Self([0u8; N])
    }
}

impl<const N: usize> From<[u8; N]> for FixedBytes<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> From<FixedBytes<N>> for [u8; N] {
    fn from(value: FixedBytes<N>) -> Self {
        value.0
    }
}

impl<const N: usize> TryFrom<&[u8]> for FixedBytes<N> {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl<const N: usize> FromStr for FixedBytes<N> {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_hex(text)
    }
}

impl<const N: usize> AsRef<[u8]> for FixedBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> Deref for FixedBytes<N> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> fmt::LowerHex for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Display for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl<const N: usize> fmt::Debug for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedBytes{N}({self:x})")
    }
}
