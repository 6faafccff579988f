//! The eleven 512-bit hash primitives.
//!
//! Each submodule exposes `hash(input: &[u8]) -> [u8; 64]`. Implementations
//! follow the round-3 SHA-3 candidate definitions used by the X11 family
//! (sphlib conventions), checked against the published empty-message vectors.

mod aes;

pub mod blake;
pub mod bmw;
pub mod cubehash;
pub mod echo;
pub mod groestl;
pub mod jh;
pub mod keccak;
pub mod luffa;
pub mod shavite;
pub mod simd;
pub mod skein;

#[inline(always)]
pub(crate) fn read_u64_be(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[..8]);
    u64::from_be_bytes(word)
}

#[inline(always)]
pub(crate) fn read_u64_le(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(word)
}

#[inline(always)]
pub(crate) fn read_u32_be(bytes: &[u8]) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[..4]);
    u32::from_be_bytes(word)
}

#[inline(always)]
pub(crate) fn read_u32_le(bytes: &[u8]) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[..4]);
    u32::from_le_bytes(word)
}
