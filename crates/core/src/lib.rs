//! # C11 Core
//!
//! The Chaincoin C11 proof-of-work hash: eleven 512-bit primitives applied
//! one after another, each hashing the previous stage's full output, with
//! the final 64 bytes truncated to a 256-bit digest.
//!
//! ## Stage order
//!
//! ```text
//! blake -> bmw -> groestl -> jh -> keccak -> skein
//!       -> luffa -> cubehash -> shavite -> simd -> echo -> first 32 bytes
//! ```
//!
//! The order is part of the consensus rules. The X11 order used by Dash
//! (skein before jh and keccak) is available as [`X11_STAGES`].
//!
//! ## Example
//!
//! ```rust
//! use c11_core::{Algorithm, Chain, C11_STAGES, chain11, hex_encode};
//!
//! // Single-shot digest
//! let digest = chain11(b"");
//! assert_eq!(
//!     hex_encode(digest),
//!     "e78f96c5d9f3547bef7228f8f98c780881b579e44e195c1884018cd79b3a1641"
//! );
//!
//! // Intermediate outputs, one per stage
//! let trace = Chain::new(C11_STAGES).trace(b"").unwrap();
//! assert_eq!(trace[10].algorithm, Algorithm::Echo);
//! assert_eq!(trace[10].output.truncate(), digest);
//! ```
//!
//! ## no_std Support
//!
//! Everything except the C FFI works with `alloc` only:
//!
//! ```toml
//! [dependencies]
//! c11-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod algorithm;
mod chain;
mod codec;
mod error;
mod fixed;
mod params;
pub mod primitives;

#[cfg(feature = "std")]
mod ffi;

pub use algorithm::{
    Algorithm, UnknownAlgorithm, hash_blake, hash_bmw, hash_cubehash, hash_echo, hash_groestl,
    hash_jh, hash_keccak, hash_luffa, hash_shavite, hash_simd, hash_skein,
};
pub use chain::{Backend, Chain, Software, StageOutput, chain11, chain11_batch, x11};
pub use codec::{hex_decode, hex_decode_fixed, hex_encode};
pub use error::{Error, Result};
pub use fixed::{FixedBytes, FixedBytes32, FixedBytes64};
pub use params::*;
