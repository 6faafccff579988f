//! C11 Hasher Library
//!
//! Command line support around the Chaincoin C11 proof-of-work hash.
//!
//! The hash itself lives in `c11-core` and is re-exported here as
//! [`algorithm`]. This crate adds configuration, logging setup, input
//! handling, printable reports and the known-answer self test used by the
//! `c11` binary.
//!
//! # Example
//!
//! ```rust
//! use c11::{chain11, x11, hex_encode};
//!
//! let header = [0u8; 80];
//! assert_eq!(
//!     hex_encode(chain11(&header)),
//!     "467fe126a25b31178099c1955d67ae093a84fbcdf3533e5561dbaafcc96c3069"
//! );
//! assert_ne!(chain11(&header), x11(&header));
//! ```

// Re-export the core algorithm
pub use c11_core as algorithm;

pub mod config;
pub mod input;
pub mod logging;
pub mod report;
pub mod selftest;

// Convenience re-exports
pub use algorithm::{
    Algorithm, C11_STAGES, Chain, FixedBytes32, FixedBytes64, X11_STAGES, chain11, chain11_batch,
    hex_decode, hex_encode, x11,
};
