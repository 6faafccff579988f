//! Chain parameters
//!
//! Widths of the digests flowing through the pipeline and the stage
//! descriptors of the two chain variants this crate knows about.

use crate::algorithm::Algorithm;
use crate::algorithm::Algorithm::*;

/// Chain output size in bytes
pub const DIGEST_SIZE: usize = 32;

/// Primitive output size in bytes
pub const WIDE_DIGEST_SIZE: usize = 64;

/// Number of stages in a chain
pub const STAGE_COUNT: usize = 11;

/// Chaincoin C11 stage order.
///
/// Differs from X11 by running JH and Keccak before Skein. Changing this
/// changes every digest, so it must match what the network verifies.
pub const C11_STAGES: &[Algorithm; STAGE_COUNT] = &[
    Blake, Bmw, Groestl, Jh, Keccak, Skein, Luffa, Cubehash, Shavite, Simd, Echo,
];

/// X11 stage order (Dash and its forks).
pub const X11_STAGES: &[Algorithm; STAGE_COUNT] = &[
    Blake, Bmw, Groestl, Skein, Jh, Keccak, Luffa, Cubehash, Shavite, Simd, Echo,
];
