//! C FFI bindings for mobile and native miners
//!
//! Every call returns a status code instead of panicking across the
//! boundary: 0 on success, negative on bad arguments.

use core::slice;

use crate::{Algorithm, DIGEST_SIZE, FixedBytes32, WIDE_DIGEST_SIZE, chain11, x11};

pub const C11_OK: i32 = 0;
pub const C11_ERR_NULL_POINTER: i32 = -1;
pub const C11_ERR_UNKNOWN_ALGORITHM: i32 = -2;

/// Shared body of the 32-byte chain entry points.
///
/// # Safety
/// `input` must be valid for `input_len` bytes and `output` for 32 bytes.
unsafe fn write_digest(
    digest: fn(&[u8]) -> FixedBytes32,
    input: *const u8,
    input_len: usize,
    output: *mut u8,
) -> i32 {
    if output.is_null() || (input.is_null() && input_len != 0) {
        return C11_ERR_NULL_POINTER;
    }
    let input = if input_len == 0 {
        &[][..]
    } else {
        unsafe { slice::from_raw_parts(input, input_len) }
    };
    let result = digest(input);
    let output = unsafe { slice::from_raw_parts_mut(output, DIGEST_SIZE) };
    output.copy_from_slice(result.as_bytes());
    C11_OK
}

/// Compute the C11 digest of input data
/// - input: pointer to input bytes (may be null when input_len is 0)
/// - input_len: length of input
/// - output: pointer to 32-byte buffer for result
#[unsafe(no_mangle)]
pub extern "C" fn c11_hash(input: *const u8, input_len: usize, output: *mut u8) -> i32 {
    unsafe { write_digest(chain11, input, input_len, output) }
}

/// Compute the X11 digest of input data (same buffer rules as `c11_hash`)
#[unsafe(no_mangle)]
pub extern "C" fn x11_hash(input: *const u8, input_len: usize, output: *mut u8) -> i32 {
    unsafe { write_digest(x11, input, input_len, output) }
}

/// Run a single 512-bit primitive
/// - algorithm_id: 0 = blake .. 10 = echo
/// - output: pointer to 64-byte buffer for result
#[unsafe(no_mangle)]
pub extern "C" fn c11_hash_primitive(
    algorithm_id: u32,
    input: *const u8,
    input_len: usize,
    output: *mut u8,
) -> i32 {
    let Some(algorithm) = Algorithm::from_id(algorithm_id as usize) else {
        return C11_ERR_UNKNOWN_ALGORITHM;
    };
    if output.is_null() || (input.is_null() && input_len != 0) {
        return C11_ERR_NULL_POINTER;
    }

    unsafe {
        let input = if input_len == 0 {
            &[][..]
        } else {
            slice::from_raw_parts(input, input_len)
        };
        let result = algorithm.hash512(input);
        let output = slice::from_raw_parts_mut(output, WIDE_DIGEST_SIZE);
        output.copy_from_slice(result.as_bytes());
    }
    C11_OK
}

/// Benchmark: compute N digests over 80-byte headers and return total microseconds
#[unsafe(no_mangle)]
pub extern "C" fn c11_benchmark(iterations: u32) -> u64 {
    use std::hint::black_box;
    use std::time::Instant;

    let mut header = [0u8; 80];
    let start = Instant::now();
    for i in 0..iterations {
        header[76..].copy_from_slice(&i.to_le_bytes());
        black_box(chain11(black_box(&header)));
    }
    start.elapsed().as_micros() as u64
}

/// Get hash rate (hashes per second) from a benchmark run
#[unsafe(no_mangle)]
pub extern "C" fn c11_hashrate(iterations: u32, microseconds: u64) -> f64 {
    if microseconds == 0 {
        return 0.0;
    }
    (iterations as f64) / (microseconds as f64 / 1_000_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ptr;

    #[test]
    fn test_c11_hash_writes_digest() {
        let mut out = [0u8; 32];
        let input = b"abc";
        assert_eq!(c11_hash(input.as_ptr(), input.len(), out.as_mut_ptr()), C11_OK);
        assert_eq!(out, chain11(input).into_inner());
    }

    #[test]
    fn test_empty_input_accepts_null() {
        let mut out = [0u8; 32];
        assert_eq!(x11_hash(ptr::null(), 0, out.as_mut_ptr()), C11_OK);
        assert_eq!(out, x11(b"").into_inner());
    }

    #[test]
    fn test_null_pointers_rejected() {
        let mut out = [0u8; 64];
        assert_eq!(c11_hash(ptr::null(), 4, out.as_mut_ptr()), C11_ERR_NULL_POINTER);
        assert_eq!(c11_hash(b"x".as_ptr(), 1, ptr::null_mut()), C11_ERR_NULL_POINTER);
        assert_eq!(
            c11_hash_primitive(0, ptr::null(), 1, out.as_mut_ptr()),
            C11_ERR_NULL_POINTER
        );
    }

    #[test]
    fn test_primitive_by_id() {
        let mut out = [0u8; 64];
        for alg in Algorithm::ALL {
            assert_eq!(
                c11_hash_primitive(alg.id() as u32, b"abc".as_ptr(), 3, out.as_mut_ptr()),
                C11_OK
            );
            assert_eq!(out, alg.hash512(b"abc").into_inner());
        }
        assert_eq!(
            c11_hash_primitive(11, b"abc".as_ptr(), 3, out.as_mut_ptr()),
            C11_ERR_UNKNOWN_ALGORITHM
        );
    }

    #[test]
    fn test_benchmark_runs_requested_hashes() {
        let micros = c11_benchmark(3);
        assert!(micros > 0);
        assert!(c11_hashrate(3, micros) > 0.0);
    }

    #[test]
    fn test_hashrate() {
        assert_eq!(c11_hashrate(10, 0), 0.0);
        assert_eq!(c11_hashrate(10, 1_000_000), 10.0);
    }
}
