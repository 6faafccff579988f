//! Keccak-512 with the original 0x01 padding (not FIPS-202 SHA3-512).

use sha3::{Digest, Keccak512};

/// Keccak-512 of `input`.
pub fn hash(input: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&Keccak512::digest(input));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_empty() {
        assert_eq!(
            hash(b""),
            hex!("0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e")
        );
    }

    #[test]
    fn test_abc() {
        assert_eq!(
            hash(b"abc"),
            hex!("18587dc2ea106b9a1563e32b3312421ca164c7f1f07bc922a9c83d77cea3a1e5d0c69910739025372dc14ac9642629379540c17e2a65b19d77aa511a9d00bb96")
        );
    }

    #[test]
    fn test_fox() {
        assert_eq!(
            hash(b"The quick brown fox jumps over the lazy dog"),
            hex!("d135bb84d0439dbac432247ee573a23ea7d3c9deb2a968eb31d47c4fb45f1ef4422d6c531b5b9bd6f449ebcc449ea94d0a8f05f62130fda612da53c79659f609")
        );
    }

    #[test]
    fn test_differs_from_sha3() {
        use sha3::Sha3_512;
        assert_ne!(hash(b"abc")[..], Sha3_512::digest(b"abc")[..]);
    }
}
