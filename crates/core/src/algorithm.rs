//! The eleven 512-bit primitives as one capability.

use core::fmt;
use core::str::FromStr;

use crate::fixed::FixedBytes64;
use crate::primitives::{
    blake, bmw, cubehash, echo, groestl, jh, keccak, luffa, shavite, simd, skein,
};

/// A named 512-bit hash primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Algorithm {
    Blake,
    Bmw,
    Groestl,
    Skein,
    Jh,
    Keccak,
    Luffa,
    Cubehash,
    Shavite,
    Simd,
    Echo,
}

impl Algorithm {
    /// Every primitive, in the order used for numeric ids.
    pub const ALL: [Algorithm; 11] = [
        Algorithm::Blake,
        Algorithm::Bmw,
        Algorithm::Groestl,
        Algorithm::Skein,
        Algorithm::Jh,
        Algorithm::Keccak,
        Algorithm::Luffa,
        Algorithm::Cubehash,
        Algorithm::Shavite,
        Algorithm::Simd,
        Algorithm::Echo,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Blake => "blake",
            Algorithm::Bmw => "bmw",
            Algorithm::Groestl => "groestl",
            Algorithm::Skein => "skein",
            Algorithm::Jh => "jh",
            Algorithm::Keccak => "keccak",
            Algorithm::Luffa => "luffa",
            Algorithm::Cubehash => "cubehash",
            Algorithm::Shavite => "shavite",
            Algorithm::Simd => "simd",
            Algorithm::Echo => "echo",
        }
    }

    /// Position in [`Algorithm::ALL`].
    pub fn id(self) -> usize {
        self as usize
    }

    pub fn from_id(id: usize) -> Option<Self> {
        Self::ALL.get(id).copied()
    }

    /// Run this primitive over `input`.
    pub fn hash512(self, input: &[u8]) -> FixedBytes64 {
        let out = match self {
            Algorithm::Blake => blake::hash(input),
            Algorithm::Bmw => bmw::hash(input),
            Algorithm::Groestl => groestl::hash(input),
            Algorithm::Skein => skein::hash(input),
            Algorithm::Jh => jh::hash(input),
            Algorithm::Keccak => keccak::hash(input),
            Algorithm::Luffa => luffa::hash(input),
            Algorithm::Cubehash => cubehash::hash(input),
            Algorithm::Shavite => shavite::hash(input),
            Algorithm::Simd => simd::hash(input),
            Algorithm::Echo => echo::hash(input),
        };
        FixedBytes64::new(out)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised primitive name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?}")]
pub struct UnknownAlgorithm(pub alloc::string::String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Case-insensitive; `blake512`, `groestl-512` and `cubehash512` style
    /// names are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let base = trimmed
            .strip_suffix("512")
            .map(|b| b.strip_suffix('-').unwrap_or(b))
            .unwrap_or(trimmed);
        Self::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(base))
            .ok_or_else(|| UnknownAlgorithm(s.into()))
    }
}

pub fn hash_blake(input: &[u8]) -> FixedBytes64 {
    Algorithm::Blake.hash512(input)
}

pub fn hash_bmw(input: &[u8]) -> FixedBytes64 {
    Algorithm::Bmw.hash512(input)
}

pub fn hash_groestl(input: &[u8]) -> FixedBytes64 {
    Algorithm::Groestl.hash512(input)
}

pub fn hash_skein(input: &[u8]) -> FixedBytes64 {
    Algorithm::Skein.hash512(input)
}

pub fn hash_jh(input: &[u8]) -> FixedBytes64 {
    Algorithm::Jh.hash512(input)
}

pub fn hash_keccak(input: &[u8]) -> FixedBytes64 {
    Algorithm::Keccak.hash512(input)
}

pub fn hash_luffa(input: &[u8]) -> FixedBytes64 {
    Algorithm::Luffa.hash512(input)
}

pub fn hash_cubehash(input: &[u8]) -> FixedBytes64 {
    Algorithm::Cubehash.hash512(input)
}

pub fn hash_shavite(input: &[u8]) -> FixedBytes64 {
    Algorithm::Shavite.hash512(input)
}

pub fn hash_simd(input: &[u8]) -> FixedBytes64 {
    Algorithm::Simd.hash512(input)
}

pub fn hash_echo(input: &[u8]) -> FixedBytes64 {
    Algorithm::Echo.hash512(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.name().parse::<Algorithm>(), Ok(alg));
        }
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("BLAKE512".parse::<Algorithm>(), Ok(Algorithm::Blake));
        assert_eq!("groestl-512".parse::<Algorithm>(), Ok(Algorithm::Groestl));
        assert_eq!(" Echo ".parse::<Algorithm>(), Ok(Algorithm::Echo));
        assert!("sha256".parse::<Algorithm>().is_err());
        assert!("512".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_ids_follow_all() {
        for (i, alg) in Algorithm::ALL.into_iter().enumerate() {
            assert_eq!(alg.id(), i);
            assert_eq!(Algorithm::from_id(i), Some(alg));
        }
        assert_eq!(Algorithm::from_id(11), None);
    }

    #[test]
    fn test_free_functions_dispatch() {
        assert_eq!(hash_keccak(b"abc"), Algorithm::Keccak.hash512(b"abc"));
        assert_eq!(hash_echo(b"").as_bytes(), &echo::hash(b""));
        assert_ne!(hash_skein(b"x"), hash_jh(b"x"));
    }
}
