//! Skein-512-512 (version 1.3): Threefish-512 in UBI chaining mode.

use super::read_u64_le;

const BLOCK: usize = 64;
const ROUNDS: usize = 72;

/// Key schedule parity constant.
const C240: u64 = 0x1BD1_1BDA_A9FC_1A22;

const ROTATIONS: [[u32; 4]; 8] = [
    [46, 36, 19, 37],
    [33, 27, 14, 42],
    [17, 49, 36, 39],
    [44, 9, 54, 56],
    [39, 30, 34, 24],
    [13, 50, 10, 17],
    [25, 29, 39, 43],
    [8, 35, 56, 22],
];

/// Word permutation applied after every MIX layer.
const PERMUTE: [usize; 8] = [2, 1, 4, 7, 6, 5, 0, 3];

/// Chaining value after the configuration UBI for a 512-bit output.
const IV: [u64; 8] = [
    0x4903ADFF749C51CE, 0x0D95DE399746DF03, 0x8FD1934127C79BCE, 0x9A255629FF352CB1,
    0x5DB62599DF6CA7B0, 0xEABE394CA9D5C3F4, 0x991112C71A75B523, 0xAE18A40B660FCC33,
];

const TYPE_MSG: u64 = 48;
const TYPE_OUT: u64 = 63;
const FLAG_FIRST: u64 = 1 << 62;
const FLAG_FINAL: u64 = 1 << 63;

fn inject_key(v: &mut [u64; 8], key: &[u64; 9], tweak: &[u64; 3], s: usize) {
    for i in 0..8 {
        v[i] = v[i].wrapping_add(key[(s + i) % 9]);
    }
    v[5] = v[5].wrapping_add(tweak[s % 3]);
    v[6] = v[6].wrapping_add(tweak[(s + 1) % 3]);
    v[7] = v[7].wrapping_add(s as u64);
}

fn threefish(key: &[u64; 8], tweak: [u64; 2], plaintext: &[u64; 8]) -> [u64; 8] {
    let mut k = [0u64; 9];
    k[..8].copy_from_slice(key);
    k[8] = key.iter().fold(C240, |acc, &w| acc ^ w);
    let t = [tweak[0], tweak[1], tweak[0] ^ tweak[1]];

    let mut v = *plaintext;
    for d in 0..ROUNDS {
        if d % 4 == 0 {
            inject_key(&mut v, &k, &t, d / 4);
        }
        for j in 0..4 {
            let (a, b) = (v[2 * j], v[2 * j + 1]);
            let a = a.wrapping_add(b);
            v[2 * j] = a;
            v[2 * j + 1] = b.rotate_left(ROTATIONS[d % 8][j]) ^ a;
        }
        let prev = v;
        for i in 0..8 {
            v[i] = prev[PERMUTE[i]];
        }
    }
    inject_key(&mut v, &k, &t, ROUNDS / 4);
    v
}

/// One UBI block: E(h, tweak, m) ^ m. `position` counts bytes processed
/// including this block.
fn ubi(h: &[u64; 8], block: &[u8], position: u64, tweak_flags: u64) -> [u64; 8] {
    let mut m = [0u64; 8];
    for (word, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
        *word = read_u64_le(chunk);
    }
    let e = threefish(h, [position, tweak_flags], &m);
    let mut out = [0u64; 8];
    for i in 0..8 {
        out[i] = e[i] ^ m[i];
    }
    out
}

/// Skein-512-512 of `input`.
pub fn hash(input: &[u8]) -> [u8; 64] {
    let mut h = IV;
    let msg = TYPE_MSG << 56;

    // Every block but the last goes through here; the last is always final
    let mut pos = 0usize;
    let mut first = FLAG_FIRST;
    while input.len() - pos > BLOCK {
        h = ubi(&h, &input[pos..pos + BLOCK], (pos + BLOCK) as u64, msg | first);
        pos += BLOCK;
        first = 0;
    }
    let tail = &input[pos..];
    let mut block = [0u8; BLOCK];
    block[..tail.len()].copy_from_slice(tail);
    h = ubi(&h, &block, input.len() as u64, msg | first | FLAG_FINAL);

    // Output UBI over a zero counter block
    h = ubi(
        &h,
        &[0u8; BLOCK],
        8,
        (TYPE_OUT << 56) | FLAG_FIRST | FLAG_FINAL,
    );

    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(8).zip(h) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_iv_matches_config_block() {
        // UBI(0, config) with type Cfg = 4 and a 512-bit output length
        let mut cfg = [0u8; BLOCK];
        cfg[..4].copy_from_slice(b"SHA3");
        cfg[4] = 1;
        cfg[8..16].copy_from_slice(&512u64.to_le_bytes());
        let iv = ubi(&[0u64; 8], &cfg, 32, (4u64 << 56) | FLAG_FIRST | FLAG_FINAL);
        assert_eq!(iv, IV);
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            hash(b""),
            hex!("bc5b4c50925519c290cc634277ae3d6257212395cba733bbad37a4af0fa06af41fca7903d06564fea7a2d3730dbdb80c1f85562dfcc070334ea4d1d9e72cba7a")
        );
    }

    #[test]
    fn test_one_block_reference_vector() {
        // Skein 1.3 known-answer test: bytes ff, fe, ..., c0
        let mut input = [0u8; 64];
        for (i, b) in input.iter_mut().enumerate() {
            *b = 0xff - i as u8;
        }
        assert_eq!(
            hash(&input),
            hex!("45863ba3be0c4dfc27e75d358496f4ac9a736a505d9313b42b2f5eada79fc17f63861e947afb1d056aa199575ad3f8c9a3cc1780b5e5fa4cae050e989876625b")
        );
    }

    #[test]
    fn test_abc() {
        assert_eq!(
            hash(b"abc"),
            hex!("8f5dd9ec798152668e35129496b029a960c9a9b88662f7f9482f110b31f9f93893ecfb25c009baad9e46737197d5630379816a886aa05526d3a70df272d96e75")
        );
    }

    #[test]
    fn test_fox() {
        assert_eq!(
            hash(b"The quick brown fox jumps over the lazy dog"),
            hex!("94c2ae036dba8783d0b3f7d6cc111ff810702f5c77707999be7e1c9486ff238a7044de734293147359b4ac7e1d09cd247c351d69826b78dcddd951f0ef912713")
        );
    }

    #[test]
    fn test_matches_skein_crate() {
        use skein::{Digest, Skein512, consts::U64};

        let mut data = [0u8; 300];
        for (i, b) in data.iter_mut().enumerate() {
            *b = (i * 7) as u8;
        }
        for len in 0..=data.len() {
            let input = &data[..len];
            assert_eq!(hash(input)[..], Skein512::<U64>::digest(input)[..], "length {len}");
        }
    }
}
