//! BLAKE-512 (SHA-3 final round version, 16 rounds).

use super::read_u64_be;

const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// Digits of pi.
const C: [u64; 16] = [
    0x243F6A8885A308D3, 0x13198A2E03707344, 0xA4093822299F31D0, 0x082EFA98EC4E6C89,
    0x452821E638D01377, 0xBE5466CF34E90C6C, 0xC0AC29B7C97C50DD, 0x3F84D5B5B5470917,
    0x9216D5D98979FB1B, 0xD1310BA698DFB5AC, 0x2FFD72DBD01ADFB7, 0xB8E1AFED6A267E96,
    0xBA7C9045F12C7F99, 0x24A19947B3916CF7, 0x0801F2E2858EFC16, 0x636920D871574E69,
];

const IV: [u64; 8] = [
    0x6A09E667F3BCC908, 0xBB67AE8584CAA73B, 0x3C6EF372FE94F82B, 0xA54FF53A5F1D36F1,
    0x510E527FADE682D1, 0x9B05688C2B3E6C1F, 0x1F83D9ABFB41BD6B, 0x5BE0CD19137E2179,
];

const ROUNDS: usize = 16;
const BLOCK: usize = 128;

/// BLAKE G mixing function
#[inline(always)]
#[allow(clippy::too_many_arguments)]
fn g(
    v: &mut [u64; 16],
    m: &[u64; 16],
    s: &[usize; 16],
    i: usize,
    a: usize,
    b: usize,
    c: usize,
    d: usize,
) {
    let (x, y) = (s[2 * i], s[2 * i + 1]);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(m[x] ^ C[y]);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(25);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(m[y] ^ C[x]);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(11);
}

/// Compress one block. `counter` is the number of message bits hashed so far,
/// including this block (zero for a block holding only padding).
fn compress(h: &mut [u64; 8], block: &[u8], counter: u128) {
    let mut m = [0u64; 16];
    for (word, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
        *word = read_u64_be(chunk);
    }

    let mut v = [0u64; 16];
    v[..8].copy_from_slice(h);
    v[8..].copy_from_slice(&C[..8]);
    let t0 = counter as u64;
    let t1 = (counter >> 64) as u64;
    v[12] ^= t0;
    v[13] ^= t0;
    v[14] ^= t1;
    v[15] ^= t1;

    for round in 0..ROUNDS {
        let s = &SIGMA[round % 10];
        // Column step
        g(&mut v, &m, s, 0, 0, 4, 8, 12);
        g(&mut v, &m, s, 1, 1, 5, 9, 13);
        g(&mut v, &m, s, 2, 2, 6, 10, 14);
        g(&mut v, &m, s, 3, 3, 7, 11, 15);
        // Diagonal step
        g(&mut v, &m, s, 4, 0, 5, 10, 15);
        g(&mut v, &m, s, 5, 1, 6, 11, 12);
        g(&mut v, &m, s, 6, 2, 7, 8, 13);
        g(&mut v, &m, s, 7, 3, 4, 9, 14);
    }

    for i in 0..8 {
        h[i] ^= v[i] ^ v[i + 8];
    }
}

/// BLAKE-512 of `input`.
pub fn hash(input: &[u8]) -> [u8; 64] {
    let mut h = IV;
    let bits = (input.len() as u128) * 8;

    // A final full block gets the same counter either way, so every complete
    // block is compressed here and only the remainder is padded.
    let mut blocks = input.chunks_exact(BLOCK);
    let mut counter = 0u128;
    for block in &mut blocks {
        counter += (BLOCK as u128) * 8;
        compress(&mut h, block, counter);
    }
    let tail = blocks.remainder();

    let len = tail.len();
    let mut block = [0u8; BLOCK];
    block[..len].copy_from_slice(tail);
    block[len] = 0x80;
    if len <= 111 {
        block[111] |= 1;
        block[112..].copy_from_slice(&bits.to_be_bytes());
        compress(&mut h, &block, if len > 0 { bits } else { 0 });
    } else {
        // Padding spills into a block with no message bits
        compress(&mut h, &block, bits);
        let mut last = [0u8; BLOCK];
        last[111] = 1;
        last[112..].copy_from_slice(&bits.to_be_bytes());
        compress(&mut h, &last, 0);
    }

    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(8).zip(h) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
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
            hex!("a8cfbbd73726062df0c6864dda65defe58ef0cc52a5625090fa17601e1eecd1b628e94f396ae402a00acc9eab77b4d4c2e852aaaa25a636d80af3fc7913ef5b8")
        );
    }

    #[test]
    fn test_single_zero_byte() {
        assert_eq!(
            hash(&[0u8]),
            hex!("97961587f6d970faba6d2478045de6d1fabd09b61ae50932054d52bc29d31be4ff9102b9f69e2bbdb83be13d4b9c06091e5fa0b48bd081b634058be0ec49beb3")
        );
    }

    #[test]
    fn test_abc() {
        assert_eq!(
            hash(b"abc"),
            hex!("14266c7c704a3b58fb421ee69fd005fcc6eeff742136be67435df995b7c986e7cbde4dbde135e7689c354d2bc5b8d260536c554b4f84c118e61efc576fed7cd3")
        );
    }

    #[test]
    fn test_fox() {
        assert_eq!(
            hash(b"The quick brown fox jumps over the lazy dog"),
            hex!("1f7e26f63b6ad25a0896fd978fd050a1766391d2fd0471a77afb975e5034b7ad2d9ccf8dfb47abbbe656e1b82fbc634ba42ce186e8dc5e1ce09a885d41f43451")
        );
    }

    #[test]
    fn test_multi_block_vectors() {
        let mut data = [0u8; 200];
        for (i, b) in data.iter_mut().enumerate() {
            *b = i as u8;
        }
        // 111 bytes leave room for the length; 112 spill into a counter-0 block
        let cases: [(usize, [u8; 64]); 4] = [
            (111, hex!("5329f386033ff4492299d9a893f8ec8e8c7ed9e5fb24a74d2a018fcf7378edc25840a2df487707f02819a5822c1ef203ee41b1595fcd330edee15a7c3c0d82af")),
            (112, hex!("55deffdbf43d5940ec59ea0670940f8ae1015b0c03a1ca920ffaa28cb44687f4413c38a91ae49d7cc01625c1c840fcb3e913a7ad6b08c43fb15b2c3f0ecd8b52")),
            (128, hex!("d8501cdaf83ff9159d68e065b4d112bf2e96c570d2eae9eeddcf44f62fa221148d2d53722b58778ad681fc8a441ded46fd9e9eb8c58b6e35aa635c7ae0e028f0")),
            (200, hex!("e327afcd4b6113e8f9571f030f60b4b85ea29df58c35ac1d0daceefe9edb17c6ce5a8bf5934214da6a3746f72c8b96cfce9625f4edf157408d67a6d3071d5980")),
        ];
        for (len, expected) in cases {
            assert_eq!(hash(&data[..len]), expected, "length {len}");
        }
    }

    #[test]
    fn test_matches_blake_hash_crate() {
        use blake_hash::{Blake512, Digest};

        let mut data = [0u8; 300];
        for (i, b) in data.iter_mut().enumerate() {
            *b = (i * 7) as u8;
        }
        for len in 0..=data.len() {
            let input = &data[..len];
            assert_eq!(hash(input)[..], Blake512::digest(input)[..], "length {len}");
        }
    }
}
