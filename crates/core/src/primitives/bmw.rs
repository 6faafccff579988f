//! Blue Midnight Wish BMW-512.

use super::read_u64_le;

const BLOCK: usize = 128;

/// Final-compression chaining value: 0xaaaaaaaaaaaaaaa0 + i.
const FINAL: [u64; 16] = {
    let mut f = [0u64; 16];
    let mut i = 0;
    while i < 16 {
        f[i] = 0xaaaa_aaaa_aaaa_aaa0 + i as u64;
        i += 1;
    }
    f
};

/// Initial chaining value: bytes 0x80..=0xff as big-endian words.
const IV: [u64; 16] = {
    let mut iv = [0u64; 16];
    let mut i = 0;
    while i < 16 {
        let mut k = 0;
        while k < 8 {
            iv[i] = (iv[i] << 8) | (0x80 + 8 * i as u64 + k as u64);
            k += 1;
        }
        i += 1;
    }
    iv
};

/// Rotations used by the second expansion function on odd positions.
const EXPAND2_ROT: [u32; 7] = [5, 11, 27, 32, 37, 43, 53];

/// Signed terms of f0's W_j over X = M ^ H.
const W_TERMS: [[(usize, bool); 5]; 16] = [
    [(5, true), (7, false), (10, true), (13, true), (14, true)],
    [(6, true), (8, false), (11, true), (14, true), (15, false)],
    [(0, true), (7, true), (9, true), (12, false), (15, true)],
    [(0, true), (1, false), (8, true), (10, false), (13, true)],
    [(1, true), (2, true), (9, true), (11, false), (14, false)],
    [(3, true), (2, false), (10, true), (12, false), (15, true)],
    [(4, true), (0, false), (3, false), (11, false), (13, true)],
    [(1, true), (4, false), (5, false), (12, false), (14, false)],
    [(2, true), (5, false), (6, false), (13, true), (15, false)],
    [(0, true), (3, false), (6, true), (7, false), (14, true)],
    [(8, true), (1, false), (4, false), (7, false), (15, true)],
    [(8, true), (0, false), (2, false), (5, false), (9, true)],
    [(1, true), (3, true), (6, false), (9, false), (10, true)],
    [(2, true), (4, true), (7, true), (10, true), (11, true)],
    [(3, true), (5, false), (8, true), (11, false), (12, false)],
    [(12, true), (4, false), (6, false), (9, false), (13, true)],
];

#[inline(always)]
fn s0(x: u64) -> u64 {
    (x >> 1) ^ (x << 3) ^ x.rotate_left(4) ^ x.rotate_left(37)
}
#[inline(always)]
fn s1(x: u64) -> u64 {
    (x >> 1) ^ (x << 2) ^ x.rotate_left(13) ^ x.rotate_left(43)
}
#[inline(always)]
fn s2(x: u64) -> u64 {
    (x >> 2) ^ (x << 1) ^ x.rotate_left(19) ^ x.rotate_left(53)
}
#[inline(always)]
fn s3(x: u64) -> u64 {
    (x >> 2) ^ (x << 2) ^ x.rotate_left(28) ^ x.rotate_left(59)
}
#[inline(always)]
fn s4(x: u64) -> u64 {
    (x >> 1) ^ x
}
#[inline(always)]
fn s5(x: u64) -> u64 {
    (x >> 2) ^ x
}

/// Message-dependent term of expansion round `j` (16..32).
#[inline(always)]
fn add_element(m: &[u64; 16], h: &[u64; 16], j: usize) -> u64 {
    let k = j - 16;
    let rot = |i: usize| m[i % 16].rotate_left((i % 16) as u32 + 1);
    rot(k)
        .wrapping_add(rot(k + 3))
        .wrapping_sub(rot(k + 10))
        .wrapping_add((j as u64).wrapping_mul(0x0555_5555_5555_5555))
        ^ h[(k + 7) % 16]
}

fn compress(h: &[u64; 16], m: &[u64; 16]) -> [u64; 16] {
    let mut x = [0u64; 16];
    for i in 0..16 {
        x[i] = m[i] ^ h[i];
    }

    // f0: bijective transform of M ^ H
    let mut q = [0u64; 32];
    for j in 0..16 {
        let w = W_TERMS[j].iter().fold(0u64, |acc, &(i, plus)| {
            if plus {
                acc.wrapping_add(x[i])
            } else {
                acc.wrapping_sub(x[i])
            }
        });
        let s = match j % 5 {
            0 => s0(w),
            1 => s1(w),
            2 => s2(w),
            3 => s3(w),
            _ => s4(w),
        };
        q[j] = s.wrapping_add(h[(j + 1) % 16]);
    }

    // f1: two rounds of expand1, fourteen of expand2
    for j in 16..32 {
        let mut acc = 0u64;
        if j < 18 {
            for k in 0..16 {
                let v = q[j - 16 + k];
                acc = acc.wrapping_add(match k % 4 {
                    0 => s1(v),
                    1 => s2(v),
                    2 => s3(v),
                    _ => s0(v),
                });
            }
        } else {
            for k in 0..14 {
                let v = q[j - 16 + k];
                acc = acc.wrapping_add(if k % 2 == 0 {
                    v
                } else {
                    v.rotate_left(EXPAND2_ROT[k / 2])
                });
            }
            acc = acc.wrapping_add(s4(q[j - 2])).wrapping_add(s5(q[j - 1]));
        }
        q[j] = acc.wrapping_add(add_element(m, h, j));
    }

    // f2: fold
    let xl = q[16..24].iter().fold(0u64, |a, &v| a ^ v);
    let xh = q[24..32].iter().fold(xl, |a, &v| a ^ v);

    let mut n = [0u64; 16];
    n[0] = ((xh << 5) ^ (q[16] >> 5) ^ m[0]).wrapping_add(xl ^ q[24] ^ q[0]);
    n[1] = ((xh >> 7) ^ (q[17] << 8) ^ m[1]).wrapping_add(xl ^ q[25] ^ q[1]);
    n[2] = ((xh >> 5) ^ (q[18] << 5) ^ m[2]).wrapping_add(xl ^ q[26] ^ q[2]);
    n[3] = ((xh >> 1) ^ (q[19] << 5) ^ m[3]).wrapping_add(xl ^ q[27] ^ q[3]);
    n[4] = ((xh >> 3) ^ q[20] ^ m[4]).wrapping_add(xl ^ q[28] ^ q[4]);
    n[5] = ((xh << 6) ^ (q[21] >> 6) ^ m[5]).wrapping_add(xl ^ q[29] ^ q[5]);
    n[6] = ((xh >> 4) ^ (q[22] << 6) ^ m[6]).wrapping_add(xl ^ q[30] ^ q[6]);
    n[7] = ((xh >> 11) ^ (q[23] << 2) ^ m[7]).wrapping_add(xl ^ q[31] ^ q[7]);
    n[8] = n[4]
        .rotate_left(9)
        .wrapping_add(xh ^ q[24] ^ m[8])
        .wrapping_add((xl << 8) ^ q[23] ^ q[8]);
    n[9] = n[5]
        .rotate_left(10)
        .wrapping_add(xh ^ q[25] ^ m[9])
        .wrapping_add((xl >> 6) ^ q[16] ^ q[9]);
    n[10] = n[6]
        .rotate_left(11)
        .wrapping_add(xh ^ q[26] ^ m[10])
        .wrapping_add((xl << 6) ^ q[17] ^ q[10]);
    n[11] = n[7]
        .rotate_left(12)
        .wrapping_add(xh ^ q[27] ^ m[11])
        .wrapping_add((xl << 4) ^ q[18] ^ q[11]);
    n[12] = n[0]
        .rotate_left(13)
        .wrapping_add(xh ^ q[28] ^ m[12])
        .wrapping_add((xl >> 3) ^ q[19] ^ q[12]);
    n[13] = n[1]
        .rotate_left(14)
        .wrapping_add(xh ^ q[29] ^ m[13])
        .wrapping_add((xl >> 4) ^ q[20] ^ q[13]);
    n[14] = n[2]
        .rotate_left(15)
        .wrapping_add(xh ^ q[30] ^ m[14])
        .wrapping_add((xl >> 7) ^ q[21] ^ q[14]);
    n[15] = n[3]
        .rotate_left(16)
        .wrapping_add(xh ^ q[31] ^ m[15])
        .wrapping_add((xl >> 2) ^ q[22] ^ q[15]);
    n
}

fn load_block(block: &[u8]) -> [u64; 16] {
    let mut m = [0u64; 16];
    for (word, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
        *word = read_u64_le(chunk);
    }
    m
}

/// BMW-512 of `input`.
pub fn hash(input: &[u8]) -> [u8; 64] {
    let mut h = IV;
    let bits = (input.len() as u64).wrapping_mul(8);

    let mut blocks = input.chunks_exact(BLOCK);
    for block in &mut blocks {
        h = compress(&h, &load_block(block));
    }
    let tail = blocks.remainder();

    let mut block = [0u8; BLOCK];
    block[..tail.len()].copy_from_slice(tail);
    block[tail.len()] = 0x80;
    if tail.len() + 1 > BLOCK - 8 {
        h = compress(&h, &load_block(&block));
        block = [0u8; BLOCK];
    }
    block[BLOCK - 8..].copy_from_slice(&bits.to_le_bytes());
    h = compress(&h, &load_block(&block));

    let h = compress(&FINAL, &h);
    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(8).zip(&h[8..]) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_iv_layout() {
        assert_eq!(IV[0], 0x8081828384858687);
        assert_eq!(IV[15], 0xF8F9FAFBFCFDFEFF);
        assert_eq!(FINAL[15], 0xaaaaaaaaaaaaaaaf);
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            hash(b""),
            hex!("6a725655c42bc8a2a20549dd5a233a6a2beb01616975851fd122504e604b46af7d96697d0b6333db1d1709d6df328d2a6c786551b0cce2255e8c7332b4819c0e")
        );
    }

    #[test]
    fn test_abc() {
        assert_eq!(
            hash(b"abc"),
            hex!("8f37bef264289f61f3d713944d394a7ac1dd95d3fe5787b5d325a310bc9cd18783852bfee12fbdeaab3ad9a67f2b654e348714aed3acf7d7548e95591af68046")
        );
    }

    #[test]
    fn test_fox() {
        assert_eq!(
            hash(b"The quick brown fox jumps over the lazy dog"),
            hex!("2998d4cb31323e1169b458ab03a54d0b68e411a3c7cc7612adbf05bf901b8197dfd852c1c0099c09717d2fad3537207e737c6159c31d377d1ab8f5ed1ceeea06")
        );
    }

    #[test]
    fn test_multi_block_vectors() {
        let mut data = [0u8; 200];
        for (i, b) in data.iter_mut().enumerate() {
            *b = i as u8;
        }
        // From a 120-byte tail the length field moves to an extra block
        let cases: [(usize, [u8; 64]); 6] = [
            (111, hex!("340cfad104a1803f478abcb29214cbe09128f80a879708fe7510567a70286f7bce57448074a811174e337ba39778b61b591d0ffc81b1142135dccfcaae3ace86")),
            (112, hex!("6c8b1372dbda7aba7bf5dcbdb8ee862a67a2d7d165ee77d3eb714123bb1f91ed0b8416cc3f8e75e69d92bf0d752e7024d1156ce0190ffa88e9890da0204fd332")),
            (119, hex!("940170a34dd3c446a674f2ec98062b808ac1685ab0c7de2c622bd38b911d93b50650f454e141945253d35926c54407036e9337de656574c8b205ac655209db28")),
            (120, hex!("70de16abe5779a65ecfa59a72bc2e8543ffc0b8491ca05b5a7a69a10e134a047ff4b51df8bc6314e96ad1702009fa4342eba1242442dbce18268814075a8b013")),
            (128, hex!("bd8d0a804448528126bbf33f05a88cf95bf73a4f1dd6aa87407f528f538ce477eb3847f59446e606024dfe39dac7ee105ea5589aee7a45954279a09f2d07d7e6")),
            (200, hex!("7e20227e3ba9b5545954122c38981ba2005d869fa6fc24f8ae200c54c0873c753755469a5477868c0e63ddd8319128947d3e8c31ad06dfa2381c7bc98442fca0")),
        ];
        for (len, expected) in cases {
            assert_eq!(hash(&data[..len]), expected, "length {len}");
        }
    }
}
