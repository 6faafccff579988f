//! SHAvite-3-512: a Feistel construction over four 128-bit lanes keyed by
//! an AES-based message expansion, 14 rounds per 128-byte block.

use super::aes::aes_round_words;
use super::read_u32_le;

const BLOCK: usize = 128;
const ROUNDS: usize = 14;

/// Tail length from which the length fields spill into an extra block.
const TAIL_LIMIT: usize = 110;

const IV: [u32; 16] = [
    0x72FCCDD8, 0x79CA4727, 0x128A077B, 0x40D55AEC, 0xD1901A06, 0x430AE307, 0xB29F5CD1,
    0xDF07FBFC, 0x8E45D73D, 0x681AB538, 0xBDE86578, 0xDD577E47, 0xE275EADE, 0x502D9FCD,
    0xB9357178, 0x022A4B9A,
];

/// Lane roles (L, A, B, R) by round mod 4: L ^= F(A), B ^= F(R).
const ORDER: [[usize; 4]; 4] = [[0, 1, 2, 3], [3, 0, 1, 2], [2, 3, 0, 1], [1, 2, 3, 0]];

type Word4 = [u32; 4];

#[inline(always)]
fn xor4(a: Word4, b: Word4) -> Word4 {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

/// Four keyed AES rounds.
fn feistel(mut x: Word4, keys: &[Word4]) -> Word4 {
    for &k in keys {
        x = aes_round_words(xor4(x, k));
    }
    x
}

struct KeySchedule {
    groups: [Word4; 8],
}

impl KeySchedule {
    fn new(block: &[u8]) -> Self {
        let mut groups = [[0u32; 4]; 8];
        for (g, chunk) in groups.iter_mut().zip(block.chunks_exact(16)) {
            for (w, bytes) in g.iter_mut().zip(chunk.chunks_exact(4)) {
                *w = read_u32_le(bytes);
            }
        }
        Self { groups }
    }

    fn nonlinear(&mut self, counter: Option<(usize, Word4)>) {
        for g in 0..8 {
            let k = self.groups[g];
            let mut v = xor4(
                aes_round_words([k[1], k[2], k[3], k[0]]),
                self.groups[(g + 7) % 8],
            );
            match counter {
                Some((at, c)) if at == g => v = xor4(v, c),
                _ => {}
            }
            self.groups[g] = v;
        }
    }

    fn linear(&mut self) {
        for i in 0..32 {
            let j = (i + 25) % 32;
            let w = self.groups[j / 4][j % 4];
            self.groups[i / 4][i % 4] ^= w;
        }
    }
}

fn compress(h: &mut [u32; 16], block: &[u8], counter: u128) {
    let c = [
        counter as u32,
        (counter >> 32) as u32,
        (counter >> 64) as u32,
        (counter >> 96) as u32,
    ];
    let mut p = [[0u32; 4]; 4];
    for (lane, words) in p.iter_mut().zip(h.chunks_exact(4)) {
        lane.copy_from_slice(words);
    }
    let mut rk = KeySchedule::new(block);

    for r in 0..ROUNDS {
        if r % 2 == 1 {
            let injection = match r {
                1 => Some((0, [c[0], c[1], c[2], !c[3]])),
                5 => Some((1, [c[3], c[2], c[1], !c[0]])),
                9 => Some((7, [c[2], c[3], c[0], !c[1]])),
                13 => Some((6, [c[1], c[0], c[3], !c[2]])),
                _ => None,
            };
            rk.nonlinear(injection);
        } else if r > 0 {
            rk.linear();
        }
        let [l, a, b, rr] = ORDER[r % 4];
        p[l] = xor4(p[l], feistel(p[a], &rk.groups[..4]));
        p[b] = xor4(p[b], feistel(p[rr], &rk.groups[4..]));
    }

    // Feed-forward in the lane order reached after the last round
    let [l, a, b, rr] = ORDER[ROUNDS % 4];
    for (i, lane) in [l, a, b, rr].into_iter().enumerate() {
        for j in 0..4 {
            h[4 * i + j] ^= p[lane][j];
        }
    }
}

/// SHAvite-3-512 of `input`.
pub fn hash(input: &[u8]) -> [u8; 64] {
    let mut h = IV;
    let bits = (input.len() as u128) * 8;

    let mut blocks = input.chunks_exact(BLOCK);
    let mut processed = 0u128;
    for block in &mut blocks {
        processed += BLOCK as u128;
        compress(&mut h, block, processed * 8);
    }
    let tail = blocks.remainder();

    let mut block = [0u8; BLOCK];
    block[..tail.len()].copy_from_slice(tail);
    block[tail.len()] = 0x80;
    let mut counter = if tail.is_empty() { 0 } else { bits };
    if tail.len() >= TAIL_LIMIT {
        compress(&mut h, &block, bits);
        block = [0u8; BLOCK];
        counter = 0;
    }
    block[TAIL_LIMIT..126].copy_from_slice(&bits.to_le_bytes());
    block[126] = 0x00;
    block[127] = 0x02; // digest size 512, little-endian 16-bit
    compress(&mut h, &block, counter);

    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(4).zip(h) {
        chunk.copy_from_slice(&word.to_le_bytes());
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
            hex!("a485c1b2578459d1efc5dddd840bb0b4a650ac82fe68f58c4442ccda747da006b2d1dc6b4a4eb7d84ff91e1f466fef429d259acd995dddcad16fa545c7a6e5ba")
        );
    }

    #[test]
    fn test_abc() {
        assert_eq!(
            hash(b"abc"),
            hex!("0fb0b216b377e6d95db1b6d9b6c8b59f08d4e29814071c8c0f827b32e68c15362f24bcc15ad6b1c925a03f00092997f7628cb47f27c9ad7a22e4c00fbb2c16e3")
        );
    }

    #[test]
    fn test_fox() {
        assert_eq!(
            hash(b"The quick brown fox jumps over the lazy dog"),
            hex!("4dbd97835c4e5cfa14799884a7adc96688dd808ff53d5c4cfe7db89a55ee98d0260791ec0c9b5466482ab3f6f236da7e65e1cb6d1ee624f61a5b2b79f63c4120")
        );
    }

    #[test]
    fn test_counting_bytes() {
        let mut input = [0u8; 64];
        for (i, b) in input.iter_mut().enumerate() {
            *b = i as u8;
        }
        assert_eq!(
            hash(&input),
            hex!("4b53734538b113c1637104887e9f2150fa4ad9ec70552d8ed62f0134a47a2f4e8134b2366932983b4127cbcba59cda04bf6d0005b5ba04dea92879f15e80a28a")
        );
    }

    #[test]
    fn test_multi_block_vectors() {
        let mut data = [0u8; 200];
        for (i, b) in data.iter_mut().enumerate() {
            *b = i as u8;
        }
        // Tails of 110 bytes or more spill into a zero-counter block
        let cases: [(usize, [u8; 64]); 6] = [
            (109, hex!("f15ba9e180000e0210987125d1e57a4f66922066702b4656c023d0523c67957bc413648a926d36199d05f010b9d321712c96d4d734ad1341f26e018e066a6d2c")),
            (110, hex!("9b0423c254644e4be9898fadfb526dc5e48e2110aa2671c070c61ef03773c8eb1b55a51d4c7c250f3397a3d196b718c4b5f0e74a697e1962af0b3ba363acb47e")),
            (111, hex!("317f6aee0efec714424dcd4dd4361972a97bd1909872b013102f689429b39b242d81a3e36f9796518f3923fd19ce7fbe434287e28d8a197705fa95a5c631fa55")),
            (112, hex!("90c7818a2c9dedc7e5974e58975f72a8c181b36600631647ffa40d6dbd51db7f2c54b7a1df2622f6883df096928cf08a8e6ebbd2d0596817c5001f839b576b60")),
            (128, hex!("c67b6b19a26556a6f5eb1545816d393e494c236d9fe36685e182238daa026429dfc549caeb34d9ea959da1daf189bc16839430750902b5b6db4bf9b9daba0b56")),
            (200, hex!("c312d285cd9c597d7df9525133155f05aa94f206b31e2def255879b8bb27f25ccfaba516238c5de679545e7d0d88a5d0c0c975aae8a2e62369fcdeda4d02da42")),
        ];
        for (len, expected) in cases {
            assert_eq!(hash(&data[..len]), expected, "length {len}");
        }
    }
}
