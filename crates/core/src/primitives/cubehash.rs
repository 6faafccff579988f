//! CubeHash16/32-512: 1024-bit state, 16 rounds per 32-byte block and
//! 160 rounds at initialization and finalization.

use super::read_u32_le;

const BLOCK: usize = 32;
const ROUNDS_PER_BLOCK: usize = 16;
const ROUNDS_INIT_FINAL: usize = 160;

type State = [u32; 32];

const fn rounds(mut x: State, n: usize) -> State {
    let mut r = 0;
    while r < n {
        let mut i = 0;
        while i < 16 {
            x[i + 16] = x[i + 16].wrapping_add(x[i]);
            x[i] = x[i].rotate_left(7);
            i += 1;
        }
        i = 0;
        while i < 8 {
            let t = x[i];
            x[i] = x[i + 8];
            x[i + 8] = t;
            i += 1;
        }
        i = 0;
        while i < 16 {
            x[i] ^= x[i + 16];
            i += 1;
        }
        i = 16;
        while i < 32 {
            if i & 2 == 0 {
                let t = x[i];
                x[i] = x[i + 2];
                x[i + 2] = t;
            }
            i += 1;
        }
        i = 0;
        while i < 16 {
            x[i + 16] = x[i + 16].wrapping_add(x[i]);
            x[i] = x[i].rotate_left(11);
            i += 1;
        }
        i = 0;
        while i < 16 {
            if i & 4 == 0 {
                let t = x[i];
                x[i] = x[i + 4];
                x[i + 4] = t;
            }
            i += 1;
        }
        i = 0;
        while i < 16 {
            x[i] ^= x[i + 16];
            i += 1;
        }
        i = 16;
        while i < 32 {
            let t = x[i];
            x[i] = x[i + 1];
            x[i + 1] = t;
            i += 2;
        }
        r += 1;
    }
    x
}

/// State after absorbing the parameters h/8 = 64, b = 32, r = 16.
const IV: State = {
    let mut x = [0u32; 32];
    x[0] = 64;
    x[1] = BLOCK as u32;
    x[2] = ROUNDS_PER_BLOCK as u32;
    rounds(x, ROUNDS_INIT_FINAL)
};

fn absorb(x: &mut State, block: &[u8]) {
    for (word, chunk) in x.iter_mut().zip(block.chunks_exact(4)) {
        *word ^= read_u32_le(chunk);
    }
    *x = rounds(*x, ROUNDS_PER_BLOCK);
}

/// CubeHash-512 of `input`.
pub fn hash(input: &[u8]) -> [u8; 64] {
    let mut x = IV;

    let mut blocks = input.chunks_exact(BLOCK);
    for block in &mut blocks {
        absorb(&mut x, block);
    }
    let tail = blocks.remainder();
    let mut block = [0u8; BLOCK];
    block[..tail.len()].copy_from_slice(tail);
    block[tail.len()] = 0x80;
    absorb(&mut x, &block);

    x[31] ^= 1;
    x = rounds(x, ROUNDS_INIT_FINAL);

    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(4).zip(x) {
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
            hex!("4a1d00bbcfcb5a9562fb981e7f7db3350fe2658639d948b9d57452c22328bb32f468b072208450bad5ee178271408be0b16e5633ac8a1e3cf9864cfbfc8e043a")
        );
    }

    #[test]
    fn test_abc() {
        assert_eq!(
            hash(b"abc"),
            hex!("f63d6fa89ca9fe7ab2e171be52cf193f0c8ac9f62bad297032c1e7571046791a7e8964e5c8d91880d6f9c2a54176b05198901047438e05ac4ef38d45c0282673")
        );
    }

    #[test]
    fn test_fox() {
        assert_eq!(
            hash(b"The quick brown fox jumps over the lazy dog"),
            hex!("bdba44a28cd16b774bdf3c9511def1a2baf39d4ef98b92c27cf5e37beb8990b7cdb6575dae1a548330780810618b8a5c351c1368904db7ebdf8857d596083a86")
        );
    }

    #[test]
    fn test_multi_block_vectors() {
        let mut data = [0u8; 200];
        for (i, b) in data.iter_mut().enumerate() {
            *b = i as u8;
        }
        // Multiples of 32 still absorb a separate 0x80 block
        let cases: [(usize, [u8; 64]); 4] = [
            (111, hex!("afa3eaef1079900c3487b9c2697f567a83c31bb80816a438f1da1f3559825a1218cb31ee70a8157b3c3f0a850970c56c8a5b017afbc25be7ea469c3556812205")),
            (112, hex!("20e565ce925db47a7d4c2c85e95662bc83a94657e559552314e15ec3fbb69e95ca1f88c44f0e01b90789d8f2823fa59bccc73db5adfa410970efae2a05418164")),
            (128, hex!("8c20b7abdc66590a81726b8b3a09674375d0e0c2092b8cc895ba8b8a5ace624b9c7a342e61447401bf9359dcd6648459e1ee507dbc1049dd129bec1c2a1d101e")),
            (200, hex!("2408d7da8c62c98f59bb17a54cb2431c7f43f1565babcd226425f5d117f0b339833618ccfaec95371870e6322a47d6852717ab54d43e601c66dee1e1a0de6993")),
        ];
        for (len, expected) in cases {
            assert_eq!(hash(&data[..len]), expected, "length {len}");
        }
    }
}
