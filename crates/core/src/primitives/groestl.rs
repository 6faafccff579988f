//! Grøstl-512: wide-pipe P/Q permutations over an 8x16 byte matrix.

use super::aes::{SBOX, gf_mul2};

const ROUNDS: usize = 14;
const BLOCK: usize = 128;
const COLS: usize = 16;

/// Row shifts for P and Q.
const SHIFT_P: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 11];
const SHIFT_Q: [usize; 8] = [1, 3, 5, 11, 0, 2, 4, 6];

/// First row of the circulant MixBytes matrix.
const MIX: [u8; 8] = [2, 2, 3, 4, 5, 3, 5, 7];

type Matrix = [[u8; COLS]; 8];

#[inline(always)]
fn gf_mul(x: u8, k: u8) -> u8 {
    let x2 = gf_mul2(x);
    let x4 = gf_mul2(x2);
    match k {
        2 => x2,
        3 => x2 ^ x,
        4 => x4,
        5 => x4 ^ x,
        7 => x4 ^ x2 ^ x,
        _ => x,
    }
}

/// Bytes map column-major: byte k sits at row k % 8, column k / 8.
fn to_matrix(bytes: &[u8; BLOCK]) -> Matrix {
    let mut s = [[0u8; COLS]; 8];
    for (k, &b) in bytes.iter().enumerate() {
        s[k % 8][k / 8] = b;
    }
    s
}

fn from_matrix(s: &Matrix) -> [u8; BLOCK] {
    let mut out = [0u8; BLOCK];
    for (k, b) in out.iter_mut().enumerate() {
        *b = s[k % 8][k / 8];
    }
    out
}

fn permute(bytes: &[u8; BLOCK], is_q: bool) -> [u8; BLOCK] {
    let mut s = to_matrix(bytes);
    for round in 0..ROUNDS {
        // AddRoundConstant
        let r = round as u8;
        for c in 0..COLS {
            let col = (c as u8) << 4;
            if is_q {
                for row in s.iter_mut().take(7) {
                    row[c] ^= 0xff;
                }
                s[7][c] ^= 0xff ^ col ^ r;
            } else {
                s[0][c] ^= col ^ r;
            }
        }

        // SubBytes + ShiftBytes
        let shifts = if is_q { &SHIFT_Q } else { &SHIFT_P };
        let mut t = [[0u8; COLS]; 8];
        for row in 0..8 {
            for c in 0..COLS {
                t[row][c] = SBOX[s[row][(c + shifts[row]) % COLS] as usize];
            }
        }

        // MixBytes
        for c in 0..COLS {
            for i in 0..8 {
                let mut acc = 0u8;
                for k in 0..8 {
                    acc ^= gf_mul(t[k][c], MIX[(k + 8 - i) % 8]);
                }
                s[i][c] = acc;
            }
        }
    }
    from_matrix(&s)
}

fn compress(h: &mut [u8; BLOCK], block: &[u8; BLOCK]) {
    let mut hm = [0u8; BLOCK];
    for i in 0..BLOCK {
        hm[i] = h[i] ^ block[i];
    }
    let p = permute(&hm, false);
    let q = permute(block, true);
    for i in 0..BLOCK {
        h[i] ^= p[i] ^ q[i];
    }
}

/// Grøstl-512 of `input`.
pub fn hash(input: &[u8]) -> [u8; 64] {
    let mut h = [0u8; BLOCK];
    h[BLOCK - 2] = 0x02; // output size 512 as a big-endian integer

    let mut blocks = input.chunks_exact(BLOCK);
    let mut count: u64 = 0;
    for chunk in &mut blocks {
        let mut block = [0u8; BLOCK];
        block.copy_from_slice(chunk);
        compress(&mut h, &block);
        count += 1;
    }
    let tail = blocks.remainder();

    // 0x80, zeros, then the total block count as a 64-bit big-endian integer
    let mut pad = [0u8; 2 * BLOCK];
    pad[..tail.len()].copy_from_slice(tail);
    pad[tail.len()] = 0x80;
    let pad_blocks = if tail.len() < BLOCK - 8 { 1 } else { 2 };
    let end = pad_blocks * BLOCK;
    pad[end - 8..end].copy_from_slice(&(count + pad_blocks as u64).to_be_bytes());
    for chunk in pad[..end].chunks_exact(BLOCK) {
        let mut block = [0u8; BLOCK];
        block.copy_from_slice(chunk);
        compress(&mut h, &block);
    }

    // Output transformation: trunc(P(h) ^ h)
    let p = permute(&h, false);
    let mut out = [0u8; 64];
    for i in 0..64 {
        out[i] = p[64 + i] ^ h[64 + i];
    }
    out
}
