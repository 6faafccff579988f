//! ECHO-512: a 4x4 matrix of 128-bit words mixed by "big" AES rounds.
//!
//! Each big round runs two AES rounds on every word (the first keyed by a
//! running 128-bit counter), then shifts and mixes whole words the way AES
//! shifts and mixes bytes.

use super::aes::{aes_round, aes_round_nokey, mix_column};

const BLOCK: usize = 128;
const ROUNDS: usize = 10;
const TAIL_LIMIT: usize = 110;

type Word = [u8; 16];

/// Chaining value: eight words each holding the output size 512.
const IV: [Word; 8] = {
    let mut v = [[0u8; 16]; 8];
    let mut i = 0;
    while i < 8 {
        v[i][1] = 0x02;
        i += 1;
    }
    v
};

fn big_round(w: &mut [Word; 16], k: &mut u128) {
    // BigSubWords
    for word in w.iter_mut() {
        aes_round(word, &k.to_le_bytes());
        aes_round_nokey(word);
        *k = k.wrapping_add(1);
    }

    // BigShiftRows: word (row r, column c) moves from column c + r
    let prev = *w;
    for c in 0..4 {
        for r in 0..4 {
            w[4 * c + r] = prev[4 * ((c + r) % 4) + r];
        }
    }

    // BigMixColumns, byte-sliced across the four words of a column
    for c in 0..4 {
        for n in 0..16 {
            let m = mix_column(w[4 * c][n], w[4 * c + 1][n], w[4 * c + 2][n], w[4 * c + 3][n]);
            for (r, byte) in m.into_iter().enumerate() {
                w[4 * c + r][n] = byte;
            }
        }
    }
}

fn compress(v: &mut [Word; 8], block: &[u8], counter: u128) {
    let mut w = [[0u8; 16]; 16];
    w[..8].copy_from_slice(&v[..]);
    for (word, chunk) in w[8..].iter_mut().zip(block.chunks_exact(16)) {
        word.copy_from_slice(chunk);
    }

    let mut k = counter;
    for _ in 0..ROUNDS {
        big_round(&mut w, &mut k);
    }

    for (i, (vi, chunk)) in v.iter_mut().zip(block.chunks_exact(16)).enumerate() {
        for j in 0..16 {
            vi[j] ^= chunk[j] ^ w[i][j] ^ w[i + 8][j];
        }
    }
}

/// ECHO-512 of `input`.
pub fn hash(input: &[u8]) -> [u8; 64] {
    let mut v = IV;
    let bits = (input.len() as u128) * 8;

    let mut blocks = input.chunks_exact(BLOCK);
    let mut processed = 0u128;
    for block in &mut blocks {
        processed += BLOCK as u128;
        compress(&mut v, block, processed * 8);
    }
    let tail = blocks.remainder();

    let mut block = [0u8; BLOCK];
    block[..tail.len()].copy_from_slice(tail);
    block[tail.len()] = 0x80;
    let mut counter = if tail.is_empty() { 0 } else { bits };
    if tail.len() + 1 > TAIL_LIMIT {
        compress(&mut v, &block, counter);
        block = [0u8; BLOCK];
        counter = 0;
    }
    block[TAIL_LIMIT..112].copy_from_slice(&512u16.to_le_bytes());
    block[112..].copy_from_slice(&bits.to_le_bytes());
    compress(&mut v, &block, counter);

    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(16).zip(&v) {
        chunk.copy_from_slice(word);
    }
    out
}
