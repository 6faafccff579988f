//! SIMD-512 (v1.1): number-theoretic message expansion over F_257 feeding
//! a four-way parallel Feistel of 32-bit words.

use super::read_u32_le;

const BLOCK: usize = 128;
const P: u32 = 257;

const IV: [u32; 32] = [
    0x0BA16B95, 0x72F999AD, 0x9FECC2AE, 0xBA3264FC, 0x5E894929, 0x8E9F30E5, 0x2F1DAA37, 0xF0F2C558,
    0xAC506643, 0xA90635A5, 0xE25B878B, 0xAAB7878F, 0x88817F7A, 0x0A02892B, 0x559A7550, 0x598F657E,
    0x7EEF60A1, 0x6B70E3E8, 0x9C1714D1, 0xB958E2A8, 0xAB02675E, 0xED1C014F, 0xCD8D65BB, 0xFDB7A257,
    0x09254899, 0xD699C7BC, 0x9019B6DC, 0x2B9022E4, 0x8FA14956, 0x21BF9BD3, 0xB94D0943, 0x6FFDDC22,
];

/// Powers of the 256th root of unity 41 modulo 257.
const OMEGA_POW: [u32; 256] = {
    let mut table = [0u32; 256];
    let mut acc = 1u32;
    let mut i = 0;
    while i < 256 {
        table[i] = acc;
        acc = acc * 41 % P;
        i += 1;
    }
    table
};

/// Which expanded word pair each of the 32 steps consumes.
const PERM: [usize; 32] = [
    4, 6, 0, 2, 7, 5, 3, 1, 15, 11, 12, 8, 9, 13, 10, 14, 17, 18, 23, 20, 22, 21, 16, 19, 30, 24,
    25, 31, 27, 29, 28, 26,
];

/// Rotation constants per round.
const ROT: [[u32; 4]; 4] = [[3, 23, 17, 27], [28, 19, 22, 7], [29, 9, 15, 5], [4, 13, 10, 25]];

/// Lane permutation for the rotated A operand, cycled by step index mod 7.
const PX: [usize; 7] = [1, 6, 2, 3, 5, 7, 4];

type Quarter = [u32; 8];

/// Expands a block into 256 centred elements of F_257.
fn expand(block: &[u8], last: bool) -> [i32; 256] {
    let mut y = [0i32; 256];
    for (i, yi) in y.iter_mut().enumerate() {
        let mut s = 0u32;
        for (j, &b) in block.iter().enumerate() {
            s += b as u32 * OMEGA_POW[(i * j) % 256];
        }
        // Tweak coefficients at X^255 and (final block only) X^253
        s += OMEGA_POW[(i * 255) % 256];
        if last {
            s += OMEGA_POW[(i * 253) % 256];
        }
        let s = (s % P) as i32;
        *yi = if s > 128 { s - P as i32 } else { s };
    }
    y
}

fn z_word(y: &[i32; 256], i: usize, j: usize) -> u32 {
    let (lo, hi) = if i < 16 {
        (185 * y[16 * i + 2 * j], 185 * y[16 * i + 2 * j + 1])
    } else if i < 24 {
        (233 * y[16 * i + 2 * j - 256], 233 * y[16 * i + 2 * j - 128])
    } else {
        (233 * y[16 * i + 2 * j - 383], 233 * y[16 * i + 2 * j - 255])
    };
    (lo as u32 & 0xffff) | ((hi as u32 & 0xffff) << 16)
}

#[inline(always)]
fn if_fn(a: u32, b: u32, c: u32) -> u32 {
    (a & b) | (!a & c)
}

#[inline(always)]
fn maj_fn(a: u32, b: u32, c: u32) -> u32 {
    (a & b) | (a & c) | (b & c)
}

struct State {
    a: Quarter,
    b: Quarter,
    c: Quarter,
    d: Quarter,
    step: usize,
}

impl State {
    fn step(&mut self, w: &Quarter, phi: fn(u32, u32, u32) -> u32, r: u32, s: u32) {
        let mut ar = [0u32; 8];
        for (o, &a) in ar.iter_mut().zip(&self.a) {
            *o = a.rotate_left(r);
        }
        let px = PX[self.step % 7];
        let mut nd = [0u32; 8];
        for j in 0..8 {
            let t = self.d[j]
                .wrapping_add(w[j])
                .wrapping_add(phi(self.a[j], self.b[j], self.c[j]));
            nd[j] = t.rotate_left(s).wrapping_add(ar[j ^ px]);
        }
        self.d = self.c;
        self.c = self.b;
        self.b = ar;
        self.a = nd;
        self.step += 1;
    }
}

fn quarter(words: &[u32]) -> Quarter {
    let mut q = [0u32; 8];
    q.copy_from_slice(&words[..8]);
    q
}

fn compress(h: &mut [u32; 32], block: &[u8; BLOCK], last: bool) {
    let y = expand(block, last);

    let mut x = [0u32; 32];
    for ((xi, &hi), chunk) in x.iter_mut().zip(h.iter()).zip(block.chunks_exact(4)) {
        *xi = hi ^ read_u32_le(chunk);
    }
    let mut st = State {
        a: quarter(&x[0..]),
        b: quarter(&x[8..]),
        c: quarter(&x[16..]),
        d: quarter(&x[24..]),
        step: 0,
    };

    for (round, pi) in ROT.iter().enumerate() {
        for s in 0..8 {
            let mut w = [0u32; 8];
            for (j, wj) in w.iter_mut().enumerate() {
                *wj = z_word(&y, PERM[8 * round + s], j);
            }
            let phi: fn(u32, u32, u32) -> u32 = if s < 4 { if_fn } else { maj_fn };
            st.step(&w, phi, pi[s % 4], pi[(s + 1) % 4]);
        }
    }

    // Feed-forward: four more steps keyed by the previous chaining value
    const FINAL_ROT: [(u32, u32); 4] = [(4, 13), (13, 10), (10, 25), (25, 4)];
    for (q, &(r, s)) in FINAL_ROT.iter().enumerate() {
        st.step(&quarter(&h[8 * q..]), if_fn, r, s);
    }

    h[0..8].copy_from_slice(&st.a);
    h[8..16].copy_from_slice(&st.b);
    h[16..24].copy_from_slice(&st.c);
    h[24..32].copy_from_slice(&st.d);
}

/// SIMD-512 of `input`.
pub fn hash(input: &[u8]) -> [u8; 64] {
    let mut h = IV;

    // Partial chunks are zero-padded; the length goes in a separate block
    for chunk in input.chunks(BLOCK) {
        let mut block = [0u8; BLOCK];
        block[..chunk.len()].copy_from_slice(chunk);
        compress(&mut h, &block, false);
    }
    let mut block = [0u8; BLOCK];
    block[..8].copy_from_slice(&((input.len() as u64) * 8).to_le_bytes());
    compress(&mut h, &block, true);

    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(4).zip(h) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}
