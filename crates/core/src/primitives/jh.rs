//! JH-512, bit-sliced reference form of the E8 permutation (42 rounds).
//!
//! The 1024-bit state is regrouped into 256 four-bit elements before the
//! rounds and scattered back afterwards. Round constants are derived from
//! the first 256 bits of sqrt(2) - 1 with the same round function.

const ROUNDS: usize = 42;
const BLOCK: usize = 64;

const SBOX: [[u8; 16]; 2] = [
    [9, 0, 4, 11, 13, 12, 3, 15, 1, 10, 2, 6, 7, 5, 8, 14],
    [3, 12, 6, 13, 5, 7, 1, 9, 15, 2, 0, 4, 11, 10, 14, 8],
];

/// RC0 as 64 nibbles.
const RC0: [u8; 64] = {
    let hex = b"6a09e667f3bcc908b2fb1366ea957d3e3adec17512775099da2f590b0667322a";
    let mut out = [0u8; 64];
    let mut i = 0;
    while i < 64 {
        let c = hex[i];
        out[i] = if c >= b'a' { c - b'a' + 10 } else { c - b'0' };
        i += 1;
    }
    out
};

const ROUND_CONSTANTS: [[u8; 64]; ROUNDS] = {
    let mut table = [[0u8; 64]; ROUNDS];
    let mut rc = RC0;
    let mut r = 0;
    while r < ROUNDS {
        table[r] = rc;
        let mut i = 0;
        while i < 64 {
            rc[i] = SBOX[0][rc[i] as usize];
            i += 1;
        }
        rc = layer(rc);
        r += 1;
    }
    table
};

/// The linear transformation L on two 4-bit elements (MDS over GF(2^4)).
const fn linear(a: u8, b: u8) -> (u8, u8) {
    let b = b ^ (((a << 1) ^ (a >> 3) ^ ((a >> 2) & 2)) & 0xf);
    let a = a ^ (((b << 1) ^ (b >> 3) ^ ((b >> 2) & 2)) & 0xf);
    (a, b)
}

/// L followed by the permutation P_d.
const fn layer<const N: usize>(mut t: [u8; N]) -> [u8; N] {
    let mut i = 0;
    while i < N {
        let (a, b) = linear(t[i], t[i + 1]);
        t[i] = a;
        t[i + 1] = b;
        i += 2;
    }
    // pi: swap the second pair of every four
    i = 0;
    while i < N {
        let x = t[i + 2];
        t[i + 2] = t[i + 3];
        t[i + 3] = x;
        i += 4;
    }
    // P': evens to the first half, odds to the second
    let mut out = [0u8; N];
    i = 0;
    while i < N / 2 {
        out[i] = t[2 * i];
        out[i + N / 2] = t[2 * i + 1];
        i += 1;
    }
    // phi: swap pairs in the second half
    i = N / 2;
    while i < N {
        let x = out[i];
        out[i] = out[i + 1];
        out[i + 1] = x;
        i += 2;
    }
    out
}

#[inline(always)]
fn bit(h: &[u8; 128], index: usize) -> u8 {
    (h[index >> 3] >> (7 - (index & 7))) & 1
}

fn e8(h: &mut [u8; 128]) {
    // Group bits i, i+256, i+512, i+768 into element i
    let mut grouped = [0u8; 256];
    for (i, g) in grouped.iter_mut().enumerate() {
        *g = (bit(h, i) << 3) | (bit(h, i + 256) << 2) | (bit(h, i + 512) << 1) | bit(h, i + 768);
    }
    let mut a = [0u8; 256];
    for i in 0..128 {
        a[2 * i] = grouped[i];
        a[2 * i + 1] = grouped[i + 128];
    }

    for rc in &ROUND_CONSTANTS {
        let mut t = [0u8; 256];
        for i in 0..256 {
            let select = (rc[i >> 2] >> (3 - (i & 3))) & 1;
            t[i] = SBOX[select as usize][a[i] as usize];
        }
        a = layer(t);
    }

    for i in 0..128 {
        grouped[i] = a[2 * i];
        grouped[i + 128] = a[2 * i + 1];
    }
    h.fill(0);
    for (i, &g) in grouped.iter().enumerate() {
        let shift = 7 - (i & 7);
        h[i >> 3] |= ((g >> 3) & 1) << shift;
        h[(i + 256) >> 3] |= ((g >> 2) & 1) << shift;
        h[(i + 512) >> 3] |= ((g >> 1) & 1) << shift;
        h[(i + 768) >> 3] |= (g & 1) << shift;
    }
}

/// F8: message enters the first half before E8 and the second half after.
fn f8(h: &mut [u8; 128], block: &[u8]) {
    for i in 0..BLOCK {
        h[i] ^= block[i];
    }
    e8(h);
    for i in 0..BLOCK {
        h[BLOCK + i] ^= block[i];
    }
}

/// JH-512 of `input`.
pub fn hash(input: &[u8]) -> [u8; 64] {
    let mut h = [0u8; 128];
    h[0] = 0x02; // hash bit length 512, big-endian 16-bit
    f8(&mut h, &[0u8; BLOCK]);

    let bits = (input.len() as u128) * 8;
    let mut blocks = input.chunks_exact(BLOCK);
    for block in &mut blocks {
        f8(&mut h, block);
    }
    let tail = blocks.remainder();

    let mut block = [0u8; BLOCK];
    if tail.is_empty() {
        block[0] = 0x80;
        block[48..].copy_from_slice(&bits.to_be_bytes());
        f8(&mut h, &block);
    } else {
        block[..tail.len()].copy_from_slice(tail);
        block[tail.len()] = 0x80;
        f8(&mut h, &block);
        let mut last = [0u8; BLOCK];
        last[48..].copy_from_slice(&bits.to_be_bytes());
        f8(&mut h, &last);
    }

    let mut out = [0u8; 64];
    out.copy_from_slice(&h[64..]);
    out
}
