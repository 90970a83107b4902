//! crates/md4/src/transform.rs
//!
//! MD4 compression function: folds one 64-byte block into the four 32-bit
//! chaining words through three rounds of sixteen steps each (RFC 1320
//! section 3.4). All additions wrap modulo 2^32; overflow is part of the
//! algorithm, not an error.

use byteorder::{ByteOrder, LittleEndian};

/// Number of bytes consumed by one compression step.
pub(crate) const BLOCK_LEN: usize = 64;

/// Additive constant for round 2 steps.
const ROUND2: u32 = 0x5a827999;

/// Additive constant for round 3 steps.
const ROUND3: u32 = 0x6ed9eba1;

#[inline]
fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

// Majority of the three inputs.
#[inline]
fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

#[inline]
fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline]
fn ff(a: u32, b: u32, c: u32, d: u32, x: u32, s: u32) -> u32 {
    a.wrapping_add(f(b, c, d)).wrapping_add(x).rotate_left(s)
}

#[inline]
fn gg(a: u32, b: u32, c: u32, d: u32, x: u32, s: u32) -> u32 {
    a.wrapping_add(g(b, c, d))
        .wrapping_add(x)
        .wrapping_add(ROUND2)
        .rotate_left(s)
}

#[inline]
fn hh(a: u32, b: u32, c: u32, d: u32, x: u32, s: u32) -> u32 {
    a.wrapping_add(h(b, c, d))
        .wrapping_add(x)
        .wrapping_add(ROUND3)
        .rotate_left(s)
}

/// Decodes a 64-byte block into 16 words, low-order byte first per word.
pub(crate) fn decode_block(block: &[u8]) -> [u32; 16] {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    let mut words = [0u32; 16];
    LittleEndian::read_u32_into(block, &mut words);
    words
}

/// Applies the MD4 compression function to `state` for one 64-byte block.
///
/// Pure function of (chaining state, block); the word schedule and shift
/// amounts follow RFC 1320 exactly.
pub(crate) fn compress(state: &mut [u32; 4], block: &[u8]) {
    let x = decode_block(block);

    let [mut a, mut b, mut c, mut d] = *state;

    // Round 1: natural word order, shifts {3, 7, 11, 19}.
    a = ff(a, b, c, d, x[0], 3);
    d = ff(d, a, b, c, x[1], 7);
    c = ff(c, d, a, b, x[2], 11);
    b = ff(b, c, d, a, x[3], 19);
    a = ff(a, b, c, d, x[4], 3);
    d = ff(d, a, b, c, x[5], 7);
    c = ff(c, d, a, b, x[6], 11);
    b = ff(b, c, d, a, x[7], 19);
    a = ff(a, b, c, d, x[8], 3);
    d = ff(d, a, b, c, x[9], 7);
    c = ff(c, d, a, b, x[10], 11);
    b = ff(b, c, d, a, x[11], 19);
    a = ff(a, b, c, d, x[12], 3);
    d = ff(d, a, b, c, x[13], 7);
    c = ff(c, d, a, b, x[14], 11);
    b = ff(b, c, d, a, x[15], 19);

    // Round 2: column-major word order, shifts {3, 5, 9, 13}.
    a = gg(a, b, c, d, x[0], 3);
    d = gg(d, a, b, c, x[4], 5);
    c = gg(c, d, a, b, x[8], 9);
    b = gg(b, c, d, a, x[12], 13);
    a = gg(a, b, c, d, x[1], 3);
    d = gg(d, a, b, c, x[5], 5);
    c = gg(c, d, a, b, x[9], 9);
    b = gg(b, c, d, a, x[13], 13);
    a = gg(a, b, c, d, x[2], 3);
    d = gg(d, a, b, c, x[6], 5);
    c = gg(c, d, a, b, x[10], 9);
    b = gg(b, c, d, a, x[14], 13);
    a = gg(a, b, c, d, x[3], 3);
    d = gg(d, a, b, c, x[7], 5);
    c = gg(c, d, a, b, x[11], 9);
    b = gg(b, c, d, a, x[15], 13);

    // Round 3: bit-reversed word order, shifts {3, 9, 11, 15}.
    a = hh(a, b, c, d, x[0], 3);
    d = hh(d, a, b, c, x[8], 9);
    c = hh(c, d, a, b, x[4], 11);
    b = hh(b, c, d, a, x[12], 15);
    a = hh(a, b, c, d, x[2], 3);
    d = hh(d, a, b, c, x[10], 9);
    c = hh(c, d, a, b, x[6], 11);
    b = hh(b, c, d, a, x[14], 15);
    a = hh(a, b, c, d, x[1], 3);
    d = hh(d, a, b, c, x[9], 9);
    c = hh(c, d, a, b, x[5], 11);
    b = hh(b, c, d, a, x[13], 15);
    a = hh(a, b, c, d, x[3], 3);
    d = hh(d, a, b, c, x[11], 9);
    c = hh(c, d, a, b, x[7], 11);
    b = hh(b, c, d, a, x[15], 15);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}
