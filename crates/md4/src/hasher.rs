//! crates/md4/src/hasher.rs
//!
//! Streaming MD4 context: buffers arbitrary-length input into 64-byte
//! blocks, runs the compression function once per full block, and appends
//! the RFC 1320 padding and length suffix at finalization.

use std::fmt;

use byteorder::{ByteOrder, LittleEndian};

use crate::transform::{self, BLOCK_LEN};

/// MD4 digest output (16 bytes / 128 bits).
pub type Digest = [u8; 16];

/// RFC 1320 initial chaining values A, B, C, D.
const INIT_STATE: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// Streaming MD4 hasher producing RFC 1320 digests.
///
/// A context owns one digest computation: create it (or [`reset`] an
/// existing one), feed bytes through [`update`] in chunks of any size, and
/// consume it with [`finalize`]. The digest is invariant under chunking —
/// any split of the same byte sequence yields the same output. Because
/// `finalize` takes the context by value, absorbing into a finalized
/// context or finalizing twice does not compile; there is no stale-state
/// reuse to guard against at runtime.
///
/// [`reset`]: Md4::reset
/// [`update`]: Md4::update
/// [`finalize`]: Md4::finalize
///
/// # Examples
///
/// One-shot hashing:
///
/// ```
/// use md4::Md4;
///
/// let digest = Md4::digest(b"abc");
/// assert_eq!(digest.len(), Md4::DIGEST_LEN);
/// ```
///
/// Incremental hashing:
///
/// ```
/// use md4::Md4;
///
/// let mut hasher = Md4::new();
/// hasher.update(b"mess");
/// hasher.update(b"age digest");
/// let digest = hasher.finalize();
///
/// assert_eq!(digest, Md4::digest(b"message digest"));
/// ```
#[derive(Clone)]
pub struct Md4 {
    /// Chaining words A, B, C, D.
    state: [u32; 4],
    /// Total bytes absorbed, wrapping at 2^64. The live prefix of `buffer`
    /// is `count % 64` bytes long.
    count: u64,
    /// Pending bytes that have not yet filled a 64-byte block.
    buffer: [u8; BLOCK_LEN],
}

impl Md4 {
    /// Length in bytes of the final digest.
    pub const DIGEST_LEN: usize = 16;

    /// Length in bytes of one input block.
    pub const BLOCK_LEN: usize = BLOCK_LEN;

    /// Creates a hasher with an empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: INIT_STATE,
            count: 0,
            buffer: [0; BLOCK_LEN],
        }
    }

    /// Resets the hasher back to its initial state, discarding any absorbed
    /// input.
    ///
    /// Every independent digest computation starts from a fresh or freshly
    /// reset context.
    pub const fn reset(&mut self) {
        self.state = INIT_STATE;
        self.count = 0;
        self.buffer = [0; BLOCK_LEN];
    }

    /// Returns the number of bytes absorbed so far (wrapping at 2^64).
    ///
    /// The count reflects every byte passed to [`update`](Md4::update),
    /// including bytes still waiting in the pending buffer.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Feeds additional bytes into the digest state.
    ///
    /// Input of any length is accepted, the empty slice included. Bytes are
    /// buffered until a full 64-byte block is available; full blocks in
    /// `data` beyond the buffer top-up are compressed in place without
    /// copying.
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }

        let index = (self.count % BLOCK_LEN as u64) as usize;
        self.count = self.count.wrapping_add(data.len() as u64);

        let mut rest = data;
        if index != 0 {
            let take = (BLOCK_LEN - index).min(rest.len());
            self.buffer[index..index + take].copy_from_slice(&rest[..take]);
            rest = &rest[take..];

            if index + take < BLOCK_LEN {
                return;
            }
            transform::compress(&mut self.state, &self.buffer);
        }

        let mut blocks = rest.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            transform::compress(&mut self.state, block);
        }

        let remainder = blocks.remainder();
        self.buffer[..remainder.len()].copy_from_slice(remainder);
    }

    /// Finalises the digest and returns the 128-bit MD4 output.
    ///
    /// Appends the `0x80` marker, zero padding up to 56 mod 64, and the
    /// original bit count as an 8-byte little-endian suffix, then runs the
    /// remaining transform(s) and serializes the chaining words low-order
    /// byte first.
    #[must_use]
    pub fn finalize(mut self) -> Digest {
        let index = (self.count % BLOCK_LEN as u64) as usize;
        let pad_len = if index < 56 { 56 - index } else { 120 - index };

        // pad_len is in 1..=64, so the tail spans at most 72 bytes and the
        // length suffix never overlaps the 0x80 marker.
        let mut tail = [0u8; BLOCK_LEN + 8];
        tail[0] = 0x80;
        LittleEndian::write_u64(&mut tail[pad_len..pad_len + 8], self.count.wrapping_mul(8));
        self.update(&tail[..pad_len + 8]);

        let mut out = [0u8; Self::DIGEST_LEN];
        LittleEndian::write_u32_into(&self.state, &mut out);
        out
    }

    /// Convenience helper that computes the MD4 digest for `data` in one
    /// shot.
    #[must_use]
    pub fn digest(data: &[u8]) -> Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

impl Default for Md4 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Md4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Md4")
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}
