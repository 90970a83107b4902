#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod hasher;
mod transform;

pub use hasher::{Digest, Md4};

/// Computes the MD4 digest of `input` in one call.
///
/// Equivalent to [`Md4::digest`]; provided as a free function for callers
/// that only ever hash whole buffers.
#[must_use]
pub fn digest(input: &[u8]) -> Digest {
    Md4::digest(input)
}
