//! The fixed commitment hash.
//!
//! This is not a pluggable hash abstraction: the commitment scheme is a
//! single fixed primitive (hash of a value concatenated with a per-node
//! random nonce), so unlike a generic hash trait that lets callers pick
//! between several digest algorithms, there is deliberately no such
//! abstraction here — every commitment in this crate is `hex(SHA1(...))`,
//! full stop.

use sha1::{Digest, Sha1};

/// A raw 20-byte SHA-1 digest.
pub type Digest20 = [u8; 20];

/// `SHA1(data)`.
pub fn sha1(data: &[u8]) -> Digest20 {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// `hex(SHA1(data))`, the commitment value stored at every graph node.
pub fn commitment_hash_hex(data: &[u8]) -> String {
    hex::encode(sha1(data))
}
