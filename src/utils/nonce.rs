//! Per-node hiding nonce generation.
//!
//! Draws a random alphanumeric string from a caller-supplied `rand::Rng`,
//! the same shape commonly used for drawing a random permutation, just
//! applied to characters instead of indices.

use rand::Rng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Draws a fresh, uniformly random alphanumeric nonce of `len` characters
/// using a non-deterministic, cryptographic-grade source. A nonce must
/// never repeat across rounds, or two commitments of the same color would
/// be linkable by their shared opening.
pub fn random_nonce(len: usize) -> String {
    let mut rng = rand::rng();
    random_nonce_with(&mut rng, len)
}

/// As [`random_nonce`], but draws from a caller-supplied generator — used
/// by tests that need reproducible nonces.
pub fn random_nonce_with(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}
