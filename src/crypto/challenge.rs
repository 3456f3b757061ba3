//! Deterministic challenge derivation.
//!
//! This is the Fiat–Shamir binding step: the verifier never gets to pick
//! anything, because every challenge is a pure function of every commitment
//! already on the table. The seed hash is SHA-1 (matching the commitment
//! hash used elsewhere); the stream generator is `ChaCha20Rng`, a portable,
//! explicitly specified PRNG rather than a platform-dependent one, so the
//! same 64-bit seed reproduces the same stream wherever this crate runs.

use crate::crypto::hash::sha1;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// A deterministic `u64` stream seeded from the concatenation of all
/// round commitment payloads.
pub struct ChallengeDerivation {
    rng: ChaCha20Rng,
}

impl ChallengeDerivation {
    /// Seeds the stream from `SHA1(concat(payloads))`, narrowed to its low
    /// 64 bits.
    pub fn new<'a>(payloads: impl IntoIterator<Item = &'a [u8]>) -> Self {
        let mut concatenated = Vec::new();
        for payload in payloads {
            concatenated.extend_from_slice(payload);
        }
        let digest = sha1(&concatenated);

        // Low 64 bits of the 20-byte digest, i.e. its last 8 bytes
        // interpreted big-endian, which is exactly what narrowing a
        // big-endian big integer to a `u64` keeps.
        let mut seed_bytes = [0u8; 8];
        seed_bytes.copy_from_slice(&digest[digest.len() - 8..]);
        let seed = u64::from_be_bytes(seed_bytes);

        ChallengeDerivation {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Produces the next `u64` in the stream.
    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }
}
