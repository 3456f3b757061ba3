//! Policy inputs for proof construction.
//!
//! Hash strength, nonce length, and round count are policy, not protocol —
//! they still need a typed home so callers can reason about and override
//! them instead of the values being scattered as magic numbers through
//! `commitment`/`protocol`.

/// Length, in ASCII alphanumeric characters, of each node's hiding nonce.
///
/// The 62-symbol alphabet used by [`crate::utils::nonce::random_nonce`]
/// gives `14 * log2(62) ≈ 83.4` bits of entropy at this length, comfortably
/// past the ~80-bit floor a hiding nonce needs to make two independent
/// commitments to the same color collide only by accident.
pub const DEFAULT_NONCE_LEN: usize = 14;

/// Parameters governing one [`crate::protocol::prover::Proofer::create_proof`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofParameters {
    /// Number of commit/challenge/reveal rounds. Soundness error is
    /// `(1 - 1/|E|)^rounds`.
    pub rounds: u32,
    /// Length of the per-node hiding nonce, in ASCII alphanumeric characters.
    pub nonce_len: usize,
}

impl ProofParameters {
    pub fn new(rounds: u32) -> Self {
        ProofParameters {
            rounds,
            nonce_len: DEFAULT_NONCE_LEN,
        }
    }

    pub fn with_nonce_len(mut self, nonce_len: usize) -> Self {
        self.nonce_len = nonce_len;
        self
    }
}

impl Default for ProofParameters {
    fn default() -> Self {
        ProofParameters::new(8)
    }
}
