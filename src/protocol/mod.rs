pub mod messages;
pub mod prover;
pub mod verifier;

pub use messages::{CommitmentPayload, OpeningWire, Proof};
pub use prover::Proofer;
