pub mod challenge;
pub mod hash;

pub use challenge::ChallengeDerivation;
pub use hash::{commitment_hash_hex, sha1, Digest20};
