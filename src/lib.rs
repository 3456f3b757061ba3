//! A non-interactive zero-knowledge proof of knowledge of a valid coloring
//! of a graph from a fixed palette, built from hash commitments to `R`
//! independently shuffled copies of the coloring and a Fiat–Shamir-style
//! challenge derived from those commitments themselves.

pub mod commitment;
pub mod config;
pub mod crypto;
pub mod error;
pub mod graph;
pub mod protocol;
pub mod utils;

pub use commitment::{opening_matches, CommitmentGraph, Opening};
pub use config::ProofParameters;
pub use crypto::{commitment_hash_hex, sha1, ChallengeDerivation, Digest20};
pub use error::{GraphError, ProofError};
pub use graph::{ColorValue, ColoringGraph, CommitValue, Edge, Graph, IntValue, Node, NodeValue};
pub use protocol::{CommitmentPayload, OpeningWire, Proof, Proofer};
