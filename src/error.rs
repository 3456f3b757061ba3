//! Error taxonomy shared by the graph codec and the proof protocol.
//!
//! Deserialization errors ([`GraphError`]) are surfaced to callers of
//! [`crate::graph::core::Graph::decode`] directly, but are absorbed into a
//! plain `false` inside [`crate::protocol::messages::Proof::verify`] — a
//! malformed proof is a rejection, never a panic or a propagated error.

use thiserror::Error;

/// Errors that can occur while encoding or decoding the binary graph format.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("buffer too short to contain a valid frame")]
    ShortBuffer,

    #[error("unsupported graph wire version: {0}")]
    InvalidVersion(u8),

    #[error("fixed-width field had size {0}, expected 2")]
    InvalidFraming(u16),

    #[error("node or edge index {0} is out of range for a graph with {1} nodes")]
    InvalidEndpoint(u16, usize),

    #[error("failed to decode node value: {0}")]
    ValueDecodeFailed(String),

    #[error("{0} trailing byte(s) after the last recognized frame")]
    TrailingBytes(usize),
}

/// Errors surfaced synchronously by [`crate::protocol::prover::Proofer::create_proof`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProofError {
    #[error("graph has no nodes or no edges; at least one edge is required")]
    EmptyGraph,

    #[error("round count must be at least 1, got {0}")]
    InvalidRounds(u32),
}
