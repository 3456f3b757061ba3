//! `CommitmentGraph`: one round's permuted, hash-committed graph.
//!
//! Construction: clone the source [`ColoringGraph`], shuffle its colors
//! under a fresh palette permutation, then replace every node's color with
//! `hex(SHA1(opening))` where `opening = color || nonce` for a fresh
//! per-node random nonce. The openings are retained out-of-band (never
//! serialized with the graph) so the prover can reveal them selectively.

use crate::crypto::hash::commitment_hash_hex;
use crate::error::GraphError;
use crate::graph::coloring::ColoringGraph;
use crate::graph::core::{Edge, Graph, Node};
use crate::graph::value::CommitValue;
use crate::utils::nonce::random_nonce;

/// The pre-image of a commitment: the permuted color and the fresh nonce
/// that was hashed alongside it.
///
/// The wire shape is length-prefixed (`u16 len || color || u16 len ||
/// nonce`) rather than a delimiter-joined string, so a color containing any
/// particular byte value can never be confused with the nonce that follows
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opening {
    pub color: Vec<u8>,
    pub nonce: String,
}

impl Opening {
    /// The exact byte string that gets hashed to produce the commitment.
    pub fn to_bytes(&self) -> Vec<u8> {
        let nonce_bytes = self.nonce.as_bytes();
        let mut out = Vec::with_capacity(4 + self.color.len() + nonce_bytes.len());
        out.extend_from_slice(&(self.color.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.color);
        out.extend_from_slice(&(nonce_bytes.len() as u16).to_be_bytes());
        out.extend_from_slice(nonce_bytes);
        out
    }

    /// Parses an opening back into its `(color, nonce)` pair. Any truncated
    /// or malformed buffer is reported rather than panicking — callers that
    /// rehydrate an opening from untrusted wire bytes turn this into a
    /// plain rejection rather than a panic or a propagated error.
    pub fn from_bytes(data: &[u8]) -> Result<Self, GraphError> {
        if data.len() < 2 {
            return Err(GraphError::ShortBuffer);
        }
        let color_len = u16::from_be_bytes([data[0], data[1]]) as usize;
        let color_end = 2usize.checked_add(color_len).ok_or(GraphError::ShortBuffer)?;
        let color = data.get(2..color_end).ok_or(GraphError::ShortBuffer)?.to_vec();

        let nonce_len_end = color_end.checked_add(2).ok_or(GraphError::ShortBuffer)?;
        let nonce_len_bytes = data.get(color_end..nonce_len_end).ok_or(GraphError::ShortBuffer)?;
        let nonce_len = u16::from_be_bytes([nonce_len_bytes[0], nonce_len_bytes[1]]) as usize;
        let nonce_end = nonce_len_end.checked_add(nonce_len).ok_or(GraphError::ShortBuffer)?;
        let nonce_bytes = data.get(nonce_len_end..nonce_end).ok_or(GraphError::ShortBuffer)?;
        let nonce = String::from_utf8(nonce_bytes.to_vec())
            .map_err(|err| GraphError::ValueDecodeFailed(err.to_string()))?;

        if nonce_end != data.len() {
            return Err(GraphError::TrailingBytes(data.len() - nonce_end));
        }

        Ok(Opening { color, nonce })
    }

    fn reveals(&self, expected_hex: &str) -> bool {
        commitment_hash_hex(&self.to_bytes()) == expected_hex
    }
}

/// One round's commitment artifact: a color-permuted graph whose node
/// values are hiding commitments, plus the opening table needed to reveal
/// any of them.
#[derive(Debug, Clone)]
pub struct CommitmentGraph {
    graph: Graph<CommitValue>,
    openings: Vec<Opening>,
}

impl CommitmentGraph {
    /// Builds a fresh round from a source coloring: clone, shuffle, commit.
    pub fn new(source: &ColoringGraph, nonce_len: usize) -> Self {
        let mut shuffled = source.clone();
        shuffled.shuffle_colors();

        let mut graph = Graph::new();
        let mut openings = Vec::with_capacity(shuffled.nodes().len());

        for node in shuffled.nodes() {
            let color = node.value.as_bytes().to_vec();
            let nonce = random_nonce(nonce_len);
            let opening = Opening { color, nonce };
            let committed = commitment_hash_hex(&opening.to_bytes());

            graph.add_node(CommitValue(committed));
            openings.push(opening);
        }

        for edge in shuffled.edges() {
            graph
                .add_edge(edge.from, edge.to)
                .expect("edges of a valid ColoringGraph reference only existing nodes");
        }

        CommitmentGraph { graph, openings }
    }

    /// The serialized form of the committed graph — the commitment payload
    /// that both feeds the challenge derivation and is published in the
    /// `Proof`. Openings are never included here; they are revealed
    /// selectively, one challenged edge's two endpoints per round.
    pub fn serialize(&self) -> Vec<u8> {
        self.graph.encode()
    }

    pub fn opening(&self, id: u16) -> &Opening {
        &self.openings[id as usize]
    }

    pub fn edges(&self) -> &[Edge] {
        self.graph.edges()
    }

    pub fn nodes(&self) -> &[Node<CommitValue>] {
        self.graph.nodes()
    }
}

impl Default for CommitmentGraph {
    fn default() -> Self {
        CommitmentGraph {
            graph: Graph::new(),
            openings: Vec::new(),
        }
    }
}

/// Checks whether `opening` is the pre-image of `committed` (the hex string
/// stored at a commitment node). Used by the verifier; never panics.
pub fn opening_matches(opening: &Opening, committed: &str) -> bool {
    opening.reveals(committed)
}
