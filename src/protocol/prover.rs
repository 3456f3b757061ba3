//! `Proofer`: drives proof construction across `R` rounds.

use crate::commitment::CommitmentGraph;
use crate::config::ProofParameters;
use crate::crypto::challenge::ChallengeDerivation;
use crate::error::ProofError;
use crate::graph::coloring::ColoringGraph;
use crate::protocol::messages::Proof;
use tracing::{debug, instrument};

/// Holds the coloring the prover knows and is willing to prove knowledge of.
/// Borrows rather than owns it: callers may reuse the same coloring across
/// multiple proofs (e.g. with different round counts).
pub struct Proofer<'a> {
    colored_graph: &'a ColoringGraph,
}

impl<'a> Proofer<'a> {
    pub fn new(colored_graph: &'a ColoringGraph) -> Self {
        Proofer { colored_graph }
    }

    /// Builds a non-interactive proof: commit `R` independent shuffled
    /// copies of the coloring, derive one challenge edge per round from a
    /// hash of every commitment, then reveal that edge's two endpoint
    /// openings.
    #[instrument(skip(self, params), fields(rounds = params.rounds))]
    pub fn create_proof(&self, params: &ProofParameters) -> Result<Proof, ProofError> {
        if params.rounds == 0 {
            return Err(ProofError::InvalidRounds(params.rounds));
        }
        if self.colored_graph.nodes().is_empty() || self.colored_graph.edges().is_empty() {
            return Err(ProofError::EmptyGraph);
        }

        let rounds = params.rounds as usize;
        let commitment_graphs = self.build_rounds(rounds, params.nonce_len);
        let payloads: Vec<_> = commitment_graphs.iter().map(CommitmentGraph::serialize).collect();

        let mut challenges = ChallengeDerivation::new(payloads.iter().map(Vec::as_slice));

        let mut edge_ids = Vec::with_capacity(rounds);
        let mut edge_openings = Vec::with_capacity(rounds);

        for cg in &commitment_graphs {
            let nonce = challenges.next_u64();
            let edge_count = cg.edges().len() as u64;
            let edge_id = nonce % edge_count;
            let edge = cg.edges()[edge_id as usize];

            let opening_from = cg.opening(edge.from).clone();
            let opening_to = cg.opening(edge.to).clone();

            edge_ids.push(edge_id);
            edge_openings.push((opening_from.into(), opening_to.into()));
        }

        debug!(rounds, "assembled proof");

        Ok(Proof {
            commitments: payloads,
            edge_ids,
            edge_openings,
        })
    }

    /// Builds the `R` per-round commitment graphs. Each round is independent
    /// of the others (no shared mutable state, no ordering requirement
    /// before the challenge derivation hashes them all together), so with
    /// the `parallel` feature enabled this fans out across `rayon`'s global
    /// pool instead of running one round at a time.
    #[cfg(feature = "parallel")]
    fn build_rounds(&self, rounds: usize, nonce_len: usize) -> Vec<CommitmentGraph> {
        use rayon::prelude::*;
        (0..rounds)
            .into_par_iter()
            .map(|_| CommitmentGraph::new(self.colored_graph, nonce_len))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn build_rounds(&self, rounds: usize, nonce_len: usize) -> Vec<CommitmentGraph> {
        (0..rounds)
            .map(|_| CommitmentGraph::new(self.colored_graph, nonce_len))
            .collect()
    }
}
