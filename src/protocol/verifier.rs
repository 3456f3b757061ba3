//! Proof verification: the single public acceptance predicate.
//!
//! `Proof::verify` is a pure function of the `Proof`'s own fields — it never
//! needs the original graph, a palette, or any other side channel. Every
//! failure mode, from a truncated commitment to a mismatched opening, folds
//! into a plain `false`; nothing here panics on adversarial input.

use crate::commitment::{opening_matches, Opening};
use crate::crypto::challenge::ChallengeDerivation;
use crate::graph::value::CommitValue;
use crate::graph::Graph;
use crate::protocol::messages::Proof;
use tracing::{instrument, trace};

impl Proof {
    /// Checks every condition required for acceptance:
    ///
    /// 1. the three round-indexed arrays (commitments, edge ids, edge
    ///    openings) all have the same, nonzero length;
    /// 2. every commitment decodes as a well-formed graph;
    /// 3. re-deriving the challenge from the commitments reproduces the
    ///    claimed edge index for every round;
    /// 4. each revealed opening parses and is the pre-image of the
    ///    commitment stored at its endpoint;
    /// 5. the two endpoints of the challenged edge reveal different colors.
    #[instrument(skip(self))]
    pub fn verify(&self) -> bool {
        let rounds = self.commitments.len();
        if rounds == 0 || self.edge_ids.len() != rounds || self.edge_openings.len() != rounds {
            trace!("rejected: round arrays have mismatched or zero length");
            return false;
        }

        let decoded: Vec<Graph<CommitValue>> = match self
            .commitments
            .iter()
            .map(|payload| Graph::<CommitValue>::decode(payload))
            .collect::<Result<_, _>>()
        {
            Ok(graphs) => graphs,
            Err(_) => {
                trace!("rejected: a commitment failed to decode");
                return false;
            }
        };

        let mut challenges = ChallengeDerivation::new(self.commitments.iter().map(Vec::as_slice));

        for (round, graph) in decoded.iter().enumerate() {
            let edge_count = graph.edges().len() as u64;
            if edge_count == 0 {
                trace!(round, "rejected: commitment graph has no edges");
                return false;
            }

            let nonce = challenges.next_u64();
            let expected_edge_id = nonce % edge_count;
            if expected_edge_id != self.edge_ids[round] {
                trace!(round, "rejected: challenged edge does not match re-derived challenge");
                return false;
            }

            let edge = match graph.edges().get(self.edge_ids[round] as usize) {
                Some(edge) => *edge,
                None => {
                    trace!(round, "rejected: challenged edge index out of range");
                    return false;
                }
            };

            let from_node = match graph.node(edge.from) {
                Some(node) => node,
                None => {
                    trace!(round, "rejected: edge endpoint missing from graph");
                    return false;
                }
            };
            let to_node = match graph.node(edge.to) {
                Some(node) => node,
                None => {
                    trace!(round, "rejected: edge endpoint missing from graph");
                    return false;
                }
            };

            let (from_wire, to_wire) = &self.edge_openings[round];
            let from_opening = match Opening::try_from(from_wire.clone()) {
                Ok(opening) => opening,
                Err(_) => {
                    trace!(round, "rejected: opening did not parse");
                    return false;
                }
            };
            let to_opening = match Opening::try_from(to_wire.clone()) {
                Ok(opening) => opening,
                Err(_) => {
                    trace!(round, "rejected: opening did not parse");
                    return false;
                }
            };

            if !opening_matches(&from_opening, &from_node.value.0) {
                trace!(round, "rejected: opening does not match its endpoint's commitment");
                return false;
            }
            if !opening_matches(&to_opening, &to_node.value.0) {
                trace!(round, "rejected: opening does not match its endpoint's commitment");
                return false;
            }

            if from_opening.color == to_opening.color {
                trace!(round, "rejected: challenged edge's endpoints share a color");
                return false;
            }
        }

        true
    }
}
