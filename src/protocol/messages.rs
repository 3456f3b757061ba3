//! The `Proof` message: three parallel, round-indexed arrays.

use crate::commitment::Opening;
use crate::error::GraphError;
use serde::{Deserialize, Serialize};

/// A serialized [`crate::commitment::CommitmentGraph`] payload — both a
/// commitment the verifier rehydrates and the exact bytes the challenge
/// derivation is seeded from.
pub type CommitmentPayload = Vec<u8>;

/// The complete non-interactive proof: `R` rounds of commitment, the
/// challenged edge index each round resolves to, and the openings of that
/// edge's two endpoints.
///
/// All entities are immutable once assembled; there is no public mutator
/// here beyond construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proof {
    pub(crate) commitments: Vec<CommitmentPayload>,
    pub(crate) edge_ids: Vec<u64>,
    pub(crate) edge_openings: Vec<(OpeningWire, OpeningWire)>,
}

impl Proof {
    pub fn rounds(&self) -> usize {
        self.commitments.len()
    }

    pub fn commitments(&self) -> &[CommitmentPayload] {
        &self.commitments
    }

    pub fn edge_ids(&self) -> &[u64] {
        &self.edge_ids
    }

    pub fn edge_openings(&self) -> &[(OpeningWire, OpeningWire)] {
        &self.edge_openings
    }
}

/// A serializable mirror of [`Opening`]. [`Opening`] itself intentionally
/// doesn't derive `serde` traits, since it is sensitive pre-image material
/// that should never travel anywhere but a `Proof`'s deliberately revealed
/// openings; `OpeningWire` wraps the exact length-prefixed byte encoding
/// [`Opening::to_bytes`]/[`Opening::from_bytes`] already define, so the wire
/// shape of a `Proof` and the wire shape of a `CommitmentGraph` opening are
/// the same bytes, parsed the same way, on both the build and the
/// rehydration side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningWire(pub Vec<u8>);

impl From<Opening> for OpeningWire {
    fn from(opening: Opening) -> Self {
        OpeningWire(opening.to_bytes())
    }
}

impl TryFrom<OpeningWire> for Opening {
    type Error = GraphError;

    fn try_from(wire: OpeningWire) -> Result<Self, GraphError> {
        Opening::from_bytes(&wire.0)
    }
}
