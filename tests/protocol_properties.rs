//! Quantified invariants, exercised with `proptest` over randomly generated
//! small graphs and colorings rather than fixed fixtures.

use proptest::prelude::*;
use zkp_c_coloring::{ColorValue, ColoringGraph, CommitmentGraph, Graph, IntValue, ProofParameters, Proofer};

const PALETTE: [&str; 4] = ["red", "blue", "green", "yellow"];

fn palette_bytes() -> Vec<Vec<u8>> {
    PALETTE.iter().map(|c| c.as_bytes().to_vec()).collect()
}

/// Builds a path graph of `n` nodes (edges only between consecutive nodes),
/// colored by rotating through the first `k` palette colors. A path's
/// consecutive nodes always differ under any rotation with `k >= 2`, so the
/// result is always validly colored regardless of `n` and `k`.
fn valid_path_coloring(n: usize, k: usize) -> ColoringGraph {
    let k = k.max(2).min(PALETTE.len());
    let mut g = ColoringGraph::new(palette_bytes());
    for i in 0..n {
        let color = PALETTE[i % k];
        g.add_node(ColorValue::new(color.as_bytes().to_vec()));
    }
    for i in 0..n.saturating_sub(1) as u16 {
        g.add_edge(i, i + 1).unwrap();
    }
    g
}

proptest! {
    /// Completeness: a validly colored, non-empty graph always verifies.
    #[test]
    fn completeness(n in 2usize..12, k in 2usize..5, rounds in 1u32..20) {
        let graph = valid_path_coloring(n, k);
        prop_assume!(!graph.edges().is_empty());
        let proof = Proofer::new(&graph)
            .create_proof(&ProofParameters::new(rounds))
            .unwrap();
        prop_assert!(proof.verify());
    }

    /// Soundness-by-construction smoke test: a graph with a monochrome edge
    /// fails verification with overwhelming probability once R is large.
    #[test]
    fn soundness_smoke(n in 3usize..12) {
        let mut g = ColoringGraph::new(palette_bytes());
        for _ in 0..n {
            g.add_node(ColorValue::new(b"red".to_vec()));
        }
        for i in 0..(n as u16 - 1) {
            g.add_edge(i, i + 1).unwrap();
        }
        prop_assume!(!g.is_coloring_valid());

        let proof = Proofer::new(&g).create_proof(&ProofParameters::new(40)).unwrap();
        prop_assert!(!proof.verify());
    }

    /// Graph codec round-trip: encode/decode recovers node and edge order
    /// and values exactly.
    #[test]
    fn graph_codec_round_trip(values in prop::collection::vec(any::<u16>(), 0..64), extra_edges in 0usize..16) {
        let mut graph: Graph<IntValue> = Graph::new();
        for v in &values {
            graph.add_node(IntValue(*v));
        }
        if !values.is_empty() {
            for i in 0..extra_edges {
                let from = (i % values.len()) as u16;
                let to = ((i * 7 + 1) % values.len()) as u16;
                graph.add_edge(from, to).unwrap();
            }
        }

        let encoded = graph.encode();
        let decoded = Graph::<IntValue>::decode(&encoded).unwrap();
        prop_assert_eq!(decoded.nodes(), graph.nodes());
        prop_assert_eq!(decoded.edges(), graph.edges());
    }

    /// Color permutation preserves validity: shuffling a valid coloring's
    /// colors under the declared palette never introduces a monochrome edge.
    #[test]
    fn shuffle_preserves_validity(n in 2usize..16, k in 2usize..5) {
        let mut graph = valid_path_coloring(n, k);
        prop_assume!(graph.is_coloring_valid());
        graph.shuffle_colors();
        prop_assert!(graph.is_coloring_valid());
    }

    /// Commitment hiding (structural): two independent commitment rounds
    /// over the same coloring produce different committed node-value sets
    /// with overwhelming probability, since nonces are drawn fresh each time.
    #[test]
    fn commitment_hiding_structural(n in 3usize..10, k in 2usize..4) {
        let graph = valid_path_coloring(n, k);
        prop_assume!(!graph.edges().is_empty());

        let round_a = CommitmentGraph::new(&graph, 14);
        let round_b = CommitmentGraph::new(&graph, 14);

        let values_a: Vec<_> = round_a.nodes().iter().map(|node| node.value.0.clone()).collect();
        let values_b: Vec<_> = round_b.nodes().iter().map(|node| node.value.0.clone()).collect();
        prop_assert_ne!(values_a, values_b);
    }

    /// Challenge binding: flipping any byte of the first round's commitment
    /// payload causes verification to fail.
    #[test]
    fn challenge_binding_under_bitflip(n in 3usize..10, k in 2usize..4, byte_idx in 0usize..32) {
        let graph = valid_path_coloring(n, k);
        prop_assume!(!graph.edges().is_empty());

        let proof = Proofer::new(&graph).create_proof(&ProofParameters::new(3)).unwrap();
        prop_assume!(proof.commitments()[0].len() > byte_idx);

        let mut value = serde_json::to_value(&proof).unwrap();
        let commitments = value.get_mut("commitments").unwrap().as_array_mut().unwrap();
        let first = commitments[0].as_array_mut().unwrap();
        let byte = first[byte_idx].as_u64().unwrap() as u8;
        first[byte_idx] = serde_json::Value::from(byte ^ 0xFF);

        let tampered: zkp_c_coloring::Proof = serde_json::from_value(value).unwrap();
        prop_assert!(!tampered.verify());
    }
}
