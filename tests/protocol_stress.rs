//! Larger, heavier round trips than `protocol_flow.rs` bothers with — off by
//! default, since a full build/test cycle shouldn't pay for them every time.

use zkp_c_coloring::{ColorValue, ColoringGraph, ProofParameters, Proofer};

const PALETTE: [&str; 3] = ["red", "blue", "green"];

fn large_cycle(nodes: u16) -> ColoringGraph {
    assert!(nodes >= 3 && nodes % 3 == 0, "a 3-colorable cycle needs a multiple of 3 nodes");
    let palette = PALETTE.iter().map(|c| c.as_bytes().to_vec());
    let mut g = ColoringGraph::new(palette);
    for i in 0..nodes {
        g.add_node(ColorValue::new(PALETTE[(i % 3) as usize].as_bytes().to_vec()));
    }
    for i in 0..nodes {
        g.add_edge(i, (i + 1) % nodes).unwrap();
    }
    g
}

fn run_round_trip(nodes: u16, rounds: u32) {
    let graph = large_cycle(nodes);
    assert!(graph.is_coloring_valid());

    let proof = Proofer::new(&graph)
        .create_proof(&ProofParameters::new(rounds))
        .expect("large valid coloring still produces a proof");

    assert!(proof.verify(), "large valid instance rejected");
}

#[cfg_attr(
    not(feature = "stress-tests"),
    ignore = "set --features stress-tests to enable large-graph runs"
)]
#[test]
fn protocol_round_trip_accepts_300_node_cycle() {
    run_round_trip(300, 12);
}

#[cfg_attr(
    not(feature = "stress-tests"),
    ignore = "set --features stress-tests to enable large-graph runs"
)]
#[test]
fn protocol_round_trip_accepts_3000_node_cycle() {
    run_round_trip(3000, 20);
}

#[cfg_attr(
    not(feature = "stress-tests"),
    ignore = "set --features stress-tests to enable large-graph runs"
)]
#[test]
fn protocol_round_trip_accepts_many_rounds() {
    run_round_trip(60, 200);
}
