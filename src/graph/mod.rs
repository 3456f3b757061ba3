pub mod coloring;
pub mod core;
pub mod value;

pub use coloring::ColoringGraph;
pub use core::{Edge, Graph, Node};
pub use value::{ColorValue, CommitValue, IntValue, NodeValue};
