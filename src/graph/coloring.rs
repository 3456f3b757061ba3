//! `ColoringGraph`: a [`Graph`] of [`ColorValue`]s plus the admissible palette.

use crate::error::GraphError;
use crate::graph::core::{Edge, Graph, Node};
use crate::graph::value::ColorValue;
use rand::seq::SliceRandom;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// A graph whose node values are colors, together with the set of colors a
/// valid coloring is allowed to use.
///
/// `palette` is shared by reference across clones — cloning a
/// `ColoringGraph` deep-clones its nodes but shares the palette itself,
/// which is why it lives behind an `Arc` rather than being deep-cloned
/// alongside the nodes.
#[derive(Debug, Clone)]
pub struct ColoringGraph {
    graph: Graph<ColorValue>,
    palette: Arc<BTreeSet<Vec<u8>>>,
}

impl ColoringGraph {
    pub fn new(palette: impl IntoIterator<Item = Vec<u8>>) -> Self {
        ColoringGraph {
            graph: Graph::new(),
            palette: Arc::new(palette.into_iter().collect()),
        }
    }

    pub fn add_node(&mut self, color: ColorValue) -> u16 {
        self.graph.add_node(color)
    }

    pub fn add_edge(&mut self, from: u16, to: u16) -> Result<(), GraphError> {
        self.graph.add_edge(from, to)
    }

    pub fn nodes(&self) -> &[Node<ColorValue>] {
        self.graph.nodes()
    }

    pub fn edges(&self) -> &[Edge] {
        self.graph.edges()
    }

    pub fn palette(&self) -> &BTreeSet<Vec<u8>> {
        &self.palette
    }

    pub fn inner(&self) -> &Graph<ColorValue> {
        &self.graph
    }

    /// True iff every node's color lies in the palette and no edge connects
    /// two same-colored nodes.
    pub fn is_coloring_valid(&self) -> bool {
        for node in self.graph.nodes() {
            if !self.palette.contains(node.value.as_bytes()) {
                return false;
            }
        }

        for edge in self.graph.edges() {
            let Some(from) = self.graph.node(edge.from) else {
                return false;
            };
            let Some(to) = self.graph.node(edge.to) else {
                return false;
            };
            if from.value == to.value {
                return false;
            }
        }

        true
    }

    /// Rewrites every node's color under a uniformly random permutation of
    /// the *declared palette*, not the set of colors actually observed on
    /// nodes.
    ///
    /// Permuting only the observed colors would leak the number of distinct
    /// colors in use and is wrong whenever the palette is larger than that
    /// set. "Endpoints differ" is invariant under any bijection on colors,
    /// so validity survives the shuffle as long as the permutation is a
    /// bijection on the full palette.
    pub fn shuffle_colors(&mut self) {
        let mut rng = rand::rng();
        let domain: Vec<Vec<u8>> = self.palette.iter().cloned().collect();
        let mut image = domain.clone();
        image.shuffle(&mut rng);

        let mapping: HashMap<Vec<u8>, Vec<u8>> = domain.into_iter().zip(image).collect();

        for node in self.graph.nodes_mut() {
            if let Some(mapped) = mapping.get(node.value.as_bytes()) {
                node.value = ColorValue::new(mapped.clone());
            }
        }
    }
}
