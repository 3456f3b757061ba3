//! Generic graph data structure and its canonical binary codec.
//!
//! Wire format, big-endian throughout:
//!
//! ```text
//! Graph  := version:u8 nodes_len:u32 nodes:bytes[nodes_len]
//!           edges_len:u32 edges:bytes[edges_len]
//! Node   := id_size:u16=2 id:u16 value_size:u16 value:bytes[value_size]
//! Edge   := from_size:u16=2 from:u16 to_size:u16=2 to:u16
//! version == 0x01
//! ```
//!
//! This format is not an implementation detail: it also doubles as the
//! commitment payload the challenge derivation is seeded from, so every
//! byte here is load-bearing for soundness.

use crate::error::GraphError;
use crate::graph::value::NodeValue;

const VERSION: u8 = 0x01;
const FIXED_WIDTH: u16 = 2;

/// A graph node: a stable `id` (its insertion index) plus an attached value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub id: u16,
    pub value: T,
}

/// An edge, stored in insertion order. Interpreted as undirected for
/// coloring validity, but `from`/`to` are not swapped on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: u16,
    pub to: u16,
}

/// An ordered sequence of nodes and edges.
///
/// Invariants: `nodes[i].id == i` for all `i`; every edge endpoint is a
/// valid node index; node and edge order survives `encode`/`decode` round
/// trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<T> {
    nodes: Vec<Node<T>>,
    edges: Vec<Edge>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<T> Graph<T> {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Appends a node, returning its freshly assigned id.
    pub fn add_node(&mut self, value: T) -> u16 {
        let id = self.nodes.len() as u16;
        self.nodes.push(Node { id, value });
        id
    }

    /// Appends an edge. Fails if either endpoint is out of range.
    pub fn add_edge(&mut self, from: u16, to: u16) -> Result<(), GraphError> {
        let len = self.nodes.len();
        if from as usize >= len {
            return Err(GraphError::InvalidEndpoint(from, len));
        }
        if to as usize >= len {
            return Err(GraphError::InvalidEndpoint(to, len));
        }
        self.edges.push(Edge { from, to });
        Ok(())
    }

    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: u16) -> Option<&Node<T>> {
        self.nodes.get(id as usize)
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node<T>> {
        self.nodes.iter_mut()
    }
}

impl<T: NodeValue> Graph<T> {
    /// Serializes the node `id_size=2 || id || value_size || value`.
    fn encode_node(node: &Node<T>, out: &mut Vec<u8>) {
        out.extend_from_slice(&FIXED_WIDTH.to_be_bytes());
        out.extend_from_slice(&node.id.to_be_bytes());
        let value = node.value.encode();
        let value_size = value.len() as u16;
        out.extend_from_slice(&value_size.to_be_bytes());
        out.extend_from_slice(&value);
    }

    /// Serializes the edge `from_size=2 || from || to_size=2 || to` (8 bytes).
    fn encode_edge(edge: &Edge, out: &mut Vec<u8>) {
        out.extend_from_slice(&FIXED_WIDTH.to_be_bytes());
        out.extend_from_slice(&edge.from.to_be_bytes());
        out.extend_from_slice(&FIXED_WIDTH.to_be_bytes());
        out.extend_from_slice(&edge.to.to_be_bytes());
    }

    /// Serializes the whole graph into the wire format above.
    pub fn encode(&self) -> Vec<u8> {
        let mut nodes_buf = Vec::new();
        for node in &self.nodes {
            Self::encode_node(node, &mut nodes_buf);
        }

        let mut edges_buf = Vec::new();
        for edge in &self.edges {
            Self::encode_edge(edge, &mut edges_buf);
        }

        let mut out = Vec::with_capacity(1 + 4 + nodes_buf.len() + 4 + edges_buf.len());
        out.push(VERSION);
        out.extend_from_slice(&(nodes_buf.len() as u32).to_be_bytes());
        out.extend_from_slice(&nodes_buf);
        out.extend_from_slice(&(edges_buf.len() as u32).to_be_bytes());
        out.extend_from_slice(&edges_buf);
        out
    }

    fn decode_node(data: &[u8]) -> Result<(Node<T>, usize), GraphError> {
        if data.len() < 8 {
            return Err(GraphError::ShortBuffer);
        }
        let id_size = u16::from_be_bytes([data[0], data[1]]);
        if id_size != FIXED_WIDTH {
            return Err(GraphError::InvalidFraming(id_size));
        }
        let id = u16::from_be_bytes([data[2], data[3]]);
        let value_size = u16::from_be_bytes([data[4], data[5]]) as usize;
        let value_end = 6usize
            .checked_add(value_size)
            .ok_or(GraphError::ShortBuffer)?;
        let value_bytes = data.get(6..value_end).ok_or(GraphError::ShortBuffer)?;
        let value = T::decode(value_bytes).map_err(|err| match err {
            GraphError::ValueDecodeFailed(msg) => GraphError::ValueDecodeFailed(msg),
            other => other,
        })?;
        Ok((Node { id, value }, value_end))
    }

    fn decode_edge(data: &[u8]) -> Result<Edge, GraphError> {
        if data.len() < 8 {
            return Err(GraphError::ShortBuffer);
        }
        let from_size = u16::from_be_bytes([data[0], data[1]]);
        if from_size != FIXED_WIDTH {
            return Err(GraphError::InvalidFraming(from_size));
        }
        let from = u16::from_be_bytes([data[2], data[3]]);
        let to_size = u16::from_be_bytes([data[4], data[5]]);
        if to_size != FIXED_WIDTH {
            return Err(GraphError::InvalidFraming(to_size));
        }
        let to = u16::from_be_bytes([data[6], data[7]]);
        Ok(Edge { from, to })
    }

    /// Decodes a graph, ignoring any bytes left over after the edges
    /// section. Lenient by design: `TrailingBytes` is an optional check,
    /// left to [`Graph::decode_strict`] for callers that want it.
    pub fn decode(data: &[u8]) -> Result<Self, GraphError> {
        Self::decode_inner(data, false)
    }

    /// As [`Graph::decode`], but rejects any trailing bytes after the last
    /// recognized frame.
    pub fn decode_strict(data: &[u8]) -> Result<Self, GraphError> {
        Self::decode_inner(data, true)
    }

    fn decode_inner(data: &[u8], strict: bool) -> Result<Self, GraphError> {
        if data.len() < 9 {
            return Err(GraphError::ShortBuffer);
        }
        if data[0] != VERSION {
            return Err(GraphError::InvalidVersion(data[0]));
        }

        let nodes_size = u32::from_be_bytes([data[1], data[2], data[3], data[4]]) as usize;
        let nodes_end = 5usize
            .checked_add(nodes_size)
            .ok_or(GraphError::ShortBuffer)?;
        let nodes_data = data.get(5..nodes_end).ok_or(GraphError::ShortBuffer)?;

        let mut nodes = Vec::new();
        let mut offset = 0;
        while offset < nodes_data.len() {
            let (node, consumed) = Self::decode_node(&nodes_data[offset..])?;
            nodes.push(node);
            offset += consumed;
        }

        let edges_size_end = nodes_end
            .checked_add(4)
            .ok_or(GraphError::ShortBuffer)?;
        let edges_size_bytes = data
            .get(nodes_end..edges_size_end)
            .ok_or(GraphError::ShortBuffer)?;
        let edges_size = u32::from_be_bytes([
            edges_size_bytes[0],
            edges_size_bytes[1],
            edges_size_bytes[2],
            edges_size_bytes[3],
        ]) as usize;

        let edges_end = edges_size_end
            .checked_add(edges_size)
            .ok_or(GraphError::ShortBuffer)?;
        let edges_data = data.get(edges_size_end..edges_end).ok_or(GraphError::ShortBuffer)?;

        let mut edges = Vec::new();
        let mut offset = 0;
        while offset < edges_data.len() {
            let edge = Self::decode_edge(&edges_data[offset..])?;
            edges.push(edge);
            offset += 8;
        }

        if strict && edges_end != data.len() {
            return Err(GraphError::TrailingBytes(data.len() - edges_end));
        }

        Ok(Graph { nodes, edges })
    }
}
