//! Node value types.
//!
//! [`NodeValue`] is a two-operation capability set: a value knows how to
//! turn itself into bytes and how to rebuild itself from bytes.
//! [`IntValue`] and [`ColorValue`] are the two concrete instances defined
//! here; [`crate::graph::core::Graph`] itself stays generic over the trait.

use crate::error::GraphError;

/// A value attached to a graph node, serializable to and from bytes.
pub trait NodeValue: Clone {
    fn encode(&self) -> Vec<u8>;
    fn decode(bytes: &[u8]) -> Result<Self, GraphError>
    where
        Self: Sized;
}

/// A plain 16-bit unsigned integer node value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntValue(pub u16);

impl NodeValue for IntValue {
    fn encode(&self) -> Vec<u8> {
        self.0.to_be_bytes().to_vec()
    }

    fn decode(bytes: &[u8]) -> Result<Self, GraphError> {
        let arr: [u8; 2] = bytes
            .try_into()
            .map_err(|_| GraphError::ValueDecodeFailed("IntValue requires 2 bytes".into()))?;
        Ok(IntValue(u16::from_be_bytes(arr)))
    }
}

/// A color, represented as an opaque byte string (ASCII in practice, but the
/// codec treats it as arbitrary bytes up to 65535 long).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorValue(pub Vec<u8>);

impl ColorValue {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        ColorValue(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl NodeValue for ColorValue {
    fn encode(&self) -> Vec<u8> {
        self.0.clone()
    }

    fn decode(bytes: &[u8]) -> Result<Self, GraphError> {
        Ok(ColorValue(bytes.to_vec()))
    }
}

/// The committed value stored at a node of a [`crate::commitment::CommitmentGraph`]:
/// the hex-rendered SHA-1 digest of that node's opening.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitValue(pub String);

impl NodeValue for CommitValue {
    fn encode(&self) -> Vec<u8> {
        self.0.as_bytes().to_vec()
    }

    fn decode(bytes: &[u8]) -> Result<Self, GraphError> {
        let text = String::from_utf8(bytes.to_vec())
            .map_err(|err| GraphError::ValueDecodeFailed(err.to_string()))?;
        Ok(CommitValue(text))
    }
}
