//! Correspondence nodes and edges.

use contracts::*;
use mcs_common::AtomIdx;
use std::fmt;

/// 1-based id of a correspondence node, dense in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    inner: u32,
}

impl NodeId {
    /// Id of the node stored at `position` (0-based) in its node list.
    #[debug_ensures(ret.inner as usize == position + 1)]
    pub fn from_position(position: usize) -> Self {
        Self {
            inner: position as u32 + 1,
        }
    }

    /// Position of the node in its node list.
    pub const fn position(self) -> usize {
        self.inner as usize - 1
    }

    pub const fn get(self) -> u32 {
        self.inner
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.inner)
    }
}

/// Common view over both node forms.
pub trait Correspondence: Copy + Send + Sync {
    fn source(&self) -> AtomIdx;
    fn target(&self) -> AtomIdx;
    fn id(&self) -> NodeId;
}

/// Node of the primary pass: a label-equivalent atom pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrimaryNode {
    pub source: AtomIdx,
    pub target: AtomIdx,
    pub id: NodeId,
}

impl Correspondence for PrimaryNode {
    fn source(&self) -> AtomIdx {
        self.source
    }

    fn target(&self) -> AtomIdx {
        self.target
    }

    fn id(&self) -> NodeId {
        self.id
    }
}

/// Node of the fallback pass: a symbol- or query-matched atom pair plus the
/// interned label of the matched element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FallbackNode {
    pub source: AtomIdx,
    pub target: AtomIdx,
    pub label: u32,
    pub id: NodeId,
}

impl Correspondence for FallbackNode {
    fn source(&self) -> AtomIdx {
        self.source
    }

    fn target(&self) -> AtomIdx {
        self.target
    }

    fn id(&self) -> NodeId {
        self.id
    }
}

/// An undirected correspondence edge, `first < second`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompatEdge {
    pub first: NodeId,
    pub second: NodeId,
}

impl CompatEdge {
    pub const fn new(first: NodeId, second: NodeId) -> Self {
        Self { first, second }
    }
}

/// True if the ids are exactly `1..=len` in list order.
pub(crate) fn ids_are_dense<N: Correspondence>(nodes: &[N]) -> bool {
    nodes
        .iter()
        .enumerate()
        .all(|(position, node)| node.id() == NodeId::from_position(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_is_one_based() {
        let id = NodeId::from_position(0);
        assert_eq!(id.get(), 1);
        assert_eq!(id.position(), 0);
        assert_eq!(NodeId::from_position(41).to_string(), "#42");
    }

    #[test]
    fn test_dense_ids() {
        let node = |pos: usize| PrimaryNode {
            source: AtomIdx::new(0),
            target: AtomIdx::new(0),
            id: NodeId::from_position(pos),
        };
        assert!(ids_are_dense(&[node(0), node(1), node(2)]));
        assert!(!ids_are_dense(&[node(0), node(2)]));
        assert!(ids_are_dense::<PrimaryNode>(&[]));
    }
}
