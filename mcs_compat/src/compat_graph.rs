//! The correspondence graph handed to the clique search.

use contracts::*;
use mcs_common::AtomIdx;

use crate::classify::EdgeSets;
use crate::node::{CompatEdge, Correspondence, FallbackNode, NodeId, PrimaryNode, ids_are_dense};

/// Which construction pass produced a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pass {
    Primary,
    Fallback,
}

/// The node list in the form of the pass that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorrespondenceNodes {
    Primary(Vec<PrimaryNode>),
    Fallback(Vec<FallbackNode>),
}

/// Sizes of a discarded primary pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub nodes: usize,
    pub c_edges: usize,
    pub d_edges: usize,
}

/// Candidate atom pairings plus their compatibility edges.
///
/// Owns its buffers; nothing refers back to the input molecules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompatibilityGraph {
    nodes: CorrespondenceNodes,
    c_edges: Vec<CompatEdge>,
    d_edges: Vec<CompatEdge>,
    primary_summary: Option<PassSummary>,
}

impl CompatibilityGraph {
    #[debug_requires(ids_are_dense(&nodes))]
    pub(crate) fn primary(nodes: Vec<PrimaryNode>, edges: EdgeSets) -> Self {
        Self {
            nodes: CorrespondenceNodes::Primary(nodes),
            c_edges: edges.c_edges,
            d_edges: edges.d_edges,
            primary_summary: None,
        }
    }

    #[debug_requires(ids_are_dense(&nodes))]
    pub(crate) fn fallback(
        nodes: Vec<FallbackNode>,
        edges: EdgeSets,
        primary_summary: PassSummary,
    ) -> Self {
        Self {
            nodes: CorrespondenceNodes::Fallback(nodes),
            c_edges: edges.c_edges,
            d_edges: edges.d_edges,
            primary_summary: Some(primary_summary),
        }
    }

    pub const fn nodes(&self) -> &CorrespondenceNodes {
        &self.nodes
    }

    pub const fn pass(&self) -> Pass {
        match self.nodes {
            CorrespondenceNodes::Primary(_) => Pass::Primary,
            CorrespondenceNodes::Fallback(_) => Pass::Fallback,
        }
    }

    pub const fn used_fallback(&self) -> bool {
        matches!(self.nodes, CorrespondenceNodes::Fallback(_))
    }

    /// Sizes of the primary pass that was discarded, if the fallback ran.
    pub const fn primary_summary(&self) -> Option<PassSummary> {
        self.primary_summary
    }

    pub fn c_edges(&self) -> &[CompatEdge] {
        &self.c_edges
    }

    pub fn d_edges(&self) -> &[CompatEdge] {
        &self.d_edges
    }

    pub fn node_count(&self) -> usize {
        match &self.nodes {
            CorrespondenceNodes::Primary(nodes) => nodes.len(),
            CorrespondenceNodes::Fallback(nodes) => nodes.len(),
        }
    }

    pub fn c_edge_count(&self) -> usize {
        self.c_edges.len()
    }

    pub fn d_edge_count(&self) -> usize {
        self.d_edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// The atom pair behind a node id.
    pub fn pair(&self, id: NodeId) -> Option<(AtomIdx, AtomIdx)> {
        match &self.nodes {
            CorrespondenceNodes::Primary(nodes) => lookup(nodes, id),
            CorrespondenceNodes::Fallback(nodes) => lookup(nodes, id),
        }
    }

    /// `(source, target, id)` for every node, whichever pass ran.
    pub fn node_triples(&self) -> Vec<(AtomIdx, AtomIdx, NodeId)> {
        match &self.nodes {
            CorrespondenceNodes::Primary(nodes) => triples(nodes),
            CorrespondenceNodes::Fallback(nodes) => triples(nodes),
        }
    }

    /// Flat node layout: `s, t, id` triples for the primary pass,
    /// `s, t, label, id` quadruples for the fallback pass.
    pub fn flat_nodes(&self) -> Vec<u32> {
        match &self.nodes {
            CorrespondenceNodes::Primary(nodes) => nodes
                .iter()
                .flat_map(|n| [n.source.get(), n.target.get(), n.id.get()])
                .collect(),
            CorrespondenceNodes::Fallback(nodes) => nodes
                .iter()
                .flat_map(|n| [n.source.get(), n.target.get(), n.label, n.id.get()])
                .collect(),
        }
    }

    /// c-edges as consecutive id pairs.
    pub fn flat_c_edges(&self) -> Vec<u32> {
        flatten(&self.c_edges)
    }

    /// d-edges as consecutive id pairs.
    pub fn flat_d_edges(&self) -> Vec<u32> {
        flatten(&self.d_edges)
    }
}

fn lookup<N: Correspondence>(nodes: &[N], id: NodeId) -> Option<(AtomIdx, AtomIdx)> {
    nodes
        .get(id.position())
        .map(|n| (n.source(), n.target()))
}

fn triples<N: Correspondence>(nodes: &[N]) -> Vec<(AtomIdx, AtomIdx, NodeId)> {
    nodes
        .iter()
        .map(|n| (n.source(), n.target(), n.id()))
        .collect()
}

fn flatten(edges: &[CompatEdge]) -> Vec<u32> {
    edges
        .iter()
        .flat_map(|e| [e.first.get(), e.second.get()])
        .collect()
}
