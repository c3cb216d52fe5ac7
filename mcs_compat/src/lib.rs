//! Compatibility-graph construction for maximum common substructure search.
//!
//! Given a source and a target molecule, the builder enumerates candidate
//! atom pairings (correspondence nodes) and links every two pairings that
//! can coexist in a common substructure:
//! - c-edges: both atom pairs are bonded and the bonds are compatible.
//! - d-edges: neither atom pair is bonded.
//!
//! A maximum clique over this graph is a maximum common substructure; the
//! clique search itself lives downstream.
//!
//! Construction runs a primary pass keyed on neighbourhood signatures. If it
//! yields no c-edge, it is discarded and a coarser fallback pass keyed on
//! plain symbol (or query) matches runs once in its place.
//!
//! ```ignore
//! use mcs_common::{LabelTable, test_cases::{ethanol, acetaldehyde}};
//! use mcs_compat::{Config, build_compatibility_graph};
//!
//! let labels = LabelTable::new();
//! let graph = build_compatibility_graph(&ethanol(), &acetaldehyde(), &Config::default(), &labels)?;
//! assert_eq!(graph.c_edge_count(), 2);
//! ```

mod candidates;
mod classify;
mod compat_graph;
mod config;
mod error;
mod feasibility;
mod node;
pub mod signature;

pub use classify::{ClassifierMode, EdgeSets};
pub use compat_graph::{CompatibilityGraph, CorrespondenceNodes, Pass, PassSummary};
pub use config::{Config, SignatureOverflow};
pub use error::CompatError;
pub use feasibility::{bonds_match, is_match_feasible};
pub use node::{CompatEdge, Correspondence, FallbackNode, NodeId, PrimaryNode};

use mcs_common::{LabelTable, MolecularGraph};

use crate::candidates::{fallback_nodes, primary_nodes};
use crate::classify::classify_edges;

/// Builds correspondence graphs between one source and one target molecule.
pub struct CompatibilityBuilder<'s, 't, 'cfg, S, T> {
    source: &'s S,
    target: &'t T,
    config: &'cfg Config,
    labels: &'cfg LabelTable,
}

impl<'s, 't, 'cfg, S, T> CompatibilityBuilder<'s, 't, 'cfg, S, T>
where
    S: MolecularGraph,
    T: MolecularGraph,
{
    /// `labels` is only consulted if the fallback pass runs.
    pub const fn new(
        source: &'s S,
        target: &'t T,
        config: &'cfg Config,
        labels: &'cfg LabelTable,
    ) -> Self {
        Self {
            source,
            target,
            config,
            labels,
        }
    }

    /// Runs the primary pass and, if it produced no c-edge, the fallback pass.
    ///
    /// An empty graph is a valid result: it means no atom of the source can
    /// be paired with an atom of the target.
    pub fn build(&self) -> Result<CompatibilityGraph, CompatError> {
        tracing::info!(
            "building compatibility graph: source atoms: {}, target atoms: {}, bonds: {}, rings: {}",
            self.source.atom_count(),
            self.target.atom_count(),
            self.config.match_bonds,
            self.config.match_rings
        );

        let nodes = primary_nodes(self.source, self.target, self.config.overflow)?;
        let edges = classify_edges(
            self.source,
            self.target,
            &nodes,
            self.config,
            ClassifierMode::Primary,
        )?;

        if !edges.c_edges.is_empty() {
            let graph = CompatibilityGraph::primary(nodes, edges);
            self.log_result(&graph);
            return Ok(graph);
        }

        let summary = PassSummary {
            nodes: nodes.len(),
            c_edges: edges.c_edges.len(),
            d_edges: edges.d_edges.len(),
        };
        tracing::debug!(
            "primary pass produced no c-edges ({} nodes, {} d-edges), running fallback",
            summary.nodes,
            summary.d_edges
        );
        drop(edges);
        drop(nodes);

        let nodes = fallback_nodes(self.source, self.target, self.labels)?;
        let edges = classify_edges(
            self.source,
            self.target,
            &nodes,
            self.config,
            ClassifierMode::Fallback,
        )?;

        let graph = CompatibilityGraph::fallback(nodes, edges, summary);
        self.log_result(&graph);
        Ok(graph)
    }

    fn log_result(&self, graph: &CompatibilityGraph) {
        tracing::info!(
            "compatibility graph complete: {:?} pass, {} nodes, {} c-edges, {} d-edges",
            graph.pass(),
            graph.node_count(),
            graph.c_edge_count(),
            graph.d_edge_count()
        );
    }
}

/// Builds the correspondence graph of `source` against `target`.
///
/// `labels` is the session's label table; it is only written to when the
/// fallback pass runs.
pub fn build_compatibility_graph<S, T>(
    source: &S,
    target: &T,
    config: &Config,
    labels: &LabelTable,
) -> Result<CompatibilityGraph, CompatError>
where
    S: MolecularGraph,
    T: MolecularGraph,
{
    CompatibilityBuilder::new(source, target, config, labels).build()
}
