//! c-edge / d-edge classification over a correspondence-node list.
//!
//! Every unordered pair of nodes that maps two distinct source atoms onto two
//! distinct target atoms is looked at once. The pair's relation depends on
//! whether the source atoms are bonded and whether the target atoms are
//! bonded:
//!
//! | source bond | target bond | feasible | Primary | Fallback |
//! |-------------|-------------|----------|---------|----------|
//! | yes         | yes         | yes      | c-edge  | c-edge   |
//! | yes         | yes         | no       | d-edge  | -        |
//! | no          | no          |          | d-edge  | d-edge   |
//! | one side    |             |          | -       | -        |

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use mcs_common::MolecularGraph;
use tracing::{debug, trace};

use crate::feasibility::is_match_feasible;
use crate::node::{CompatEdge, Correspondence};
use crate::{CompatError, Config};

/// Which pass the classifier runs for. The passes differ only in how a
/// bonded pair rejected by the feasibility check is recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassifierMode {
    /// Rejected bonded pairs become d-edges.
    Primary,
    /// Rejected bonded pairs are dropped.
    Fallback,
}

impl ClassifierMode {
    pub const fn records_rejected_as_d_edge(self) -> bool {
        matches!(self, Self::Primary)
    }
}

/// c-edges and d-edges produced by one classification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeSets {
    pub c_edges: Vec<CompatEdge>,
    pub d_edges: Vec<CompatEdge>,
}

impl EdgeSets {
    /// Concatenates per-row buffers in row order.
    fn merge(rows: Vec<Self>) -> Self {
        let mut merged = Self::default();
        for row in rows {
            merged.c_edges.extend(row.c_edges);
            merged.d_edges.extend(row.d_edges);
        }
        merged
    }
}

struct Classifier<'a, S, T, N> {
    source: &'a S,
    target: &'a T,
    nodes: &'a [N],
    config: &'a Config,
    mode: ClassifierMode,
}

impl<S, T, N> Classifier<'_, S, T, N>
where
    S: MolecularGraph,
    T: MolecularGraph,
    N: Correspondence,
{
    /// All pairs `(a, b)` with `b > a` for one outer position `a`.
    fn classify_row(&self, a: usize) -> Result<EdgeSets, CompatError> {
        let first = self.nodes[a];
        let mut row = EdgeSets::default();

        for second in &self.nodes[a + 1..] {
            if first.source() == second.source() || first.target() == second.target() {
                continue;
            }

            let edge = CompatEdge::new(first.id(), second.id());
            let source_bond = self.source.bond_between(first.source(), second.source())?;
            let target_bond = self.target.bond_between(first.target(), second.target())?;

            match (source_bond, target_bond) {
                (Some(s_bond), Some(t_bond)) => {
                    if is_match_feasible(self.source, s_bond, self.target, t_bond, self.config)? {
                        row.c_edges.push(edge);
                    } else if self.mode.records_rejected_as_d_edge() {
                        row.d_edges.push(edge);
                    } else {
                        trace!("dropping infeasible pair {} {}", edge.first, edge.second);
                    }
                }
                (None, None) => row.d_edges.push(edge),
                _ => {}
            }
        }
        Ok(row)
    }

    fn classify(&self) -> Result<EdgeSets, CompatError> {
        #[cfg(feature = "rayon")]
        if self.config.parallel {
            let rows = (0..self.nodes.len())
                .into_par_iter()
                .map(|a| self.classify_row(a))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(EdgeSets::merge(rows));
        }

        let rows = (0..self.nodes.len())
            .map(|a| self.classify_row(a))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(EdgeSets::merge(rows))
    }
}

/// Classifies every node pair of `nodes` into c-edges and d-edges.
///
/// With `config.parallel` and the `rayon` feature the outer loop is sharded
/// across the rayon pool; rows are merged in ascending order so the output
/// is identical to the sequential run.
pub(crate) fn classify_edges<S, T, N>(
    source: &S,
    target: &T,
    nodes: &[N],
    config: &Config,
    mode: ClassifierMode,
) -> Result<EdgeSets, CompatError>
where
    S: MolecularGraph,
    T: MolecularGraph,
    N: Correspondence,
{
    let classifier = Classifier {
        source,
        target,
        nodes,
        config,
        mode,
    };
    let edges = classifier.classify()?;

    debug!(
        "{:?} classification: {} nodes, {} c-edges, {} d-edges",
        mode,
        nodes.len(),
        edges.c_edges.len(),
        edges.d_edges.len()
    );
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::{fallback_nodes, primary_nodes};
    use crate::node::NodeId;
    use crate::SignatureOverflow;
    use mcs_common::LabelTable;
    use mcs_common::test_cases::{acetaldehyde, carbon_oxygen, ethanol, oxygen_carbon};

    fn edge(p: usize, q: usize) -> CompatEdge {
        CompatEdge::new(NodeId::from_position(p - 1), NodeId::from_position(q - 1))
    }

    #[test]
    fn test_single_bond_pair_is_one_c_edge() {
        let (s, t) = (carbon_oxygen(), oxygen_carbon());
        let nodes = primary_nodes(&s, &t, SignatureOverflow::Reject).unwrap();
        let edges =
            classify_edges(&s, &t, &nodes, &Config::default(), ClassifierMode::Primary).unwrap();
        assert_eq!(edges.c_edges, vec![edge(1, 2)]);
        assert!(edges.d_edges.is_empty());
    }

    #[test]
    fn test_primary_records_rejection_as_d_edge() {
        let (s, t) = (ethanol(), acetaldehyde());
        let nodes = primary_nodes(&s, &t, SignatureOverflow::Reject).unwrap();
        let edges =
            classify_edges(&s, &t, &nodes, &Config::bond_sensitive(), ClassifierMode::Primary)
                .unwrap();
        assert_eq!(edges.c_edges, vec![edge(1, 2)]);
        // (1, 3): neither side bonded; (2, 3): single vs double rejected
        assert_eq!(edges.d_edges, vec![edge(1, 3), edge(2, 3)]);
    }

    #[test]
    fn test_fallback_drops_rejection() {
        let (s, t) = (ethanol(), acetaldehyde());
        let labels = LabelTable::new();
        let nodes = fallback_nodes(&s, &t, &labels).unwrap();
        // (0,0) (0,1) (1,0) (1,1) (2,2)
        assert_eq!(nodes.len(), 5);
        let edges =
            classify_edges(&s, &t, &nodes, &Config::bond_sensitive(), ClassifierMode::Fallback)
                .unwrap();

        // (0,0)-(1,1) and (1,0)-(0,1) are single/single
        assert_eq!(edges.c_edges, vec![edge(1, 4), edge(2, 3)]);
        // (1,1)-(2,2) single vs double is dropped; only both-unbonded pairs remain
        assert_eq!(edges.d_edges, vec![edge(1, 5)]);
    }

    #[test]
    fn test_edges_never_reuse_an_atom() {
        let (s, t) = (ethanol(), ethanol());
        let labels = LabelTable::new();
        let nodes = fallback_nodes(&s, &t, &labels).unwrap();
        let edges =
            classify_edges(&s, &t, &nodes, &Config::default(), ClassifierMode::Fallback).unwrap();
        for e in edges.c_edges.iter().chain(&edges.d_edges) {
            let (p, q) = (nodes[e.first.position()], nodes[e.second.position()]);
            assert_ne!(p.source, q.source);
            assert_ne!(p.target, q.target);
            assert!(e.first < e.second);
        }
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_parallel_matches_sequential() {
        let (s, t) = (mcs_common::test_cases::benzene(), mcs_common::test_cases::cyclohexane());
        let nodes = primary_nodes(&s, &t, SignatureOverflow::Reject).unwrap();
        let seq = classify_edges(&s, &t, &nodes, &Config::default(), ClassifierMode::Primary)
            .unwrap();
        let par = classify_edges(
            &s,
            &t,
            &nodes,
            &Config::default().with_parallel(true),
            ClassifierMode::Primary,
        )
        .unwrap();
        assert_eq!(seq, par);
    }
}
