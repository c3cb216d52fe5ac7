//! Correspondence-node enumeration for both construction passes.

use std::collections::HashSet;

use itertools::iproduct;
use mcs_common::{Atom, AtomIdx, LabelTable, MolecularGraph};
use tracing::{debug, trace};

use crate::node::{FallbackNode, NodeId, PrimaryNode};
use crate::signature::label_atoms;
use crate::{CompatError, SignatureOverflow};

/// Primary pass: every (source, target) atom pair with equal signatures.
///
/// Source atoms are scanned in the outer loop, target atoms in the inner
/// loop; ids follow that order.
pub(crate) fn primary_nodes<S, T>(
    source: &S,
    target: &T,
    overflow: SignatureOverflow,
) -> Result<Vec<PrimaryNode>, CompatError>
where
    S: MolecularGraph,
    T: MolecularGraph,
{
    let source_labels = label_atoms(source, overflow)?;
    let target_labels = label_atoms(target, overflow)?;

    let nodes: Vec<PrimaryNode> = iproduct!(
        source_labels.iter().enumerate(),
        target_labels.iter().enumerate()
    )
    .filter(|((_, s_label), (_, t_label))| s_label.is_equivalent(t_label))
    .enumerate()
    .map(|(position, ((s, _), (t, _)))| PrimaryNode {
        source: AtomIdx::from(s),
        target: AtomIdx::from(t),
        id: NodeId::from_position(position),
    })
    .collect();

    debug!(
        "primary pass: {} nodes from {} x {} atoms",
        nodes.len(),
        source_labels.len(),
        target_labels.len()
    );
    Ok(nodes)
}

/// Fallback pass: every (source, target) atom pair that matches directly.
///
/// A query source atom matches through its matcher and is labelled with the
/// target symbol; any other source atom matches on case-insensitive symbol
/// equality and is labelled with its own symbol.
pub(crate) fn fallback_nodes<S, T>(
    source: &S,
    target: &T,
    labels: &LabelTable,
) -> Result<Vec<FallbackNode>, CompatError>
where
    S: MolecularGraph,
    T: MolecularGraph,
{
    let mut seen: HashSet<(AtomIdx, AtomIdx)> = HashSet::new();
    let mut nodes: Vec<FallbackNode> = Vec::new();

    for (s, t) in iproduct!(source.atoms(), target.atoms()) {
        let s_atom = source.atom(s)?;
        let t_atom = target.atom(t)?;

        let Some(symbol) = matched_symbol(s_atom, t_atom) else {
            continue;
        };
        if !seen.insert((s, t)) {
            trace!("pair ({}, {}) already enumerated", s, t);
            continue;
        }

        nodes.push(FallbackNode {
            source: s,
            target: t,
            label: labels.label_id(symbol),
            id: NodeId::from_position(nodes.len()),
        });
    }

    debug!(
        "fallback pass: {} nodes from {} x {} atoms",
        nodes.len(),
        source.atom_count(),
        target.atom_count()
    );
    Ok(nodes)
}

/// The symbol to intern for a matching pair, or `None` if the pair does not match.
fn matched_symbol<'a>(s_atom: &'a Atom, t_atom: &'a Atom) -> Option<&'a str> {
    match s_atom {
        Atom::Query(query) => query.matches(t_atom).then_some(t_atom.symbol()),
        Atom::Concrete(atom) => atom
            .symbol()
            .eq_ignore_ascii_case(t_atom.symbol())
            .then_some(atom.symbol()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::ids_are_dense;
    use mcs_common::test_cases::{
        any_oxygen_query, carbon_oxygen, ethanol, halo_carbon_query, nitroxyl, oxygen_carbon,
        sodium_chloride,
    };
    use mcs_common::{MolGraph, SymbolSet};

    fn pairs<N: crate::node::Correspondence>(nodes: &[N]) -> Vec<(u32, u32)> {
        nodes
            .iter()
            .map(|n| (n.source().get(), n.target().get()))
            .collect()
    }

    #[test]
    fn test_primary_pairs_label_equivalent_atoms() {
        let nodes = primary_nodes(&carbon_oxygen(), &oxygen_carbon(), SignatureOverflow::Reject)
            .unwrap();
        assert_eq!(pairs(&nodes), vec![(0, 1), (1, 0)]);
        assert!(ids_are_dense(&nodes));
    }

    #[test]
    fn test_primary_uses_neighbourhood() {
        // terminal carbon (one C neighbour) never pairs with the central one
        let nodes = primary_nodes(&ethanol(), &ethanol(), SignatureOverflow::Reject).unwrap();
        assert_eq!(pairs(&nodes), vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_fallback_ignores_neighbourhood() {
        let labels = LabelTable::new();
        let nodes = fallback_nodes(&ethanol(), &ethanol(), &labels).unwrap();
        assert_eq!(
            pairs(&nodes),
            vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 2)]
        );
        assert!(ids_are_dense(&nodes));
        assert_eq!(labels.get("C"), Some(1));
        assert!(nodes.iter().all(|n| n.label == labels.get(if n.source.get() == 2 { "O" } else { "C" }).unwrap()));
    }

    #[test]
    fn test_fallback_symbol_match_ignores_case() {
        let lower = MolGraph::builder().atom("cl").build().unwrap();
        let upper = MolGraph::builder().atom("Cl").build().unwrap();
        let labels = LabelTable::new();
        let nodes = fallback_nodes(&lower, &upper, &labels).unwrap();
        assert_eq!(nodes.len(), 1);
        // labelled with the source symbol
        assert_eq!(labels.get("cl"), Some(nodes[0].label));
    }

    #[test]
    fn test_fallback_query_atoms_use_target_symbol() {
        let labels = LabelTable::new();
        let nodes = fallback_nodes(&any_oxygen_query(), &nitroxyl(), &labels).unwrap();
        assert_eq!(pairs(&nodes), vec![(0, 0), (0, 1), (1, 1)]);
        assert_eq!(labels.get("N"), Some(nodes[0].label));
        assert_eq!(labels.get("O"), Some(nodes[1].label));
        assert_eq!(nodes[1].label, nodes[2].label);
        assert_eq!(labels.get("*"), None);
    }

    #[test]
    fn test_fallback_query_atom_without_match_is_skipped() {
        // a query atom never falls back to symbol equality
        let query = MolGraph::builder()
            .query_atom("C", SymbolSet::new(["N"]))
            .build()
            .unwrap();
        let carbon = MolGraph::builder().atom("C").build().unwrap();
        let nodes = fallback_nodes(&query, &carbon, &LabelTable::new()).unwrap();
        assert!(nodes.is_empty());

        let nodes = fallback_nodes(&halo_carbon_query(), &carbon, &LabelTable::new()).unwrap();
        assert_eq!(pairs(&nodes), vec![(1, 0)]);
    }

    #[test]
    fn test_no_shared_symbols() {
        let labels = LabelTable::new();
        assert!(fallback_nodes(&sodium_chloride(), &carbon_oxygen(), &labels).unwrap().is_empty());
        assert!(primary_nodes(&sodium_chloride(), &carbon_oxygen(), SignatureOverflow::Reject).unwrap().is_empty());
        assert!(labels.is_empty());
    }
}
