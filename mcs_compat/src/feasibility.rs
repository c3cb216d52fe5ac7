//! Bond-pair feasibility.

use mcs_common::{Bond, BondKind, ConcreteBond, MolecularGraph};
use tracing::trace;

use crate::{CompatError, Config};

/// Decides whether `source_bond` (from `source`) may correspond to
/// `target_bond` (from `target`).
///
/// A query source bond must accept the target bond, and its endpoints must
/// accept the target endpoints in one of the two orientations. A concrete
/// source bond goes through [`bonds_match`].
pub fn is_match_feasible<S, T>(
    source: &S,
    source_bond: &Bond,
    target: &T,
    target_bond: &Bond,
    config: &Config,
) -> Result<bool, CompatError>
where
    S: MolecularGraph,
    T: MolecularGraph,
{
    let BondKind::Query(query) = source_bond.kind() else {
        return Ok(bonds_match(source_bond, target_bond, config));
    };

    if !query.matches(target_bond) {
        trace!("query bond rejects target bond {:?}", target_bond.atoms());
        return Ok(false);
    }

    let [u1, v1] = source_bond.atoms();
    let (u1, v1) = (source.atom(u1)?, source.atom(v1)?);
    let [u2, v2] = target_bond.atoms();
    let (u2, v2) = (target.atom(u2)?, target.atom(v2)?);

    Ok((u1.matches(u2) && v1.matches(v2)) || (u1.matches(v2) && v1.matches(u2)))
}

/// Default comparator for a concrete source bond.
///
/// A query target bond is asked whether it accepts the source bond; two
/// concrete bonds are compared on the attributes selected by `config`.
pub fn bonds_match(source_bond: &Bond, target_bond: &Bond, config: &Config) -> bool {
    match (source_bond.kind(), target_bond.kind()) {
        (BondKind::Query(query), _) => query.matches(target_bond),
        (BondKind::Concrete(_), BondKind::Query(query)) => query.matches(source_bond),
        (BondKind::Concrete(a), BondKind::Concrete(b)) => concrete_bonds_match(a, b, config),
    }
}

fn concrete_bonds_match(a: &ConcreteBond, b: &ConcreteBond, config: &Config) -> bool {
    if config.match_bonds && !bond_types_match(a, b) {
        return false;
    }
    if config.match_rings && a.in_ring != b.in_ring {
        return false;
    }
    true
}

/// Same order and aromaticity, or both aromatic.
fn bond_types_match(a: &ConcreteBond, b: &ConcreteBond) -> bool {
    (a.aromatic && b.aromatic) || (a.aromatic == b.aromatic && a.order == b.order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcs_common::test_cases::{any_oxygen_query, benzene, cyclohexane, hexane, nitroxyl};
    use mcs_common::{AtomIdx, MolGraph, OrderSet, SymbolSet};

    fn first_bond(g: &MolGraph) -> &Bond {
        &g.bonds()[0]
    }

    #[test]
    fn test_concrete_bonds_follow_flags() {
        let aromatic = benzene();
        let single = cyclohexane();
        let chain = hexane();

        let ab = first_bond(&aromatic);
        let sb = first_bond(&single);
        let cb = first_bond(&chain);

        assert!(bonds_match(ab, sb, &Config::bond_insensitive()));
        assert!(!bonds_match(ab, sb, &Config::bond_sensitive()));
        assert!(bonds_match(ab, first_bond(&benzene()), &Config::ring_sensitive()));

        assert!(bonds_match(sb, cb, &Config::bond_sensitive()));
        assert!(!bonds_match(sb, cb, &Config::new(false, true)));
    }

    #[test]
    fn test_query_bond_either_orientation() {
        let query = any_oxygen_query();
        let forward = nitroxyl();
        let reversed = MolGraph::builder()
            .atoms(["O", "N"])
            .bond(0, 1)
            .build()
            .unwrap();
        let cfg = Config::default();

        assert!(is_match_feasible(&query, first_bond(&query), &forward, first_bond(&forward), &cfg).unwrap());
        assert!(is_match_feasible(&query, first_bond(&query), &reversed, first_bond(&reversed), &cfg).unwrap());
    }

    #[test]
    fn test_query_bond_endpoints_must_match() {
        // [N,S]~O has no orientation matching C–C
        let query = MolGraph::builder()
            .query_atom("Q", SymbolSet::new(["N", "S"]))
            .atom("O")
            .any_bond(0, 1)
            .build()
            .unwrap();
        let ethane = MolGraph::builder().atoms(["C", "C"]).bond(0, 1).build().unwrap();
        let cfg = Config::default();
        assert!(!is_match_feasible(&query, first_bond(&query), &ethane, first_bond(&ethane), &cfg).unwrap());
    }

    #[test]
    fn test_query_bond_matcher_gates_endpoints() {
        let query = MolGraph::builder()
            .atoms(["N", "O"])
            .query_bond(0, 1, OrderSet::new([mcs_common::BondOrder::Double]))
            .build()
            .unwrap();
        let single = nitroxyl();
        let cfg = Config::default();
        assert!(!is_match_feasible(&query, first_bond(&query), &single, first_bond(&single), &cfg).unwrap());
    }

    #[test]
    fn test_concrete_source_against_query_target() {
        let query = any_oxygen_query();
        let concrete = nitroxyl();
        assert!(bonds_match(first_bond(&concrete), first_bond(&query), &Config::ring_sensitive()));
    }

    #[test]
    fn test_query_endpoint_lookup_is_checked() {
        let query = any_oxygen_query();
        let target = nitroxyl();
        let dangling = Bond::new(AtomIdx::new(0), AtomIdx::new(5), first_bond(&target).kind().clone());
        let cfg = Config::default();
        assert!(is_match_feasible(&query, first_bond(&query), &target, &dangling, &cfg).is_err());
    }
}
