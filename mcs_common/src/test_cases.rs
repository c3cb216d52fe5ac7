//! Shared molecule fixtures and expected correspondence-graph shapes.
//!
//! Fixtures are plain constructor functions so that test cases can live in a
//! `static` table and still hand out fresh graphs.

use crate::{AnyAtom, BondOrder, MolGraph, SymbolSet};

/// Builds a fixture molecule.
pub type Fixture = fn() -> MolGraph;

/// A source/target pair with the expected construction outcome.
#[derive(Debug, Clone, Copy)]
pub struct CompatTestCase {
    /// The name of the test case.
    pub name: &'static str,
    pub source: Fixture,
    pub target: Fixture,
    /// Bond-order sensitivity.
    pub match_bonds: bool,
    /// Ring-membership sensitivity.
    pub match_rings: bool,
    /// Whether the result comes from the fallback pass.
    pub expect_fallback: bool,
    pub expected_nodes: usize,
    pub expected_c_edges: usize,
    pub expected_d_edges: usize,
}

// #####################
// MOLECULES
// #####################

fn build(builder: crate::MolGraphBuilder, name: &str) -> MolGraph {
    builder
        .build()
        .unwrap_or_else(|e| panic!("fixture {name} is malformed: {e}"))
}

/// C–O
pub fn carbon_oxygen() -> MolGraph {
    build(MolGraph::builder().atoms(["C", "O"]).bond(0, 1), "carbon_oxygen")
}

/// O–C, the same bond enumerated the other way round.
pub fn oxygen_carbon() -> MolGraph {
    build(MolGraph::builder().atoms(["O", "C"]).bond(0, 1), "oxygen_carbon")
}

/// A single isolated nitrogen.
pub fn lone_nitrogen() -> MolGraph {
    build(MolGraph::builder().atom("N"), "lone_nitrogen")
}

/// Na–Cl, sharing no element with the organic fixtures.
pub fn sodium_chloride() -> MolGraph {
    build(MolGraph::builder().atoms(["Na", "Cl"]).bond(0, 1), "sodium_chloride")
}

/// C–C–O
pub fn ethanol() -> MolGraph {
    build(
        MolGraph::builder().atoms(["C", "C", "O"]).bond(0, 1).bond(1, 2),
        "ethanol",
    )
}

/// C–C=O
pub fn acetaldehyde() -> MolGraph {
    build(
        MolGraph::builder()
            .atoms(["C", "C", "O"])
            .bond(0, 1)
            .bond_of(1, 2, BondOrder::Double),
        "acetaldehyde",
    )
}

/// Aromatic six-ring of carbons.
pub fn benzene() -> MolGraph {
    build(
        MolGraph::builder()
            .atoms(["C"; 6])
            .aromatic_ring(&[0, 1, 2, 3, 4, 5]),
        "benzene",
    )
}

/// Saturated six-ring of carbons.
pub fn cyclohexane() -> MolGraph {
    build(
        MolGraph::builder()
            .atoms(["C"; 6])
            .ring(&[0, 1, 2, 3, 4, 5]),
        "cyclohexane",
    )
}

/// Six carbons in a chain.
pub fn hexane() -> MolGraph {
    build(
        MolGraph::builder()
            .atoms(["C"; 6])
            .bond(0, 1)
            .bond(1, 2)
            .bond(2, 3)
            .bond(3, 4)
            .bond(4, 5),
        "hexane",
    )
}

/// Wildcard atom joined to oxygen by a wildcard bond: `*~O`.
pub fn any_oxygen_query() -> MolGraph {
    build(
        MolGraph::builder()
            .query_atom("*", AnyAtom)
            .atom("O")
            .any_bond(0, 1),
        "any_oxygen_query",
    )
}

/// Halogen query atom bonded to carbon: `[F,Cl,Br,I]-C`.
pub fn halo_carbon_query() -> MolGraph {
    build(
        MolGraph::builder()
            .query_atom("X", SymbolSet::new(["F", "Cl", "Br", "I"]))
            .atom("C")
            .any_bond(0, 1),
        "halo_carbon_query",
    )
}

/// N–O
pub fn nitroxyl() -> MolGraph {
    build(MolGraph::builder().atoms(["N", "O"]).bond(0, 1), "nitroxyl")
}

/// Cl–C–C
pub fn chloroethane() -> MolGraph {
    build(
        MolGraph::builder().atoms(["Cl", "C", "C"]).bond(0, 1).bond(1, 2),
        "chloroethane",
    )
}

// #####################
// TEST CASES
// #####################

pub const COMPAT_TEST_CASES: &[CompatTestCase] = &[
    CompatTestCase {
        name: "co_vs_oc",
        source: carbon_oxygen,
        target: oxygen_carbon,
        match_bonds: false,
        match_rings: false,
        expect_fallback: false,
        expected_nodes: 2,
        expected_c_edges: 1,
        expected_d_edges: 0,
    },
    CompatTestCase {
        name: "lone_nitrogen_self",
        source: lone_nitrogen,
        target: lone_nitrogen,
        match_bonds: false,
        match_rings: false,
        expect_fallback: true,
        expected_nodes: 1,
        expected_c_edges: 0,
        expected_d_edges: 0,
    },
    CompatTestCase {
        name: "no_common_element",
        source: sodium_chloride,
        target: carbon_oxygen,
        match_bonds: false,
        match_rings: false,
        expect_fallback: true,
        expected_nodes: 0,
        expected_c_edges: 0,
        expected_d_edges: 0,
    },
    CompatTestCase {
        name: "ethanol_self",
        source: ethanol,
        target: ethanol,
        match_bonds: false,
        match_rings: false,
        expect_fallback: false,
        expected_nodes: 3,
        expected_c_edges: 2,
        expected_d_edges: 1,
    },
    CompatTestCase {
        name: "ethanol_acetaldehyde_bond_insensitive",
        source: ethanol,
        target: acetaldehyde,
        match_bonds: false,
        match_rings: false,
        expect_fallback: false,
        expected_nodes: 3,
        expected_c_edges: 2,
        expected_d_edges: 1,
    },
    CompatTestCase {
        // C–O single vs C=O double is rejected and kept as a d-edge
        name: "ethanol_acetaldehyde_bond_sensitive",
        source: ethanol,
        target: acetaldehyde,
        match_bonds: true,
        match_rings: false,
        expect_fallback: false,
        expected_nodes: 3,
        expected_c_edges: 1,
        expected_d_edges: 2,
    },
    CompatTestCase {
        name: "benzene_cyclohexane_bond_insensitive",
        source: benzene,
        target: cyclohexane,
        match_bonds: false,
        match_rings: false,
        expect_fallback: false,
        expected_nodes: 36,
        expected_c_edges: 72,
        expected_d_edges: 162,
    },
    CompatTestCase {
        // aromatic vs single rejects every bond pair; fallback keeps only
        // the both-absent pairs
        name: "benzene_cyclohexane_bond_sensitive",
        source: benzene,
        target: cyclohexane,
        match_bonds: true,
        match_rings: false,
        expect_fallback: true,
        expected_nodes: 36,
        expected_c_edges: 0,
        expected_d_edges: 162,
    },
    CompatTestCase {
        name: "cyclohexane_hexane_ring_insensitive",
        source: cyclohexane,
        target: hexane,
        match_bonds: false,
        match_rings: false,
        expect_fallback: false,
        expected_nodes: 24,
        expected_c_edges: 36,
        expected_d_edges: 54,
    },
    CompatTestCase {
        name: "cyclohexane_hexane_ring_sensitive",
        source: cyclohexane,
        target: hexane,
        match_bonds: false,
        match_rings: true,
        expect_fallback: true,
        expected_nodes: 36,
        expected_c_edges: 0,
        expected_d_edges: 180,
    },
    CompatTestCase {
        name: "wildcard_query_vs_nitroxyl",
        source: any_oxygen_query,
        target: nitroxyl,
        match_bonds: false,
        match_rings: false,
        expect_fallback: true,
        expected_nodes: 3,
        expected_c_edges: 1,
        expected_d_edges: 0,
    },
    CompatTestCase {
        name: "halogen_query_vs_chloroethane",
        source: halo_carbon_query,
        target: chloroethane,
        match_bonds: false,
        match_rings: false,
        expect_fallback: true,
        expected_nodes: 3,
        expected_c_edges: 1,
        expected_d_edges: 0,
    },
];

/// Looks a case up by name.
pub fn compat_case(name: &str) -> Option<&'static CompatTestCase> {
    COMPAT_TEST_CASES.iter().find(|case| case.name == name)
}
