//! Error types for molecular graph access and construction.

use thiserror::Error;

use crate::AtomIdx;

/// Errors raised by the molecular graph model.
///
/// Every variant is a contract violation by the caller: an index that does
/// not name an atom, or a bond that cannot exist in a simple graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An atom index outside `0..atom_count`.
    #[error("atom index {index} out of range for graph with {atom_count} atoms")]
    AtomOutOfRange { index: AtomIdx, atom_count: usize },

    /// A bond whose two endpoints are the same atom.
    #[error("bond from atom {atom} to itself")]
    SelfBond { atom: AtomIdx },

    /// A second bond between an already bonded pair of atoms.
    #[error("duplicate bond between atoms {begin} and {end}")]
    DuplicateBond { begin: AtomIdx, end: AtomIdx },
}

impl GraphError {
    /// Create an out-of-range error.
    pub fn out_of_range(index: impl Into<AtomIdx>, atom_count: usize) -> Self {
        Self::AtomOutOfRange {
            index: index.into(),
            atom_count,
        }
    }
}
