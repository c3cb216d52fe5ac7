//! Error types for correspondence-graph construction.
//!
//! Construction is a pure computation, so every error is a contract
//! violation: a graph that hands out indices it does not own, or an atom the
//! signature cannot describe under the configured overflow policy.

use mcs_common::{AtomIdx, GraphError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompatError {
    /// The input graph rejected an index lookup.
    #[error("invalid graph access: {0}")]
    Graph(#[from] GraphError),

    /// An atom has more neighbours than the signature can hold.
    #[error("atom {atom} has {degree} neighbours, signature holds at most {width}")]
    DegreeOverflow {
        atom: AtomIdx,
        degree: usize,
        width: usize,
    },
}

impl CompatError {
    /// Create a degree overflow error.
    pub const fn degree_overflow(atom: AtomIdx, degree: usize, width: usize) -> Self {
        Self::DegreeOverflow {
            atom,
            degree,
            width,
        }
    }
}
