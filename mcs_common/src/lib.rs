//! Common types shared across the MCS workspace.
//!
//! This crate provides the molecular graph model consumed by the
//! correspondence-graph core, the label interner used by its fallback pass,
//! and molecule fixtures used by the tests of every crate.

mod atom;
mod atom_idx;
mod bond;
mod error;
mod graph;
mod labels;
pub mod test_cases;

pub use crate::atom::*;
pub use crate::atom_idx::*;
pub use crate::bond::*;
pub use crate::error::*;
pub use crate::graph::*;
pub use crate::labels::*;
