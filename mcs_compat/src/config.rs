//! Configuration for correspondence-graph construction.
//!
//! The two policy flags mirror the usual MCS options:
//! - match_bonds: bond orders must agree (aromatic bonds agree with each other).
//! - match_rings: ring bonds only pair with ring bonds.
//!
//! Quick examples
//!
//! Topology only (default):
//! ```ignore
//! use mcs_compat::Config;
//! let cfg = Config::bond_insensitive();
//! ```
//!
//! Bond- and ring-sensitive, truncating over-wide signatures:
//! ```ignore
//! use mcs_compat::{Config, SignatureOverflow};
//! let cfg = Config::new(true, true).with_overflow(SignatureOverflow::Truncate);
//! ```

/// Construction configuration.
///
/// - match_bonds:
///     - true  => two bonds are compatible only if their orders are equal and
///       they agree on aromaticity, or both are aromatic.
///     - false => any pair of bonds is compatible.
/// - match_rings:
///     - true  => two bonds are compatible only if both or neither lie in a ring.
///     - false => ring membership is ignored.
/// - overflow: what to do with atoms whose degree exceeds the signature width.
/// - parallel: shard edge classification over worker threads. Only has an
///   effect when the crate is built with the `rayon` feature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Bond-order sensitivity.
    pub match_bonds: bool,
    /// Ring-membership sensitivity.
    pub match_rings: bool,
    /// Boundary decision for atoms with more neighbours than signature slots.
    pub overflow: SignatureOverflow,
    /// Classify edges on the rayon pool.
    pub parallel: bool,
}

impl Config {
    /// Create a new configuration with the given policy flags.
    pub const fn new(match_bonds: bool, match_rings: bool) -> Self {
        Self {
            match_bonds,
            match_rings,
            overflow: SignatureOverflow::Reject,
            parallel: false,
        }
    }

    /// Convenience: topology only.
    pub const fn bond_insensitive() -> Self {
        Self::new(false, false)
    }

    /// Convenience: bond orders must agree.
    pub const fn bond_sensitive() -> Self {
        Self::new(true, false)
    }

    /// Convenience: bond orders and ring membership must agree.
    pub const fn ring_sensitive() -> Self {
        Self::new(true, true)
    }

    #[must_use]
    pub const fn with_overflow(mut self, overflow: SignatureOverflow) -> Self {
        self.overflow = overflow;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for Config {
    /// Topology only, rejecting over-wide signatures, sequential.
    fn default() -> Self {
        Self::bond_insensitive()
    }
}

/// What the vertex labeler does with an atom that has more neighbours than
/// the signature has neighbour slots.
///
/// - Reject:
///     Fail the construction with `CompatError::DegreeOverflow`.
/// - Truncate:
///     Keep the lexicographically smallest neighbour symbols. Two atoms that
///     differ only in the dropped neighbours become label-equivalent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SignatureOverflow {
    /// Refuse atoms whose degree exceeds the neighbour slots.
    #[default]
    Reject,
    /// Drop the largest neighbour symbols.
    Truncate,
}
