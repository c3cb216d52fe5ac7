use contracts::*;
use std::fmt;
use std::hash::Hash;

/// Position of an atom inside a molecular graph.
///
/// Indices are dense and zero based, `0..atom_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomIdx {
    /// The underlying raw integer index.
    inner: u32,
}

impl AtomIdx {
    /// Creates an atom index from a raw integer.
    #[ensures(ret.inner == id)]
    pub fn new(id: u32) -> Self {
        Self { inner: id }
    }

    /// Returns the index as a usize for array access.
    #[ensures(ret == self.inner as usize)]
    pub fn as_usize(self) -> usize {
        self.inner as usize
    }

    /// Returns the raw integer index.
    pub const fn get(self) -> u32 {
        self.inner
    }
}

impl fmt::Display for AtomIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a{}", self.inner)
    }
}

impl From<usize> for AtomIdx {
    #[inline]
    fn from(id: usize) -> Self {
        Self { inner: id as u32 }
    }
}

impl From<u32> for AtomIdx {
    #[inline]
    fn from(id: u32) -> Self {
        Self { inner: id }
    }
}

impl From<AtomIdx> for usize {
    #[inline]
    fn from(id: AtomIdx) -> Self {
        id.inner as Self
    }
}

impl From<AtomIdx> for u32 {
    #[inline]
    fn from(id: AtomIdx) -> Self {
        id.inner
    }
}
