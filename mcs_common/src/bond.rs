//! Bonds: concrete bonds with order/aromaticity/ring attributes, and query bonds.

use std::fmt;
use std::sync::Arc;

use crate::AtomIdx;

/// Predicate deciding whether a query bond accepts a candidate bond.
pub trait BondMatcher: fmt::Debug + Send + Sync {
    /// Returns true if `candidate` satisfies this query.
    fn matches(&self, candidate: &Bond) -> bool;
}

/// Formal bond order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
    Quadruple,
    Unset,
}

/// Attributes of a concrete bond.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ConcreteBond {
    pub order: BondOrder,
    pub aromatic: bool,
    /// Set by ring perception when the graph is built.
    pub in_ring: bool,
}

impl ConcreteBond {
    pub const fn new(order: BondOrder) -> Self {
        Self {
            order,
            aromatic: false,
            in_ring: false,
        }
    }

    /// Aromatic bond. Kekulé order is irrelevant for aromatic bonds.
    pub const fn aromatic() -> Self {
        Self {
            order: BondOrder::Single,
            aromatic: true,
            in_ring: false,
        }
    }
}

/// A pattern bond whose matching rule is an injected [`BondMatcher`].
#[derive(Clone, Debug)]
pub struct QueryBond {
    matcher: Arc<dyn BondMatcher>,
}

impl QueryBond {
    pub fn new(matcher: impl BondMatcher + 'static) -> Self {
        Self {
            matcher: Arc::new(matcher),
        }
    }

    pub fn matches(&self, candidate: &Bond) -> bool {
        self.matcher.matches(candidate)
    }
}

#[derive(Clone, Debug)]
pub enum BondKind {
    Concrete(ConcreteBond),
    Query(QueryBond),
}

/// An edge of a molecular graph.
///
/// The endpoint order is the order the bond was added in; matching code that
/// cares about orientation tries both.
#[derive(Clone, Debug)]
pub struct Bond {
    atoms: [AtomIdx; 2],
    kind: BondKind,
}

impl Bond {
    pub const fn new(begin: AtomIdx, end: AtomIdx, kind: BondKind) -> Self {
        Self {
            atoms: [begin, end],
            kind,
        }
    }

    pub const fn begin(&self) -> AtomIdx {
        self.atoms[0]
    }

    pub const fn end(&self) -> AtomIdx {
        self.atoms[1]
    }

    pub const fn atoms(&self) -> [AtomIdx; 2] {
        self.atoms
    }

    pub const fn kind(&self) -> &BondKind {
        &self.kind
    }

    pub const fn as_concrete(&self) -> Option<&ConcreteBond> {
        match &self.kind {
            BondKind::Concrete(bond) => Some(bond),
            BondKind::Query(_) => None,
        }
    }

    pub const fn as_query(&self) -> Option<&QueryBond> {
        match &self.kind {
            BondKind::Query(bond) => Some(bond),
            BondKind::Concrete(_) => None,
        }
    }

    pub const fn is_query(&self) -> bool {
        matches!(self.kind, BondKind::Query(_))
    }

    pub(crate) fn set_in_ring(&mut self, in_ring: bool) {
        if let BondKind::Concrete(bond) = &mut self.kind {
            bond.in_ring = in_ring;
        }
    }
}

/// Accepts every bond.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnyBond;

impl BondMatcher for AnyBond {
    fn matches(&self, _candidate: &Bond) -> bool {
        true
    }
}

/// Accepts concrete bonds whose order is one of a fixed list.
/// `aromatic` additionally admits any aromatic bond.
#[derive(Clone, Debug, Default)]
pub struct OrderSet {
    orders: Vec<BondOrder>,
    aromatic: bool,
}

impl OrderSet {
    pub fn new(orders: impl IntoIterator<Item = BondOrder>) -> Self {
        Self {
            orders: orders.into_iter().collect(),
            aromatic: false,
        }
    }

    #[must_use]
    pub const fn or_aromatic(mut self) -> Self {
        self.aromatic = true;
        self
    }
}

impl BondMatcher for OrderSet {
    fn matches(&self, candidate: &Bond) -> bool {
        candidate.as_concrete().is_some_and(|bond| {
            (self.aromatic && bond.aromatic) || self.orders.contains(&bond.order)
        })
    }
}
