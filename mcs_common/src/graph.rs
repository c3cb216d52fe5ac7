//! Read-only molecular graph capability and an in-memory implementation.

use std::collections::{HashMap, VecDeque};

use tracing::trace;

use crate::{
    AnyBond, Atom, AtomIdx, AtomMatcher, Bond, BondKind, BondMatcher, BondOrder, ConcreteBond,
    GraphError, QueryBond,
};

/// What the correspondence-graph core needs from a molecule.
///
/// Every index-taking method fails with [`GraphError::AtomOutOfRange`] when
/// the index does not name an atom.
pub trait MolecularGraph: Sync {
    fn atom_count(&self) -> usize;

    fn atom(&self, idx: AtomIdx) -> Result<&Atom, GraphError>;

    /// Atoms bonded to `idx`, in bond insertion order.
    fn neighbors(&self, idx: AtomIdx) -> Result<&[AtomIdx], GraphError>;

    /// The bond joining `a` and `b`, in either direction.
    fn bond_between(&self, a: AtomIdx, b: AtomIdx) -> Result<Option<&Bond>, GraphError>;

    fn symbol(&self, idx: AtomIdx) -> Result<&str, GraphError> {
        Ok(self.atom(idx)?.symbol())
    }

    fn atoms(&self) -> impl Iterator<Item = AtomIdx> + Clone {
        (0..self.atom_count()).map(AtomIdx::from)
    }
}

/// Adjacency-list molecule.
///
/// Bonds are stored once; a pair map keyed by the ordered endpoint pair gives
/// constant-time `bond_between`.
#[derive(Clone, Debug, Default)]
pub struct MolGraph {
    atoms: Vec<Atom>,
    adjacency: Vec<Vec<AtomIdx>>,
    bonds: Vec<Bond>,
    bond_index: HashMap<(AtomIdx, AtomIdx), usize>,
}

const fn bond_key(a: AtomIdx, b: AtomIdx) -> (AtomIdx, AtomIdx) {
    if a.get() <= b.get() { (a, b) } else { (b, a) }
}

impl MolGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> MolGraphBuilder {
        MolGraphBuilder::default()
    }

    pub fn add_atom(&mut self, atom: Atom) -> AtomIdx {
        let idx = AtomIdx::from(self.atoms.len());
        self.atoms.push(atom);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Adds a bond. Ring flags are not updated; call [`MolGraph::perceive_rings`]
    /// once all bonds are in place.
    pub fn add_bond(
        &mut self,
        begin: AtomIdx,
        end: AtomIdx,
        kind: BondKind,
    ) -> Result<(), GraphError> {
        self.check(begin)?;
        self.check(end)?;
        if begin == end {
            return Err(GraphError::SelfBond { atom: begin });
        }
        let key = bond_key(begin, end);
        if self.bond_index.contains_key(&key) {
            return Err(GraphError::DuplicateBond { begin, end });
        }

        self.bond_index.insert(key, self.bonds.len());
        self.bonds.push(Bond::new(begin, end, kind));
        self.adjacency[begin.as_usize()].push(end);
        self.adjacency[end.as_usize()].push(begin);
        Ok(())
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Marks every concrete bond that lies on a cycle.
    ///
    /// A bond is a ring bond iff its endpoints stay connected once the bond
    /// itself is removed.
    pub fn perceive_rings(&mut self) {
        for bond_pos in 0..self.bonds.len() {
            let [begin, end] = self.bonds[bond_pos].atoms();
            let in_ring = self.connected_without(begin, end);
            self.bonds[bond_pos].set_in_ring(in_ring);
        }
        trace!(
            "ring perception: {} of {} bonds in rings",
            self.bonds
                .iter()
                .filter(|b| b.as_concrete().is_some_and(|c| c.in_ring))
                .count(),
            self.bonds.len()
        );
    }

    /// Breadth-first search from `begin` to `end` ignoring the direct bond.
    fn connected_without(&self, begin: AtomIdx, end: AtomIdx) -> bool {
        let mut visited = vec![false; self.atoms.len()];
        let mut queue = VecDeque::from([begin]);
        visited[begin.as_usize()] = true;

        while let Some(current) = queue.pop_front() {
            for &next in &self.adjacency[current.as_usize()] {
                if bond_key(current, next) == bond_key(begin, end) {
                    continue;
                }
                if next == end {
                    return true;
                }
                if !visited[next.as_usize()] {
                    visited[next.as_usize()] = true;
                    queue.push_back(next);
                }
            }
        }
        false
    }

    fn check(&self, idx: AtomIdx) -> Result<(), GraphError> {
        if idx.as_usize() < self.atoms.len() {
            Ok(())
        } else {
            Err(GraphError::out_of_range(idx, self.atoms.len()))
        }
    }
}

impl MolecularGraph for MolGraph {
    fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    fn atom(&self, idx: AtomIdx) -> Result<&Atom, GraphError> {
        self.atoms
            .get(idx.as_usize())
            .ok_or_else(|| GraphError::out_of_range(idx, self.atoms.len()))
    }

    fn neighbors(&self, idx: AtomIdx) -> Result<&[AtomIdx], GraphError> {
        self.adjacency
            .get(idx.as_usize())
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::out_of_range(idx, self.atoms.len()))
    }

    fn bond_between(&self, a: AtomIdx, b: AtomIdx) -> Result<Option<&Bond>, GraphError> {
        self.check(a)?;
        self.check(b)?;
        Ok(self
            .bond_index
            .get(&bond_key(a, b))
            .map(|&pos| &self.bonds[pos]))
    }
}

/// Chained construction of a [`MolGraph`].
///
/// Errors are deferred to [`MolGraphBuilder::build`], which also runs ring
/// perception.
///
/// ```ignore
/// let ethanol = MolGraph::builder()
///     .atoms(["C", "C", "O"])
///     .bond(0, 1)
///     .bond(1, 2)
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct MolGraphBuilder {
    atoms: Vec<Atom>,
    bonds: Vec<(usize, usize, BondKind)>,
}

impl MolGraphBuilder {
    #[must_use]
    pub fn atom(mut self, symbol: &str) -> Self {
        self.atoms.push(Atom::concrete(symbol));
        self
    }

    #[must_use]
    pub fn atoms<'a>(mut self, symbols: impl IntoIterator<Item = &'a str>) -> Self {
        self.atoms.extend(symbols.into_iter().map(Atom::concrete));
        self
    }

    #[must_use]
    pub fn query_atom(mut self, symbol: &str, matcher: impl AtomMatcher + 'static) -> Self {
        self.atoms.push(Atom::query(symbol, matcher));
        self
    }

    /// Single bond.
    #[must_use]
    pub fn bond(self, begin: usize, end: usize) -> Self {
        self.bond_of(begin, end, BondOrder::Single)
    }

    #[must_use]
    pub fn bond_of(mut self, begin: usize, end: usize, order: BondOrder) -> Self {
        self.bonds.push((
            begin,
            end,
            BondKind::Concrete(ConcreteBond::new(order)),
        ));
        self
    }

    #[must_use]
    pub fn aromatic_bond(mut self, begin: usize, end: usize) -> Self {
        self.bonds
            .push((begin, end, BondKind::Concrete(ConcreteBond::aromatic())));
        self
    }

    #[must_use]
    pub fn query_bond(mut self, begin: usize, end: usize, matcher: impl BondMatcher + 'static) -> Self {
        self.bonds
            .push((begin, end, BondKind::Query(QueryBond::new(matcher))));
        self
    }

    /// Query bond accepting anything.
    #[must_use]
    pub fn any_bond(self, begin: usize, end: usize) -> Self {
        self.query_bond(begin, end, AnyBond)
    }

    /// Closes a chain of atoms into a ring with single bonds.
    #[must_use]
    pub fn ring(self, members: &[usize]) -> Self {
        self.ring_with(members, |b, begin, end| b.bond(begin, end))
    }

    /// Closes a chain of atoms into an aromatic ring.
    #[must_use]
    pub fn aromatic_ring(self, members: &[usize]) -> Self {
        self.ring_with(members, |b, begin, end| b.aromatic_bond(begin, end))
    }

    fn ring_with(mut self, members: &[usize], add: impl Fn(Self, usize, usize) -> Self) -> Self {
        for (pos, &begin) in members.iter().enumerate() {
            let end = members[(pos + 1) % members.len()];
            self = add(self, begin, end);
        }
        self
    }

    /// Validates every bond and returns the finished graph.
    pub fn build(self) -> Result<MolGraph, GraphError> {
        let mut graph = MolGraph::new();
        for atom in self.atoms {
            graph.add_atom(atom);
        }
        for (begin, end, kind) in self.bonds {
            graph.add_bond(AtomIdx::from(begin), AtomIdx::from(end), kind)?;
        }
        graph.perceive_rings();
        Ok(graph)
    }
}
