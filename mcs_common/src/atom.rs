//! Atoms: concrete element atoms and query atoms.
//!
//! A concrete atom is matched by its element symbol. A query atom carries a
//! matcher that decides which atoms it accepts; both variants answer the same
//! [`Atom::matches`] call, so callers never inspect the variant to match.

use std::fmt;
use std::sync::Arc;

/// Predicate deciding whether a query atom accepts a candidate atom.
pub trait AtomMatcher: fmt::Debug + Send + Sync {
    /// Returns true if `candidate` satisfies this query.
    fn matches(&self, candidate: &Atom) -> bool;
}

/// An atom identified by its element symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConcreteAtom {
    symbol: String,
}

impl ConcreteAtom {
    /// Creates an atom for the given element symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// The element symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

/// A pattern atom whose matching rule is an injected [`AtomMatcher`].
#[derive(Clone, Debug)]
pub struct QueryAtom {
    /// Display symbol, used wherever a plain symbol is needed (signatures).
    symbol: String,
    matcher: Arc<dyn AtomMatcher>,
}

impl QueryAtom {
    /// Creates a query atom with a display symbol and a matcher.
    pub fn new(symbol: impl Into<String>, matcher: impl AtomMatcher + 'static) -> Self {
        Self {
            symbol: symbol.into(),
            matcher: Arc::new(matcher),
        }
    }

    /// The display symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Delegates to the injected matcher.
    pub fn matches(&self, candidate: &Atom) -> bool {
        self.matcher.matches(candidate)
    }
}

/// A vertex of a molecular graph.
#[derive(Clone, Debug)]
pub enum Atom {
    Concrete(ConcreteAtom),
    Query(QueryAtom),
}

impl Atom {
    /// Shorthand for a concrete atom.
    pub fn concrete(symbol: impl Into<String>) -> Self {
        Self::Concrete(ConcreteAtom::new(symbol))
    }

    /// Shorthand for a query atom.
    pub fn query(symbol: impl Into<String>, matcher: impl AtomMatcher + 'static) -> Self {
        Self::Query(QueryAtom::new(symbol, matcher))
    }

    pub fn symbol(&self) -> &str {
        match self {
            Self::Concrete(atom) => atom.symbol(),
            Self::Query(atom) => atom.symbol(),
        }
    }

    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }

    pub const fn as_query(&self) -> Option<&QueryAtom> {
        match self {
            Self::Query(atom) => Some(atom),
            Self::Concrete(_) => None,
        }
    }

    /// Uniform matching: query atoms ask their matcher, concrete atoms compare
    /// symbols case-insensitively.
    pub fn matches(&self, candidate: &Atom) -> bool {
        match self {
            Self::Query(atom) => atom.matches(candidate),
            Self::Concrete(atom) => atom.symbol().eq_ignore_ascii_case(candidate.symbol()),
        }
    }
}

/// Accepts every atom.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnyAtom;

impl AtomMatcher for AnyAtom {
    fn matches(&self, _candidate: &Atom) -> bool {
        true
    }
}

/// Accepts atoms whose symbol is one of a fixed list (case-insensitive).
#[derive(Clone, Debug, Default)]
pub struct SymbolSet {
    symbols: Vec<String>,
}

impl SymbolSet {
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }
}

impl AtomMatcher for SymbolSet {
    fn matches(&self, candidate: &Atom) -> bool {
        self.symbols
            .iter()
            .any(|s| s.eq_ignore_ascii_case(candidate.symbol()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_match_ignores_case() {
        let cl = Atom::concrete("Cl");
        assert!(cl.matches(&Atom::concrete("CL")));
        assert!(!cl.matches(&Atom::concrete("C")));
    }

    #[test]
    fn test_query_atom_uses_matcher() {
        let halogen = Atom::query("X", SymbolSet::new(["F", "Cl", "Br", "I"]));
        assert!(halogen.is_query());
        assert!(halogen.matches(&Atom::concrete("Br")));
        assert!(!halogen.matches(&Atom::concrete("O")));
        assert_eq!(halogen.symbol(), "X");

        let any = Atom::query("*", AnyAtom);
        assert!(any.matches(&Atom::concrete("Xe")));
    }
}
