//! Fixed-width vertex signatures.
//!
//! A signature is the atom's own symbol followed by its neighbours' symbols,
//! padded with [`NO_NEIGHBOUR`] to [`SIGNATURE_WIDTH`] slots. The neighbour
//! slots are sorted, so the signature does not depend on the order in which
//! the graph enumerates neighbours. Two atoms are label-equivalent iff their
//! signatures are equal slot for slot.

use mcs_common::{AtomIdx, MolecularGraph};
use tracing::trace;

use crate::{CompatError, SignatureOverflow};

/// Slots in a signature: one for the atom plus six neighbours.
pub const SIGNATURE_WIDTH: usize = 7;

/// Neighbour slots available after the atom's own symbol.
pub const NEIGHBOUR_SLOTS: usize = SIGNATURE_WIDTH - 1;

/// Padding for unused neighbour slots.
pub const NO_NEIGHBOUR: &str = "Z9";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VertexSignature<'g> {
    slots: [&'g str; SIGNATURE_WIDTH],
}

impl<'g> VertexSignature<'g> {
    /// Computes the signature of one atom.
    pub fn of<G: MolecularGraph>(
        graph: &'g G,
        atom: AtomIdx,
        overflow: SignatureOverflow,
    ) -> Result<Self, CompatError> {
        let mut neighbours = graph
            .neighbors(atom)?
            .iter()
            .map(move |&n| graph.symbol(n))
            .collect::<Result<Vec<&'g str>, _>>()?;

        if neighbours.len() > NEIGHBOUR_SLOTS {
            match overflow {
                SignatureOverflow::Reject => {
                    return Err(CompatError::degree_overflow(
                        atom,
                        neighbours.len(),
                        NEIGHBOUR_SLOTS,
                    ));
                }
                SignatureOverflow::Truncate => {
                    trace!(
                        "truncating signature of {}: {} neighbours",
                        atom,
                        neighbours.len()
                    );
                    neighbours.sort_unstable();
                    neighbours.truncate(NEIGHBOUR_SLOTS);
                }
            }
        }

        let mut slots = [NO_NEIGHBOUR; SIGNATURE_WIDTH];
        slots[0] = graph.symbol(atom)?;
        for (slot, symbol) in slots[1..].iter_mut().zip(neighbours) {
            *slot = symbol;
        }
        slots[1..].sort_unstable();

        Ok(Self { slots })
    }

    pub const fn slots(&self) -> &[&'g str; SIGNATURE_WIDTH] {
        &self.slots
    }

    pub const fn symbol(&self) -> &'g str {
        self.slots[0]
    }

    /// Label equivalence: every slot equal.
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self == other
    }
}

/// Signatures for every atom of `graph`, indexed by atom position.
pub fn label_atoms<G: MolecularGraph>(
    graph: &G,
    overflow: SignatureOverflow,
) -> Result<Vec<VertexSignature<'_>>, CompatError> {
    graph
        .atoms()
        .map(|atom| VertexSignature::of(graph, atom, overflow))
        .collect()
}
