//! Symbol interning for correspondence labels.

use std::sync::atomic::{AtomicU32, Ordering};

use dashmap::DashMap;

/// Append-only symbol → integer table.
///
/// Ids start at 1 and are handed out in first-seen order. A table is owned by
/// the caller's session and shared by reference; lookups and inserts are safe
/// from any number of threads, and an id never changes once assigned.
#[derive(Debug, Default)]
pub struct LabelTable {
    ids: DashMap<String, u32>,
    next: AtomicU32,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `symbol`, assigning the next free id on first use.
    pub fn label_id(&self, symbol: &str) -> u32 {
        if let Some(id) = self.ids.get(symbol) {
            return *id;
        }
        // The entry guard holds the shard lock, so two racing threads agree
        // on a single id for the same symbol.
        *self
            .ids
            .entry(symbol.to_owned())
            .or_insert_with(|| self.next.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Lookup without inserting.
    pub fn get(&self, symbol: &str) -> Option<u32> {
        self.ids.get(symbol).map(|id| *id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_ids_are_stable_and_one_based() {
        let table = LabelTable::new();
        assert_eq!(table.label_id("C"), 1);
        assert_eq!(table.label_id("O"), 2);
        assert_eq!(table.label_id("C"), 1);
        assert_eq!(table.get("N"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_concurrent_inserts_agree() {
        let table = Arc::new(LabelTable::new());
        let symbols = ["C", "N", "O", "S", "P", "Cl", "Br"];

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let table = Arc::clone(&table);
                thread::spawn(move || {
                    symbols
                        .iter()
                        .map(|s| table.label_id(s))
                        .collect::<Vec<u32>>()
                })
            })
            .collect();

        let results: Vec<Vec<u32>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));

        let mut ids = results[0].clone();
        ids.sort_unstable();
        assert_eq!(ids, (1..=symbols.len() as u32).collect::<Vec<_>>());
    }
}
