//! Exact-span lookup for run finalization.
//!
//! When a run closes, the merger needs the *earliest collected* occurrence
//! whose span equals the run's span exactly. Rather than scanning every
//! occurrence per run, the index maps `(start, length)` to the first
//! occurrence registered with that span:
//!
//! ```text
//! register #0 (3, 5) -> stored
//! register #1 (3, 2) -> stored
//! register #2 (3, 5) -> ignored, #0 already owns (3, 5)
//! ```
//!
//! Registration must happen in collection order for the tie-break to hold.

use crate::Occurrence;
use std::collections::HashMap;

/// Key identifying a span by its start and byte length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SpanKey {
    pub(crate) start: usize,
    pub(crate) length: usize,
}

impl SpanKey {
    pub(crate) fn of(occurrence: &Occurrence<'_>) -> Self {
        SpanKey { start: occurrence.start, length: occurrence.length() }
    }
}

/// First-write-wins map from span to occurrence index.
#[derive(Debug, Default)]
pub(crate) struct SpanIndex {
    first: HashMap<SpanKey, usize>,
}

impl SpanIndex {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        SpanIndex { first: HashMap::with_capacity(capacity) }
    }

    /// Register `idx` for `key`. Returns false when an earlier occurrence
    /// already owns the span.
    pub(crate) fn register(&mut self, key: SpanKey, idx: usize) -> bool {
        let mut inserted = false;
        self.first.entry(key).or_insert_with(|| {
            inserted = true;
            idx
        });
        inserted
    }

    pub(crate) fn lookup(&self, key: SpanKey) -> Option<usize> {
        self.first.get(&key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_registration_wins() {
        let mut index = SpanIndex::default();
        let key = SpanKey { start: 3, length: 5 };

        assert!(index.register(key, 0));
        assert!(index.register(SpanKey { start: 3, length: 2 }, 1));
        assert!(!index.register(key, 2));

        assert_eq!(index.lookup(key), Some(0));
        assert_eq!(index.lookup(SpanKey { start: 3, length: 2 }), Some(1));
        assert_eq!(index.lookup(SpanKey { start: 4, length: 5 }), None);
    }
}
