//! Computed table: memoization of `ite` results.
//!
//! The table maps an operand triple `(i, t, e)` to the node computed for
//! `ite(i, t, e)`. Without it, the recursion of `ite` revisits the same
//! sub-problems exponentially often on shared diagrams.
//!
//! Entries are never evicted. Since the arena is append-only, a cached
//! result stays valid for the whole life of the manager, and repeated calls
//! keep returning the very same ids.

use std::collections::HashMap;

use crate::node::NodeId;

/// Key of the computed table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct IteKey {
    pub i: NodeId,
    pub t: NodeId,
    pub e: NodeId,
}

impl IteKey {
    pub fn new(i: NodeId, t: NodeId, e: NodeId) -> Self {
        Self { i, t, e }
    }
}

/// Snapshot of the cache counters.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct CacheStats {
    pub len: usize,
    pub hits: usize,
    pub misses: usize,
}

impl CacheStats {
    /// Fraction of lookups answered from the cache.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Memo of `ite` results, keyed by the operand triple.
#[derive(Default)]
pub struct ComputedTable {
    entries: HashMap<IteKey, NodeId>,
    hits: usize,
    misses: usize,
}

impl ComputedTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            len: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }

    /// Result of a previous `ite` on the same operands, counting the hit or miss.
    #[inline]
    pub fn lookup(&mut self, key: &IteKey) -> Option<NodeId> {
        let found = self.entries.get(key).copied();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    /// Record `ite(key) = res`. A key is only ever mapped to one node.
    #[inline]
    pub fn record(&mut self, key: IteKey, res: NodeId) {
        let old = self.entries.insert(key, res);
        debug_assert!(old.is_none() || old == Some(res), "{:?} recomputed differently", key);
    }
}
