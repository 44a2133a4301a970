//! Unique table for hash-consing diagram nodes.
//!
//! Every non-terminal node is registered here under its structural key
//! `(high, low, top_var)`. Before the manager allocates a node it looks the key
//! up; a hit means the function already has a node, and that node is reused.
//! This is what makes the representation canonical: two equal functions
//! always end up with the same [`NodeId`].
//!
//! The table only grows. Nodes are never collected, so entries never become
//! stale.

use std::collections::HashMap;

use crate::node::{NodeId, UniqueKey};

#[derive(Debug, Clone, Default)]
pub struct UniqueTable {
    nodes: HashMap<UniqueKey, NodeId>,
}

impl UniqueTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: HashMap::with_capacity(capacity),
        }
    }

    /// Look up a node by its structural key.
    pub fn find(&self, key: &UniqueKey) -> Option<NodeId> {
        self.nodes.get(key).copied()
    }

    /// Register a node under its key.
    ///
    /// # Panics
    ///
    /// Panics if the key is already registered to another node, since that
    /// would break canonicity.
    pub fn insert(&mut self, key: UniqueKey, id: NodeId) {
        let old = self.nodes.insert(key, id);
        assert!(
            old.is_none() || old == Some(id),
            "Key {:?} is already mapped to {:?}",
            key,
            old
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(high: u32, low: u32, top_var: u32) -> UniqueKey {
        UniqueKey {
            high: NodeId::new(high),
            low: NodeId::new(low),
            top_var: NodeId::new(top_var),
        }
    }

    #[test]
    fn test_find_and_insert() {
        let mut table = UniqueTable::default();
        assert_eq!(table.find(&key(1, 0, 2)), None);

        table.insert(key(1, 0, 2), NodeId::new(2));
        table.insert(key(2, 0, 3), NodeId::new(4));

        assert_eq!(table.find(&key(1, 0, 2)), Some(NodeId::new(2)));
        assert_eq!(table.find(&key(2, 0, 3)), Some(NodeId::new(4)));
        assert_eq!(table.find(&key(0, 2, 3)), None);
    }

    #[test]
    fn test_reinsert_same_is_noop() {
        let mut table = UniqueTable::default();
        table.insert(key(1, 0, 2), NodeId::new(2));
        table.insert(key(1, 0, 2), NodeId::new(2));
        assert_eq!(table.find(&key(1, 0, 2)), Some(NodeId::new(2)));
    }

    #[test]
    #[should_panic(expected = "already mapped")]
    fn test_conflicting_insert_panics() {
        let mut table = UniqueTable::default();
        table.insert(key(1, 0, 2), NodeId::new(2));
        table.insert(key(1, 0, 2), NodeId::new(3));
    }
}
