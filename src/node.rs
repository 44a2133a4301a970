//! Diagram nodes and their handles.

use std::fmt::{Display, Formatter};

/// Handle of a node in the manager's arena.
///
/// Handles are plain indices: they are `Copy`, carry no lifetime, and stay
/// valid for the whole life of the [`Manager`][crate::manager::Manager] that
/// issued them (the arena never shrinks).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The constant `false` terminal.
    pub const FALSE: NodeId = NodeId(0);
    /// The constant `true` terminal.
    pub const TRUE: NodeId = NodeId(1);

    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Return the arena index of the node.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the raw value of the handle.
    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn is_terminal(self) -> bool {
        self.0 <= 1
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// Key of the unique table: the structural identity of a node.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UniqueKey {
    pub high: NodeId,
    pub low: NodeId,
    pub top_var: NodeId,
}

/// A node of the diagram.
///
/// Terminals branch on themselves and have both children pointing to
/// themselves. A variable node is `(high = TRUE, low = FALSE, top_var = id)`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub high: NodeId,
    pub low: NodeId,
    pub top_var: NodeId,
    pub label: Option<String>,
}

impl Node {
    pub(crate) fn terminal(id: NodeId, label: &str) -> Self {
        Self {
            id,
            high: id,
            low: id,
            top_var: id,
            label: Some(label.to_string()),
        }
    }

    pub(crate) fn variable(id: NodeId, label: &str) -> Self {
        Self {
            id,
            high: NodeId::TRUE,
            low: NodeId::FALSE,
            top_var: id,
            label: Some(label.to_string()),
        }
    }

    pub(crate) fn internal(id: NodeId, key: UniqueKey) -> Self {
        Self {
            id,
            high: key.high,
            low: key.low,
            top_var: key.top_var,
            label: None,
        }
    }

    pub fn key(&self) -> UniqueKey {
        UniqueKey {
            high: self.high,
            low: self.low,
            top_var: self.top_var,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.id.is_terminal()
    }

    pub fn is_variable(&self) -> bool {
        self.high == NodeId::TRUE && self.low == NodeId::FALSE && self.top_var == self.id
    }
}
