//! The diagram manager.
//!
//! All diagrams live inside a [`Manager`]. It owns the node arena, the unique
//! table (hash-consing) and the computed table (memoization of `ite`), and it
//! is the only place where nodes are created. Callers hold plain [`NodeId`]
//! handles and combine them through the manager:
//!
//! ```
//! use robdd_reach::manager::Manager;
//! use robdd_reach::node::NodeId;
//!
//! let m = Manager::default();
//! let a = m.create_var("a");
//! let b = m.create_var("b");
//!
//! let f = m.and2(a, b);
//! assert_eq!(m.top_var(f), a);
//! assert_eq!(m.co_factor_true(f, a), b);
//! assert_eq!(m.co_factor_false(f, a), NodeId::FALSE);
//! ```
//!
//! # Variable order
//!
//! Variables are ordered by creation. Since the arena is append-only and
//! variables are nodes, a variable created later always has a larger id, so
//! comparing variable ids compares their positions in the order.
//!
//! # Interior mutability
//!
//! As in the rest of the crate, every operation takes `&self`; the tables sit
//! behind [`RefCell`]s and each borrow is released before recursing.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;

use log::debug;

use crate::cache::{CacheStats, ComputedTable, IteKey};
use crate::error::{Error, Result};
use crate::node::{Node, NodeId, UniqueKey};
use crate::table::UniqueTable;

/// Configuration of a [`Manager`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ManagerConfig {
    /// Number of nodes to reserve space for in the arena and the unique table.
    pub node_capacity: usize,
    /// Number of entries to reserve space for in the computed table.
    pub cache_capacity: usize,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            node_capacity: 1 << 10,
            cache_capacity: 1 << 12,
        }
    }
}

impl ManagerConfig {
    pub fn with_node_capacity(mut self, node_capacity: usize) -> Self {
        self.node_capacity = node_capacity;
        self
    }

    pub fn with_cache_capacity(mut self, cache_capacity: usize) -> Self {
        self.cache_capacity = cache_capacity;
        self
    }
}

pub struct Manager {
    nodes: RefCell<Vec<Node>>,
    unique: RefCell<UniqueTable>,
    computed: RefCell<ComputedTable>,
    labels: RefCell<HashMap<String, NodeId>>,
}

impl Manager {
    pub fn new(config: ManagerConfig) -> Self {
        let mut nodes = Vec::with_capacity(config.node_capacity.max(2));
        nodes.push(Node::terminal(NodeId::FALSE, "False"));
        nodes.push(Node::terminal(NodeId::TRUE, "True"));

        Self {
            nodes: RefCell::new(nodes),
            unique: RefCell::new(UniqueTable::with_capacity(config.node_capacity)),
            computed: RefCell::new(ComputedTable::with_capacity(config.cache_capacity)),
            labels: RefCell::new(HashMap::new()),
        }
    }
}

impl Default for Manager {
    fn default() -> Self {
        Manager::new(ManagerConfig::default())
    }
}

impl Debug for Manager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("size", &self.nodes.borrow().len())
            .field("variables", &self.labels.borrow().len())
            .field("computed", &self.computed.borrow().len())
            .finish()
    }
}

// Queries
impl Manager {
    pub fn zero(&self) -> NodeId {
        NodeId::FALSE
    }
    pub fn one(&self) -> NodeId {
        NodeId::TRUE
    }

    pub fn is_zero(&self, f: NodeId) -> bool {
        f == NodeId::FALSE
    }
    pub fn is_one(&self, f: NodeId) -> bool {
        f == NodeId::TRUE
    }
    pub fn is_constant(&self, f: NodeId) -> bool {
        f.is_terminal()
    }

    pub fn is_variable(&self, f: NodeId) -> bool {
        self.check(f);
        self.nodes.borrow()[f.index()].is_variable()
    }

    /// Number of nodes in the arena, terminals included.
    pub fn unique_table_size(&self) -> usize {
        self.nodes.borrow().len()
    }

    /// Number of variables created so far.
    pub fn num_vars(&self) -> usize {
        self.labels.borrow().len()
    }

    pub fn contains(&self, f: NodeId) -> bool {
        f.index() < self.nodes.borrow().len()
    }

    /// Check that `f` is a node of this manager.
    pub fn validate(&self, f: NodeId) -> Result<()> {
        if self.contains(f) {
            Ok(())
        } else {
            Err(Error::InvalidReference(f))
        }
    }

    fn check(&self, f: NodeId) {
        assert!(self.contains(f), "Node {} does not exist", f);
    }

    pub fn top_var(&self, f: NodeId) -> NodeId {
        self.check(f);
        self.nodes.borrow()[f.index()].top_var
    }
    pub fn high(&self, f: NodeId) -> NodeId {
        self.check(f);
        self.nodes.borrow()[f.index()].high
    }
    pub fn low(&self, f: NodeId) -> NodeId {
        self.check(f);
        self.nodes.borrow()[f.index()].low
    }

    /// Return a copy of the node `f`.
    pub fn node(&self, f: NodeId) -> Node {
        self.check(f);
        self.nodes.borrow()[f.index()].clone()
    }

    /// Name of the variable `f` branches on (`"True"`/`"False"` for terminals).
    pub fn top_var_name(&self, f: NodeId) -> String {
        let v = self.top_var(f);
        self.nodes.borrow()[v.index()].label.clone().unwrap_or_default()
    }

    /// Find a variable by its label without creating it.
    pub fn var_by_label(&self, label: &str) -> Option<NodeId> {
        self.labels.borrow().get(label).copied()
    }

    pub fn computed_table_stats(&self) -> CacheStats {
        self.computed.borrow().stats()
    }
}

// Node creation
impl Manager {
    fn alloc(&self, make: impl FnOnce(NodeId) -> Node) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        assert!(nodes.len() < u32::MAX as usize, "Node arena is full");
        let id = NodeId::new(nodes.len() as u32);
        nodes.push(make(id));
        id
    }

    /// Create a new variable, or return the existing one with this label.
    pub fn create_var(&self, label: &str) -> NodeId {
        if let Some(v) = self.var_by_label(label) {
            debug!("create_var({:?}) -> {} (existing)", label, v);
            return v;
        }

        let v = self.alloc(|id| Node::variable(id, label));
        let key = UniqueKey {
            high: NodeId::TRUE,
            low: NodeId::FALSE,
            top_var: v,
        };
        self.unique.borrow_mut().insert(key, v);
        self.labels.borrow_mut().insert(label.to_string(), v);
        debug!("create_var({:?}) -> {}", label, v);
        v
    }

    /// Find or create the node `(top_var ? high : low)`.
    fn mk(&self, top_var: NodeId, high: NodeId, low: NodeId) -> NodeId {
        if high == low {
            debug!("mk: duplicates {} == {}", high, low);
            return high;
        }

        let key = UniqueKey { high, low, top_var };
        let existing = self.unique.borrow().find(&key);
        if let Some(id) = existing {
            return id;
        }

        let id = self.alloc(|id| Node::internal(id, key));
        self.unique.borrow_mut().insert(key, id);
        debug!("mk(v = {}, high = {}, low = {}) -> {}", top_var, high, low, id);
        id
    }
}

// ITE and cofactors
impl Manager {
    /// Compute "if `i` then `t` else `e`".
    ///
    /// ```text
    /// ITE(i, t, e) = (i ∧ t) ∨ (¬i ∧ e)
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if any operand is not a node of this manager. See [`Manager::try_ite`].
    pub fn ite(&self, i: NodeId, t: NodeId, e: NodeId) -> NodeId {
        debug!("ite(i = {}, t = {}, e = {})", i, t, e);

        // Terminal cases:
        //   ite(1,T,E) => T
        //   ite(0,T,E) => E
        //   ite(I,T,T) => T
        //   ite(I,1,0) => I
        if self.is_one(i) {
            return t;
        }
        if self.is_zero(i) {
            return e;
        }
        if t == e {
            return t;
        }
        if self.is_one(t) && self.is_zero(e) {
            return i;
        }

        let key = IteKey::new(i, t, e);
        let cached = self.computed.borrow_mut().lookup(&key);
        if let Some(res) = cached {
            debug!("cache: ite(i = {}, t = {}, e = {}) -> {}", i, t, e, res);
            return res;
        }

        let v = self.split_var(i, t, e);
        debug!("split variable = {}", v);

        let (i1, i0) = self.cofactors_at(i, v);
        let (t1, t0) = self.cofactors_at(t, v);
        let (e1, e0) = self.cofactors_at(e, v);

        let high = self.ite(i1, t1, e1);
        let low = self.ite(i0, t0, e0);

        let res = self.mk(v, high, low);
        debug!("computed: ite(i = {}, t = {}, e = {}) -> {}", i, t, e, res);
        self.computed.borrow_mut().record(key, res);
        res
    }

    /// Bounds-checked [`Manager::ite`].
    pub fn try_ite(&self, i: NodeId, t: NodeId, e: NodeId) -> Result<NodeId> {
        self.validate(i)?;
        self.validate(t)?;
        self.validate(e)?;
        Ok(self.ite(i, t, e))
    }

    /// The earliest top variable among the non-constant operands.
    fn split_var(&self, i: NodeId, t: NodeId, e: NodeId) -> NodeId {
        let v = [i, t, e]
            .into_iter()
            .filter(|&f| !self.is_constant(f))
            .map(|f| self.top_var(f))
            .min();
        // `i` is not constant at this point
        v.unwrap_or(i)
    }

    /// Cofactors `(high, low)` of `f` w.r.t. `v`, where `v` is not below `top_var(f)`.
    fn cofactors_at(&self, f: NodeId, v: NodeId) -> (NodeId, NodeId) {
        if self.is_constant(f) || self.top_var(f) != v {
            (f, f)
        } else {
            (self.high(f), self.low(f))
        }
    }

    /// Positive cofactor `f|x=1` w.r.t. an arbitrary variable `x`.
    pub fn co_factor_true(&self, f: NodeId, x: NodeId) -> NodeId {
        let mut cache = HashMap::new();
        self.cofactor_(f, x, true, &mut cache)
    }

    /// Negative cofactor `f|x=0` w.r.t. an arbitrary variable `x`.
    pub fn co_factor_false(&self, f: NodeId, x: NodeId) -> NodeId {
        let mut cache = HashMap::new();
        self.cofactor_(f, x, false, &mut cache)
    }

    /// Positive cofactor w.r.t. the top variable of `f`.
    pub fn co_factor_true_top(&self, f: NodeId) -> NodeId {
        self.high(f)
    }

    /// Negative cofactor w.r.t. the top variable of `f`.
    pub fn co_factor_false_top(&self, f: NodeId) -> NodeId {
        self.low(f)
    }

    fn cofactor_(&self, f: NodeId, x: NodeId, value: bool, cache: &mut HashMap<NodeId, NodeId>) -> NodeId {
        if self.is_constant(f) || self.is_constant(x) {
            return f;
        }
        assert!(self.is_variable(x), "Cofactor w.r.t. non-variable node {}", x);

        let v = self.top_var(f);
        if v > x {
            // `f` does not depend on `x`
            return f;
        }
        if v == x {
            return if value { self.high(f) } else { self.low(f) };
        }

        if let Some(&res) = cache.get(&f) {
            return res;
        }

        let high = self.cofactor_(self.high(f), x, value, cache);
        let low = self.cofactor_(self.low(f), x, value, cache);
        let res = self.ite(v, high, low);
        debug!("cofactor(f = {}, x = {}, value = {}) -> {}", f, x, value, res);
        cache.insert(f, res);
        res
    }

    /// Existential quantification `∃vars. f`.
    pub fn exists(&self, f: NodeId, vars: impl IntoIterator<Item = NodeId>) -> NodeId {
        let mut res = f;
        for x in vars {
            let high = self.co_factor_true(res, x);
            let low = self.co_factor_false(res, x);
            res = self.or2(high, low);
        }
        res
    }
}

// Connectives
impl Manager {
    pub fn neg(&self, a: NodeId) -> NodeId {
        self.ite(a, NodeId::FALSE, NodeId::TRUE)
    }

    pub fn and2(&self, a: NodeId, b: NodeId) -> NodeId {
        self.ite(a, b, NodeId::FALSE)
    }

    pub fn or2(&self, a: NodeId, b: NodeId) -> NodeId {
        self.ite(a, NodeId::TRUE, b)
    }

    pub fn xor2(&self, a: NodeId, b: NodeId) -> NodeId {
        let not_b = self.neg(b);
        self.ite(a, not_b, b)
    }

    pub fn nand2(&self, a: NodeId, b: NodeId) -> NodeId {
        let f = self.and2(a, b);
        self.neg(f)
    }

    pub fn nor2(&self, a: NodeId, b: NodeId) -> NodeId {
        let f = self.or2(a, b);
        self.neg(f)
    }

    pub fn xnor2(&self, a: NodeId, b: NodeId) -> NodeId {
        let f = self.xor2(a, b);
        self.neg(f)
    }

    pub fn and_many(&self, nodes: impl IntoIterator<Item = NodeId>) -> NodeId {
        let mut res = NodeId::TRUE;
        for f in nodes {
            res = self.and2(res, f);
        }
        res
    }

    pub fn or_many(&self, nodes: impl IntoIterator<Item = NodeId>) -> NodeId {
        let mut res = NodeId::FALSE;
        for f in nodes {
            res = self.or2(res, f);
        }
        res
    }

    /// Conjunction of literals, each given as `(variable, polarity)`.
    pub fn cube(&self, literals: impl IntoIterator<Item = (NodeId, bool)>) -> NodeId {
        let mut res = NodeId::TRUE;
        for (v, value) in literals {
            let lit = if value { v } else { self.neg(v) };
            res = self.and2(res, lit);
        }
        res
    }
}

// Traversal
impl Manager {
    /// All nodes reachable from `root`, terminals included.
    pub fn find_nodes(&self, root: NodeId) -> BTreeSet<NodeId> {
        self.check(root);
        let mut visited = BTreeSet::new();
        let mut stack = vec![root];

        while let Some(f) = stack.pop() {
            if visited.insert(f) && !self.is_constant(f) {
                stack.push(self.low(f));
                stack.push(self.high(f));
            }
        }

        visited
    }

    /// All variables `root` depends on.
    pub fn find_vars(&self, root: NodeId) -> BTreeSet<NodeId> {
        self.find_nodes(root)
            .into_iter()
            .filter(|&f| !self.is_constant(f))
            .map(|f| self.top_var(f))
            .collect()
    }

    /// Number of nodes in the diagram rooted at `f`, terminals included.
    pub fn size(&self, f: NodeId) -> usize {
        self.find_nodes(f).len()
    }

    pub fn to_bracket_string(&self, f: NodeId) -> String {
        if self.is_zero(f) {
            return "(0)".to_string();
        } else if self.is_one(f) {
            return "(1)".to_string();
        }

        format!(
            "{}:({}, {}, {})",
            f,
            self.top_var_name(f),
            self.to_bracket_string(self.high(f)),
            self.to_bracket_string(self.low(f))
        )
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_terminals() {
        let m = Manager::default();

        assert_eq!(m.unique_table_size(), 2);
        assert_eq!(m.zero(), NodeId::FALSE);
        assert_eq!(m.one(), NodeId::TRUE);
        assert!(m.is_constant(m.zero()));
        assert!(m.is_constant(m.one()));
        assert!(!m.is_variable(m.zero()));
        assert!(!m.is_variable(m.one()));
        assert_eq!(m.top_var(m.one()), m.one());
        assert_eq!(m.top_var_name(m.one()), "True");
        assert_eq!(m.top_var_name(m.zero()), "False");
    }

    #[test]
    fn test_create_var() {
        let m = Manager::default();

        let a = m.create_var("a");
        assert_eq!(a, NodeId::new(2));
        assert!(m.is_variable(a));
        assert!(!m.is_constant(a));
        assert_eq!(m.high(a), m.one());
        assert_eq!(m.low(a), m.zero());
        assert_eq!(m.top_var(a), a);
        assert_eq!(m.top_var_name(a), "a");
        assert_eq!(m.unique_table_size(), 3);

        // Same label => same variable, no new node
        assert_eq!(m.create_var("a"), a);
        assert_eq!(m.unique_table_size(), 3);

        let b = m.create_var("b");
        assert_eq!(b, NodeId::new(3));
        assert_eq!(m.var_by_label("b"), Some(b));
        assert_eq!(m.var_by_label("c"), None);
        assert_eq!(m.num_vars(), 2);
    }

    #[test]
    fn test_ite_terminal_cases() {
        let m = Manager::default();
        let a = m.create_var("a");
        let b = m.create_var("b");

        assert_eq!(m.ite(m.one(), a, b), a);
        assert_eq!(m.ite(m.zero(), a, b), b);
        assert_eq!(m.ite(a, m.one(), m.zero()), a);

        // Reduction: no node is created
        let size = m.unique_table_size();
        assert_eq!(m.ite(a, b, b), b);
        assert_eq!(m.unique_table_size(), size);
    }

    #[test]
    fn test_ite_canonicity() {
        let m = Manager::default();
        let a = m.create_var("a");
        let b = m.create_var("b");

        let f = m.ite(a, b, m.zero());
        assert_eq!(f, NodeId::new(4));
        let size = m.unique_table_size();
        let g = m.ite(a, b, m.zero());
        assert_eq!(f, g);
        assert_eq!(m.unique_table_size(), size);
        assert!(m.computed_table_stats().hits >= 1);
    }

    #[test]
    fn test_ite_order_independence() {
        let m = Manager::default();
        let a = m.create_var("a");
        let b = m.create_var("b");

        let f = m.ite(a, b, m.zero());
        let g = m.ite(b, a, m.zero());
        assert_eq!(f, g);
        assert_eq!(m.top_var(f), a);
        assert_eq!(m.high(f), b);
        assert_eq!(m.low(f), m.zero());
    }

    #[test]
    fn test_double_negation_and_idempotence() {
        let m = Manager::default();
        let a = m.create_var("a");
        let b = m.create_var("b");
        let c = m.create_var("c");
        let f = m.or2(m.and2(a, b), c);

        for g in [a, b, f, m.one(), m.zero()] {
            assert_eq!(m.neg(m.neg(g)), g);
            assert_eq!(m.and2(g, g), g);
            assert_eq!(m.or2(g, g), g);
        }
    }

    #[test]
    fn test_derived_connectives() {
        let m = Manager::default();
        let a = m.create_var("a");
        let b = m.create_var("b");

        assert_eq!(m.nand2(a, b), m.neg(m.and2(a, b)));
        assert_eq!(m.nor2(a, b), m.neg(m.or2(a, b)));
        assert_eq!(m.xnor2(a, b), m.neg(m.xor2(a, b)));

        assert_eq!(m.xor2(a, a), m.zero());
        assert_eq!(m.xor2(a, m.neg(a)), m.one());
        assert_eq!(m.xnor2(a, a), m.one());
    }

    #[test]
    fn test_de_morgan() {
        let m = Manager::default();
        let x = m.create_var("x");
        let y = m.create_var("y");

        let f = m.neg(m.and2(x, y));
        let g = m.or2(m.neg(x), m.neg(y));
        assert_eq!(f, g);

        let f = m.neg(m.or2(x, y));
        let g = m.and2(m.neg(x), m.neg(y));
        assert_eq!(f, g);
    }

    #[test]
    fn test_cofactors() {
        let m = Manager::default();
        let x = m.create_var("x");
        let a = m.create_var("a");
        let b = m.create_var("b");
        let c = m.create_var("c");

        // f = a ∨ (b ∧ c)
        let f = m.or2(a, m.and2(b, c));

        assert_eq!(m.co_factor_true(f, a), m.one());
        assert_eq!(m.co_factor_false(f, a), m.and2(b, c));
        assert_eq!(m.co_factor_true(f, b), m.or2(a, c));
        assert_eq!(m.co_factor_false(f, b), a);
        assert_eq!(m.co_factor_true(f, c), m.or2(a, b));

        // `x` precedes everything in `f`, so it cannot occur in it
        assert_eq!(m.co_factor_true(f, x), f);
        assert_eq!(m.co_factor_false(f, x), f);

        // Variables created after `f` do not occur in it either
        let d = m.create_var("d");
        assert_eq!(m.co_factor_true(f, d), f);

        assert_eq!(m.co_factor_true_top(f), m.one());
        assert_eq!(m.co_factor_false_top(f), m.and2(b, c));

        assert_eq!(m.co_factor_true(m.one(), a), m.one());
        assert_eq!(m.co_factor_false(f, m.one()), f);
    }

    #[test]
    fn test_exists() {
        let m = Manager::default();
        let a = m.create_var("a");
        let b = m.create_var("b");
        let c = m.create_var("c");

        let f = m.and2(a, b);
        assert_eq!(m.exists(f, [a]), b);
        assert_eq!(m.exists(f, [a, b]), m.one());

        let g = m.and_many([a, m.neg(b), c]);
        let h = m.exists(g, [b]);
        assert_eq!(h, m.and2(a, c));
        assert!(!m.find_vars(h).contains(&b));
    }

    #[test]
    fn test_cube() {
        let m = Manager::default();
        let a = m.create_var("a");
        let b = m.create_var("b");
        let c = m.create_var("c");

        let f = m.cube([(a, true), (b, false), (c, true)]);
        assert_eq!(f, m.and_many([a, m.neg(b), c]));
        assert_eq!(m.cube(std::iter::empty()), m.one());
        assert_eq!(m.or_many([a, b]), m.or2(a, b));
        assert_eq!(m.or_many(std::iter::empty()), m.zero());
    }

    #[test]
    fn test_find_nodes_and_vars() {
        let m = Manager::default();
        let a = m.create_var("a");
        let b = m.create_var("b");
        let f = m.and2(a, b);

        let nodes = m.find_nodes(f);
        assert_eq!(nodes.len(), 5);
        assert_eq!(nodes, BTreeSet::from([m.zero(), m.one(), a, b, f]));
        assert_eq!(m.find_vars(f), BTreeSet::from([a, b]));

        assert_eq!(m.find_nodes(m.one()), BTreeSet::from([m.one()]));
        assert!(m.find_vars(m.one()).is_empty());
        assert_eq!(m.size(a), 3);
    }

    #[test]
    fn test_find_nodes_shared() {
        let m = Manager::default();
        let vars: Vec<_> = (0..16).map(|i| m.create_var(&format!("x{}", i))).collect();

        // Parity of 16 variables has 2 nodes per level (except the top)
        let f = vars.iter().fold(m.zero(), |acc, &x| m.xor2(acc, x));
        let nodes = m.find_nodes(f);
        assert_eq!(nodes.len(), 1 + 2 * 15 + 2);
        assert_eq!(m.find_vars(f).len(), 16);
    }

    #[test]
    fn test_top_var_name() {
        let m = Manager::default();
        let a = m.create_var("a");
        let b = m.create_var("b");
        let f = m.or2(a, b);
        assert_eq!(m.top_var_name(f), "a");
        assert_eq!(m.top_var_name(m.high(f)), "True");
        assert_eq!(m.top_var_name(m.low(f)), "b");
    }

    #[test]
    fn test_try_ite_invalid_reference() {
        let m = Manager::default();
        let a = m.create_var("a");
        let bad = NodeId::new(999);

        assert_eq!(m.try_ite(a, bad, m.zero()), Err(Error::InvalidReference(bad)));
        assert_eq!(m.validate(bad), Err(Error::InvalidReference(bad)));
        assert_eq!(m.try_ite(a, m.zero(), m.one()), Ok(m.neg(a)));
    }

    #[test]
    #[should_panic(expected = "does not exist")]
    fn test_ite_invalid_reference_panics() {
        let m = Manager::default();
        let a = m.create_var("a");
        m.ite(a, NodeId::new(999), m.zero());
    }

    #[test]
    fn test_config() {
        let config = ManagerConfig::default()
            .with_node_capacity(16)
            .with_cache_capacity(32);
        assert_eq!(config.node_capacity, 16);
        assert_eq!(config.cache_capacity, 32);

        let m = Manager::new(config);
        assert_eq!(m.unique_table_size(), 2);
    }

    #[test]
    fn test_bracket_string() {
        let m = Manager::default();
        let a = m.create_var("a");
        let b = m.create_var("b");
        let f = m.and2(a, b);
        assert_eq!(m.to_bracket_string(f), "@4:(a, @3:(b, (1), (0)), (0))");
    }
}
