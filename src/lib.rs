//! # robdd-reach: decision diagrams and symbolic reachability
//!
//! **`robdd-reach`** implements **Reduced Ordered Binary Decision Diagrams (ROBDDs)**
//! and a breadth-first symbolic reachability engine for finite-state machines built on top of them.
//!
//! ## What is an ROBDD?
//!
//! A Reduced Ordered Binary Decision Diagram represents a boolean function as a directed acyclic graph.
//! For a fixed variable order it is **canonical**: every boolean function has exactly one diagram,
//! so two functions are equal if and only if their root nodes are the same.
//!
//! ## Key Features
//!
//! - **Manager-Centric Architecture**: All operations go through the [`Manager`][crate::manager::Manager].
//!   It owns every node, keeps them unique (hash consing) and memoizes `ite` calls (computed table).
//! - **Plain handles**: Diagrams are referred to by [`NodeId`][crate::node::NodeId] handles, dense indices into an append-only arena.
//!   Node `0` is the constant false, node `1` the constant true.
//! - **Everything from ITE**: All connectives (AND, OR, XOR, ...) and cofactors are derived from the if-then-else operation.
//! - **Reachability**: The [`Reachability`][crate::reachability::Reachability] engine computes the reachable state space
//!   of a machine layer by layer, giving exact BFS distances.
//!
//! ## Basic Usage
//!
//! ```rust
//! use robdd_reach::manager::Manager;
//!
//! // 1. Initialize the manager
//! let m = Manager::default();
//!
//! // 2. Create variables (ordered by creation)
//! let a = m.create_var("a");
//! let b = m.create_var("b");
//!
//! // 3. Build a formula: f = a AND (NOT b)
//! let f = m.and2(a, m.neg(b));
//!
//! // 4. Check properties
//! assert!(!m.is_constant(f));
//! assert_eq!(m.find_vars(f).len(), 2);
//!
//! // 5. Fix a=true, b=false -> should be true
//! let res = m.co_factor_false(m.co_factor_true(f, a), b);
//! assert_eq!(res, m.one());
//! ```
//!
//! ## Core Components
//!
//! - **[`manager`]**: The diagram manager and the core algorithms.
//! - **[`reachability`]**: Symbolic breadth-first reachability.
//! - **[`dot`]**: Visualization using Graphviz.
//! - **[`sat`]**: Model counting and witnesses.

pub mod cache;
pub mod dot;
pub mod error;
pub mod eval;
pub mod manager;
pub mod node;
pub mod reachability;
pub mod sat;
pub mod table;
