//! Connective expressions over [`NodeId`]s.
//!
//! `a & b`, `a | b`, `a ^ b`, `a % b` (equivalence) and `!a` build an
//! unevaluated [`Apply`] or [`Negate`] that [`Manager::eval`] turns into a node:
//!
//! ```
//! use robdd_reach::manager::Manager;
//!
//! let m = Manager::default();
//! let a = m.create_var("a");
//! let b = m.create_var("b");
//! assert_eq!(m.eval(a & b), m.and2(a, b));
//! assert_eq!(m.eval(a % b), m.xnor2(a, b));
//! assert_eq!(m.eval(!a), m.neg(a));
//! ```

use std::ops::{BitAnd, BitOr, BitXor, Not, Rem};

use crate::manager::Manager;
use crate::node::NodeId;

/// Binary connective applied by [`Apply`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Connective {
    And,
    Or,
    Xor,
    Xnor,
}

/// `f <op> g`, not yet built.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Apply {
    pub op: Connective,
    pub f: NodeId,
    pub g: NodeId,
}

/// `¬f`, not yet built.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Negate(pub NodeId);

impl BitAnd for NodeId {
    type Output = Apply;

    fn bitand(self, rhs: Self) -> Apply {
        Apply { op: Connective::And, f: self, g: rhs }
    }
}

impl BitOr for NodeId {
    type Output = Apply;

    fn bitor(self, rhs: Self) -> Apply {
        Apply { op: Connective::Or, f: self, g: rhs }
    }
}

impl BitXor for NodeId {
    type Output = Apply;

    fn bitxor(self, rhs: Self) -> Apply {
        Apply { op: Connective::Xor, f: self, g: rhs }
    }
}

impl Rem for NodeId {
    type Output = Apply;

    fn rem(self, rhs: Self) -> Apply {
        Apply { op: Connective::Xnor, f: self, g: rhs }
    }
}

impl Not for NodeId {
    type Output = Negate;

    fn not(self) -> Negate {
        Negate(self)
    }
}

/// Anything the manager can turn into a node.
pub trait Eval {
    fn eval(&self, manager: &Manager) -> NodeId;
}

impl Manager {
    pub fn eval(&self, value: impl Eval) -> NodeId {
        value.eval(self)
    }
}

impl Eval for NodeId {
    fn eval(&self, _manager: &Manager) -> NodeId {
        *self
    }
}

impl Eval for Apply {
    fn eval(&self, manager: &Manager) -> NodeId {
        match self.op {
            Connective::And => manager.and2(self.f, self.g),
            Connective::Or => manager.or2(self.f, self.g),
            Connective::Xor => manager.xor2(self.f, self.g),
            Connective::Xnor => manager.xnor2(self.f, self.g),
        }
    }
}

impl Eval for Negate {
    fn eval(&self, manager: &Manager) -> NodeId {
        manager.neg(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_operators_build_deferred_apply() {
        let m = Manager::default();
        let x = m.create_var("x");
        let y = m.create_var("y");
        assert_eq!(x & y, Apply { op: Connective::And, f: x, g: y });
        assert_eq!(x % y, Apply { op: Connective::Xnor, f: x, g: y });
        assert_eq!(!x, Negate(x));
        // Nothing is built until evaluated
        assert_eq!(m.unique_table_size(), 4);
    }

    #[test]
    fn test_eval_matches_connectives() {
        let m = Manager::default();
        let x = m.create_var("x");
        let y = m.create_var("y");
        assert_eq!(m.eval(x), x);
        assert_eq!(m.eval(x & y), m.and2(x, y));
        assert_eq!(m.eval(x | y), m.or2(x, y));
        assert_eq!(m.eval(x ^ y), m.xor2(x, y));
        assert_eq!(m.eval(x % y), m.xnor2(x, y));
        assert_eq!(m.eval(!x), m.neg(x));
    }

    #[test]
    fn test_eval_identities() {
        let m = Manager::default();
        let x = m.create_var("x");
        assert_eq!(m.eval(x % x), m.one());
        assert_eq!(m.eval(x ^ x), m.zero());
        assert_eq!(m.eval(x & m.eval(!x)), m.zero());
        assert_eq!(m.eval(x | m.eval(!x)), m.one());
    }
}
