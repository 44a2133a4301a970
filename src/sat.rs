use std::collections::HashMap;

use num_bigint::BigUint;

use crate::manager::Manager;
use crate::node::NodeId;

impl Manager {
    /// Returns one satisfying path of `f` as `(variable, value)` pairs.
    ///
    /// Variables not on the path are unconstrained.
    /// Returns `None` if `f` is the constant false function.
    pub fn one_sat(&self, f: NodeId) -> Option<Vec<(NodeId, bool)>> {
        if self.is_zero(f) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = f;

        // In a reduced diagram every non-zero node is satisfiable
        while !self.is_one(current) {
            let v = self.top_var(current);
            let high = self.high(current);
            if !self.is_zero(high) {
                path.push((v, true));
                current = high;
            } else {
                path.push((v, false));
                current = self.low(current);
            }
        }

        Some(path)
    }

    /// Number of assignments to `vars` that satisfy `f`.
    ///
    /// # Panics
    ///
    /// Panics if `f` depends on a variable that is not in `vars`.
    pub fn sat_count(&self, f: NodeId, vars: &[NodeId]) -> BigUint {
        let mut vars = vars.to_vec();
        vars.sort();
        vars.dedup();

        let position: HashMap<NodeId, usize> = vars.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        for v in self.find_vars(f) {
            assert!(
                position.contains_key(&v),
                "Function depends on variable {} outside of the counted set",
                v
            );
        }

        let mut cache = HashMap::new();
        let count = self._sat_count(f, &position, vars.len(), &mut cache);
        count << self.level_in(f, &position, vars.len())
    }

    fn level_in(&self, f: NodeId, position: &HashMap<NodeId, usize>, n: usize) -> usize {
        if self.is_constant(f) {
            n
        } else {
            position[&self.top_var(f)]
        }
    }

    // Counts the assignments to the variables at and below the level of `f`.
    fn _sat_count(
        &self,
        f: NodeId,
        position: &HashMap<NodeId, usize>,
        n: usize,
        cache: &mut HashMap<NodeId, BigUint>,
    ) -> BigUint {
        if self.is_zero(f) {
            return BigUint::ZERO;
        } else if self.is_one(f) {
            return BigUint::from(1u32);
        }

        if let Some(count) = cache.get(&f) {
            return count.clone();
        }

        let level = position[&self.top_var(f)];
        let high = self.high(f);
        let low = self.low(f);

        let count_high = self._sat_count(high, position, n, cache) << (self.level_in(high, position, n) - level - 1);
        let count_low = self._sat_count(low, position, n, cache) << (self.level_in(low, position, n) - level - 1);

        let count = count_high + count_low;
        cache.insert(f, count.clone());
        count
    }
}
