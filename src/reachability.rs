//! Symbolic reachability analysis of finite-state machines.
//!
//! A machine has `n` state bits and `k` input bits. Its behaviour is given by
//! one transition function per state bit, `δᵢ(s, x)`, each a diagram over the
//! current-state and input variables. Sets of states are characteristic
//! functions over the current-state variables.
//!
//! The engine encodes the machine as the transition relation
//!
//! ```text
//! τ(s, x, s') = ∧ᵢ (s'ᵢ ⟺ δᵢ(s, x))
//! ```
//!
//! and explores the state space breadth-first: starting from the initial
//! state, every step computes the image of the current frontier, keeps only
//! the states that were not seen before, and records them as the next
//! *layer*. Layer `k` therefore holds exactly the states at distance `k`.
//!
//! ```
//! use robdd_reach::reachability::Reachability;
//!
//! let mut fsm = Reachability::new(2, 0).unwrap();
//! let s = fsm.states().to_vec();
//! let m = fsm.manager();
//! let functions = vec![m.neg(s[0]), m.neg(s[1])];
//! fsm.set_transition_functions(&functions).unwrap();
//!
//! assert!(fsm.is_reachable(&[true, true]).unwrap());
//! assert!(!fsm.is_reachable(&[true, false]).unwrap());
//! assert_eq!(fsm.state_distance(&[true, true]).unwrap(), Some(1));
//! ```

use std::cell::RefCell;

use log::{debug, info};
use num_bigint::BigUint;

use crate::error::{Error, Result};
use crate::manager::Manager;
use crate::node::NodeId;

pub struct Reachability {
    manager: Manager,
    /// Current-state variables `s0, s1, ...`
    states: Vec<NodeId>,
    /// Next-state variables `s0', s1', ...`
    next_states: Vec<NodeId>,
    /// Input variables `x0, x1, ...`
    inputs: Vec<NodeId>,
    transition_functions: Vec<NodeId>,
    init_state: Vec<bool>,
    /// BFS layers, `None` when stale.
    layers: RefCell<Option<Vec<NodeId>>>,
}

impl Reachability {
    /// Create a machine with `state_size` state bits and `input_size` inputs.
    ///
    /// The machine starts in the all-false state and keeps its state forever
    /// (every transition function is the identity).
    pub fn new(state_size: usize, input_size: usize) -> Result<Self> {
        Self::with_manager(Manager::default(), state_size, input_size)
    }

    /// Same as [`Reachability::new`], but on a caller-configured manager.
    pub fn with_manager(manager: Manager, state_size: usize, input_size: usize) -> Result<Self> {
        if state_size == 0 {
            return Err(Error::InvalidConfiguration("state size must be positive".to_string()));
        }

        // Interleaved order: s0 < s0' < s1 < s1' < ... < x0 < x1 < ...
        let mut states = Vec::with_capacity(state_size);
        let mut next_states = Vec::with_capacity(state_size);
        for i in 0..state_size {
            states.push(manager.create_var(&format!("s{}", i)));
            next_states.push(manager.create_var(&format!("s{}'", i)));
        }
        let inputs: Vec<NodeId> = (0..input_size)
            .map(|j| manager.create_var(&format!("x{}", j)))
            .collect();

        info!(
            "Created machine with {} state bits and {} inputs",
            state_size, input_size
        );

        Ok(Self {
            manager,
            transition_functions: states.clone(),
            init_state: vec![false; state_size],
            states,
            next_states,
            inputs,
            layers: RefCell::new(None),
        })
    }

    pub fn manager(&self) -> &Manager {
        &self.manager
    }

    /// Current-state variables, least significant first.
    pub fn states(&self) -> &[NodeId] {
        &self.states
    }

    pub fn inputs(&self) -> &[NodeId] {
        &self.inputs
    }

    pub fn state_size(&self) -> usize {
        self.states.len()
    }

    pub fn transition_functions(&self) -> &[NodeId] {
        &self.transition_functions
    }

    pub fn init_state(&self) -> &[bool] {
        &self.init_state
    }

    fn check_size(&self, actual: usize) -> Result<()> {
        if actual != self.state_size() {
            return Err(Error::SizeMismatch {
                expected: self.state_size(),
                actual,
            });
        }
        Ok(())
    }

    fn invalidate(&mut self) {
        if self.layers.get_mut().take().is_some() {
            debug!("Dropped cached layers");
        }
    }

    pub fn set_init_state(&mut self, state: &[bool]) -> Result<()> {
        self.check_size(state.len())?;
        self.init_state = state.to_vec();
        self.invalidate();
        Ok(())
    }

    pub fn set_transition_functions(&mut self, functions: &[NodeId]) -> Result<()> {
        self.check_size(functions.len())?;
        for &f in functions {
            self.manager.validate(f)?;
        }
        self.transition_functions = functions.to_vec();
        self.invalidate();
        Ok(())
    }

    /// Characteristic function of a single state.
    fn state_cube(&self, state: &[bool]) -> NodeId {
        self.manager.cube(self.states.iter().copied().zip(state.iter().copied()))
    }

    /// Characteristic function of the initial state.
    pub fn initial_states(&self) -> NodeId {
        self.state_cube(&self.init_state)
    }

    /// Build `τ(s, x, s') = ∧ᵢ (s'ᵢ ⟺ δᵢ(s, x))`.
    pub fn transition_relation(&self) -> NodeId {
        let m = &self.manager;
        let mut tau = m.one();
        for (&next, &delta) in self.next_states.iter().zip(&self.transition_functions) {
            let eq = m.eval(next % delta);
            tau = m.eval(eq & tau);
        }
        tau
    }

    /// Build `∧ᵢ (sᵢ ⟺ s'ᵢ)`, used to rename next-state variables back.
    fn rename_relation(&self) -> NodeId {
        let m = &self.manager;
        let mut res = m.one();
        for (&s, &next) in self.states.iter().zip(&self.next_states) {
            let eq = m.eval(s % next);
            res = m.eval(res & eq);
        }
        res
    }

    /// Successors of `from` under `tau`, expressed over the current-state variables.
    fn image(&self, from: NodeId, tau: NodeId, rename: NodeId) -> NodeId {
        let m = &self.manager;

        // ∃s,x. from(s) ∧ τ(s, x, s')
        let step = m.eval(from & tau);
        let step = m.exists(step, self.states.iter().copied());
        let img_next = m.exists(step, self.inputs.iter().copied());

        // ∃s'. img(s') ∧ (s ⟺ s')
        let renamed = m.eval(img_next & rename);
        m.exists(renamed, self.next_states.iter().copied())
    }

    /// Run the breadth-first fixed point from scratch and cache the layers.
    pub fn compute_reachable_states(&self) -> Vec<NodeId> {
        let m = &self.manager;
        let tau = self.transition_relation();
        let rename = self.rename_relation();

        let init = self.initial_states();
        let mut layers = vec![init];
        let mut reached = init;
        let mut frontier = init;

        loop {
            let successors = self.image(frontier, tau, rename);
            let new_states = m.eval(successors & m.eval(!reached));
            if m.is_zero(new_states) {
                break;
            }
            debug!(
                "Layer {}: {} nodes, arena size {}",
                layers.len(),
                m.size(new_states),
                m.unique_table_size()
            );
            layers.push(new_states);
            reached = m.eval(reached | new_states);
            frontier = new_states;
        }

        info!("Fixed point reached after {} layers", layers.len());
        *self.layers.borrow_mut() = Some(layers.clone());
        layers
    }

    /// BFS layers: `layers()[k]` holds the states at distance exactly `k`.
    pub fn layers(&self) -> Vec<NodeId> {
        let cached = self.layers.borrow().clone();
        match cached {
            Some(layers) => layers,
            None => self.compute_reachable_states(),
        }
    }

    /// Characteristic function of all reachable states.
    pub fn reachable_states(&self) -> NodeId {
        self.manager.or_many(self.layers())
    }

    pub fn num_reachable_states(&self) -> BigUint {
        self.manager.sat_count(self.reachable_states(), &self.states)
    }

    /// Largest finite distance from the initial state.
    pub fn diameter(&self) -> usize {
        self.layers().len() - 1
    }

    pub fn is_reachable(&self, state: &[bool]) -> Result<bool> {
        Ok(self.state_distance(state)?.is_some())
    }

    /// Number of steps needed to reach `state`, or `None` if it is unreachable.
    pub fn state_distance(&self, state: &[bool]) -> Result<Option<usize>> {
        self.check_size(state.len())?;
        let m = &self.manager;
        let target = self.state_cube(state);
        let distance = self
            .layers()
            .iter()
            .position(|&layer| !m.is_zero(m.and2(layer, target)));
        Ok(distance)
    }
}
