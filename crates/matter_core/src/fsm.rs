//! Finite state machines for widget interaction states
//!
//! Machines are generic over their state and event types, so widgets can use
//! plain enums instead of numeric ids. Supports:
//! - Guards (conditional transitions)
//! - Entry/exit actions
//! - Transition actions
//!
//! Everything here runs on the UI thread; callbacks are not `Send`.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::{CoreError, Result};

/// A guard function that determines if a transition should occur
pub type Guard = Box<dyn Fn() -> bool>;

/// An action function executed during transitions
pub type Action = Box<dyn FnMut()>;

/// Transitions kept by a machine unless the builder says otherwise
pub const DEFAULT_HISTORY_LIMIT: usize = 32;

/// Bound for state and event identifiers
pub trait MachineKey: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> MachineKey for T {}

/// A transition in the state machine
pub struct Transition<S, E> {
    pub from_state: S,
    pub event: E,
    pub to_state: S,
    pub guard: Option<Guard>,
    pub actions: SmallVec<[Action; 2]>,
}

impl<S: MachineKey, E: MachineKey> Transition<S, E> {
    /// Create a simple transition without guard or actions
    pub fn new(from: S, event: E, to: S) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
            guard: None,
            actions: SmallVec::new(),
        }
    }

    /// Add a guard condition
    pub fn with_guard<F: Fn() -> bool + 'static>(mut self, guard: F) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    /// Add an action to execute during transition
    pub fn with_action<F: FnMut() + 'static>(mut self, action: F) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    fn accepts(&self, state: S, event: E) -> bool {
        self.from_state == state
            && self.event == event
            && self.guard.as_ref().map_or(true, |guard| guard())
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder<S, E> {
    initial_state: S,
    transitions: Vec<Transition<S, E>>,
    entry_callbacks: FxHashMap<S, Vec<Action>>,
    exit_callbacks: FxHashMap<S, Vec<Action>>,
    history_limit: usize,
}

impl<S: MachineKey, E: MachineKey> StateMachineBuilder<S, E> {
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
            entry_callbacks: FxHashMap::default(),
            exit_callbacks: FxHashMap::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Keep at most `limit` recent transitions; zero disables recording
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Add a transition
    pub fn transition(mut self, transition: Transition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add a simple transition (from, event, to)
    pub fn on(mut self, from: S, event: E, to: S) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Add an entry action for a state
    pub fn on_enter<F: FnMut() + 'static>(mut self, state: S, action: F) -> Self {
        self.entry_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(action));
        self
    }

    /// Add an exit action for a state
    pub fn on_exit<F: FnMut() + 'static>(mut self, state: S, action: F) -> Self {
        self.exit_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(action));
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine<S, E> {
        StateMachine {
            current_state: self.initial_state,
            transitions: self.transitions,
            entry_callbacks: self.entry_callbacks,
            exit_callbacks: self.exit_callbacks,
            history: Vec::with_capacity(self.history_limit.min(DEFAULT_HISTORY_LIMIT)),
            history_limit: self.history_limit,
        }
    }
}

/// A state machine instance
pub struct StateMachine<S, E> {
    current_state: S,
    transitions: Vec<Transition<S, E>>,
    entry_callbacks: FxHashMap<S, Vec<Action>>,
    exit_callbacks: FxHashMap<S, Vec<Action>>,
    /// Most recent transitions, oldest first (for debugging)
    history: Vec<(S, E, S)>,
    history_limit: usize,
}

impl<S: MachineKey, E: MachineKey> StateMachine<S, E> {
    /// Create a builder for a state machine
    pub fn builder(initial_state: S) -> StateMachineBuilder<S, E> {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Get the most recent transitions, oldest first
    pub fn history(&self) -> &[(S, E, S)] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Check if an event can trigger a transition from current state
    pub fn can_send(&self, event: E) -> bool {
        self.transitions
            .iter()
            .any(|t| t.accepts(self.current_state, event))
    }

    /// Send an event, ignoring events with no matching transition.
    ///
    /// Returns the state after the event.
    pub fn send(&mut self, event: E) -> S {
        match self.try_send(event) {
            Ok(state) => state,
            Err(_) => self.current_state,
        }
    }

    /// Send an event, failing when the current state has no transition for it
    pub fn try_send(&mut self, event: E) -> Result<S> {
        let current = self.current_state;
        let Some(idx) = self
            .transitions
            .iter()
            .position(|t| t.accepts(current, event))
        else {
            return Err(CoreError::InvalidTransition {
                state: format!("{current:?}"),
                event: format!("{event:?}"),
            });
        };

        let to_state = self.transitions[idx].to_state;

        if let Some(callbacks) = self.exit_callbacks.get_mut(&current) {
            callbacks.iter_mut().for_each(|callback| callback());
        }

        self.transitions[idx]
            .actions
            .iter_mut()
            .for_each(|action| action());

        self.current_state = to_state;
        self.record(current, event, to_state);
        tracing::trace!("fsm: {:?} --{:?}--> {:?}", current, event, to_state);

        if let Some(callbacks) = self.entry_callbacks.get_mut(&to_state) {
            callbacks.iter_mut().for_each(|callback| callback());
        }

        Ok(to_state)
    }

    fn record(&mut self, from: S, event: E, to: S) {
        if self.history_limit == 0 {
            return;
        }
        if self.history.len() == self.history_limit {
            self.history.remove(0);
        }
        self.history.push((from, event, to));
    }
}
