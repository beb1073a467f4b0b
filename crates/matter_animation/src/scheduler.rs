//! Animation scheduler
//!
//! Owns every in-flight transition of a widget and advances them when the
//! host delivers a frame.

use std::time::Duration;

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::transition::Transition;

new_key_type! {
    pub struct TransitionId;
}

/// Ticks a set of transitions
pub struct AnimationScheduler {
    transitions: SlotMap<TransitionId, Transition>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            transitions: SlotMap::with_key(),
        }
    }

    /// Start tracking a transition
    pub fn schedule(&mut self, transition: Transition) -> TransitionId {
        self.transitions.insert(transition)
    }

    /// Stop tracking a transition. Returns it if it was still in flight.
    pub fn cancel(&mut self, id: TransitionId) -> Option<Transition> {
        self.transitions.remove(id)
    }

    pub fn get(&self, id: TransitionId) -> Option<&Transition> {
        self.transitions.get(id)
    }

    pub fn is_active(&self, id: TransitionId) -> bool {
        self.transitions.contains_key(id)
    }

    /// Advance all transitions by `dt`.
    ///
    /// Finished transitions are removed; their ids are returned.
    pub fn tick(&mut self, dt: Duration) -> SmallVec<[TransitionId; 4]> {
        let mut finished = SmallVec::new();
        for (id, transition) in self.transitions.iter_mut() {
            if transition.tick(dt) {
                finished.push(id);
            }
        }
        for id in &finished {
            self.transitions.remove(*id);
        }
        if !finished.is_empty() {
            tracing::trace!("AnimationScheduler::tick - {} finished", finished.len());
        }
        finished
    }

    /// Check if any transitions are still in flight
    pub fn has_active_animations(&self) -> bool {
        !self.transitions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;

    #[test]
    fn test_finished_transitions_are_removed() {
        let mut scheduler = AnimationScheduler::new();
        let short = scheduler.schedule(Transition::new(Duration::from_millis(100), Easing::Linear));
        let long = scheduler.schedule(Transition::new(Duration::from_millis(300), Easing::Linear));

        let finished = scheduler.tick(Duration::from_millis(150));
        assert_eq!(finished.as_slice(), &[short]);
        assert!(!scheduler.is_active(short));
        assert!(scheduler.is_active(long));

        scheduler.tick(Duration::from_millis(150));
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.schedule(Transition::new(Duration::from_millis(100), Easing::Standard));
        assert!(scheduler.cancel(id).is_some());
        assert!(scheduler.cancel(id).is_none());
        assert!(scheduler.tick(Duration::from_millis(100)).is_empty());
    }
}
