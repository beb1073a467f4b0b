//! Fixed-duration transitions
//!
//! A [`Transition`] only tracks progress. Callers interpolate their own
//! values with [`Lerp`] using [`Transition::value`].

use std::time::Duration;

use matter_core::{Color, Rect};

use crate::easing::Easing;

/// Values that can be linearly interpolated
pub trait Lerp: Sized {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Lerp for Color {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Color::lerp(from, to, t)
    }
}

impl Lerp for Rect {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Rect::lerp(from, to, t)
    }
}

/// A transition with a fixed duration and easing curve
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    duration: Duration,
    easing: Easing,
    elapsed: Duration,
}

impl Transition {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            elapsed: Duration::ZERO,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Advance by `dt`. Returns true once the transition has finished.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Linear progress in `0.0..=1.0`
    pub fn linear_progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased progress in `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        self.easing.apply(self.linear_progress())
    }

    /// Interpolate between `from` and `to` at the current eased progress
    pub fn value<T: Lerp>(&self, from: &T, to: &T) -> T {
        T::lerp(from, to, self.progress())
    }
}
