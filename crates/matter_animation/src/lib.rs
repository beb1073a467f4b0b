//! Matter Animation System
//!
//! Easing curves, fixed-duration transitions, and the scheduler that ticks
//! them.
//!
//! # Features
//!
//! - **Easing**: Material motion curves solved as cubic beziers
//! - **Transitions**: Progress tracking with value interpolation
//! - **Scheduling**: Per-widget transition sets driven by host frames

pub mod easing;
pub mod scheduler;
pub mod transition;

pub use easing::Easing;
pub use scheduler::{AnimationScheduler, TransitionId};
pub use transition::{Lerp, Transition};
