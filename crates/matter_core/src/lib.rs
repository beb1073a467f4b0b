//! Matter Core
//!
//! Foundational primitives shared by the Matter component crates:
//!
//! - **Geometry**: points, sizes, rects, edge insets, layout direction
//! - **Color**: RGBA colors with hex parsing and blending
//! - **State Machines**: typed finite state machines for interaction states
//! - **Events**: pointer events delivered by the host
//! - **Platform**: host version and capability flags
//!
//! # Example
//!
//! ```rust
//! use matter_core::fsm::StateMachine;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Phase { Idle, Pressed }
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Input { Down, Up }
//!
//! let mut fsm = StateMachine::builder(Phase::Idle)
//!     .on(Phase::Idle, Input::Down, Phase::Pressed)
//!     .on(Phase::Pressed, Input::Up, Phase::Idle)
//!     .build();
//!
//! assert_eq!(fsm.send(Input::Down), Phase::Pressed);
//! ```

pub mod color;
pub mod error;
pub mod events;
pub mod fsm;
pub mod geometry;
pub mod platform;

pub use color::Color;
pub use error::{CoreError, Result};
pub use events::{Event, EventKind};
pub use fsm::{StateMachine, Transition};
pub use geometry::{EdgeInsets, LayoutDirection, Point, Rect, Size};
pub use platform::{Capabilities, PlatformVersion};
