//! Matter Widget Library
//!
//! Material components with state-driven styling:
//!
//! - [`tab_bar::TabBarView`] - a tab bar that degrades its layout style
//!   when items do not fit
//! - [`button::FloatingButton`] - a floating action button with FSM-driven
//!   interactions
//! - [`state`] - per-control-state style tables with live fallback

pub mod button;
pub mod error;
pub mod state;
pub mod tab_bar;
pub mod themer;
pub mod widget;

pub use button::{
    ButtonAppearance, ButtonPhase, ButtonStyle, FloatingButton, FloatingButtonShape,
    DEFAULT_DISABLED_ALPHA,
};
pub use error::{Result, WidgetError};
pub use state::{
    ControlState, ImageTintColor, StateStyleResolver, StateTable, StyleAttribute, TitleColor,
    TitleFont,
};
pub use tab_bar::{TabBarItem, TabBarView};
#[allow(deprecated)]
pub use themer::FloatingButtonColorThemer;
pub use widget::{Widget, WidgetId};
