//! Floating action button with FSM-driven interactions
//!
//! The button provides:
//! - Interaction phases: idle, hovered, pressed, disabled
//! - Per-control-state background, image tint, and title colors
//! - A ripple color for touch feedback drawn by the host
//!
//! Visual properties live in [`ButtonStyle`]; [`FloatingButton::appearance`]
//! resolves them for the current state.

use matter_core::events::EventKind;
use matter_core::fsm::StateMachine;
use matter_core::{Color, Event, Point, Rect, Size};
use matter_theme::{ColorPalette, OpacityToken, OpacityTokens};

use crate::state::{ControlState, StateTable};
use crate::widget::{Widget, WidgetId};

/// Interaction phases of the button state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonPhase {
    Idle,
    Hovered,
    Pressed,
    Disabled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum ButtonInput {
    Enter,
    Leave,
    Down,
    Up,
    Cancel,
    Disable,
    Enable,
}

/// Floating button sizes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FloatingButtonShape {
    /// 56pt diameter
    #[default]
    Default,
    /// 40pt diameter
    Mini,
}

impl FloatingButtonShape {
    pub fn diameter(&self) -> f32 {
        match self {
            FloatingButtonShape::Default => 56.0,
            FloatingButtonShape::Mini => 40.0,
        }
    }
}

/// Whole-button opacity of an unthemed disabled button
pub const DEFAULT_DISABLED_ALPHA: f32 = 0.38;

/// Per-state visual properties of a button
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonStyle {
    pub background_colors: StateTable<Color>,
    pub image_tint_colors: StateTable<Color>,
    pub title_colors: StateTable<Color>,
    /// Touch feedback color
    pub ripple_color: Color,
    /// Whole-button opacity while disabled
    pub disabled_alpha: f32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        let palette = ColorPalette::baseline_light();
        let mut style = Self {
            background_colors: StateTable::new(),
            image_tint_colors: StateTable::new(),
            title_colors: StateTable::new(),
            ripple_color: Color::BLACK
                .with_alpha(OpacityTokens::default().get(OpacityToken::Ripple)),
            disabled_alpha: DEFAULT_DISABLED_ALPHA,
        };
        style
            .background_colors
            .set(ControlState::Normal, Some(palette.secondary));
        style
            .image_tint_colors
            .set(ControlState::Normal, Some(palette.on_secondary));
        style
            .title_colors
            .set(ControlState::Normal, Some(palette.on_secondary));
        style
    }
}

/// Resolved visual properties for the button's current state
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonAppearance {
    pub state: ControlState,
    pub background_color: Color,
    pub image_tint_color: Color,
    pub title_color: Color,
    pub ripple_color: Color,
    /// Opacity applied to the whole button
    pub alpha: f32,
}

/// Floating action button widget
pub struct FloatingButton {
    id: WidgetId,
    title: String,
    shape: FloatingButtonShape,
    origin: Point,
    selected: bool,
    style: ButtonStyle,
    fsm: StateMachine<ButtonPhase, ButtonInput>,
    on_click: Option<Box<dyn FnMut()>>,
    clicked: bool,
}

impl FloatingButton {
    /// Create a new button
    pub fn new(shape: FloatingButtonShape) -> Self {
        Self {
            id: WidgetId::next(),
            title: String::new(),
            shape,
            origin: Point::ZERO,
            selected: false,
            style: ButtonStyle::default(),
            fsm: Self::create_fsm(),
            on_click: None,
            clicked: false,
        }
    }

    /// Create the button FSM
    fn create_fsm() -> StateMachine<ButtonPhase, ButtonInput> {
        let mut builder = StateMachine::builder(ButtonPhase::Idle)
            .on(ButtonPhase::Idle, ButtonInput::Enter, ButtonPhase::Hovered)
            .on(ButtonPhase::Idle, ButtonInput::Down, ButtonPhase::Pressed)
            .on(ButtonPhase::Hovered, ButtonInput::Leave, ButtonPhase::Idle)
            .on(ButtonPhase::Hovered, ButtonInput::Down, ButtonPhase::Pressed)
            .on(ButtonPhase::Pressed, ButtonInput::Up, ButtonPhase::Hovered)
            .on(ButtonPhase::Pressed, ButtonInput::Leave, ButtonPhase::Idle)
            .on(ButtonPhase::Pressed, ButtonInput::Cancel, ButtonPhase::Idle)
            .on(ButtonPhase::Disabled, ButtonInput::Enable, ButtonPhase::Idle);
        for phase in [ButtonPhase::Idle, ButtonPhase::Hovered, ButtonPhase::Pressed] {
            builder = builder.on(phase, ButtonInput::Disable, ButtonPhase::Disabled);
        }
        builder.build()
    }

    /// Set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the click callback
    pub fn on_click<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn title_text(&self) -> &str {
        &self.title
    }

    pub fn shape(&self) -> FloatingButtonShape {
        self.shape
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn phase(&self) -> ButtonPhase {
        self.fsm.current_state()
    }

    pub fn is_enabled(&self) -> bool {
        !self.fsm.is_in(ButtonPhase::Disabled)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        let input = if enabled {
            ButtonInput::Enable
        } else {
            ButtonInput::Disable
        };
        self.fsm.send(input);
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Control state the style tables are resolved for
    pub fn control_state(&self) -> ControlState {
        match self.fsm.current_state() {
            ButtonPhase::Disabled => ControlState::Disabled,
            ButtonPhase::Pressed => ControlState::Highlighted,
            ButtonPhase::Idle | ButtonPhase::Hovered if self.selected => ControlState::Selected,
            ButtonPhase::Idle | ButtonPhase::Hovered => ControlState::Normal,
        }
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut ButtonStyle {
        &mut self.style
    }

    pub fn set_background_color(&mut self, color: Option<Color>, state: ControlState) {
        self.style.background_colors.set(state, color);
    }

    pub fn set_image_tint_color(&mut self, color: Option<Color>, state: ControlState) {
        self.style.image_tint_colors.set(state, color);
    }

    pub fn set_title_color(&mut self, color: Option<Color>, state: ControlState) {
        self.style.title_colors.set(state, color);
    }

    pub fn set_ripple_color(&mut self, color: Color) {
        self.style.ripple_color = color;
    }

    pub fn set_disabled_alpha(&mut self, alpha: f32) {
        self.style.disabled_alpha = alpha.clamp(0.0, 1.0);
    }

    /// Resolve the style for the current state
    pub fn appearance(&self) -> ButtonAppearance {
        let state = self.control_state();
        let style = &self.style;
        ButtonAppearance {
            state,
            background_color: style
                .background_colors
                .resolve_or(state, Color::TRANSPARENT),
            image_tint_color: style.image_tint_colors.resolve_or(state, Color::BLACK),
            title_color: style.title_colors.resolve_or(state, Color::BLACK),
            ripple_color: style.ripple_color,
            alpha: if state == ControlState::Disabled {
                style.disabled_alpha
            } else {
                1.0
            },
        }
    }

    /// Check if the button was clicked and clear the flag
    pub fn take_clicked(&mut self) -> bool {
        std::mem::take(&mut self.clicked)
    }

    fn bounds(&self) -> Rect {
        let d = self.shape.diameter();
        Rect::new(0.0, 0.0, d, d)
    }
}

impl Widget for FloatingButton {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn frame(&self) -> Rect {
        let d = self.shape.diameter();
        Rect {
            origin: self.origin,
            size: Size::new(d, d),
        }
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        if !self.is_enabled() {
            return false;
        }

        let inside = self.bounds().contains(event.position);
        let input = match event.kind {
            EventKind::PointerEnter => ButtonInput::Enter,
            EventKind::PointerLeave => ButtonInput::Leave,
            EventKind::PointerDown if inside => ButtonInput::Down,
            EventKind::PointerUp if inside => ButtonInput::Up,
            EventKind::PointerUp => ButtonInput::Leave,
            EventKind::PointerMove if !inside => ButtonInput::Leave,
            EventKind::PointerCancel => ButtonInput::Cancel,
            _ => return false,
        };

        let old_phase = self.fsm.current_state();
        let new_phase = self.fsm.send(input);

        // Click is a release inside the button after a press
        if old_phase == ButtonPhase::Pressed && new_phase == ButtonPhase::Hovered {
            self.clicked = true;
            tracing::debug!("FloatingButton {:?} clicked", self.id);
            if let Some(ref mut callback) = self.on_click {
                callback();
            }
        }

        old_phase != new_phase
    }
}
