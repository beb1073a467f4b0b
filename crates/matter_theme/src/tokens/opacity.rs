//! Opacity tokens for theming

/// Semantic opacity token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum OpacityToken {
    /// Container of a disabled control
    DisabledContainer,
    /// Content (icon, label) of a disabled control
    DisabledContent,
    /// Secondary content such as unselected tab titles
    MediumEmphasis,
    /// Touch feedback overlay
    Ripple,
}

/// Complete set of opacity tokens
#[derive(Clone, Debug, PartialEq)]
pub struct OpacityTokens {
    pub disabled_container: f32,
    pub disabled_content: f32,
    pub medium_emphasis: f32,
    pub ripple: f32,
}

impl OpacityTokens {
    /// Get opacity value by token key
    pub fn get(&self, token: OpacityToken) -> f32 {
        match token {
            OpacityToken::DisabledContainer => self.disabled_container,
            OpacityToken::DisabledContent => self.disabled_content,
            OpacityToken::MediumEmphasis => self.medium_emphasis,
            OpacityToken::Ripple => self.ripple,
        }
    }
}

impl Default for OpacityTokens {
    fn default() -> Self {
        Self {
            disabled_container: 0.12,
            disabled_content: 0.38,
            medium_emphasis: 0.6,
            ripple: 0.16,
        }
    }
}
