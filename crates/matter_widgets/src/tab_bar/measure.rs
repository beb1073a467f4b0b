//! Title measurement

use matter_theme::{Font, FontWeight};

/// Measures rendered title widths
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &Font) -> f32;
}

/// Glyph-count estimate used when no text engine is attached
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimatedTextMeasurer {
    /// Average glyph advance as a fraction of the font size
    pub average_advance: f32,
}

impl Default for EstimatedTextMeasurer {
    fn default() -> Self {
        Self {
            average_advance: 0.55,
        }
    }
}

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, font: &Font) -> f32 {
        let weight = match font.weight {
            FontWeight::Light => 0.95,
            FontWeight::Regular => 1.0,
            FontWeight::Medium => 1.03,
            FontWeight::Bold => 1.08,
        };
        text.chars().count() as f32 * font.size * self.average_advance * weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_scales_with_size_and_length() {
        let measurer = EstimatedTextMeasurer::default();
        let font = Font::system(10.0, FontWeight::Regular);
        assert_eq!(measurer.measure("", &font), 0.0);
        assert!((measurer.measure("abcd", &font) - 22.0).abs() < 1e-4);
        let bigger = font.clone().with_size(20.0);
        assert!(measurer.measure("abcd", &bigger) > measurer.measure("abcd", &font));
    }
}
