//! Selection indicator shapes

use matter_core::Rect;

/// Produces the indicator frame for a selected item
pub trait SelectionIndicatorTemplate {
    /// `item_frame` is the selected item's frame in bar coordinates
    fn indicator_frame(&self, item_frame: Rect) -> Rect;
}

/// Bar along the bottom edge of the selected item
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnderlineIndicatorTemplate {
    pub thickness: f32,
}

impl Default for UnderlineIndicatorTemplate {
    fn default() -> Self {
        Self { thickness: 2.0 }
    }
}

impl SelectionIndicatorTemplate for UnderlineIndicatorTemplate {
    fn indicator_frame(&self, item_frame: Rect) -> Rect {
        Rect::new(
            item_frame.x(),
            item_frame.max_y() - self.thickness,
            item_frame.width(),
            self.thickness,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underline_hugs_bottom_edge() {
        let frame = UnderlineIndicatorTemplate::default()
            .indicator_frame(Rect::new(90.0, 0.0, 90.0, 48.0));
        assert_eq!(frame, Rect::new(90.0, 46.0, 90.0, 2.0));
    }
}
