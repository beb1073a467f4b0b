//! Geometry primitives shared by every Matter component
//!
//! All values are in points. The y axis grows downward, matching the host
//! view hierarchies the widgets are embedded in.

use serde::Deserialize;

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// The null rectangle returned by geometry queries that have no answer
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn mid_x(&self) -> f32 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.origin.y + self.size.height / 2.0)
    }

    /// True when the rect covers no area
    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x < self.max_x()
            && point.y >= self.origin.y
            && point.y < self.max_y()
    }

    /// Offset the rect by a delta
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Rect {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            size: self.size,
        }
    }

    /// Shrink the rect by edge insets, clamping to zero size
    pub fn inset_by(&self, insets: EdgeInsets) -> Self {
        Rect::new(
            self.origin.x + insets.left,
            self.origin.y + insets.top,
            (self.size.width - insets.horizontal()).max(0.0),
            (self.size.height - insets.vertical()).max(0.0),
        )
    }

    /// Reflect the rect horizontally inside a container of `container_width`
    pub fn mirrored(&self, container_width: f32) -> Self {
        Rect::new(
            container_width - self.max_x(),
            self.origin.y,
            self.size.width,
            self.size.height,
        )
    }

    /// Component-wise linear interpolation
    pub fn lerp(from: &Rect, to: &Rect, t: f32) -> Rect {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Rect::new(
            mix(from.origin.x, to.origin.x),
            mix(from.origin.y, to.origin.y),
            mix(from.size.width, to.size.width),
            mix(from.size.height, to.size.height),
        )
    }
}

/// Insets for each edge of a rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same inset on the leading and trailing edges, another on top and bottom
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// True when every edge is a finite, non-negative number
    pub fn is_valid(&self) -> bool {
        [self.top, self.left, self.bottom, self.right]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Horizontal reading direction of the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_clamps_to_zero() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inset = rect.inset_by(EdgeInsets::symmetric(8.0, 8.0));
        assert_eq!(inset.size, Size::ZERO);
        assert_eq!(inset.origin, Point::new(8.0, 8.0));
    }

    #[test]
    fn test_mirrored() {
        let rect = Rect::new(10.0, 0.0, 30.0, 48.0);
        assert_eq!(rect.mirrored(100.0), Rect::new(60.0, 0.0, 30.0, 48.0));
    }

    #[test]
    fn test_contains_excludes_max_edge() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(!rect.contains(Point::new(10.0, 5.0)));
    }

    #[test]
    fn test_edge_insets_validation() {
        assert!(EdgeInsets::new(0.0, 52.0, 0.0, 0.0).is_valid());
        assert!(!EdgeInsets::new(-1.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!EdgeInsets::new(0.0, f32::NAN, 0.0, 0.0).is_valid());
    }
}
