//! Easing curves for timed transitions
//!
//! The named curves are the Material motion curves. Every curve maps
//! `0.0 -> 0.0` and `1.0 -> 1.0` exactly.

/// Easing curve applied to a transition's linear progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    /// Material standard curve, cubic-bezier(0.4, 0.0, 0.2, 1.0)
    Standard,
    /// Entering elements, cubic-bezier(0.0, 0.0, 0.2, 1.0)
    Deceleration,
    /// Exiting elements, cubic-bezier(0.4, 0.0, 1.0, 1.0)
    Acceleration,
    /// Elements that may return, cubic-bezier(0.4, 0.0, 0.6, 1.0)
    Sharp,
    /// Classic ease-in-ease-out, cubic-bezier(0.42, 0.0, 0.58, 1.0)
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Control points `(x1, y1, x2, y2)` of the curve, `None` for linear
    pub fn control_points(&self) -> Option<(f32, f32, f32, f32)> {
        match *self {
            Easing::Linear => None,
            Easing::Standard => Some((0.4, 0.0, 0.2, 1.0)),
            Easing::Deceleration => Some((0.0, 0.0, 0.2, 1.0)),
            Easing::Acceleration => Some((0.4, 0.0, 1.0, 1.0)),
            Easing::Sharp => Some((0.4, 0.0, 0.6, 1.0)),
            Easing::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Easing::CubicBezier(x1, y1, x2, y2) => Some((x1, y1, x2, y2)),
        }
    }

    /// Apply the curve to a progress value (clamped to 0.0..=1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self.control_points() {
            None => t,
            Some((x1, y1, x2, y2)) => CubicBezier::new(x1, y1, x2, y2).solve(t),
        }
    }
}

/// Unit cubic bezier through (0,0) and (1,1)
#[derive(Clone, Copy, Debug)]
struct CubicBezier {
    x: Polynomial,
    y: Polynomial,
}

/// Coefficients of `((a*p + b)*p + c)*p` for one axis
#[derive(Clone, Copy, Debug)]
struct Polynomial {
    a: f64,
    b: f64,
    c: f64,
}

impl Polynomial {
    fn from_controls(p1: f32, p2: f32) -> Self {
        let (p1, p2) = (p1 as f64, p2 as f64);
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        Self { a, b, c }
    }

    #[inline]
    fn sample(&self, p: f64) -> f64 {
        ((self.a * p + self.b) * p + self.c) * p
    }

    #[inline]
    fn derivative(&self, p: f64) -> f64 {
        (3.0 * self.a * p + 2.0 * self.b) * p + self.c
    }
}

impl CubicBezier {
    const EPSILON: f64 = 1e-7;

    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: Polynomial::from_controls(x1, x2),
            y: Polynomial::from_controls(y1, y2),
        }
    }

    /// Eased output for input progress `t`
    fn solve(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let p = self.parameter_for_x(t as f64);
        self.y.sample(p) as f32
    }

    /// Find the curve parameter whose x equals `x`.
    ///
    /// Newton iterations first; bisection when the slope flattens out.
    fn parameter_for_x(&self, x: f64) -> f64 {
        let mut p = x;
        for _ in 0..8 {
            let error = self.x.sample(p) - x;
            if error.abs() < Self::EPSILON {
                return p;
            }
            let slope = self.x.derivative(p);
            if slope.abs() < Self::EPSILON {
                break;
            }
            p -= error / slope;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        p = x;
        for _ in 0..32 {
            let value = self.x.sample(p);
            if (value - x).abs() < Self::EPSILON {
                break;
            }
            if value < x {
                lo = p;
            } else {
                hi = p;
            }
            p = (lo + hi) * 0.5;
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::Standard,
            Easing::Deceleration,
            Easing::Acceleration,
            Easing::Sharp,
            Easing::EaseInOut,
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::Standard.apply(-0.5), 0.0);
        assert_eq!(Easing::Standard.apply(1.5), 1.0);
    }

    #[test]
    fn test_standard_curve_front_loads_motion() {
        // Standard accelerates quickly and settles slowly.
        assert!(Easing::Standard.apply(0.5) > 0.5);
        assert!(Easing::Acceleration.apply(0.5) < 0.5);
    }

    #[test]
    fn test_symmetric_bezier_midpoint() {
        let mid = Easing::EaseInOut.apply(0.5);
        assert!((mid - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_monotonic() {
        let mut previous = 0.0;
        for i in 1..=100 {
            let value = Easing::Standard.apply(i as f32 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }
}
