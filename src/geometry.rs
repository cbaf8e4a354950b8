//! Geometric primitives.
//!
//! [`Point`] lives in continuous space and is what shapes store and matrices
//! transform. [`PixelPoint`] lives in discrete space and is what the
//! rasterizer consumes. [`Point::to_pixel`] is the single conversion step
//! between the two.

/// Largest pixel coordinate magnitude the rasterizer works with.
///
/// [`Point::to_pixel`] clamps into `-COORD_LIMIT..=COORD_LIMIT`, which keeps
/// every integer loop free of overflow and bounded in length.
pub const COORD_LIMIT: i32 = 1 << 15;

/// Round to the nearest integer, with halves rounding towards positive
/// infinity (`-2.5 -> -2`, `2.5 -> 3`).
///
/// Non-finite input yields 0 through the saturating float-to-int cast.
#[inline]
#[must_use]
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// A point with floating-point coordinates.
///
/// `z` is carried for uniformity with 3D pipelines; 2D shapes keep it at
/// zero and the 2D transforms pass it through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point {
    /// Origin point (0, 0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new 2D point (`z = 0`).
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Create a point with an explicit z coordinate.
    #[must_use]
    pub const fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Return a point with every coordinate rounded to the nearest integer.
    #[must_use]
    pub fn round(self) -> Self {
        Self::new_3d(
            round_half_up(self.x) as f64,
            round_half_up(self.y) as f64,
            round_half_up(self.z) as f64,
        )
    }

    /// Convert to discrete pixel space, rounding x and y and clamping both
    /// to [`COORD_LIMIT`].
    #[must_use]
    pub fn to_pixel(self) -> PixelPoint {
        PixelPoint::new(
            round_half_up(self.x).clamp(-COORD_LIMIT, COORD_LIMIT),
            round_half_up(self.y).clamp(-COORD_LIMIT, COORD_LIMIT),
        )
    }

    /// Compare with another point within `epsilon` on every axis.
    #[must_use]
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }

    /// Calculate the 2D distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new_3d(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }
}

/// A point on the integer pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PixelPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl PixelPoint {
    /// Create a new pixel point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for PixelPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn test_round_non_finite() {
        assert_eq!(round_half_up(f64::NAN), 0);
        assert_eq!(round_half_up(f64::INFINITY), i32::MAX);
    }

    #[test]
    fn test_point_round() {
        let p = Point::new(1.4, -0.6).round();
        assert_eq!(p, Point::new(1.0, -1.0));
    }

    #[test]
    fn test_point_to_pixel() {
        assert_eq!(Point::new(3.5, 7.2).to_pixel(), PixelPoint::new(4, 7));
        assert_eq!(Point::new(-0.5, -1.5).to_pixel(), PixelPoint::new(0, -1));
    }

    #[test]
    fn test_to_pixel_clamps() {
        assert_eq!(
            Point::new(1e9, -1e9).to_pixel(),
            PixelPoint::new(COORD_LIMIT, -COORD_LIMIT)
        );
        assert_eq!(Point::new(f64::NAN, f64::INFINITY).to_pixel(), PixelPoint::new(0, COORD_LIMIT));
    }

    #[test]
    fn test_point_approx_eq() {
        let a = Point::new(1.0, 2.0);
        assert!(a.approx_eq(Point::new(1.000_01, 1.999_99), 1e-4));
        assert!(!a.approx_eq(Point::new(1.1, 2.0), 1e-4));
    }

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert!((p1.distance(p2) - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_point_lerp() {
        let mid = Point::new(0.0, 0.0).lerp(Point::new(10.0, 10.0), 0.5);
        assert!(mid.approx_eq(Point::new(5.0, 5.0), 0.001));
    }

    #[test]
    fn test_origin() {
        assert_eq!(Point::ORIGIN, Point::default());
        assert_eq!(Point::ORIGIN.z, 0.0);
    }
}
