//! 2D affine matrix algebra.
//!
//! Matrices are 3x3, stored as nine values in column-major order, acting on
//! homogeneous 2D coordinates:
//!
//! ```text
//! | m[0]  m[3]  m[6] |   | x |
//! | m[1]  m[4]  m[7] | * | y |
//! | m[2]  m[5]  m[8] |   | 1 |
//! ```
//!
//! `m[6]`/`m[7]` hold the translation. Every constructor here produces a
//! bottom row of `[0, 0, 1]` and [`AffineMatrix::multiply`] preserves it.
//!
//! `a.multiply(&b)` applies `b` first, then `a`:
//!
//! ```
//! use trueno_raster::geometry::Point;
//! use trueno_raster::transform::AffineMatrix;
//!
//! let t = AffineMatrix::translation(10.0, 0.0);
//! let s = AffineMatrix::scale(2.0, 2.0);
//! let p = Point::new(1.0, 1.0);
//!
//! // Scale, then translate.
//! assert_eq!(t.multiply(&s).transform_point(p), Point::new(12.0, 2.0));
//! ```

use crate::geometry::Point;
use crate::shape::Shape;
use std::ops::Mul;
use trueno::Vector;

/// Vertex buffers at least this large are filled through trueno vectors.
const SIMD_BATCH_THRESHOLD: usize = 16;

/// A 3x3 affine matrix in column-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMatrix {
    m: [f64; 9],
}

impl AffineMatrix {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// Wrap nine column-major values.
    #[must_use]
    pub const fn from_array(m: [f64; 9]) -> Self {
        Self { m }
    }

    /// The column-major values.
    #[must_use]
    pub const fn to_array(self) -> [f64; 9] {
        self.m
    }

    /// The identity matrix.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Translation by `(tx, ty)`.
    #[must_use]
    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self::from_array([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, tx, ty, 1.0])
    }

    /// Scale by `(sx, sy)` about the origin.
    #[must_use]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::from_array([sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0])
    }

    /// Rotation about the origin by `degrees`, counter-clockwise in a
    /// right-handed (y-up) frame.
    #[must_use]
    pub fn rotation(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::from_array([cos, sin, 0.0, -sin, cos, 0.0, 0.0, 0.0, 1.0])
    }

    /// Shear: `x' = x + shx * y`, `y' = y + shy * x`.
    #[must_use]
    pub const fn shear(shx: f64, shy: f64) -> Self {
        Self::from_array([1.0, shy, 0.0, shx, 1.0, 0.0, 0.0, 0.0, 1.0])
    }

    /// Matrix product `self * rhs`.
    ///
    /// Not commutative. The result transforms a point by `rhs` first and
    /// `self` second.
    #[must_use]
    pub fn multiply(&self, rhs: &Self) -> Self {
        let a = &self.m;
        let b = &rhs.m;
        let mut out = [0.0f64; 9];

        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] = a[row] * b[col * 3]
                    + a[3 + row] * b[col * 3 + 1]
                    + a[6 + row] * b[col * 3 + 2];
            }
        }

        Self::from_array(out)
    }

    /// Transform a point, ignoring the homogeneous row. `z` passes through.
    #[must_use]
    pub fn transform_point(&self, p: Point) -> Point {
        let m = &self.m;
        Point::new_3d(p.x * m[0] + p.y * m[3] + m[6], p.x * m[1] + p.y * m[4] + m[7], p.z)
    }

    /// Transform a batch of points.
    #[must_use]
    pub fn transform_points(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.transform_point(p)).collect()
    }

    /// Transform a batch of points into a packed single-precision vertex
    /// buffer of `x, y, z` triplets.
    ///
    /// Large batches are evaluated column-wise with trueno's SIMD vectors;
    /// small ones, or any batch the vector backend rejects, go through
    /// [`AffineMatrix::transform_point`] and are narrowed afterwards.
    #[must_use]
    pub fn transform_to_buffer(&self, points: &[Point]) -> Vec<f32> {
        if points.len() >= SIMD_BATCH_THRESHOLD {
            if let Some(out) = self.transform_to_buffer_simd(points) {
                return out;
            }
            log::debug!("SIMD point transform unavailable, using scalar path");
        }
        points
            .iter()
            .flat_map(|&p| {
                let q = self.transform_point(p);
                [q.x as f32, q.y as f32, q.z as f32]
            })
            .collect()
    }

    fn transform_to_buffer_simd(&self, points: &[Point]) -> Option<Vec<f32>> {
        let n = points.len();
        let m = self.m.map(|v| v as f32);
        let splat = |v: f32| Vector::from_vec(vec![v; n]);

        let xs = Vector::from_vec(points.iter().map(|p| p.x as f32).collect::<Vec<f32>>());
        let ys = Vector::from_vec(points.iter().map(|p| p.y as f32).collect::<Vec<f32>>());

        // x' = x * m0 + y * m3 + m6
        let out_x = xs
            .mul(&splat(m[0]))
            .ok()?
            .add(&ys.mul(&splat(m[3])).ok()?)
            .ok()?
            .add(&splat(m[6]))
            .ok()?;
        // y' = x * m1 + y * m4 + m7
        let out_y = xs
            .mul(&splat(m[1]))
            .ok()?
            .add(&ys.mul(&splat(m[4])).ok()?)
            .ok()?
            .add(&splat(m[7]))
            .ok()?;

        Some(
            out_x
                .as_slice()
                .iter()
                .zip(out_y.as_slice())
                .zip(points)
                .flat_map(|((&x, &y), p)| [x, y, p.z as f32])
                .collect(),
        )
    }

    /// Whether the bottom row is exactly `[0, 0, 1]`.
    #[must_use]
    pub fn is_affine(&self) -> bool {
        self.m[2] == 0.0 && self.m[5] == 0.0 && self.m[8] == 1.0
    }

    /// Element-wise comparison within `epsilon`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for AffineMatrix {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

/// Per-shape transform parameters.
///
/// Setting fields has no effect on anything already drawn; callers rebuild
/// the matrix and rasterize again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation along x.
    pub tx: f64,
    /// Translation along y.
    pub ty: f64,
    /// Scale along x.
    pub sx: f64,
    /// Scale along y.
    pub sy: f64,
    /// Shear of x by y.
    pub shx: f64,
    /// Shear of y by x.
    pub shy: f64,
    /// Rotation in degrees.
    pub rot_angle: f64,
    /// Rotate about the shape's centroid instead of the origin.
    pub rot_around_center: bool,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            tx: 0.0,
            ty: 0.0,
            sx: 1.0,
            sy: 1.0,
            shx: 0.0,
            shy: 0.0,
            rot_angle: 0.0,
            rot_around_center: true,
        }
    }
}

impl Transform {
    /// Set the translation.
    #[must_use]
    pub const fn translated(mut self, tx: f64, ty: f64) -> Self {
        self.tx = tx;
        self.ty = ty;
        self
    }

    /// Set the scale factors.
    #[must_use]
    pub const fn scaled(mut self, sx: f64, sy: f64) -> Self {
        self.sx = sx;
        self.sy = sy;
        self
    }

    /// Set the shear factors.
    #[must_use]
    pub const fn sheared(mut self, shx: f64, shy: f64) -> Self {
        self.shx = shx;
        self.shy = shy;
        self
    }

    /// Set the rotation angle (degrees) and pivot.
    #[must_use]
    pub const fn rotated(mut self, degrees: f64, around_center: bool) -> Self {
        self.rot_angle = degrees;
        self.rot_around_center = around_center;
        self
    }

    /// Compose the matrix for these parameters around `centroid`.
    ///
    /// With `T` the translation, `C`/`N` translations to and from the
    /// centroid, `R` rotation, `H` shear and `S` scale:
    ///
    /// - rotating about the centroid: `M = T * C * R * H * S * N`
    /// - rotating about the origin: `M = T * R * H * S * N`
    ///
    /// Scale and shear therefore always act in the shape's local frame.
    #[must_use]
    pub fn compose(&self, centroid: Point) -> AffineMatrix {
        let t = AffineMatrix::translation(self.tx, self.ty);
        let c = AffineMatrix::translation(centroid.x, centroid.y);
        let n = AffineMatrix::translation(-centroid.x, -centroid.y);
        let r = AffineMatrix::rotation(self.rot_angle);
        let h = AffineMatrix::shear(self.shx, self.shy);
        let s = AffineMatrix::scale(self.sx, self.sy);

        let m = if self.rot_around_center { t * c } else { t };
        m * r * h * s * n
    }
}

/// Build the composite matrix for a shape from its transform parameters and
/// centroid.
#[must_use]
pub fn compose_shape_matrix(shape: &Shape) -> AffineMatrix {
    shape.transform.compose(shape.compute_centroid())
}
