//! Shape model.
//!
//! A [`Shape`] is one of three geometries (line, circle, triangle) plus the
//! attributes every shape shares: color, fill flag, per-kind id and
//! transform parameters. Shapes are created through a [`ShapeFactory`],
//! which owns the per-kind id counters.
//!
//! The composite matrix is never cached on the shape. [`Shape::rebuild`]
//! derives it from the current parameters, and [`Shape::rasterize`] calls it
//! on every pass.

use crate::color::Color;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::raster::{self, PixelSink};
use crate::transform::{compose_shape_matrix, AffineMatrix, Transform};
use std::fmt;
use std::str::FromStr;

/// Number of perimeter points used when a circle is turned into vertices.
pub const CIRCLE_SLICES: usize = 36;

/// The shape variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    /// Straight line segment.
    Line,
    /// Circle or disc.
    Circle,
    /// Triangle.
    Triangle,
}

impl ShapeKind {
    /// All kinds, in counter order.
    pub const ALL: [Self; 3] = [Self::Line, Self::Circle, Self::Triangle];

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
        }
    }

    /// Number of points that define this kind.
    #[must_use]
    pub const fn point_count(self) -> usize {
        match self {
            Self::Line => 2,
            Self::Circle => 1,
            Self::Triangle => 3,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Line => 0,
            Self::Circle => 1,
            Self::Triangle => 2,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "circle" => Ok(Self::Circle),
            "triangle" => Ok(Self::Triangle),
            _ => Err(Error::UnknownShapeKind(s.to_string())),
        }
    }
}

/// Identifier of a shape: its kind and a 1-based index within that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId {
    /// Shape kind.
    pub kind: ShapeKind,
    /// Position in the kind's creation sequence, starting at 1.
    pub index: u32,
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.index)
    }
}

/// Local-space geometry of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// Segment between two endpoints.
    Line {
        /// First endpoint.
        p1: Point,
        /// Second endpoint.
        p2: Point,
    },
    /// Circle around a center.
    Circle {
        /// Center point.
        center: Point,
        /// Radius in pixels.
        radius: f64,
    },
    /// Triangle with three vertices.
    Triangle {
        /// First vertex.
        p1: Point,
        /// Second vertex.
        p2: Point,
        /// Third vertex.
        p3: Point,
    },
}

impl Geometry {
    /// The kind this geometry belongs to.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Line { .. } => ShapeKind::Line,
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Triangle { .. } => ShapeKind::Triangle,
        }
    }

    /// Pivot used for rotating about the center.
    ///
    /// Line: midpoint. Triangle: vertex mean. Circle: its center.
    #[must_use]
    pub fn centroid(&self) -> Point {
        match *self {
            Self::Line { p1, p2 } => Point::new_3d(
                (p1.x + p2.x) / 2.0,
                (p1.y + p2.y) / 2.0,
                (p1.z + p2.z) / 2.0,
            ),
            Self::Circle { center, .. } => center,
            Self::Triangle { p1, p2, p3 } => Point::new_3d(
                (p1.x + p2.x + p3.x) / 3.0,
                (p1.y + p2.y + p3.y) / 3.0,
                (p1.z + p2.z + p3.z) / 3.0,
            ),
        }
    }
}

/// A drawable 2D shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    /// Draw color.
    pub color: Color,
    /// Fill the interior (circles, triangles); ignored by lines.
    pub filled: bool,
    /// Transform parameters.
    pub transform: Transform,
    /// Local-space geometry.
    pub geometry: Geometry,
}

impl Shape {
    /// The shape's id.
    #[must_use]
    pub const fn id(&self) -> ShapeId {
        self.id
    }

    /// The shape's kind.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    /// Set the color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the fill flag.
    #[must_use]
    pub fn with_filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    /// Replace the transform parameters.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Centroid of the untransformed geometry.
    #[must_use]
    pub fn compute_centroid(&self) -> Point {
        self.geometry.centroid()
    }

    /// Build the composite matrix for the current transform parameters.
    #[must_use]
    pub fn rebuild(&self) -> AffineMatrix {
        compose_shape_matrix(self)
    }

    /// Draw the shape with a freshly rebuilt matrix.
    pub fn rasterize<S: PixelSink + ?Sized>(&self, sink: &mut S) {
        self.rasterize_with(&self.rebuild(), sink);
    }

    /// Draw the shape with a caller-supplied matrix.
    pub fn rasterize_with<S: PixelSink + ?Sized>(&self, matrix: &AffineMatrix, sink: &mut S) {
        raster::rasterize_shape(self, matrix, sink);
    }

    /// Transformed vertex positions as a single-precision vertex buffer,
    /// packed as `x, y, z` triplets.
    ///
    /// Lines yield two vertices, triangles three, and circles
    /// [`CIRCLE_SLICES`] points evenly spaced around the perimeter starting
    /// at angle zero.
    #[must_use]
    pub fn positions(&self, matrix: &AffineMatrix) -> Vec<f32> {
        let local = match self.geometry {
            Geometry::Line { p1, p2 } => vec![p1, p2],
            Geometry::Triangle { p1, p2, p3 } => vec![p1, p2, p3],
            Geometry::Circle { center, radius } => {
                let step = std::f64::consts::TAU / CIRCLE_SLICES as f64;
                (0..CIRCLE_SLICES)
                    .map(|slice| {
                        let angle = step * slice as f64;
                        Point::new_3d(
                            center.x + angle.cos() * radius,
                            center.y + angle.sin() * radius,
                            center.z,
                        )
                    })
                    .collect()
            }
        };

        matrix.transform_to_buffer(&local)
    }
}

/// Creates shapes and assigns their ids.
///
/// Each kind has its own counter, so the first line and the first circle
/// both get index 1. Independent factories never share counters.
#[derive(Debug, Clone)]
pub struct ShapeFactory {
    counts: [u32; 3],
    default_color: Color,
    default_filled: bool,
}

impl Default for ShapeFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeFactory {
    /// Factory producing white, filled shapes.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_defaults(Color::WHITE, true)
    }

    /// Factory with custom color and fill defaults.
    #[must_use]
    pub const fn with_defaults(color: Color, filled: bool) -> Self {
        Self {
            counts: [0; 3],
            default_color: color,
            default_filled: filled,
        }
    }

    /// Number of shapes of `kind` created so far.
    #[must_use]
    pub const fn count(&self, kind: ShapeKind) -> u32 {
        self.counts[kind.index()]
    }

    fn build(&mut self, geometry: Geometry) -> Shape {
        let kind = geometry.kind();
        let counter = &mut self.counts[kind.index()];
        *counter += 1;

        Shape {
            id: ShapeId {
                kind,
                index: *counter,
            },
            color: self.default_color,
            filled: self.default_filled,
            transform: Transform::default(),
            geometry,
        }
    }

    /// Create a line.
    pub fn line(&mut self, p1: Point, p2: Point) -> Shape {
        self.build(Geometry::Line { p1, p2 })
    }

    /// Create a circle.
    pub fn circle(&mut self, center: Point, radius: f64) -> Shape {
        self.build(Geometry::Circle { center, radius })
    }

    /// Create a triangle.
    pub fn triangle(&mut self, p1: Point, p2: Point, p3: Point) -> Shape {
        self.build(Geometry::Triangle { p1, p2, p3 })
    }

    /// Create a shape from a kind name and a point list.
    ///
    /// `radius` is only read for circles.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownShapeKind`] if `kind` names no variant,
    /// [`Error::GeometryMismatch`] if `points` has the wrong length. No id
    /// is consumed on error.
    pub fn from_kind(&mut self, kind: &str, points: &[Point], radius: f64) -> Result<Shape> {
        let kind: ShapeKind = kind.parse()?;
        let expected = kind.point_count();
        if points.len() != expected {
            return Err(Error::GeometryMismatch {
                kind: kind.as_str(),
                expected,
                got: points.len(),
            });
        }

        let shape = match kind {
            ShapeKind::Line => self.line(points[0], points[1]),
            ShapeKind::Circle => self.circle(points[0], radius),
            ShapeKind::Triangle => self.triangle(points[0], points[1], points[2]),
        };
        Ok(shape)
    }
}
