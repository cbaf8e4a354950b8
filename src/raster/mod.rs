//! Scan conversion of shapes into pixels.
//!
//! Every algorithm here takes integer [`PixelPoint`]s and walks the shape's
//! footprint with integer arithmetic, emitting pixels to a [`PixelSink`].
//! The continuous-to-discrete step happens once, in [`snap`], before any
//! algorithm runs. The triangle fill is the one exception: its inverse
//! slopes and edge trackers are floats, rounded as each span is emitted.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: error-accumulator line drawing over the major axis
//! - **Midpoint Circle**: eight-way symmetric outline, or four spans per step
//! - **Scanline Triangle**: flat-bottom and flat-top halves plus an outline
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod circle;
mod line;
mod sink;
mod triangle;

pub use circle::{draw_circle, pixel_radius};
pub use line::draw_line;
pub use sink::PixelRecorder;
pub use triangle::draw_triangle;

use crate::color::Color;
use crate::geometry::{PixelPoint, Point};
use crate::shape::{Geometry, Shape};
use crate::transform::AffineMatrix;

/// Destination for rasterized pixels.
///
/// Writes are infallible from the rasterizer's point of view; sinks decide
/// what to do with coordinates they cannot store. Writing the same pixel
/// twice with the same color must have no further effect.
pub trait PixelSink {
    /// Store one pixel.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Store the horizontal run between `x0` and `x1` inclusive, in either
    /// order.
    fn fill_span(&mut self, x0: i32, x1: i32, y: i32, color: Color) {
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for x in lo..=hi {
            self.set_pixel(x, y, color);
        }
    }
}

/// Store the vertical run between `y0` and `y1` inclusive, in either order.
pub(crate) fn fill_column<S: PixelSink + ?Sized>(
    sink: &mut S,
    x: i32,
    y0: i32,
    y1: i32,
    color: Color,
) {
    let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
    for y in lo..=hi {
        sink.set_pixel(x, y, color);
    }
}

/// Transform a local-space point and round it onto the pixel grid.
#[inline]
#[must_use]
pub fn snap(matrix: &AffineMatrix, p: Point) -> PixelPoint {
    matrix.transform_point(p).to_pixel()
}

/// Rasterize a shape under `matrix`.
pub fn rasterize_shape<S: PixelSink + ?Sized>(shape: &Shape, matrix: &AffineMatrix, sink: &mut S) {
    log::trace!("rasterizing {}", shape.id());
    let color = shape.color;

    match shape.geometry {
        Geometry::Line { p1, p2 } => {
            draw_line(sink, snap(matrix, p1), snap(matrix, p2), color);
        }
        Geometry::Circle { center, radius } => {
            draw_circle(sink, snap(matrix, center), pixel_radius(radius), shape.filled, color);
        }
        Geometry::Triangle { p1, p2, p3 } => {
            let vertices = [snap(matrix, p1), snap(matrix, p2), snap(matrix, p3)];
            draw_triangle(sink, vertices, shape.filled, color);
        }
    }
}
