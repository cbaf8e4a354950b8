//! Bresenham line drawing.

use super::{fill_column, PixelSink};
use crate::color::Color;
use crate::geometry::PixelPoint;
use std::mem::swap;

/// Draw the segment from `p1` to `p2` inclusive using Bresenham's algorithm.
///
/// Horizontal and vertical segments are emitted as straight runs. Otherwise
/// the loop steps along the axis with the larger extent, from the endpoint
/// with the smaller coordinate on that axis, so swapping `p1` and `p2`
/// selects the same pixels.
pub fn draw_line<S: PixelSink + ?Sized>(
    sink: &mut S,
    p1: PixelPoint,
    p2: PixelPoint,
    color: Color,
) {
    let (mut x1, mut y1) = (p1.x, p1.y);
    let (mut x2, mut y2) = (p2.x, p2.y);

    if y1 == y2 {
        sink.fill_span(x1, x2, y1, color);
        return;
    }
    if x1 == x2 {
        fill_column(sink, x1, y1, y2, color);
        return;
    }

    // Iterate over the major axis; pixels are un-swapped on emission.
    let steep = (y2 - y1).abs() > (x2 - x1).abs();
    if steep {
        swap(&mut x1, &mut y1);
        swap(&mut x2, &mut y2);
    }
    if x1 > x2 {
        swap(&mut x1, &mut x2);
        swap(&mut y1, &mut y2);
    }

    let step = if y2 < y1 { -1 } else { 1 };
    let dx = x2 - x1;
    let dy = (y2 - y1).abs();

    let mut err = 2 * dy - dx;
    let d_err_same = 2 * dy;
    let d_err_up = 2 * (dy - dx);

    let mut y = y1;
    for x in x1..=x2 {
        if steep {
            sink.set_pixel(y, x, color);
        } else {
            sink.set_pixel(x, y, color);
        }

        if err > 0 {
            y += step;
            err += d_err_up;
        } else {
            err += d_err_same;
        }
    }
}
