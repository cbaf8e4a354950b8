//! Midpoint circle drawing.

use super::PixelSink;
use crate::color::Color;
use crate::geometry::{round_half_up, PixelPoint, COORD_LIMIT};

/// Round a shape radius to whole pixels, clamped to [`COORD_LIMIT`].
///
/// NaN and negative radii come out as values `<= 0`, which draw nothing.
#[must_use]
pub fn pixel_radius(radius: f64) -> i32 {
    round_half_up(radius).min(COORD_LIMIT)
}

/// Draw a circle of `radius` pixels around `center`.
///
/// Outlines emit the eight octant-symmetric points per step; filled circles
/// emit four horizontal spans per step instead. Overlapping emissions are
/// not deduplicated.
///
/// The `x` and `y` updates are two independent checks of the error term, so
/// a single step may advance both.
pub fn draw_circle<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: PixelPoint,
    radius: i32,
    filled: bool,
    color: Color,
) {
    if radius <= 0 {
        log::debug!("skipping circle with radius {radius}");
        return;
    }
    log::trace!("midpoint circle at ({}, {}) r={radius}", center.x, center.y);

    let (cx, cy) = (center.x, center.y);
    let mut x = radius - 1;
    let mut y = 0;
    let mut dx = 1;
    let mut dy = 1;
    let mut err = dx - 2 * radius;

    while x >= y {
        if filled {
            sink.fill_span(cx + x, cx - x, cy + y, color);
            sink.fill_span(cx + y, cx - y, cy + x, color);
            sink.fill_span(cx - x, cx + x, cy - y, color);
            sink.fill_span(cx - y, cx + y, cy - x, color);
        } else {
            sink.set_pixel(cx + x, cy + y, color);
            sink.set_pixel(cx + y, cy + x, color);
            sink.set_pixel(cx - y, cy + x, color);
            sink.set_pixel(cx - x, cy + y, color);
            sink.set_pixel(cx - x, cy - y, color);
            sink.set_pixel(cx - y, cy - x, color);
            sink.set_pixel(cx + y, cy - x, color);
            sink.set_pixel(cx + x, cy - y, color);
        }

        if err <= 0 {
            y += 1;
            err += dy;
            dy += 2;
        }
        if err > 0 {
            x -= 1;
            dx += 2;
            err += dx - 2 * radius;
        }
    }
}
