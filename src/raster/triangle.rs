//! Scanline triangle fill.

use super::{draw_line, PixelSink};
use crate::color::Color;
use crate::geometry::{round_half_up, PixelPoint};

/// Horizontal change per row along the edge from `a` to `b`; zero for a
/// horizontal edge.
fn inverse_slope(a: PixelPoint, b: PixelPoint) -> f64 {
    let dy = b.y - a.y;
    if dy == 0 {
        0.0
    } else {
        f64::from(b.x - a.x) / f64::from(dy)
    }
}

fn is_collinear(a: PixelPoint, b: PixelPoint, c: PixelPoint) -> bool {
    let cross = i64::from(b.x - a.x) * i64::from(c.y - a.y)
        - i64::from(b.y - a.y) * i64::from(c.x - a.x);
    cross == 0
}

fn draw_outline<S: PixelSink + ?Sized>(
    sink: &mut S,
    [p1, p2, p3]: [PixelPoint; 3],
    color: Color,
) {
    draw_line(sink, p1, p2, color);
    draw_line(sink, p2, p3, color);
    draw_line(sink, p3, p1, color);
}

/// Draw a triangle and return the number of fill rows emitted.
///
/// Vertices are sorted by ascending `y` into `p1`, `p2`, `p3`. When filled,
/// the rows `p1.y..p2.y` are spanned walking up from `p1`, the outline is
/// drawn, and the rows `p3.y` down to `p2.y` are spanned walking down from
/// `p3`. A half with zero height is skipped. Collinear vertices get no fill
/// at all; the outline alone already covers them.
///
/// The outline is always drawn with [`draw_line`].
pub fn draw_triangle<S: PixelSink + ?Sized>(
    sink: &mut S,
    vertices: [PixelPoint; 3],
    filled: bool,
    color: Color,
) -> usize {
    let mut sorted = vertices;
    sorted.sort_by_key(|p| p.y);
    let [p1, p2, p3] = sorted;

    if !filled {
        draw_outline(sink, sorted, color);
        return 0;
    }
    if is_collinear(p1, p2, p3) {
        log::debug!("collinear triangle {p1:?} {p2:?} {p3:?}, drawing outline only");
        draw_outline(sink, sorted, color);
        return 0;
    }
    log::trace!("filling triangle {p1:?} {p2:?} {p3:?}");

    let mut rows = 0;

    // Lower half, p1 up to (not including) p2.
    if p2.y > p1.y {
        let inv12 = inverse_slope(p1, p2);
        let inv13 = inverse_slope(p1, p3);
        let mut x12 = f64::from(p1.x);
        let mut x13 = f64::from(p1.x);

        for y in p1.y..p2.y {
            sink.fill_span(round_half_up(x12), round_half_up(x13), y, color);
            x12 += inv12;
            x13 += inv13;
            rows += 1;
        }
    }

    draw_outline(sink, sorted, color);

    // Upper half, p3 down to p2 inclusive.
    if p3.y > p2.y {
        let inv31 = inverse_slope(p1, p3);
        let inv32 = inverse_slope(p2, p3);
        let mut x31 = f64::from(p3.x);
        let mut x32 = f64::from(p3.x);

        for y in (p2.y..=p3.y).rev() {
            sink.fill_span(round_half_up(x31), round_half_up(x32), y, color);
            x31 -= inv31;
            x32 -= inv32;
            rows += 1;
        }
    }

    rows
}
