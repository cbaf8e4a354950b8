//! Rasterization Property Tests
//!
//! Each test is a falsifiable claim about the public API: matrix algebra,
//! exact pixel output of the scan converters, and the framebuffer/PNG path.
//!
//! Run: cargo test --test raster_properties_test

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use std::collections::BTreeSet;

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use trueno_raster::prelude::*;
use trueno_raster::raster::{draw_circle, draw_line, draw_triangle};

fn line_set(a: (i32, i32), b: (i32, i32)) -> BTreeSet<(i32, i32)> {
    let mut rec = PixelRecorder::new();
    draw_line(&mut rec, a.into(), b.into(), Color::WHITE);
    rec.pixel_set()
}

// ============================================================================
// Matrix algebra (Claims 1-4)
// ============================================================================

/// Claim 1: rotation(θ)·rotation(-θ) is the identity
#[test]
fn claim_01_rotation_inverse_is_identity() {
    for degrees in [0.0_f64, 15.0, 90.0, 137.5, 270.0, -45.0] {
        let m = AffineMatrix::rotation(degrees).multiply(&AffineMatrix::rotation(-degrees));
        assert!(
            m.approx_eq(&AffineMatrix::IDENTITY, 1e-5),
            "Claim 1 FALSIFIED: rotation({degrees}) * rotation(-{degrees}) = {m:?}"
        );
    }
}

/// Claim 2: the identity leaves points untouched
#[test]
fn claim_02_identity_transform_is_noop() {
    let p = Point::new_3d(3.25, -7.5, 0.0);
    assert_eq!(AffineMatrix::identity().transform_point(p), p);
}

/// Claim 3: multiplication is associative but not commutative
#[test]
fn claim_03_multiply_associative_not_commutative() {
    let a = AffineMatrix::translation(3.0, -2.0);
    let b = AffineMatrix::rotation(30.0);
    let c = AffineMatrix::scale(2.0, 0.5);

    let left = a.multiply(&b).multiply(&c);
    let right = a.multiply(&b.multiply(&c));
    assert!(left.approx_eq(&right, 1e-5));

    assert!(!a.multiply(&b).approx_eq(&b.multiply(&a), 1e-3));
}

/// Claim 4: the product applies the right operand first
#[test]
fn claim_04_right_operand_applies_first() {
    let scale_then_move =
        AffineMatrix::translation(10.0, 0.0).multiply(&AffineMatrix::scale(2.0, 2.0));
    let p = scale_then_move.transform_point(Point::new(1.0, 1.0));
    assert_abs_diff_eq!(p.x, 12.0);
    assert_abs_diff_eq!(p.y, 2.0);
}

// ============================================================================
// Bresenham line (Claims 5-7)
// ============================================================================

/// Claim 5: a horizontal segment of length 5 covers 6 pixels
#[test]
fn claim_05_horizontal_line_pixel_count() {
    assert_eq!(line_set((0, 0), (5, 0)), (0..=5).map(|x| (x, 0)).collect());
}

/// Claim 6: a 45-degree segment is exactly the diagonal
#[test]
fn claim_06_diagonal_line() {
    assert_eq!(line_set((0, 0), (5, 5)), (0..=5).map(|i| (i, i)).collect());
}

/// Claim 7: reversing the endpoints selects the identical pixel set
#[test]
fn claim_07_reversed_line_identical() {
    for (a, b) in [((0, 0), (7, 3)), ((2, 9), (-4, 1)), ((0, 0), (1, 8)), ((5, 5), (-5, -6))] {
        assert_eq!(line_set(a, b), line_set(b, a), "Claim 7 FALSIFIED for {a:?} -> {b:?}");
    }
}

// ============================================================================
// Midpoint circle (Claims 8-9)
// ============================================================================

/// Claim 8: radius 1 runs the loop once, emitting 8 points at the center
#[test]
fn claim_08_unit_circle_collapses_to_center() {
    let mut rec = PixelRecorder::new();
    draw_circle(&mut rec, PixelPoint::new(0, 0), 1, false, Color::WHITE);

    assert_eq!(rec.len(), 8, "Claim 8 FALSIFIED: {} emissions", rec.len());
    assert!(rec.calls().iter().all(|&(x, y, _)| (x, y) == (0, 0)));
}

/// Claim 9: a filled disc covers its outline
#[test]
fn claim_09_filled_circle_covers_outline() {
    let center = PixelPoint::new(20, 20);
    let mut outline = PixelRecorder::new();
    let mut disc = PixelRecorder::new();
    draw_circle(&mut outline, center, 9, false, Color::WHITE);
    draw_circle(&mut disc, center, 9, true, Color::WHITE);

    assert!(outline.pixel_set().is_subset(&disc.pixel_set()));
    assert!(disc.pixel_set().contains(&(20, 20)));
}

// ============================================================================
// Scanline triangle (Claims 10-12)
// ============================================================================

/// Claim 10: right-triangle spans shrink monotonically with y
#[test]
fn claim_10_right_triangle_spans_shrink() {
    let mut rec = PixelRecorder::new();
    let vertices = [(0, 0), (4, 0), (0, 4)].map(PixelPoint::from);
    draw_triangle(&mut rec, vertices, true, Color::WHITE);

    let set = rec.pixel_set();
    let widths: Vec<usize> = (0..=4)
        .map(|y| set.iter().filter(|&&(_, py)| py == y).count())
        .collect();
    assert_eq!(widths, vec![5, 4, 3, 2, 1]);

    let mut edges = line_set((0, 0), (4, 0));
    edges.extend(line_set((4, 0), (0, 4)));
    edges.extend(line_set((0, 4), (0, 0)));
    assert!(edges.is_subset(&set), "Claim 10 FALSIFIED: outline not covered");
}

/// Claim 11: collinear vertices produce the line's pixels and no fill rows
#[test]
fn claim_11_collinear_triangle_is_a_line() {
    let mut rec = PixelRecorder::new();
    let vertices = [(0, 0), (2, 4), (4, 8)].map(PixelPoint::from);
    let rows = draw_triangle(&mut rec, vertices, true, Color::WHITE);

    assert_eq!(rows, 0);
    assert_eq!(rec.pixel_set(), line_set((0, 0), (4, 8)));
}

/// Claim 12: rasterizing an unmodified shape twice is repeatable
#[test]
fn claim_12_rasterize_is_idempotent() {
    let mut factory = ShapeFactory::new();
    let shapes = [
        factory
            .line(Point::new(1.0, 2.0), Point::new(30.0, 11.0))
            .with_transform(Transform::default().sheared(0.3, 0.0)),
        factory
            .circle(Point::new(16.0, 16.0), 7.4)
            .with_transform(Transform::default().translated(2.5, -1.5)),
        factory
            .triangle(Point::new(0.0, 0.0), Point::new(20.0, 5.0), Point::new(6.0, 18.0))
            .with_transform(Transform::default().rotated(33.0, true).scaled(1.2, 0.8)),
    ];

    for shape in &shapes {
        let mut first = PixelRecorder::new();
        let mut second = PixelRecorder::new();
        shape.rasterize(&mut first);
        shape.rasterize(&mut second);
        assert_eq!(first.pixel_set(), second.pixel_set(), "Claim 12 FALSIFIED for {}", shape.id());
    }
}

// ============================================================================
// End-to-end (Claims 13-15)
// ============================================================================

/// Claim 13: a scene renders into a framebuffer and encodes as PNG
#[test]
fn claim_13_scene_to_png() {
    let mut factory = ShapeFactory::new();
    let mut scene = Scene::new();
    scene.push(
        factory
            .triangle(
                Point::new(2.0, 2.0),
                Point::new(28.0, 2.0),
                Point::new(2.0, 28.0),
            )
            .with_color(Color::RED),
    );
    scene.push(
        factory
            .circle(Point::new(0.0, 0.0), 5.0)
            .with_color(Color::BLUE)
            .with_transform(Transform::default().translated(20.0, 20.0)),
    );
    scene.rebuild_all();

    let mut fb = Framebuffer::new(32, 32).unwrap();
    scene.render(&mut fb);

    assert_eq!(fb.get_pixel(4, 4), Some(Color::RED));
    assert_eq!(fb.get_pixel(20, 20), Some(Color::BLUE));
    assert_eq!(fb.get_pixel(31, 0), Some(Color::BLACK));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.png");
    PngEncoder::write_to_file(&fb, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes, PngEncoder::to_bytes(&fb).unwrap());
}

/// Claim 14: shapes partly off-canvas are clipped without panicking
#[test]
fn claim_14_offscreen_geometry_is_clipped() {
    let mut factory = ShapeFactory::new();
    let mut fb = Framebuffer::new(16, 16).unwrap();

    factory.circle(Point::new(0.0, 0.0), 10.0).rasterize(&mut fb);
    factory
        .triangle(Point::new(-50.0, -50.0), Point::new(60.0, -10.0), Point::new(8.0, 90.0))
        .rasterize(&mut fb);
    factory.line(Point::new(-1e9, 3.0), Point::new(1e9, 3.0)).rasterize(&mut fb);

    assert_eq!(fb.get_pixel(0, 0), Some(Color::WHITE));
    assert_eq!(fb.get_pixel(15, 3), Some(Color::WHITE));
}

/// Claim 15: a configured canvas starts at the background color
#[cfg(feature = "config")]
#[test]
fn claim_15_config_builds_canvas() {
    let config = trueno_raster::config::Config::parse(
        "canvas:\n  width: 8\n  height: 8\n  background: \"#00ff00\"\n\
         shapes:\n  color: \"#ff0000\"\n",
    )
    .unwrap();

    let mut fb = config.framebuffer().unwrap();
    let mut factory = config.factory().unwrap();
    factory.line(Point::new(0.0, 0.0), Point::new(7.0, 0.0)).rasterize(&mut fb);

    assert_eq!(fb.count_color(Color::RED), 8);
    assert_eq!(fb.count_color(Color::GREEN), 56);
}

// ============================================================================
// Property-based
// ============================================================================

proptest! {
    #[test]
    fn prop_line_endpoints_and_count(
        x1 in -200i32..200, y1 in -200i32..200,
        x2 in -200i32..200, y2 in -200i32..200,
    ) {
        let set = line_set((x1, y1), (x2, y2));
        let major = (x2 - x1).abs().max((y2 - y1).abs()) as usize;

        prop_assert!(set.contains(&(x1, y1)));
        prop_assert!(set.contains(&(x2, y2)));
        prop_assert_eq!(set.len(), major + 1);
    }

    #[test]
    fn prop_triangle_vertex_order_irrelevant(
        pts in prop::array::uniform3((-60i32..60, -60i32..60)),
        filled in any::<bool>(),
    ) {
        let draw = |order: [(i32, i32); 3]| {
            let mut rec = PixelRecorder::new();
            draw_triangle(&mut rec, order.map(PixelPoint::from), filled, Color::WHITE);
            rec.pixel_set()
        };
        let [a, b, c] = pts;
        prop_assert_eq!(draw([a, b, c]), draw([c, a, b]));
    }

    #[test]
    fn prop_filled_circle_within_radius(r in 1i32..40) {
        let mut rec = PixelRecorder::new();
        draw_circle(&mut rec, PixelPoint::new(0, 0), r, true, Color::WHITE);
        for &(x, y) in &rec.pixel_set() {
            prop_assert!(x.abs() <= r && y.abs() <= r, "({x}, {y}) outside r={r}");
        }
    }

    #[test]
    fn prop_translation_moves_pixels(
        tx in -50i32..50, ty in -50i32..50,
    ) {
        let mut factory = ShapeFactory::new();
        let base = factory.triangle(
            Point::new(0.0, 0.0),
            Point::new(9.0, 2.0),
            Point::new(3.0, 7.0),
        );
        let shift = Transform::default().translated(f64::from(tx), f64::from(ty));
        let moved = base.clone().with_transform(shift);

        let mut a = PixelRecorder::new();
        let mut b = PixelRecorder::new();
        base.rasterize(&mut a);
        moved.rasterize(&mut b);

        let shifted: BTreeSet<(i32, i32)> =
            a.pixel_set().into_iter().map(|(x, y)| (x + tx, y + ty)).collect();
        prop_assert_eq!(shifted, b.pixel_set());
    }
}
