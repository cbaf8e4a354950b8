//! # Trueno-Raster
//!
//! Integer-arithmetic rasterization of transformed 2D shapes.
//!
//! Lines, circles and triangles carry their own affine transform parameters
//! (translate, scale, shear, rotate about the origin or the centroid). A
//! shape's composite matrix is rebuilt from those parameters, its defining
//! points are transformed and rounded once onto the pixel grid, and a
//! per-variant scan converter writes the footprint into any [`PixelSink`].
//!
//! ## Features
//!
//! - **Exact pixels**: Bresenham lines, midpoint circles, scanline triangles
//! - **Pluggable output**: a [`Framebuffer`](framebuffer::Framebuffer), a
//!   recording sink for tests, or your own [`PixelSink`]
//! - **PNG output**: pure Rust encoding via the `png` crate
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let mut factory = ShapeFactory::new();
//! let triangle = factory
//!     .triangle(Point::new(0.0, 0.0), Point::new(8.0, 0.0), Point::new(0.0, 8.0))
//!     .with_color(Color::RED)
//!     .with_transform(Transform::default().translated(4.0, 4.0));
//!
//! let mut fb = Framebuffer::new(16, 16)?;
//! triangle.rasterize(&mut fb);
//! assert_eq!(fb.get_pixel(5, 5), Some(Color::RED));
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `config` (default): YAML configuration for canvas and shape defaults
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae
//!   with a digital plotter."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type and hex conversions.
pub mod color;

/// Points and pixel coordinates.
pub mod geometry;

/// Affine matrices and per-shape transform parameters.
pub mod transform;

/// Shape model and factory.
pub mod shape;

/// Ordered shape collections.
pub mod scene;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Scan conversion and pixel sinks.
pub mod raster;

/// RGBA framebuffer sink.
pub mod framebuffer;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Configuration
// ============================================================================

/// YAML configuration.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};
pub use raster::PixelSink;

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{PixelPoint, Point};
    pub use crate::output::PngEncoder;
    pub use crate::raster::{PixelRecorder, PixelSink};
    pub use crate::scene::Scene;
    pub use crate::shape::{Geometry, Shape, ShapeFactory, ShapeId, ShapeKind};
    pub use crate::transform::{AffineMatrix, Transform};
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
