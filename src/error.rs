//! Error types for trueno-raster operations.
//!
//! Rasterization itself is infallible: malformed geometry degrades to
//! drawing nothing. Errors are reserved for caller contract violations
//! (unknown shape kinds, mismatched geometry) and for the I/O edges of the
//! crate (PNG output, configuration files).

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A shape kind name that no variant answers to.
    #[error("Unknown shape kind: {0}")]
    UnknownShapeKind(String),

    /// Geometry that does not fit the requested shape kind.
    #[error("Geometry mismatch for {kind}: expected {expected} points, got {got}")]
    GeometryMismatch {
        /// Shape kind being built.
        kind: &'static str,
        /// Number of points the kind needs.
        expected: usize,
        /// Number of points supplied.
        got: usize,
    },

    /// Configuration parsing error with line number.
    #[error("Configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),
}
