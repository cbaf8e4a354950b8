//! Recording sink for pixel-exact verification.

use super::PixelSink;
use crate::color::Color;
use std::collections::BTreeSet;

/// A [`PixelSink`] that remembers every emission in order.
///
/// Spans are recorded pixel by pixel through the default
/// [`PixelSink::fill_span`], so `calls` shows exactly what a per-pixel sink
/// would receive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelRecorder {
    calls: Vec<(i32, i32, Color)>,
}

impl PixelRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(x, y, color)` emission, in order, duplicates included.
    #[must_use]
    pub fn calls(&self) -> &[(i32, i32, Color)] {
        &self.calls
    }

    /// Number of emissions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Whether nothing has been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Distinct coordinates touched.
    #[must_use]
    pub fn pixel_set(&self) -> BTreeSet<(i32, i32)> {
        self.calls.iter().map(|&(x, y, _)| (x, y)).collect()
    }

    /// Forget all emissions.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl PixelSink for PixelRecorder {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.calls.push((x, y, color));
    }
}
