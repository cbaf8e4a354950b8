//! Ordered shape collection with stored matrices.
//!
//! Each entry keeps the matrix it was last rebuilt with. A freshly pushed
//! shape draws with the identity until [`Scene::rebuild`] or
//! [`Scene::rebuild_all`] is called, so parameter edits made through
//! [`Scene::get_mut`] only take effect on the next rebuild.

use crate::raster::PixelSink;
use crate::shape::Shape;
use crate::transform::AffineMatrix;

/// A shape and the matrix it is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneEntry {
    /// The shape.
    pub shape: Shape,
    matrix: AffineMatrix,
}

impl SceneEntry {
    /// The stored matrix.
    #[must_use]
    pub const fn matrix(&self) -> &AffineMatrix {
        &self.matrix
    }
}

/// Shapes drawn in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    entries: Vec<SceneEntry>,
}

impl Scene {
    /// Empty scene.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a shape with an identity matrix and return its index.
    pub fn push(&mut self, shape: Shape) -> usize {
        self.entries.push(SceneEntry {
            shape,
            matrix: AffineMatrix::IDENTITY,
        });
        self.entries.len() - 1
    }

    /// Number of shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the scene holds no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SceneEntry> {
        self.entries.get(index)
    }

    /// Mutable access to the shape at `index`. The stored matrix is left
    /// untouched.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.entries.get_mut(index).map(|entry| &mut entry.shape)
    }

    /// Iterate over entries in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneEntry> {
        self.entries.iter()
    }

    /// Recompute the stored matrix of one shape. Returns `false` if
    /// `index` is out of range.
    pub fn rebuild(&mut self, index: usize) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.matrix = entry.shape.rebuild();
                true
            }
            None => false,
        }
    }

    /// Recompute every stored matrix.
    pub fn rebuild_all(&mut self) {
        for entry in &mut self.entries {
            entry.matrix = entry.shape.rebuild();
        }
        log::debug!("rebuilt {} shape matrices", self.entries.len());
    }

    /// Draw every shape, in insertion order, with its stored matrix.
    pub fn render<S: PixelSink + ?Sized>(&self, sink: &mut S) {
        for entry in &self.entries {
            entry.shape.rasterize_with(&entry.matrix, sink);
        }
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a SceneEntry;
    type IntoIter = std::slice::Iter<'a, SceneEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
