//! Unordered face-list mesh.

use crate::face::Face;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An unordered sequence of polygon faces.
///
/// Face order carries no meaning, only completeness: parallel producers may
/// concatenate their face batches in any order. Each face owns its vertex
/// copies; STL-style sinks need nothing more.
///
/// # Example
///
/// ```
/// use passage_types::{Face, PolygonMesh, Point3};
///
/// let mut mesh = PolygonMesh::new();
/// mesh.push(Face::Triangle([
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ]));
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolygonMesh {
    /// The faces, in no particular order.
    pub faces: Vec<Face>,
}

impl PolygonMesh {
    /// Create an empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { faces: Vec::new() }
    }

    /// Create a mesh with pre-allocated face capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(face_count: usize) -> Self {
        Self {
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// True if the mesh holds no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Append a face.
    #[inline]
    pub fn push(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Append all faces from an iterator.
    pub fn extend<I: IntoIterator<Item = Face>>(&mut self, faces: I) {
        self.faces.extend(faces);
    }

    /// Number of triangles after quad splitting, as written by STL sinks.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.faces
            .iter()
            .map(|f| match f {
                Face::Triangle(_) => 1,
                Face::Quad(_) => 2,
            })
            .sum()
    }

    /// Condense every face, collapsing degenerate quads into triangles.
    pub fn condense_all(&mut self) {
        for face in &mut self.faces {
            *face = face.condense();
        }
    }
}

impl IntoIterator for PolygonMesh {
    type Item = Face;
    type IntoIter = std::vec::IntoIter<Face>;

    fn into_iter(self) -> Self::IntoIter {
        self.faces.into_iter()
    }
}

impl FromIterator<Face> for PolygonMesh {
    fn from_iter<I: IntoIterator<Item = Face>>(iter: I) -> Self {
        Self {
            faces: iter.into_iter().collect(),
        }
    }
}
