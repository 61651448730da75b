//! Polygon faces and the degenerate-quad sanitizer.

use crate::error::{FaceError, FaceResult};
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mesh face: either a triangle or a quad, with consistent winding.
///
/// Faces carry their own vertex copies; there is no shared-vertex topology.
/// The two shapes are a closed set, so consumers can match exhaustively.
///
/// # Example
///
/// ```
/// use passage_types::{Face, Point3};
///
/// let quad = Face::Quad([
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ]);
/// assert_eq!(quad.vertices().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Face {
    /// A 3-vertex face.
    Triangle([Point3<f64>; 3]),
    /// A 4-vertex face.
    Quad([Point3<f64>; 4]),
}

impl Face {
    /// Build a face from a vertex slice, validating the 3-or-4 shape and
    /// vertex finiteness.
    ///
    /// # Errors
    ///
    /// Returns [`FaceError::VertexCount`] for any other vertex count and
    /// [`FaceError::NonFiniteVertex`] if a coordinate is NaN or infinite.
    pub fn from_vertices(vertices: &[Point3<f64>]) -> FaceResult<Self> {
        for (index, v) in vertices.iter().enumerate() {
            if !(v.x.is_finite() && v.y.is_finite() && v.z.is_finite()) {
                return Err(FaceError::NonFiniteVertex { index });
            }
        }
        match *vertices {
            [a, b, c] => Ok(Self::Triangle([a, b, c])),
            [a, b, c, d] => Ok(Self::Quad([a, b, c, d])),
            _ => Err(FaceError::VertexCount {
                got: vertices.len(),
            }),
        }
    }

    /// The face's vertices in winding order.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[Point3<f64>] {
        match self {
            Self::Triangle(v) => v,
            Self::Quad(v) => v,
        }
    }

    /// True if every vertex coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.vertices()
            .iter()
            .all(|v| v.x.is_finite() && v.y.is_finite() && v.z.is_finite())
    }

    /// Collapse a quad with two cyclically-adjacent coincident vertices into
    /// a triangle.
    ///
    /// Triangles pass through unchanged, as do quads without a coincident
    /// adjacent pair. Coincidence is exact value equality. The relative order
    /// of the surviving vertices is preserved, so the winding is too.
    /// Idempotent: condensing a condensed face is a no-op.
    #[must_use]
    pub fn condense(self) -> Self {
        let Self::Quad(v) = self else {
            return self;
        };
        for i in 0..4 {
            let prev = (i + 3) % 4;
            if v[i] == v[prev] {
                // Drop v[i]; the remaining three keep their order.
                let kept = match i {
                    0 => [v[1], v[2], v[3]],
                    1 => [v[0], v[2], v[3]],
                    2 => [v[0], v[1], v[3]],
                    _ => [v[0], v[1], v[2]],
                };
                return Self::Triangle(kept);
            }
        }
        self
    }
}
