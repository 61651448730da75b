//! Core types for bladed flow-passage mesh generation.
//!
//! This crate provides the foundational types shared by every pipeline stage:
//!
//! - [`ScalarField`] - A dense M×S array over the structured meridional grid
//! - [`MeridionalGrid`] - Paired (r, z) coordinate fields, immutable once built
//! - [`CylPoint`] - A cylindrical-coordinate point with Cartesian projection
//! - [`Face`] - A 3- or 4-vertex polygon face with degenerate-quad collapsing
//! - [`PolygonMesh`] - An unordered face list consumed by mesh sinks
//!
//! # Grid Convention
//!
//! Grid index `(m, s)` is streamwise-major: `m` runs from inlet (0) to outlet
//! (M−1), `s` from hub (0) to shroud (S−1). Both resolutions must be at
//! least 2.
//!
//! # Coordinate System
//!
//! The meridional plane is the (r, z) half-plane containing the axis of
//! rotation. Cylindrical points project to Cartesian as
//! x = r·cosθ, y = r·sinθ, z = z (right-handed, z along the axis).
//!
//! # Mesh Topology
//!
//! [`PolygonMesh`] keeps no shared-vertex topology: each face carries its own
//! vertex copies. Downstream sinks (STL) do not need shared indices.
//!
//! # Example
//!
//! ```
//! use passage_types::{Face, PolygonMesh, Point3};
//!
//! let face = Face::from_vertices(&[
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ]).unwrap();
//!
//! let mut mesh = PolygonMesh::new();
//! mesh.push(face);
//! assert_eq!(mesh.face_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod cyl;
mod error;
mod face;
mod field;
mod grid;
mod mesh;

pub use cyl::CylPoint;
pub use error::{FaceError, FaceResult, GridError, GridResult};
pub use face::Face;
pub use field::ScalarField;
pub use grid::MeridionalGrid;
pub use mesh::PolygonMesh;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};
