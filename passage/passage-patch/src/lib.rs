//! Meridional patch parameterization and grid sampling.
//!
//! A meridional patch maps a unit-square parameter pair `(m, s)` to a point
//! in the (r, z) meridional half-plane: `m` runs inlet to outlet, `s` hub to
//! shroud. Three interchangeable patch strategies share one contract:
//!
//! - [`MeridionalPatch::linear`] - bilinear patch from four corner points
//! - [`MeridionalPatch::spline`] - quadratic-in-m patch whose middle control
//!   row matches stated inlet/outlet velocity directions
//! - [`MeridionalPatch::merged`] - sub-patches spliced along the m axis
//!
//! [`sample_grid`] turns a patch into the structured [`MeridionalGrid`]
//! anchoring the rest of the pipeline.
//!
//! # Example
//!
//! ```
//! use passage_patch::{sample_grid, MeridionalPatch};
//! use nalgebra::Point2;
//!
//! let patch = MeridionalPatch::linear(
//!     Point2::new(1.0, 2.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(2.0, 0.0),
//! ).unwrap();
//!
//! let grid = sample_grid(&patch, 10, 5).unwrap();
//! assert_eq!(grid.m_count(), 10);
//! ```
//!
//! [`MeridionalGrid`]: passage_types::MeridionalGrid

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bezier;
mod error;
mod grid;
mod patch;

pub use bezier::{BezierCurve, BezierSurface};
pub use error::{PatchError, PatchResult};
pub use grid::sample_grid;
pub use patch::{line_intersection, MeridionalPatch};
