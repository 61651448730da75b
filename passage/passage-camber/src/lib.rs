//! Camberline integration from sampled velocity fields.
//!
//! Given the meridional grid and a velocity sampler, this crate integrates
//! the relative flow streamwise to produce the blade camberline: the angular
//! position θ of the blade mean line and the relative flow angle β at every
//! grid point.
//!
//! # Boundary
//!
//! Velocity acquisition lives outside the pipeline. The integrator only
//! needs the [`VelocitySampler`] capability - a single-point query in
//! (radial, tangential, axial) convention that always answers, including
//! outside the sampled hull. [`SampledField`] adapts a pre-materialized
//! sample set (e.g. a solver export) with nearest-neighbor semantics.
//!
//! # Parallelism
//!
//! Spans integrate independently and run in parallel. The streamwise loop
//! within a span is a running integral and stays sequential.
//!
//! # Example
//!
//! ```
//! use passage_camber::integrate;
//! use passage_types::{MeridionalGrid, ScalarField, Vector3};
//!
//! let r = ScalarField::from_fn(3, 2, |m, _| 1.0 + m as f64);
//! let z = ScalarField::zeros(3, 2);
//! let grid = MeridionalGrid::new(r, z).unwrap();
//!
//! // Purely radial outflow with a swirl component
//! let camber = integrate(&grid, 0.0, &|_r: f64, _z: f64| {
//!     Vector3::new(10.0, 2.0, 0.0)
//! }).unwrap();
//!
//! // The outlet row is the angular reference
//! assert_eq!(camber.theta()[(2, 0)], 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod field;
mod integrate;
mod sampler;

pub use error::{CamberError, CamberResult};
pub use field::CamberlineField;
pub use integrate::integrate;
pub use sampler::{SampledField, VelocitySampler};
