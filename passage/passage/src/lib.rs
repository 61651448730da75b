//! Bladed flow-passage surface mesh generation.
//!
//! This umbrella crate re-exports the pipeline stages, providing a unified
//! API for turning a reduced flow-field description into the watertight
//! surface mesh of a rotor or stator blade row.
//!
//! # Pipeline
//!
//! Data flows one direction through the stages:
//!
//! 1. [`patch`] - parameterize the meridional cross-section and sample the
//!    structured (r, z) grid
//! 2. [`camber`] - integrate a velocity field into per-point blade angle θ
//!    and relative flow angle β
//! 3. [`blade`] - offset the camberline into wall surfaces by a thickness
//!    policy and generate the per-blade face batches
//! 4. [`assembly`] - replicate blades around the annulus and fill the
//!    inter-blade gaps into one sanitized face list
//! 5. [`io`] - write the face list as STL
//!
//! # Quick Start
//!
//! ```
//! use passage::prelude::*;
//! use passage::types::{Point2, Vector3};
//!
//! // A radial passage turning axial inflow to radial outflow
//! let patch = MeridionalPatch::linear(
//!     Point2::new(1.0, 1.0),
//!     Point2::new(2.0, 1.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(2.0, 0.0),
//! ).unwrap();
//! let grid = sample_grid(&patch, 16, 8).unwrap();
//!
//! // Free-vortex swirl over a uniform meridional stream
//! let camber = integrate(&grid, 150.0, &|r: f64, _z: f64| {
//!     Vector3::new(4.0, 30.0 / r, 1.0)
//! }).unwrap();
//!
//! let blade = Blade::build(
//!     grid.clone(),
//!     &camber,
//!     &UniformThickness::new(1e-3),
//!     EdgeCaps::none().with_shroud(),
//! ).unwrap();
//!
//! let annulus = Annulus::uniform(grid, &blade, 7, AnnulusConfig::default()).unwrap();
//! let mesh = annulus.assemble().unwrap();
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Core data types: fields, grids, faces, meshes.
pub mod types {
    pub use passage_types::*;
}

/// Meridional patch parameterization and grid sampling.
pub mod patch {
    pub use passage_patch::*;
}

/// Camberline integration from sampled velocity fields.
pub mod camber {
    pub use passage_camber::*;
}

/// Blade surfaces and per-blade face generation.
pub mod blade {
    pub use passage_blade::*;
}

/// Whole-annulus assembly and completion.
pub mod assembly {
    pub use passage_assembly::*;
}

/// Mesh file output.
pub mod io {
    pub use passage_io::*;
}

/// The commonly used surface of the toolkit.
pub mod prelude {
    pub use passage_assembly::{Annulus, AnnulusConfig, BladeSlot, CompletionMode};
    pub use passage_blade::{Blade, EdgeCaps, ThicknessPolicy, UniformThickness};
    pub use passage_camber::{integrate, SampledField, VelocitySampler};
    pub use passage_io::save_stl;
    pub use passage_patch::{sample_grid, MeridionalPatch};
    pub use passage_types::{Face, MeridionalGrid, PolygonMesh, ScalarField};
}
