//! STL output for assembled passage meshes.
//!
//! Deliberately thin: the mesh sink consumes the finished, sanitized face
//! list and writes it out; no geometry processing happens here. Quads are
//! split into two triangles at the sink boundary because STL only speaks
//! triangles.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod stl;

pub use error::{IoError, IoResult};
pub use stl::save_stl;
