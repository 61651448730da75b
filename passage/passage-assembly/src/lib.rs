//! Whole-annulus assembly of bladed flow passages.
//!
//! Blades only describe their own walls. This crate replicates a blade
//! template around the full annulus (or accepts one instance per slot) and
//! fills the space between adjacent blades:
//!
//! - **Span connectors** - quads interpolating angularly from one blade's
//!   leading surface to the next blade's trailing surface at the hub or
//!   shroud row, subdivided for mesh density control
//! - **Inlet/outlet fan caps** - triangles fanning from the axis apex across
//!   each inter-blade arc, closing a solid hub
//! - **Edge completer** - per-blade edge-closing strips for an open annular
//!   gap
//!
//! The wrap-around pair (last blade back to the first) interpolates across
//! the short arc by adjusting the closing blade's angle by a full turn;
//! without that correction the final connector would sweep the long way
//! around the annulus.
//!
//! The output face list is sanitized (degenerate quads collapsed) and
//! carries no shared-vertex topology, ready for an STL-style sink.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod annulus;
mod completer;
mod error;

pub use annulus::{Annulus, AnnulusConfig, BladeSlot, CompletionMode};
pub use error::{AssemblyError, AssemblyResult};
