//! Blade surface construction and per-blade face generation.
//!
//! The camberline is a zero-thickness mean line. This crate offsets it into
//! the two angular wall surfaces via a [`ThicknessPolicy`] and assembles the
//! per-blade quad batches: leading/trailing edge strips, pressure and
//! suction sides, and optional hub/shroud end caps.
//!
//! A [`Blade`] is built once by its factory constructor and is immutable
//! afterwards. Its grid may be restricted to fewer spanwise rows than the
//! full passage (a splitter blade) while the angular surfaces stay
//! full-size, because neighboring blades reference them when the space
//! between blades is filled in.
//!
//! # Surface Ordering
//!
//! No ordering between the two offset surfaces is guaranteed: the sign of
//! the angular offset follows sin β and the rotation sense, so callers must
//! treat θ_l and θ_t only as the two walls bounding the blade, not as
//! upper/lower bounds.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod blade;
mod error;
mod surface;
mod thickness;

pub use blade::{Blade, EdgeCaps};
pub use error::{BladeError, BladeResult};
pub use surface::offset_surfaces;
pub use thickness::{ThicknessPolicy, UniformThickness};
