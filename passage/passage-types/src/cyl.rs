//! Cylindrical-coordinate points.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in cylindrical coordinates (r, θ, z) with z along the axis of
/// rotation.
///
/// # Example
///
/// ```
/// use passage_types::CylPoint;
///
/// let p = CylPoint::new(2.0, std::f64::consts::FRAC_PI_2, 1.0);
/// let xyz = p.to_cartesian();
/// assert!(xyz.x.abs() < 1e-12);
/// assert!((xyz.y - 2.0).abs() < 1e-12);
/// assert!((xyz.z - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CylPoint {
    /// Radius from the axis.
    pub r: f64,
    /// Angular position in radians.
    pub theta: f64,
    /// Axial coordinate.
    pub z: f64,
}

impl CylPoint {
    /// Create a cylindrical point.
    #[inline]
    #[must_use]
    pub const fn new(r: f64, theta: f64, z: f64) -> Self {
        Self { r, theta, z }
    }

    /// Project to Cartesian: x = r·cosθ, y = r·sinθ, z = z.
    #[inline]
    #[must_use]
    pub fn to_cartesian(self) -> Point3<f64> {
        Point3::new(
            self.r * self.theta.cos(),
            self.r * self.theta.sin(),
            self.z,
        )
    }
}
