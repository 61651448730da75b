//! The structured meridional grid anchoring the pipeline.

use crate::error::{GridError, GridResult};
use crate::field::ScalarField;
use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Paired (r, z) coordinate fields over the M×S structured grid.
///
/// Built once by the grid builder and shared read-only by every downstream
/// stage. Radii must be non-negative and all coordinates finite; both
/// resolutions must be at least 2.
///
/// # Example
///
/// ```
/// use passage_types::{MeridionalGrid, ScalarField};
///
/// let r = ScalarField::from_fn(2, 2, |m, _| 1.0 + m as f64);
/// let z = ScalarField::from_fn(2, 2, |_, s| s as f64);
/// let grid = MeridionalGrid::new(r, z).unwrap();
/// assert_eq!(grid.m_count(), 2);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeridionalGrid {
    r: ScalarField,
    z: ScalarField,
}

impl MeridionalGrid {
    /// Build a grid from its coordinate fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the fields disagree in shape, either resolution
    /// is below 2, any coordinate is non-finite, or any radius is negative.
    pub fn new(r: ScalarField, z: ScalarField) -> GridResult<Self> {
        if !r.same_shape(&z) {
            return Err(GridError::ShapeMismatch {
                r_m: r.m_count(),
                r_s: r.s_count(),
                z_m: z.m_count(),
                z_s: z.s_count(),
            });
        }
        if r.m_count() < 2 || r.s_count() < 2 {
            return Err(GridError::ResolutionTooLow {
                m_count: r.m_count(),
                s_count: r.s_count(),
            });
        }
        for m in 0..r.m_count() {
            for s in 0..r.s_count() {
                if !r[(m, s)].is_finite() || !z[(m, s)].is_finite() {
                    return Err(GridError::NonFiniteCoordinate { m, s });
                }
                if r[(m, s)] < 0.0 {
                    return Err(GridError::NegativeRadius {
                        m,
                        s,
                        radius: r[(m, s)],
                    });
                }
            }
        }
        Ok(Self { r, z })
    }

    /// Radius field.
    #[inline]
    #[must_use]
    pub const fn r(&self) -> &ScalarField {
        &self.r
    }

    /// Axial-coordinate field.
    #[inline]
    #[must_use]
    pub const fn z(&self) -> &ScalarField {
        &self.z
    }

    /// Number of streamwise points.
    #[inline]
    #[must_use]
    pub const fn m_count(&self) -> usize {
        self.r.m_count()
    }

    /// Number of spanwise points.
    #[inline]
    #[must_use]
    pub const fn s_count(&self) -> usize {
        self.r.s_count()
    }

    /// The meridional point at `(m, s)`.
    #[inline]
    #[must_use]
    pub fn point(&self, m: usize, s: usize) -> Point2<f64> {
        Point2::new(self.r[(m, s)], self.z[(m, s)])
    }

    /// A copy of this grid keeping only the first `s_count` spanwise rows.
    ///
    /// Partial (splitter) blades cover fewer spanwise rows than the full
    /// passage while their angular surfaces stay full-size.
    ///
    /// # Errors
    ///
    /// Returns an error if `s_count` is below 2 or above the available rows.
    pub fn restrict_span(&self, s_count: usize) -> GridResult<Self> {
        if s_count < 2 || s_count > self.s_count() {
            return Err(GridError::InvalidSpanRestriction {
                requested: s_count,
                available: self.s_count(),
            });
        }
        Ok(Self {
            r: self.r.restrict_span(s_count),
            z: self.z.restrict_span(s_count),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn simple_grid() -> MeridionalGrid {
        let r = ScalarField::from_fn(3, 3, |m, _| 1.0 + m as f64 * 0.5);
        let z = ScalarField::from_fn(3, 3, |_, s| s as f64 * 0.1);
        MeridionalGrid::new(r, z).unwrap()
    }

    #[test]
    fn accessors() {
        let grid = simple_grid();
        assert_eq!(grid.m_count(), 3);
        assert_eq!(grid.s_count(), 3);
        assert_eq!(grid.point(2, 1), Point2::new(2.0, 0.1));
    }

    #[test]
    fn rejects_shape_mismatch() {
        let r = ScalarField::zeros(3, 3);
        let z = ScalarField::zeros(3, 2);
        assert!(matches!(
            MeridionalGrid::new(r, z),
            Err(GridError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn rejects_low_resolution() {
        let r = ScalarField::zeros(1, 3);
        let z = ScalarField::zeros(1, 3);
        assert!(matches!(
            MeridionalGrid::new(r, z),
            Err(GridError::ResolutionTooLow { .. })
        ));
    }

    #[test]
    fn rejects_negative_radius() {
        let mut r = ScalarField::zeros(2, 2);
        r[(1, 1)] = -0.5;
        let z = ScalarField::zeros(2, 2);
        assert!(matches!(
            MeridionalGrid::new(r, z),
            Err(GridError::NegativeRadius { m: 1, s: 1, .. })
        ));
    }

    #[test]
    fn rejects_nan_coordinate() {
        let r = ScalarField::zeros(2, 2);
        let mut z = ScalarField::zeros(2, 2);
        z[(0, 1)] = f64::INFINITY;
        assert!(matches!(
            MeridionalGrid::new(r, z),
            Err(GridError::NonFiniteCoordinate { m: 0, s: 1 })
        ));
    }

    #[test]
    fn span_restriction() {
        let grid = simple_grid();
        let partial = grid.restrict_span(2).unwrap();
        assert_eq!(partial.s_count(), 2);
        assert_eq!(partial.m_count(), 3);
        assert!(grid.restrict_span(1).is_err());
        assert!(grid.restrict_span(4).is_err());
    }
}
