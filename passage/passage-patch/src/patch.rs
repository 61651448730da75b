//! The three meridional patch strategies behind one evaluation contract.

use crate::bezier::BezierSurface;
use crate::error::{PatchError, PatchResult};
use nalgebra::{Point2, Vector2};

/// Intersection of the lines through `a1`–`a2` and `b1`–`b2`.
///
/// Returns `None` when the lines are parallel (zero determinant). The
/// determinant test is exact; near-parallel lines produce a far-away but
/// well-defined intersection, which is the caller's geometry to own.
#[must_use]
pub fn line_intersection(
    a1: Point2<f64>,
    a2: Point2<f64>,
    b1: Point2<f64>,
    b2: Point2<f64>,
) -> Option<Point2<f64>> {
    let det = (a1.x - a2.x) * (b1.y - b2.y) - (a1.y - a2.y) * (b1.x - b2.x);
    if det == 0.0 {
        return None;
    }
    let cross_a = a1.x * a2.y - a1.y * a2.x;
    let cross_b = b1.x * b2.y - b1.y * b2.x;
    let x = ((b1.x - b2.x) * cross_a - (a1.x - a2.x) * cross_b) / det;
    let y = ((b1.y - b2.y) * cross_a - (a1.y - a2.y) * cross_b) / det;
    Some(Point2::new(x, y))
}

/// A meridional flow-passage patch: a map from the unit square `(m, s)` to
/// the (r, z) half-plane.
///
/// The variant set is closed and small, so the strategies are modeled as a
/// tagged enum rather than a trait object; dispatch is exhaustive and free.
#[derive(Debug, Clone)]
pub enum MeridionalPatch {
    /// Bilinear patch between four corner points.
    Linear(BezierSurface),
    /// Quadratic-in-m patch whose middle control row matches the stated
    /// inlet and outlet velocity directions.
    Spline(BezierSurface),
    /// Sub-patches spliced over equal m-intervals, e.g. for combined
    /// pump-inducer shapes.
    Merged(Vec<MeridionalPatch>),
}

impl MeridionalPatch {
    /// Bilinear patch between 2D (r, z) corner points.
    ///
    /// Corner naming: `m0_s0` is the inlet hub corner, `m1_s1` the outlet
    /// shroud corner.
    ///
    /// # Errors
    ///
    /// Never fails for finite corners; the `Result` keeps the constructor
    /// set uniform.
    pub fn linear(
        m0_s0: Point2<f64>,
        m0_s1: Point2<f64>,
        m1_s0: Point2<f64>,
        m1_s1: Point2<f64>,
    ) -> PatchResult<Self> {
        let surface = BezierSurface::new(vec![vec![m0_s0, m0_s1], vec![m1_s0, m1_s1]])?;
        Ok(Self::Linear(surface))
    }

    /// Quadratic-in-m patch interpolating corner points with the stated
    /// inlet and outlet meridional velocity directions.
    ///
    /// The single middle control row is found by intersecting the inlet and
    /// outlet velocity lines at each span end.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::ParallelVelocityLines`] when the two lines at
    /// either span end do not intersect; the failure is surfaced rather than
    /// masked with a fallback row. A purely axial passage will trip this.
    pub fn spline(
        m0_s0: Point2<f64>,
        m0_s1: Point2<f64>,
        m1_s0: Point2<f64>,
        m1_s1: Point2<f64>,
        v_inlet: Vector2<f64>,
        v_outlet: Vector2<f64>,
    ) -> PatchResult<Self> {
        let mid_s0 = line_intersection(m0_s0, m0_s0 + v_inlet, m1_s0, m1_s0 + v_outlet)
            .ok_or(PatchError::ParallelVelocityLines { span: 0 })?;
        let mid_s1 = line_intersection(m0_s1, m0_s1 + v_inlet, m1_s1, m1_s1 + v_outlet)
            .ok_or(PatchError::ParallelVelocityLines { span: 1 })?;
        let surface = BezierSurface::new(vec![
            vec![m0_s0, m0_s1],
            vec![mid_s0, mid_s1],
            vec![m1_s0, m1_s1],
        ])?;
        Ok(Self::Spline(surface))
    }

    /// Patch merged from an ordered list of sub-patches along the m axis.
    ///
    /// The m-domain is split into equal intervals, one per sub-patch; no
    /// continuity between neighbors is enforced.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::EmptyPatchList`] for an empty list.
    pub fn merged(patches: Vec<MeridionalPatch>) -> PatchResult<Self> {
        if patches.is_empty() {
            return Err(PatchError::EmptyPatchList);
        }
        Ok(Self::Merged(patches))
    }

    /// Evaluate the patch at `(m, s)` ∈ [0, 1]².
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::ParameterOutOfRange`] outside the unit square;
    /// parameters are never clamped.
    pub fn evaluate(&self, m: f64, s: f64) -> PatchResult<Point2<f64>> {
        if !(0.0..=1.0).contains(&m) {
            return Err(PatchError::ParameterOutOfRange {
                name: "m",
                value: m,
            });
        }
        if !(0.0..=1.0).contains(&s) {
            return Err(PatchError::ParameterOutOfRange {
                name: "s",
                value: s,
            });
        }
        match self {
            Self::Linear(surface) | Self::Spline(surface) => surface.evaluate(m, s),
            Self::Merged(patches) => {
                // m = 1 lands in the last sub-patch at local m = 1.
                #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation,
                        clippy::cast_sign_loss)]
                let index = ((m * patches.len() as f64).floor() as usize).min(patches.len() - 1);
                #[allow(clippy::cast_precision_loss)]
                let local = m * patches.len() as f64 - index as f64;
                patches[index].evaluate(local, s)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn corners() -> [Point2<f64>; 4] {
        [
            Point2::new(3.0e-3, 7.0e-3),
            Point2::new(7.8e-3, 7.0e-3),
            Point2::new(12.8e-3, 0.0),
            Point2::new(12.8e-3, 2.0e-3),
        ]
    }

    #[test]
    fn intersection_basic() {
        // Vertical line x = -1 and horizontal line y = 2
        let p = line_intersection(
            Point2::new(-1.0, 1.0),
            Point2::new(-1.0, -1.0),
            Point2::new(0.0, 2.0),
            Point2::new(2.0, 2.0),
        )
        .unwrap();
        assert!((p - Point2::new(-1.0, 2.0)).norm() < 1e-12);
    }

    #[test]
    fn intersection_parallel_is_none() {
        let p = line_intersection(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
        );
        assert!(p.is_none());
    }

    #[test]
    fn linear_reproduces_corners() {
        let [c00, c01, c10, c11] = corners();
        let patch = MeridionalPatch::linear(c00, c01, c10, c11).unwrap();
        assert!((patch.evaluate(0.0, 0.0).unwrap() - c00).norm() < 1e-12);
        assert!((patch.evaluate(0.0, 1.0).unwrap() - c01).norm() < 1e-12);
        assert!((patch.evaluate(1.0, 0.0).unwrap() - c10).norm() < 1e-12);
        assert!((patch.evaluate(1.0, 1.0).unwrap() - c11).norm() < 1e-12);
    }

    #[test]
    fn spline_reproduces_corners() {
        let [c00, c01, c10, c11] = corners();
        // Inlet flows axially downward, outlet radially outward
        let patch = MeridionalPatch::spline(
            c00,
            c01,
            c10,
            c11,
            Vector2::new(0.0, -39.6),
            Vector2::new(39.63, 0.0),
        )
        .unwrap();
        assert!((patch.evaluate(0.0, 0.0).unwrap() - c00).norm() < 1e-9);
        assert!((patch.evaluate(1.0, 1.0).unwrap() - c11).norm() < 1e-9);
    }

    #[test]
    fn spline_rejects_parallel_velocities() {
        let [c00, c01, c10, c11] = corners();
        let result = MeridionalPatch::spline(
            c00,
            c01,
            c10,
            c11,
            Vector2::new(0.0, -1.0),
            Vector2::new(0.0, -2.0),
        );
        assert!(matches!(
            result,
            Err(PatchError::ParallelVelocityLines { .. })
        ));
    }

    #[test]
    fn merged_dispatches_subpatches() {
        let left = MeridionalPatch::linear(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        )
        .unwrap();
        let right = MeridionalPatch::linear(
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
        )
        .unwrap();
        let merged = MeridionalPatch::merged(vec![left, right]).unwrap();

        // Midpoint of the whole domain is the seam
        let seam = merged.evaluate(0.5, 0.0).unwrap();
        assert!((seam - Point2::new(1.0, 0.0)).norm() < 1e-12);
        // m = 1 must not index past the last sub-patch
        let end = merged.evaluate(1.0, 1.0).unwrap();
        assert!((end - Point2::new(2.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn merged_rejects_empty_list() {
        assert!(matches!(
            MeridionalPatch::merged(Vec::new()),
            Err(PatchError::EmptyPatchList)
        ));
    }

    #[test]
    fn evaluate_rejects_out_of_square() {
        let [c00, c01, c10, c11] = corners();
        let patch = MeridionalPatch::linear(c00, c01, c10, c11).unwrap();
        assert!(patch.evaluate(1.5, 0.0).is_err());
        assert!(patch.evaluate(0.0, -0.5).is_err());
    }
}
