//! Closed-form Bezier curve and surface evaluation.
//!
//! Curves up to cubic order are evaluated with the explicit Bernstein
//! polynomial sum rather than De Casteljau recursion; at these orders the
//! closed form is both simpler and cheaper.

use crate::error::{PatchError, PatchResult};
use nalgebra::{Point2, Vector2};

/// A 1D Bezier curve in the meridional (r, z) plane.
///
/// Supports orders 2 (linear), 3 (quadratic), and 4 (cubic), where the order
/// is the control-point count.
///
/// # Example
///
/// ```
/// use passage_patch::BezierCurve;
/// use nalgebra::Point2;
///
/// let curve = BezierCurve::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 2.0),
/// ]).unwrap();
///
/// let mid = curve.evaluate(0.5).unwrap();
/// assert!((mid.x - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BezierCurve {
    ctrl: Vec<Point2<f64>>,
}

impl BezierCurve {
    /// Build a curve from its control points.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::UnsupportedOrder`] unless there are 2, 3, or 4
    /// control points.
    pub fn new(ctrl: Vec<Point2<f64>>) -> PatchResult<Self> {
        if !(2..=4).contains(&ctrl.len()) {
            return Err(PatchError::UnsupportedOrder { order: ctrl.len() });
        }
        Ok(Self { ctrl })
    }

    /// The order (control-point count) of the curve.
    #[inline]
    #[must_use]
    pub fn order(&self) -> usize {
        self.ctrl.len()
    }

    /// Evaluate the curve at `u` ∈ [0, 1].
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::ParameterOutOfRange`] outside the unit
    /// interval; the parameter is never clamped.
    pub fn evaluate(&self, u: f64) -> PatchResult<Point2<f64>> {
        if !(0.0..=1.0).contains(&u) {
            return Err(PatchError::ParameterOutOfRange {
                name: "u",
                value: u,
            });
        }
        let k: Vec<Vector2<f64>> = self.ctrl.iter().map(|p| p.coords).collect();
        let w = 1.0 - u;
        let point = match k.len() {
            2 => k[0] * w + k[1] * u,
            3 => k[0] * (w * w) + k[1] * (2.0 * u * w) + k[2] * (u * u),
            4 => {
                k[0] * (w * w * w)
                    + k[1] * (3.0 * u * w * w)
                    + k[2] * (3.0 * u * u * w)
                    + k[3] * (u * u * u)
            }
            // Order is validated at construction.
            order => return Err(PatchError::UnsupportedOrder { order }),
        };
        Ok(Point2::from(point))
    }
}

/// A 2D Bezier surface over a rectangular control grid.
///
/// Evaluation reduces the problem to the 1D case: each control row is
/// evaluated at `v`, and the resulting points form a curve evaluated at `u`.
#[derive(Debug, Clone)]
pub struct BezierSurface {
    rows: Vec<Vec<Point2<f64>>>,
}

impl BezierSurface {
    /// Build a surface from its control rows, indexed `rows[u][v]`.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::UnsupportedOrder`] if either axis has fewer
    /// than 2 or more than 4 control points, or
    /// [`PatchError::RaggedControlGrid`] if the rows disagree in length.
    pub fn new(rows: Vec<Vec<Point2<f64>>>) -> PatchResult<Self> {
        if !(2..=4).contains(&rows.len()) {
            return Err(PatchError::UnsupportedOrder { order: rows.len() });
        }
        let expected = rows[0].len();
        if !(2..=4).contains(&expected) {
            return Err(PatchError::UnsupportedOrder { order: expected });
        }
        for (row, r) in rows.iter().enumerate().skip(1) {
            if r.len() != expected {
                return Err(PatchError::RaggedControlGrid {
                    row,
                    got: r.len(),
                    expected,
                });
            }
        }
        Ok(Self { rows })
    }

    /// Order along the u axis.
    #[inline]
    #[must_use]
    pub fn order_u(&self) -> usize {
        self.rows.len()
    }

    /// Order along the v axis.
    #[inline]
    #[must_use]
    pub fn order_v(&self) -> usize {
        self.rows[0].len()
    }

    /// Evaluate the surface at `(u, v)` ∈ [0, 1]².
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::ParameterOutOfRange`] if either parameter falls
    /// outside the unit interval.
    pub fn evaluate(&self, u: f64, v: f64) -> PatchResult<Point2<f64>> {
        if !(0.0..=1.0).contains(&v) {
            return Err(PatchError::ParameterOutOfRange {
                name: "v",
                value: v,
            });
        }
        let mut reduced = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let curve = BezierCurve::new(row.clone())?;
            reduced.push(curve.evaluate(v)?);
        }
        BezierCurve::new(reduced)?.evaluate(u)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn linear_interpolates_endpoints() {
        let curve =
            BezierCurve::new(vec![Point2::new(0.0, 0.0), Point2::new(2.0, 4.0)]).unwrap();
        let p0 = curve.evaluate(0.0).unwrap();
        let p1 = curve.evaluate(1.0).unwrap();
        assert!((p0 - Point2::new(0.0, 0.0)).norm() < 1e-12);
        assert!((p1 - Point2::new(2.0, 4.0)).norm() < 1e-12);
    }

    #[test]
    fn quadratic_midpoint() {
        let curve = BezierCurve::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 0.0),
        ])
        .unwrap();
        // B(0.5) = 0.25 k0 + 0.5 k1 + 0.25 k2
        let mid = curve.evaluate(0.5).unwrap();
        assert!((mid - Point2::new(1.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn cubic_endpoints() {
        let curve = BezierCurve::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        ])
        .unwrap();
        assert!((curve.evaluate(0.0).unwrap() - Point2::new(0.0, 0.0)).norm() < 1e-12);
        assert!((curve.evaluate(1.0).unwrap() - Point2::new(1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn rejects_unsupported_orders() {
        assert!(matches!(
            BezierCurve::new(vec![Point2::origin()]),
            Err(PatchError::UnsupportedOrder { order: 1 })
        ));
        assert!(matches!(
            BezierCurve::new(vec![Point2::origin(); 5]),
            Err(PatchError::UnsupportedOrder { order: 5 })
        ));
    }

    #[test]
    fn rejects_out_of_range_parameter() {
        let curve =
            BezierCurve::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]).unwrap();
        assert!(matches!(
            curve.evaluate(-0.1),
            Err(PatchError::ParameterOutOfRange { name: "u", .. })
        ));
        assert!(curve.evaluate(1.0 + 1e-9).is_err());
    }

    #[test]
    fn surface_corners_match_control_corners() {
        let surface = BezierSurface::new(vec![
            vec![Point2::new(0.0, 0.0), Point2::new(0.0, 1.0)],
            vec![Point2::new(1.0, 0.0), Point2::new(1.0, 1.0)],
        ])
        .unwrap();
        assert!((surface.evaluate(0.0, 0.0).unwrap() - Point2::new(0.0, 0.0)).norm() < 1e-12);
        assert!((surface.evaluate(0.0, 1.0).unwrap() - Point2::new(0.0, 1.0)).norm() < 1e-12);
        assert!((surface.evaluate(1.0, 0.0).unwrap() - Point2::new(1.0, 0.0)).norm() < 1e-12);
        assert!((surface.evaluate(1.0, 1.0).unwrap() - Point2::new(1.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn surface_rejects_ragged_rows() {
        let result = BezierSurface::new(vec![
            vec![Point2::origin(), Point2::origin()],
            vec![Point2::origin(), Point2::origin(), Point2::origin()],
        ]);
        assert!(matches!(
            result,
            Err(PatchError::RaggedControlGrid { row: 1, .. })
        ));
    }
}
