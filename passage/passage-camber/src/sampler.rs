//! The velocity-field boundary and its pre-materialized adapter.

use crate::error::{CamberError, CamberResult};
use kiddo::{KdTree, SquaredEuclidean};
use nalgebra::{Point2, Vector3};

/// Single-point velocity query over the meridional cross-section.
///
/// The returned vector is in (radial, tangential, axial) order: `x` is the
/// radial component, `y` the tangential, `z` the axial. Implementations must
/// answer every query, including points outside the sampled hull; the
/// integrator never guards its lookups.
pub trait VelocitySampler {
    /// Velocity at the meridional point `(r, z)`.
    fn sample(&self, r: f64, z: f64) -> Vector3<f64>;
}

/// Closures over `(r, z)` are samplers; convenient for analytic fields and
/// tests.
impl<F> VelocitySampler for F
where
    F: Fn(f64, f64) -> Vector3<f64>,
{
    #[inline]
    fn sample(&self, r: f64, z: f64) -> Vector3<f64> {
        self(r, z)
    }
}

/// A pre-materialized velocity sample set with nearest-neighbor lookup.
///
/// Adapts a solver export (scattered midpoint samples over the meridional
/// cross-section) to the [`VelocitySampler`] contract. Queries outside the
/// convex hull of the samples return the nearest sample's velocity, so the
/// integrator's hot loop stays free of failure paths and suspension points.
///
/// # Example
///
/// ```
/// use passage_camber::{SampledField, VelocitySampler};
/// use passage_types::{Point2, Vector3};
///
/// let field = SampledField::new(
///     &[Point2::new(1.0, 0.0), Point2::new(2.0, 0.0)],
///     vec![Vector3::new(0.0, 1.0, 5.0), Vector3::new(0.0, 2.0, 5.0)],
/// ).unwrap();
///
/// // Outside the hull: nearest sample wins
/// let v = field.sample(10.0, 3.0);
/// assert_eq!(v.y, 2.0);
/// ```
pub struct SampledField {
    tree: KdTree<f64, 2>,
    velocities: Vec<Vector3<f64>>,
}

impl SampledField {
    /// Build a sample set from meridional points and their velocities.
    ///
    /// # Errors
    ///
    /// Returns an error if the set is empty or the counts disagree.
    pub fn new(points: &[Point2<f64>], velocities: Vec<Vector3<f64>>) -> CamberResult<Self> {
        if points.is_empty() {
            return Err(CamberError::EmptyField);
        }
        if points.len() != velocities.len() {
            return Err(CamberError::SampleCountMismatch {
                points: points.len(),
                velocities: velocities.len(),
            });
        }
        let mut tree: KdTree<f64, 2> = KdTree::new();
        for (i, p) in points.iter().enumerate() {
            tree.add(&[p.x, p.y], i as u64);
        }
        Ok(Self { tree, velocities })
    }

    /// Number of samples held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.velocities.len()
    }

    /// True if the set holds no samples (unreachable after construction).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.velocities.is_empty()
    }
}

impl VelocitySampler for SampledField {
    fn sample(&self, r: f64, z: f64) -> Vector3<f64> {
        let nearest = self.tree.nearest_one::<SquaredEuclidean>(&[r, z]);
        #[allow(clippy::cast_possible_truncation)]
        let index = nearest.item as usize;
        self.velocities[index]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn nearest_sample_wins() {
        let field = SampledField::new(
            &[
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(0.0, 1.0),
            ],
            vec![
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(2.0, 0.0, 0.0),
                Vector3::new(3.0, 0.0, 0.0),
            ],
        )
        .unwrap();

        assert_eq!(field.sample(0.1, 0.1).x, 1.0);
        assert_eq!(field.sample(0.9, 0.1).x, 2.0);
        assert_eq!(field.sample(-5.0, 20.0).x, 3.0);
    }

    #[test]
    fn rejects_empty_set() {
        assert!(matches!(
            SampledField::new(&[], Vec::new()),
            Err(CamberError::EmptyField)
        ));
    }

    #[test]
    fn rejects_count_mismatch() {
        let result = SampledField::new(
            &[Point2::new(0.0, 0.0)],
            vec![Vector3::zeros(), Vector3::zeros()],
        );
        assert!(matches!(
            result,
            Err(CamberError::SampleCountMismatch {
                points: 1,
                velocities: 2
            })
        ));
    }

    #[test]
    fn closures_are_samplers() {
        let sampler = |r: f64, _z: f64| Vector3::new(0.0, 1.0 / r, 0.0);
        assert_eq!(sampler.sample(2.0, 0.0).y, 0.5);
    }
}
