//! Structured grid sampling of a meridional patch.

use crate::error::PatchResult;
use crate::patch::MeridionalPatch;
use passage_types::{MeridionalGrid, ScalarField};

/// Sample a patch over an M×S structured grid.
///
/// Grid point `(i, j)` is the patch evaluated at `m = i/(M−1)`,
/// `s = j/(S−1)`. Pure function; the patch is not consumed.
///
/// # Errors
///
/// Returns an error if either resolution is below 2, the patch rejects a
/// parameter, or the sampled coordinates violate the grid invariants
/// (non-finite values, negative radii).
///
/// # Example
///
/// ```
/// use passage_patch::{sample_grid, MeridionalPatch};
/// use nalgebra::Point2;
///
/// let patch = MeridionalPatch::linear(
///     Point2::new(1.0, 1.0),
///     Point2::new(2.0, 1.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(2.0, 0.0),
/// ).unwrap();
/// let grid = sample_grid(&patch, 4, 3).unwrap();
/// assert_eq!((grid.m_count(), grid.s_count()), (4, 3));
/// ```
pub fn sample_grid(
    patch: &MeridionalPatch,
    m_count: usize,
    s_count: usize,
) -> PatchResult<MeridionalGrid> {
    // Delegate the >= 2 check to the grid type; sample lazily enough that a
    // degenerate request never evaluates the patch.
    if m_count < 2 || s_count < 2 {
        return Err(passage_types::GridError::ResolutionTooLow { m_count, s_count }.into());
    }

    let mut r = ScalarField::zeros(m_count, s_count);
    let mut z = ScalarField::zeros(m_count, s_count);
    #[allow(clippy::cast_precision_loss)]
    for i in 0..m_count {
        for j in 0..s_count {
            let m = i as f64 / (m_count - 1) as f64;
            let s = j as f64 / (s_count - 1) as f64;
            let point = patch.evaluate(m, s)?;
            r[(i, j)] = point.x;
            z[(i, j)] = point.y;
        }
    }
    Ok(MeridionalGrid::new(r, z)?)
}
