//! Offsetting the camberline into the two blade wall surfaces.

use crate::error::{BladeError, BladeResult};
use crate::thickness::ThicknessPolicy;
use passage_camber::CamberlineField;
use passage_types::{MeridionalGrid, ScalarField};

/// Offset the camberline into the leading and trailing angular surfaces.
///
/// At each grid point the wall sits at an angular distance of
/// `thickness · sin β / r` from the mean line, on opposite sides:
/// the leading surface at `θ + t_l·sin β / r`, the trailing surface at
/// `θ − t_t·sin β / r`. The sin β factor converts a wall thickness measured
/// normal to the blade into an angular offset at the local radius.
///
/// Stateless and reusable per blade slot; distinct policies per slot give
/// independently parameterized blades (e.g. splitters).
///
/// # Errors
///
/// Returns an error if grid and camberline disagree in shape, a radius is
/// zero where the offset divides by it, or the policy returns a negative or
/// non-finite thickness.
pub fn offset_surfaces<P>(
    grid: &MeridionalGrid,
    camberline: &CamberlineField,
    policy: &P,
) -> BladeResult<(ScalarField, ScalarField)>
where
    P: ThicknessPolicy,
{
    let m_count = grid.m_count();
    let s_count = grid.s_count();
    if camberline.m_count() != m_count || camberline.s_count() != s_count {
        return Err(BladeError::ShapeMismatch {
            left_m: m_count,
            left_s: s_count,
            right_m: camberline.m_count(),
            right_s: camberline.s_count(),
        });
    }

    let mut theta_l = camberline.theta().clone();
    let mut theta_t = camberline.theta().clone();

    #[allow(clippy::cast_precision_loss)]
    for s in 0..s_count {
        for m in 0..m_count {
            let m_n = m as f64 / (m_count - 1) as f64;
            let s_n = s as f64 / (s_count - 1) as f64;

            let t_l = policy.leading(m_n, s_n);
            let t_t = policy.trailing(m_n, s_n);
            for value in [t_l, t_t] {
                if !value.is_finite() || value < 0.0 {
                    return Err(BladeError::InvalidThickness { m_n, s_n, value });
                }
            }

            let radius = grid.r()[(m, s)];
            if radius == 0.0 {
                return Err(BladeError::ZeroRadius { m, s });
            }

            let sin_beta = camberline.beta()[(m, s)].sin();
            theta_l[(m, s)] += t_l * sin_beta / radius;
            theta_t[(m, s)] -= t_t * sin_beta / radius;
        }
    }

    Ok((theta_l, theta_t))
}
