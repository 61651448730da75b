//! Streamwise integration of the blade camberline.

use crate::error::{CamberError, CamberResult};
use crate::field::CamberlineField;
use crate::sampler::VelocitySampler;
use passage_types::{MeridionalGrid, ScalarField};
use rayon::prelude::*;
use tracing::debug;

/// Integrate the relative velocity field into a camberline.
///
/// For each span the blade angle accumulates streamwise: the relative
/// velocity is sampled at each segment midpoint, and the angular step is the
/// segment length times the tangential-to-meridional speed ratio over the
/// local radius. After the sweep each span column is rebased so the outlet
/// row reads θ = 0, making the outlet the angular reference for every span.
/// β at the inlet row is copied from its neighbor - the m = 0 row has no
/// upstream segment to define a relative angle.
///
/// `omega` is the signed angular velocity of the rotating frame in rad/s;
/// pass 0 for a stator.
///
/// # Errors
///
/// Returns [`CamberError::ZeroMeridionalSpeed`] where the sampled relative
/// flow is purely tangential and [`CamberError::ZeroRadius`] where the grid
/// radius vanishes at an integration point. Both are properties of the
/// chosen flow/geometry configuration and propagate rather than being
/// approximated away.
pub fn integrate<V>(
    grid: &MeridionalGrid,
    omega: f64,
    sampler: &V,
) -> CamberResult<CamberlineField>
where
    V: VelocitySampler + Sync,
{
    let m_count = grid.m_count();
    let s_count = grid.s_count();

    // Spans are independent; the streamwise loop inside each is a running
    // integral and must stay sequential.
    let columns: Vec<(Vec<f64>, Vec<f64>)> = (0..s_count)
        .into_par_iter()
        .map(|s| integrate_span(grid, omega, sampler, s))
        .collect::<CamberResult<_>>()?;

    let mut theta = ScalarField::zeros(m_count, s_count);
    let mut beta = ScalarField::zeros(m_count, s_count);
    for (s, (theta_col, beta_col)) in columns.into_iter().enumerate() {
        for m in 0..m_count {
            theta[(m, s)] = theta_col[m];
            beta[(m, s)] = beta_col[m];
        }
    }

    debug!(m_count, s_count, omega, "camberline integrated");
    Ok(CamberlineField::new(theta, beta))
}

/// One span's streamwise sweep: runs the angular integral, rebases the
/// column on the outlet row, and backfills the inlet β.
fn integrate_span<V>(
    grid: &MeridionalGrid,
    omega: f64,
    sampler: &V,
    s: usize,
) -> CamberResult<(Vec<f64>, Vec<f64>)>
where
    V: VelocitySampler,
{
    let m_count = grid.m_count();
    let r = grid.r();
    let z = grid.z();

    let mut theta = vec![0.0; m_count];
    let mut beta = vec![0.0; m_count];

    for m in 1..m_count {
        let radius = r[(m, s)];
        if radius == 0.0 {
            return Err(CamberError::ZeroRadius { m, s });
        }

        let mid_r = (r[(m, s)] + r[(m - 1, s)]) / 2.0;
        let mid_z = (z[(m, s)] + z[(m - 1, s)]) / 2.0;
        let velocity = sampler.sample(mid_r, mid_z);

        // Relative velocity terms
        let w_m = velocity.x.hypot(velocity.z);
        if w_m == 0.0 {
            return Err(CamberError::ZeroMeridionalSpeed { m, s });
        }
        let w_th = velocity.y - omega * radius;

        // Linear displacement from the previous grid point
        let x_m = (r[(m, s)] - r[(m - 1, s)]).hypot(z[(m, s)] - z[(m - 1, s)]);

        theta[m] = theta[m - 1] + x_m * w_th / (radius * w_m);
        beta[m] = w_m.atan2(w_th);
    }

    // Rebase so the outlet side is aligned at zero
    let outlet = theta[m_count - 1];
    for value in &mut theta {
        *value -= outlet;
    }

    // The inlet row has no upstream segment; its neighbor is the closest
    // defined value.
    beta[0] = beta[1];

    Ok((theta, beta))
}
