//! The integrated camberline field.

use passage_types::ScalarField;

/// Per-grid-point blade angle θ and relative flow angle β.
///
/// θ is the angular position of the blade mean line, defined up to an
/// additive per-span constant; after integration the outlet row is the
/// reference (θ = 0 at m = M−1 for every span). β is
/// atan2(meridional speed, relative tangential speed).
#[derive(Debug, Clone)]
pub struct CamberlineField {
    theta: ScalarField,
    beta: ScalarField,
}

impl CamberlineField {
    pub(crate) fn new(theta: ScalarField, beta: ScalarField) -> Self {
        debug_assert!(theta.same_shape(&beta));
        Self { theta, beta }
    }

    /// Blade mean-line angular position.
    #[inline]
    #[must_use]
    pub const fn theta(&self) -> &ScalarField {
        &self.theta
    }

    /// Relative flow angle.
    #[inline]
    #[must_use]
    pub const fn beta(&self) -> &ScalarField {
        &self.beta
    }

    /// Number of streamwise points.
    #[inline]
    #[must_use]
    pub const fn m_count(&self) -> usize {
        self.theta.m_count()
    }

    /// Number of spanwise points.
    #[inline]
    #[must_use]
    pub const fn s_count(&self) -> usize {
        self.theta.s_count()
    }
}
