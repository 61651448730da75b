//! Dense scalar field over the structured (m, s) grid.

use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A dense M×S array of `f64` values indexed by `(m, s)`.
///
/// Storage is streamwise-major: all spanwise values for `m = 0` come first.
/// This is the backing type for grid coordinates, camberline angles, and
/// offset surfaces.
///
/// # Example
///
/// ```
/// use passage_types::ScalarField;
///
/// let mut field = ScalarField::zeros(3, 2);
/// field[(2, 1)] = 4.5;
/// assert_eq!(field[(2, 1)], 4.5);
/// assert_eq!(field.m_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScalarField {
    data: Vec<f64>,
    m_count: usize,
    s_count: usize,
}

impl ScalarField {
    /// Create a field of zeros.
    #[must_use]
    pub fn zeros(m_count: usize, s_count: usize) -> Self {
        Self {
            data: vec![0.0; m_count * s_count],
            m_count,
            s_count,
        }
    }

    /// Create a field by evaluating `f` at every `(m, s)` index.
    #[must_use]
    pub fn from_fn<F: FnMut(usize, usize) -> f64>(
        m_count: usize,
        s_count: usize,
        mut f: F,
    ) -> Self {
        let mut field = Self::zeros(m_count, s_count);
        for m in 0..m_count {
            for s in 0..s_count {
                field[(m, s)] = f(m, s);
            }
        }
        field
    }

    /// Number of streamwise points (inlet to outlet).
    #[inline]
    #[must_use]
    pub const fn m_count(&self) -> usize {
        self.m_count
    }

    /// Number of spanwise points (hub to shroud).
    #[inline]
    #[must_use]
    pub const fn s_count(&self) -> usize {
        self.s_count
    }

    /// Whether `other` has the same shape.
    #[inline]
    #[must_use]
    pub const fn same_shape(&self, other: &Self) -> bool {
        self.m_count == other.m_count && self.s_count == other.s_count
    }

    /// All values in streamwise-major order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// True if every value is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Keep only the first `s_count` spanwise rows.
    ///
    /// Used when restricting a full-span field to a partial blade.
    #[must_use]
    pub fn restrict_span(&self, s_count: usize) -> Self {
        let s_count = s_count.min(self.s_count);
        Self::from_fn(self.m_count, s_count, |m, s| self[(m, s)])
    }

    #[inline]
    fn offset(&self, m: usize, s: usize) -> usize {
        debug_assert!(m < self.m_count && s < self.s_count);
        m * self.s_count + s
    }
}

impl Index<(usize, usize)> for ScalarField {
    type Output = f64;

    #[inline]
    fn index(&self, (m, s): (usize, usize)) -> &f64 {
        &self.data[self.offset(m, s)]
    }
}

impl IndexMut<(usize, usize)> for ScalarField {
    #[inline]
    fn index_mut(&mut self, (m, s): (usize, usize)) -> &mut f64 {
        let offset = self.offset(m, s);
        &mut self.data[offset]
    }
}
