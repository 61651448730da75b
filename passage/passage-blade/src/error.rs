//! Error types for blade construction.

use thiserror::Error;

/// Result type for blade operations.
pub type BladeResult<T> = Result<T, BladeError>;

/// Errors that can occur while building a blade.
#[derive(Debug, Error)]
pub enum BladeError {
    /// Grid and camberline (or the two offset surfaces) disagree in shape.
    #[error("field shape mismatch: {left_m}x{left_s} vs {right_m}x{right_s}")]
    ShapeMismatch {
        /// Streamwise count of the left operand.
        left_m: usize,
        /// Spanwise count of the left operand.
        left_s: usize,
        /// Streamwise count of the right operand.
        right_m: usize,
        /// Spanwise count of the right operand.
        right_s: usize,
    },

    /// The thickness offset divides by the local radius.
    #[error("zero radius at grid point ({m}, {s})")]
    ZeroRadius {
        /// Streamwise index.
        m: usize,
        /// Spanwise index.
        s: usize,
    },

    /// A thickness policy returned a negative or non-finite value.
    #[error("invalid thickness {value} from policy at normalized ({m_n}, {s_n})")]
    InvalidThickness {
        /// Normalized streamwise position.
        m_n: f64,
        /// Normalized spanwise position.
        s_n: f64,
        /// The offending thickness.
        value: f64,
    },

    /// Blade grid spans more rows than its angular surfaces.
    #[error("blade grid has {grid_s} spanwise rows but surfaces only {surface_s}")]
    SpanOverrun {
        /// Spanwise rows in the blade grid.
        grid_s: usize,
        /// Spanwise rows in the angular surfaces.
        surface_s: usize,
    },
}
