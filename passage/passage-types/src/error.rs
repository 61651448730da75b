//! Error types for the core passage types.

use thiserror::Error;

/// Result type for grid construction.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur while building a meridional grid.
#[derive(Debug, Error)]
pub enum GridError {
    /// Grid resolution below the structural minimum of 2×2.
    #[error("grid resolution must be at least 2x2, got {m_count}x{s_count}")]
    ResolutionTooLow {
        /// Streamwise point count.
        m_count: usize,
        /// Spanwise point count.
        s_count: usize,
    },

    /// The r and z fields have different shapes.
    #[error("r field is {r_m}x{r_s} but z field is {z_m}x{z_s}")]
    ShapeMismatch {
        /// Streamwise count of the r field.
        r_m: usize,
        /// Spanwise count of the r field.
        r_s: usize,
        /// Streamwise count of the z field.
        z_m: usize,
        /// Spanwise count of the z field.
        z_s: usize,
    },

    /// A grid coordinate is NaN or infinite.
    #[error("non-finite grid coordinate at ({m}, {s})")]
    NonFiniteCoordinate {
        /// Streamwise index.
        m: usize,
        /// Spanwise index.
        s: usize,
    },

    /// A radius is negative.
    #[error("negative radius {radius} at ({m}, {s})")]
    NegativeRadius {
        /// Streamwise index.
        m: usize,
        /// Spanwise index.
        s: usize,
        /// The offending radius.
        radius: f64,
    },

    /// Span restriction kept no rows or more rows than exist.
    #[error("span restriction to {requested} rows invalid for a grid with {available}")]
    InvalidSpanRestriction {
        /// Requested spanwise row count.
        requested: usize,
        /// Available spanwise row count.
        available: usize,
    },
}

/// Result type for face construction and sanitizing.
pub type FaceResult<T> = Result<T, FaceError>;

/// Errors that can occur while constructing a polygon face.
#[derive(Debug, Error)]
pub enum FaceError {
    /// A face must have exactly 3 or 4 vertices.
    #[error("face must have 3 or 4 vertices, got {got}")]
    VertexCount {
        /// Actual vertex count.
        got: usize,
    },

    /// A vertex coordinate is NaN or infinite.
    #[error("non-finite vertex at index {index}")]
    NonFiniteVertex {
        /// Index of the offending vertex.
        index: usize,
    },
}
