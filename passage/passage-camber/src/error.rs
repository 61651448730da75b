//! Error types for camberline integration.

use thiserror::Error;

/// Result type for camberline operations.
pub type CamberResult<T> = Result<T, CamberError>;

/// Errors that can occur during camberline integration.
#[derive(Debug, Error)]
pub enum CamberError {
    /// The meridional relative speed vanished, leaving the tangential ratio
    /// undefined. The flow configuration is not integrable as given.
    #[error("zero meridional relative speed at grid point ({m}, {s})")]
    ZeroMeridionalSpeed {
        /// Streamwise index of the segment endpoint.
        m: usize,
        /// Spanwise index.
        s: usize,
    },

    /// A zero radius was hit at an integration point; the angular update
    /// divides by r.
    #[error("zero radius at grid point ({m}, {s})")]
    ZeroRadius {
        /// Streamwise index.
        m: usize,
        /// Spanwise index.
        s: usize,
    },

    /// A sampled-field adapter needs at least one sample.
    #[error("velocity sample set is empty")]
    EmptyField,

    /// Sample points and velocities disagree in count.
    #[error("sample set has {points} points but {velocities} velocities")]
    SampleCountMismatch {
        /// Number of sample points.
        points: usize,
        /// Number of velocity vectors.
        velocities: usize,
    },
}
