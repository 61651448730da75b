//! Error types for patch evaluation and grid sampling.

use passage_types::GridError;
use thiserror::Error;

/// Result type for patch operations.
pub type PatchResult<T> = Result<T, PatchError>;

/// Errors that can occur while building or evaluating a meridional patch.
#[derive(Debug, Error)]
pub enum PatchError {
    /// A curve or surface parameter fell outside the unit interval.
    #[error("parameter {name} = {value} outside [0, 1]")]
    ParameterOutOfRange {
        /// Parameter name (`m`, `s`, `u`, or `v`).
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Bezier order outside the supported 2..=4 (linear to cubic) range.
    #[error("unsupported Bezier order {order}; only orders 2 through 4 are supported")]
    UnsupportedOrder {
        /// Control-point count of the offending curve.
        order: usize,
    },

    /// Surface control rows disagree in length.
    #[error("ragged control grid: row {row} has {got} points, expected {expected}")]
    RaggedControlGrid {
        /// Index of the offending row.
        row: usize,
        /// Points in the offending row.
        got: usize,
        /// Points in the first row.
        expected: usize,
    },

    /// Inlet and outlet velocity directions are parallel, so the spline
    /// patch's middle control row is undefined.
    #[error("inlet and outlet velocity lines are parallel at span end {span}")]
    ParallelVelocityLines {
        /// Which span end failed (0 = hub, 1 = shroud).
        span: usize,
    },

    /// A merged patch needs at least one sub-patch.
    #[error("merged patch requires at least one sub-patch")]
    EmptyPatchList,

    /// Grid construction from sampled points failed.
    #[error(transparent)]
    Grid(#[from] GridError),
}
