//! Error types for annulus assembly.

use thiserror::Error;

/// Result type for assembly operations.
pub type AssemblyResult<T> = Result<T, AssemblyError>;

/// Errors that can occur while assembling an annulus.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// An annulus needs at least one blade.
    #[error("annulus requires at least one blade")]
    NoBlades,

    /// Inter-blade subdivision below 1 produces no connector faces.
    #[error("interblade subdivision must be at least 1, got {got}")]
    InterbladeTooLow {
        /// The offending subdivision count.
        got: usize,
    },

    /// A blade's angular surfaces disagree with the assembly grid.
    #[error(
        "blade {slot} surfaces are {blade_m}x{blade_s} but the assembly grid is {grid_m}x{grid_s}"
    )]
    ShapeMismatch {
        /// Slot index of the offending blade.
        slot: usize,
        /// Streamwise count of the blade surfaces.
        blade_m: usize,
        /// Spanwise count of the blade surfaces.
        blade_s: usize,
        /// Streamwise count of the assembly grid.
        grid_m: usize,
        /// Spanwise count of the assembly grid.
        grid_s: usize,
    },

    /// Slot angles must increase strictly within one turn.
    #[error("slot {slot} angle {angle} does not increase within one turn from the first slot")]
    SlotOrder {
        /// Index of the offending slot.
        slot: usize,
        /// The offending angle.
        angle: f64,
    },
}
