//! Fluid property errors.

use dhn_core::DhnError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during fluid property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative density, temperature below absolute zero, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// The model does not provide the requested property.
    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },

    /// Error from shared numeric helpers.
    #[error(transparent)]
    Core(#[from] DhnError),
}

impl From<FluidError> for DhnError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::NonPhysical { what } => DhnError::Invariant { what },
            FluidError::InvalidArg { what } => DhnError::InvalidArg { what },
            FluidError::NotSupported { what } => DhnError::Invariant { what },
            FluidError::Core(inner) => inner,
        }
    }
}
