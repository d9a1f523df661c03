//! Error types for component operations.

use dhn_core::error::DhnError;
use dhn_fluids::FluidError;
use thiserror::Error;

/// Errors that can occur during component calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Invalid parameter {what}: {value}")]
    InvalidParameter { what: &'static str, value: f64 },

    #[error("Shape mismatch for {what}: {left} vs {right} steps")]
    ShapeMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },

    #[error("Missing capability: {what}")]
    MissingCapability { what: &'static str },

    #[error("Fluid model error: {0}")]
    Fluid(FluidError),

    #[error(transparent)]
    Core(DhnError),
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<FluidError> for ComponentError {
    fn from(e: FluidError) -> Self {
        match e {
            FluidError::NotSupported { what } => ComponentError::MissingCapability { what },
            FluidError::Core(inner) => inner.into(),
            other => ComponentError::Fluid(other),
        }
    }
}

impl From<DhnError> for ComponentError {
    fn from(e: DhnError) -> Self {
        match e {
            DhnError::ShapeMismatch { what, left, right } => {
                ComponentError::ShapeMismatch { what, left, right }
            }
            DhnError::NonFinite { what, value } => {
                ComponentError::InvalidParameter { what, value }
            }
            other => ComponentError::Core(other),
        }
    }
}
