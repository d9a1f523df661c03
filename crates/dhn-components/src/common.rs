//! Common checks for component calculations.

use crate::error::{ComponentError, ComponentResult};
use dhn_core::numeric::{ensure_finite, ensure_positive};

/// Ensure a value is finite, returning `InvalidParameter` if not.
pub fn check_finite(value: f64, what: &'static str) -> ComponentResult<f64> {
    ensure_finite(value, what).map_err(|_| ComponentError::InvalidParameter { what, value })
}

/// Ensure a value is finite and strictly positive.
pub fn check_positive(value: f64, what: &'static str) -> ComponentResult<f64> {
    ensure_positive(value, what).map_err(|_| ComponentError::InvalidParameter { what, value })
}
