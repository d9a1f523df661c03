//! Fluid property model trait and validation helpers.

use crate::error::{FluidError, FluidResult};
use dhn_core::Series;
use dhn_core::units::{Density, Temperature, k};

/// Trait for fluid property models used by network components.
///
/// Implementations must be thread-safe (Send + Sync) to support parallel evaluation.
/// Components only need density; every other property is the business of the
/// thermal side of the solver.
pub trait FluidModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Compute density [kg/m³] at the given temperature.
    ///
    /// Default implementation returns NotSupported, so a model that cannot
    /// look up densities is reported as such instead of producing garbage.
    fn rho(&self, _t: Temperature) -> FluidResult<Density> {
        Err(FluidError::NotSupported {
            what: "density lookup",
        })
    }

    /// Density [kg/m³] for each temperature [K] in `t_k`.
    ///
    /// The output has the same shape as the input.
    fn rho_series(&self, t_k: &Series) -> FluidResult<Series> {
        t_k.try_map(|t| self.rho(k(t)).map(|rho| rho.value))
    }
}

/// Validation helpers for fluid properties.
pub(crate) mod validation {
    use super::*;

    /// Ensure temperature is positive and finite.
    pub fn validate_temperature(t: Temperature) -> FluidResult<()> {
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure density is positive and finite.
    pub fn validate_density(rho: Density) -> FluidResult<()> {
        if !rho.value.is_finite() || rho.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "density must be positive and finite",
            });
        }
        Ok(())
    }
}
