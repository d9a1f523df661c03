//! Ground surrounding buried network elements.

use crate::error::{FluidError, FluidResult};
use crate::model::validation;
use dhn_core::units::{Temperature, degc};

/// Soil around the network.
///
/// Pipes use it for heat losses; components that exchange no heat with the
/// ground still receive it so every component shares one thermal interface.
#[derive(Debug, Clone, PartialEq)]
pub struct Soil {
    /// Thermal conductivity [W/(m·K)]
    pub conductivity: f64,
    /// Undisturbed ground temperature
    pub temperature: Temperature,
}

impl Soil {
    pub fn new(conductivity: f64, temperature: Temperature) -> FluidResult<Self> {
        if !conductivity.is_finite() || conductivity <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "soil conductivity must be positive and finite",
            });
        }
        validation::validate_temperature(temperature)?;
        Ok(Self {
            conductivity,
            temperature,
        })
    }
}

impl Default for Soil {
    fn default() -> Self {
        Self {
            conductivity: 0.5,
            temperature: degc(10.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_soil() {
        let soil = Soil::default();
        assert_eq!(soil.conductivity, 0.5);
        assert!((soil.temperature.value - 283.15).abs() < 1e-9);
    }

    #[test]
    fn rejects_bad_conductivity() {
        assert!(Soil::new(0.0, degc(8.0)).is_err());
        assert!(Soil::new(1.2, degc(8.0)).is_ok());
    }
}
