//! Liquid models for district-heating water.
//!
//! Two approximations are provided:
//!
//! - [`ConstantDensityFluid`]: density does not depend on temperature
//!   (`ρ = ρ_ref`).
//! - [`LinearDensityFluid`]: density falls linearly with temperature through a
//!   volumetric expansion coefficient,
//!
//! ```text
//! ρ(T) = ρ_ref · (1 − β · (T − T_ref))
//! ```
//!
//! Pressure effects are not modeled by either approximation.

use crate::error::{FluidError, FluidResult};
use crate::model::{FluidModel, validation};
use dhn_core::units::{Density, Temperature, degc, kgpm3};

/// Incompressible liquid with a fixed density.
#[derive(Debug, Clone)]
pub struct ConstantDensityFluid {
    name: String,
    rho: Density,
}

impl ConstantDensityFluid {
    /// Create a fluid with the given density.
    ///
    /// Fails with `NonPhysical` if the density is not positive and finite.
    pub fn new(name: impl Into<String>, rho: Density) -> FluidResult<Self> {
        validation::validate_density(rho)?;
        Ok(Self {
            name: name.into(),
            rho,
        })
    }

    /// Water at roughly 4 °C, 1000 kg/m³.
    pub fn water() -> Self {
        Self {
            name: "water".into(),
            rho: kgpm3(1000.0),
        }
    }
}

impl FluidModel for ConstantDensityFluid {
    fn name(&self) -> &str {
        &self.name
    }

    fn rho(&self, t: Temperature) -> FluidResult<Density> {
        validation::validate_temperature(t)?;
        Ok(self.rho)
    }
}

/// Liquid whose density decreases linearly with temperature.
#[derive(Debug, Clone)]
pub struct LinearDensityFluid {
    name: String,
    /// Density at the reference temperature
    pub rho_ref: Density,
    /// Reference temperature
    pub t_ref: Temperature,
    /// Volumetric thermal expansion coefficient [1/K]
    pub beta: f64,
}

impl LinearDensityFluid {
    pub fn new(
        name: impl Into<String>,
        rho_ref: Density,
        t_ref: Temperature,
        beta: f64,
    ) -> FluidResult<Self> {
        validation::validate_density(rho_ref)?;
        validation::validate_temperature(t_ref)?;
        if !beta.is_finite() || beta < 0.0 {
            return Err(FluidError::InvalidArg {
                what: "expansion coefficient must be non-negative and finite",
            });
        }
        Ok(Self {
            name: name.into(),
            rho_ref,
            t_ref,
            beta,
        })
    }

    /// Water fitted around supply temperatures: 983.2 kg/m³ at 60 °C,
    /// β = 5.2e-4 1/K.
    pub fn water() -> Self {
        Self {
            name: "water".into(),
            rho_ref: kgpm3(983.2),
            t_ref: degc(60.0),
            beta: 5.2e-4,
        }
    }
}

impl FluidModel for LinearDensityFluid {
    fn name(&self) -> &str {
        &self.name
    }

    fn rho(&self, t: Temperature) -> FluidResult<Density> {
        validation::validate_temperature(t)?;
        let dt = t.value - self.t_ref.value;
        Ok(kgpm3(self.rho_ref.value * (1.0 - self.beta * dt)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dhn_core::Series;
    use dhn_core::units::k;

    #[test]
    fn constant_density_ignores_temperature() {
        let fluid = ConstantDensityFluid::water();
        assert_eq!(fluid.rho(degc(10.0)).unwrap().value, 1000.0);
        assert_eq!(fluid.rho(degc(90.0)).unwrap().value, 1000.0);
        assert_eq!(fluid.name(), "water");
    }

    #[test]
    fn constant_density_rejects_non_physical() {
        assert!(ConstantDensityFluid::new("bad", kgpm3(0.0)).is_err());
        assert!(ConstantDensityFluid::new("bad", kgpm3(f64::NAN)).is_err());
        assert!(ConstantDensityFluid::water().rho(k(-1.0)).is_err());
    }

    #[test]
    fn linear_density_at_reference() {
        let fluid = LinearDensityFluid::water();
        let rho = fluid.rho(degc(60.0)).unwrap().value;
        assert!((rho - 983.2).abs() < 1e-9);
    }

    #[test]
    fn linear_density_decreases_with_temperature() {
        let fluid = LinearDensityFluid::water();
        let cold = fluid.rho(degc(40.0)).unwrap().value;
        let hot = fluid.rho(degc(80.0)).unwrap().value;
        assert!(cold > hot);
    }

    #[test]
    fn linear_density_series_shape() {
        let fluid = LinearDensityFluid::new("w", kgpm3(1000.0), k(300.0), 1e-3).unwrap();
        let rho = fluid
            .rho_series(&Series::steps([300.0, 310.0, 290.0]))
            .unwrap();
        assert_eq!(rho.len(), Some(3));
        let values: Vec<f64> = rho.iter().collect();
        assert!((values[0] - 1000.0).abs() < 1e-9);
        assert!((values[1] - 990.0).abs() < 1e-9);
        assert!((values[2] - 1010.0).abs() < 1e-9);
    }

    #[test]
    fn linear_density_rejects_negative_beta() {
        let err = LinearDensityFluid::new("w", kgpm3(1000.0), k(300.0), -1e-3).unwrap_err();
        assert!(matches!(err, FluidError::InvalidArg { .. }));
    }
}
