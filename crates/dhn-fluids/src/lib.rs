//! dhn-fluids: fluid and ground property models for district-heating networks.
//!
//! Provides:
//! - `FluidModel` trait, the density collaborator components query
//! - Liquid approximations (constant and linear-in-temperature density)
//! - `Soil`, the environment passed to thermal evaluations
//!
//! # Example
//!
//! ```
//! use dhn_fluids::{FluidModel, LinearDensityFluid};
//! use dhn_core::units::degc;
//!
//! let water = LinearDensityFluid::water();
//! let rho = water.rho(degc(70.0)).unwrap();
//! assert!(rho.value < 983.2);
//! ```

pub mod error;
pub mod incompressible;
pub mod model;
pub mod soil;

// Re-exports for ergonomics
pub use error::{FluidError, FluidResult};
pub use incompressible::{ConstantDensityFluid, LinearDensityFluid};
pub use model::FluidModel;
pub use soil::Soil;
