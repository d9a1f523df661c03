//! dhn-components: component library for district-heating networks.
//!
//! Provides the contract between network components and the hydraulic/thermal
//! solver, and the models implementing it:
//! - Branch valves governed by a flow coefficient Kv
//!
//! All components implement the `NetworkComponent` trait. Evaluation is pure;
//! results are cached in component state only through an explicit commit.
//!
//! # Example
//!
//! ```
//! use dhn_components::{BranchValve, DeltaPOptions, NetworkComponent};
//! use dhn_fluids::ConstantDensityFluid;
//!
//! let water = ConstantDensityFluid::water();
//! let mut valve = BranchValve::new("v1", 25.0).with_line("supply");
//! valve.attrs_mut().set_mass_flow(10.0);
//!
//! let res = valve.evaluate_and_commit(&water, DeltaPOptions::default()).unwrap();
//! let dp = res.dp.as_scalar().unwrap();
//! assert!((dp - 207_360.0).abs() < 1e-6);
//! assert_eq!(valve.attrs().delta_p, Some(res.dp));
//! ```

pub mod attrs;
pub mod common;
pub mod error;
pub mod hydraulics;
pub mod traits;
pub mod valve;

// Re-exports
pub use attrs::{AttrValue, ComponentAttrs};
pub use error::{ComponentError, ComponentResult};
pub use hydraulics::compute_dp_valve;
pub use traits::{ComponentClass, DeltaP, DeltaPOptions, NetworkComponent, Temperatures};
pub use valve::{BranchValve, DEFAULT_KV};
