//! dhn-core: shared foundation for the district-heating network crates.
//!
//! Contains:
//! - units (uom SI types + constructors + standard gravity)
//! - numeric (Real + tolerances + float helpers)
//! - series (scalar or per-time-step values)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod series;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{DhnError, DhnResult};
pub use numeric::*;
pub use series::Series;
pub use units::*;
