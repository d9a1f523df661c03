//! Pressure drop laws shared by branch components.
//!
//! The valve law relates mass flow to pressure drop through the flow
//! coefficient Kv (m³/h at 1 bar):
//!
//! ```text
//! Δp = 1.296e9 / (ρ · Kv²) · |ṁ| · ṁ  [+ ρ · g · dz]
//! dΔp/dṁ = 2 · 1.296e9 / (ρ · Kv²) · |ṁ|
//! ```
//!
//! 1.296e9 = 3600² · 1e5 converts kg/s to m³/h and bar to Pa.

use crate::common::{check_finite, check_positive};
use crate::error::ComponentResult;
use crate::traits::{DeltaP, DeltaPOptions};
use dhn_core::Series;
use dhn_core::units::constants::G0_MPS2;

/// Unit conversion factor of the Kv law [Pa·h²/s²].
pub const KV_LAW_COEFF: f64 = 1.296e9;

/// Hydrostatic pressure difference ρ·g·dz [Pa].
#[inline]
pub fn dp_hydrostatic(dz: f64, rho: f64) -> f64 {
    rho * G0_MPS2 * dz
}

/// Valve pressure drop for one evaluation instant [Pa].
///
/// Inputs are not validated; use [`compute_dp_valve`] for checked evaluation.
#[inline]
pub fn dp_valve(mdot: f64, kv: f64, dz: f64, rho: f64, hydrostatic: bool) -> f64 {
    let dp = KV_LAW_COEFF / (rho * kv * kv) * mdot.abs() * mdot;
    if hydrostatic {
        dp + dp_hydrostatic(dz, rho)
    } else {
        dp
    }
}

/// Derivative of [`dp_valve`] with respect to mass flow [Pa·s/kg].
///
/// The hydrostatic term does not depend on flow and contributes nothing.
#[inline]
pub fn dp_valve_der(mdot: f64, kv: f64, rho: f64) -> f64 {
    2.0 * KV_LAW_COEFF / (rho * kv * kv) * mdot.abs()
}

/// Checked, element-wise valve law.
///
/// `mdot` and `rho` are narrowed to `opts.ts_id` first when they hold one
/// value per time step. Scalars broadcast over sequences; sequences of
/// different length are rejected.
///
/// # Errors
///
/// - `InvalidParameter` for a non-positive or non-finite `kv` or density,
///   or a non-finite `dz` or mass flow, and when the result itself overflows
///   to a non-finite value (e.g. a `kv` so small that `kv²` underflows).
/// - `ShapeMismatch` when `mdot` and `rho` have different step counts.
/// - `Core(IndexOob)` when `ts_id` is past the end of a sequence.
pub fn compute_dp_valve(
    mdot: &Series,
    rho: &Series,
    kv: f64,
    dz: f64,
    opts: DeltaPOptions,
) -> ComponentResult<DeltaP> {
    let kv = check_positive(kv, "kv")?;
    let dz = check_finite(dz, "dz")?;
    let mdot = mdot.select(opts.ts_id)?;
    let rho = rho.select(opts.ts_id)?;

    let dp = mdot.try_zip_with(&rho, "mass flow vs density", |m, r| -> ComponentResult<f64> {
        let m = check_finite(m, "mass flow")?;
        let r = check_positive(r, "density")?;
        check_finite(dp_valve(m, kv, dz, r, opts.compute_hydrostatic), "pressure drop")
    })?;

    // Inputs were validated above; only overflow/underflow can fail here.
    let dp_der = if opts.compute_der {
        Some(mdot.try_zip_with(&rho, "mass flow vs density", |m, r| {
            check_finite(dp_valve_der(m, kv, r), "pressure drop derivative")
        })?)
    } else {
        None
    };

    Ok(DeltaP {
        dp,
        dp_der,
        ts_id: opts.ts_id,
    })
}
