//! Branch valve controlled by its flow coefficient Kv.

use crate::attrs::{AttrValue, ComponentAttrs};
use crate::common::check_finite;
use crate::error::ComponentResult;
use crate::hydraulics::compute_dp_valve;
use crate::traits::{DeltaP, DeltaPOptions, NetworkComponent, Temperatures};
use dhn_core::Series;
use dhn_fluids::{FluidModel, Soil};

/// Valve on a single network edge.
///
/// Pressure drop follows the Kv law (see [`crate::hydraulics`]). The fluid
/// leaves at the inlet temperature: no heat is exchanged with the soil.
#[derive(Debug, Clone)]
pub struct BranchValve {
    name: String,
    /// Flow coefficient Kv [m³/h at 1 bar]; must be positive when evaluated
    pub kv: f64,
    /// Elevation of the end port above the start port [m]
    pub dz: f64,
    /// Network line the valve belongs to (e.g. supply or return)
    pub line: Option<String>,
    attrs: ComponentAttrs,
}

/// Flow coefficient used when a valve is created without one [m³/h at 1 bar].
pub const DEFAULT_KV: f64 = 2.5;

impl BranchValve {
    pub const KIND: &'static str = "base_branch_valve";

    /// Create a valve with no elevation change and no line tag.
    pub fn new(name: impl Into<String>, kv: f64) -> Self {
        Self {
            name: name.into(),
            kv,
            dz: 0.0,
            line: None,
            attrs: ComponentAttrs::default(),
        }
    }

    /// Create a valve with [`DEFAULT_KV`].
    pub fn with_default_kv(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_KV)
    }

    pub fn with_dz(mut self, dz: f64) -> Self {
        self.dz = dz;
        self
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
        self
    }

    /// Attach an extra attribute the solver or post-processing may read.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    pub fn set_kv(&mut self, kv: f64) {
        self.kv = kv;
    }

    fn eval_delta_p(&self, fluid: &dyn FluidModel, opts: DeltaPOptions) -> ComponentResult<DeltaP> {
        let temperature = self.attrs.temperature.select(opts.ts_id)?;
        let rho = fluid.rho_series(&temperature)?;
        compute_dp_valve(&self.attrs.mass_flow, &rho, self.kv, self.dz, opts)
    }
}

impl NetworkComponent for BranchValve {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn attrs(&self) -> &ComponentAttrs {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut ComponentAttrs {
        &mut self.attrs
    }

    fn delta_p(&self, fluid: &dyn FluidModel, opts: DeltaPOptions) -> ComponentResult<DeltaP> {
        tracing::trace!(
            valve = %self.name,
            kv = self.kv,
            dz = self.dz,
            hydrostatic = opts.compute_hydrostatic,
            ts_id = ?opts.ts_id,
            "evaluating valve pressure drop"
        );

        self.eval_delta_p(fluid, opts).inspect_err(|e| {
            tracing::warn!(
                valve = %self.name,
                fluid = fluid.name(),
                error = %e,
                "valve pressure drop rejected"
            );
        })
    }

    fn temperatures(
        &self,
        _fluid: &dyn FluidModel,
        _soil: &Soil,
        t_in: &Series,
        ts_id: Option<usize>,
    ) -> ComponentResult<Temperatures> {
        let t_in = t_in
            .select(ts_id)?
            .try_map(|t| check_finite(t, "inlet temperature"))?;
        Ok(Temperatures::pass_through(t_in))
    }
}
