//! Core traits for component models.

use crate::attrs::ComponentAttrs;
use crate::error::ComponentResult;
use dhn_core::Series;
use dhn_fluids::{FluidModel, Soil};

/// Where a component sits in the network graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentClass {
    /// Occupies a single edge.
    Branch,
    /// Spans several edges.
    MultiBranch,
}

impl ComponentClass {
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentClass::Branch => "branch_component",
            ComponentClass::MultiBranch => "multi_branch_component",
        }
    }
}

/// Flags for a pressure drop evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeltaPOptions {
    /// Add the hydrostatic term ρ·g·dz
    pub compute_hydrostatic: bool,
    /// Also return dΔp/dṁ
    pub compute_der: bool,
    /// Time step to evaluate when attributes hold one value per step
    pub ts_id: Option<usize>,
}

impl Default for DeltaPOptions {
    fn default() -> Self {
        Self {
            compute_hydrostatic: false,
            compute_der: true,
            ts_id: None,
        }
    }
}

impl DeltaPOptions {
    pub fn with_hydrostatic(mut self) -> Self {
        self.compute_hydrostatic = true;
        self
    }

    pub fn without_derivative(mut self) -> Self {
        self.compute_der = false;
        self
    }

    pub fn at_step(mut self, ts_id: usize) -> Self {
        self.ts_id = Some(ts_id);
        self
    }
}

/// Result of a pressure drop evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaP {
    /// Pressure drop [Pa]
    pub dp: Series,
    /// dΔp/dṁ [Pa·s/kg], present only when requested
    pub dp_der: Option<Series>,
    /// Time step the result belongs to, if a single one was selected
    pub ts_id: Option<usize>,
}

/// Result of a thermal evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Temperatures {
    /// Temperature at the start port [K]
    pub t_start: Series,
    /// Temperature at the end port [K]
    pub t_end: Series,
    /// Mean fluid temperature inside the component [K]
    pub t_avg: Series,
    /// Heat exchanged with the fluid [W]
    pub delta_q: Series,
    /// Derivative of `delta_q` with respect to the inlet temperature [W/K]
    pub delta_q_der: Series,
}

impl Temperatures {
    /// Fluid leaves exactly as it entered and exchanges no heat.
    pub fn pass_through(t_in: Series) -> Self {
        let zeros = t_in.map(|_| 0.0);
        Self {
            t_start: t_in.clone(),
            t_end: t_in.clone(),
            t_avg: t_in,
            delta_q: zeros.clone(),
            delta_q_der: zeros,
        }
    }
}

/// Capability contract every network component satisfies.
///
/// The solver writes `mass_flow` and `temperature` into [`ComponentAttrs`],
/// evaluates the laws below, and commits results back only when it wants them
/// cached. Evaluation borrows the component immutably, so independent
/// components can be evaluated in parallel.
pub trait NetworkComponent: Send + Sync {
    /// Component name for debugging and identification.
    fn name(&self) -> &str;

    /// Placement in the network graph.
    fn class(&self) -> ComponentClass {
        ComponentClass::Branch
    }

    /// Identifier of the physical model, e.g. `"base_branch_valve"`.
    fn kind(&self) -> &'static str;

    /// True for components that impose a fixed pressure or flow instead of a
    /// coefficient-based law.
    fn is_ideal(&self) -> bool {
        false
    }

    fn attrs(&self) -> &ComponentAttrs;

    fn attrs_mut(&mut self) -> &mut ComponentAttrs;

    /// Pressure drop across the component for the current mass flow.
    ///
    /// Pure: nothing is written to the component.
    fn delta_p(&self, fluid: &dyn FluidModel, opts: DeltaPOptions) -> ComponentResult<DeltaP>;

    /// Cache a pressure drop result in the component state.
    fn commit_delta_p(&mut self, result: &DeltaP) {
        self.attrs_mut().store_delta_p(result);
    }

    /// Evaluate the pressure drop and cache it in one step.
    fn evaluate_and_commit(
        &mut self,
        fluid: &dyn FluidModel,
        opts: DeltaPOptions,
    ) -> ComponentResult<DeltaP> {
        let result = self.delta_p(fluid, opts)?;
        self.commit_delta_p(&result);
        Ok(result)
    }

    /// Propagate an inlet temperature [K] through the component.
    fn temperatures(
        &self,
        fluid: &dyn FluidModel,
        soil: &Soil,
        t_in: &Series,
        ts_id: Option<usize>,
    ) -> ComponentResult<Temperatures>;
}
