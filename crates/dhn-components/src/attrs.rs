//! Solver-facing state shared by every component.

use std::collections::BTreeMap;

use dhn_core::Series;
use dhn_core::units::degc;

use crate::traits::DeltaP;

/// Value stored under an extra attribute key.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttrValue {
    Flag(bool),
    Number(f64),
    Text(String),
    Series(Series),
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Number(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Flag(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Text(v)
    }
}

impl From<Series> for AttrValue {
    fn from(v: Series) -> Self {
        AttrValue::Series(v)
    }
}

/// Hydraulic and thermal state written by the solver between evaluations.
///
/// `mass_flow` and `temperature` are inputs to the component laws. `delta_p`
/// only caches the last committed result and is never read back by them.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentAttrs {
    /// Signed mass flow [kg/s]; positive along the component's reference orientation
    pub mass_flow: Series,
    /// Inlet temperature [K]
    pub temperature: Series,
    /// Last committed pressure drop [Pa]
    pub delta_p: Option<Series>,
    /// Model-specific metadata that has no dedicated field
    pub extras: BTreeMap<String, AttrValue>,
}

impl Default for ComponentAttrs {
    fn default() -> Self {
        Self {
            mass_flow: Series::Scalar(0.0),
            temperature: Series::Scalar(degc(50.0).value),
            delta_p: None,
            extras: BTreeMap::new(),
        }
    }
}

impl ComponentAttrs {
    pub fn set_mass_flow(&mut self, mass_flow: impl Into<Series>) {
        self.mass_flow = mass_flow.into();
    }

    pub fn set_temperature(&mut self, temperature: impl Into<Series>) {
        self.temperature = temperature.into();
    }

    /// Store a pressure drop result.
    ///
    /// A single-step result lands in its slot when a matching per-step cache
    /// already exists; anything else replaces the cache.
    pub fn store_delta_p(&mut self, result: &DeltaP) {
        if let (Some(ts_id), Series::Scalar(dp), Some(Series::Steps(cache))) =
            (result.ts_id, &result.dp, self.delta_p.as_mut())
        {
            if let Some(slot) = cache.get_mut(ts_id) {
                *slot = *dp;
                return;
            }
        }
        self.delta_p = Some(result.dp.clone());
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.extras.get(key)
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.extras.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.extras.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(dp: Series, ts_id: Option<usize>) -> DeltaP {
        DeltaP {
            dp,
            dp_der: None,
            ts_id,
        }
    }

    #[test]
    fn extras_round_trip() {
        let mut attrs = ComponentAttrs::default();
        assert!(attrs.insert("manufacturer", "acme").is_none());
        attrs.insert("opening", 0.5);
        assert_eq!(attrs.get("opening"), Some(&AttrValue::Number(0.5)));
        assert_eq!(attrs.insert("opening", 0.7), Some(AttrValue::Number(0.5)));
        assert_eq!(
            attrs.remove("manufacturer"),
            Some(AttrValue::Text("acme".into()))
        );
        assert!(attrs.get("manufacturer").is_none());
    }

    #[test]
    fn store_replaces_without_cache() {
        let mut attrs = ComponentAttrs::default();
        attrs.store_delta_p(&result(Series::Scalar(12.0), Some(1)));
        assert_eq!(attrs.delta_p, Some(Series::Scalar(12.0)));
    }

    #[test]
    fn store_fills_step_slot() {
        let mut attrs = ComponentAttrs::default();
        attrs.store_delta_p(&result(Series::steps([0.0, 0.0, 0.0]), None));
        attrs.store_delta_p(&result(Series::Scalar(5.0), Some(2)));
        assert_eq!(attrs.delta_p, Some(Series::steps([0.0, 0.0, 5.0])));
    }

    #[test]
    fn store_out_of_range_step_replaces() {
        let mut attrs = ComponentAttrs::default();
        attrs.store_delta_p(&result(Series::steps([1.0, 2.0]), None));
        attrs.store_delta_p(&result(Series::Scalar(9.0), Some(4)));
        assert_eq!(attrs.delta_p, Some(Series::Scalar(9.0)));
    }

    #[test]
    fn solver_setters_accept_scalars_and_steps() {
        let mut attrs = ComponentAttrs::default();
        attrs.set_mass_flow(2.0);
        attrs.set_temperature(vec![330.0, 340.0]);
        assert_eq!(attrs.mass_flow, Series::Scalar(2.0));
        assert_eq!(attrs.temperature.len(), Some(2));
    }
}
