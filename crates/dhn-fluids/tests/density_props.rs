//! Property tests for the liquid density models.

use dhn_core::Series;
use dhn_core::units::k;
use dhn_fluids::{ConstantDensityFluid, FluidModel, LinearDensityFluid};
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_water_monotonic(t1 in 275.0..370.0f64, t2 in 275.0..370.0f64) {
        let water = LinearDensityFluid::water();
        let r1 = water.rho(k(t1)).unwrap().value;
        let r2 = water.rho(k(t2)).unwrap().value;
        if t1 < t2 {
            prop_assert!(r1 >= r2);
        } else {
            prop_assert!(r1 <= r2);
        }
    }

    #[test]
    fn series_lookup_matches_pointwise(ts in prop::collection::vec(275.0..370.0f64, 0..12)) {
        let water = LinearDensityFluid::water();
        let rho = water.rho_series(&Series::steps(ts.clone())).unwrap();
        prop_assert_eq!(rho.len(), Some(ts.len()));
        for (r, t) in rho.iter().zip(&ts) {
            prop_assert_eq!(r, water.rho(k(*t)).unwrap().value);
        }
    }

    #[test]
    fn constant_density_everywhere(t in 1.0..1000.0f64) {
        let water = ConstantDensityFluid::water();
        prop_assert_eq!(water.rho_series(&Series::from(t)).unwrap(), Series::Scalar(1000.0));
    }
}
