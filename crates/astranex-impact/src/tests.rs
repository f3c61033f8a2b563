#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use astranex_core::enums::{Location, LocationCategory, Material, RiskTier};
    use astranex_core::types::ScenarioInputs;

    use crate::effects::*;
    use crate::metrics::{location_metrics, metric_table};

    fn bennu_over_bengal() -> astranex_core::types::ImpactEffects {
        compute(490.0, 45.0, 12.4, Material::Carbonaceous, Location::BayOfBengal)
    }

    #[test]
    fn test_bennu_end_to_end() {
        let effects = bennu_over_bengal();

        assert_relative_eq!(
            mass_kg(490.0, Material::Carbonaceous),
            1.232e11,
            max_relative = 1e-3
        );
        assert_relative_eq!(effects.kinetic_energy_megatons, 2263.8, max_relative = 1e-3);
        assert_eq!(effects.risk_tier, RiskTier::High);
        assert_relative_eq!(effects.crater_diameter_km, 0.678, max_relative = 1e-2);
        assert_relative_eq!(effects.shockwave_radius_km, 256.4, max_relative = 1e-2);
        assert_relative_eq!(effects.predicted_fatalities_millions, 0.906, max_relative = 1e-2);
    }

    #[test]
    fn test_energy_formula() {
        // 1 m³-ish iron body at 1 km/s: E = 0.5 * m * 1e6
        let m = mass_kg(2.0, Material::IronNickel);
        assert_relative_eq!(m, (4.0 / 3.0) * std::f64::consts::PI * 8000.0);
        assert_relative_eq!(
            kinetic_energy_joules(2.0, 1.0, Material::IronNickel),
            0.5 * m * 1.0e6
        );
        assert_relative_eq!(
            kinetic_energy_megatons(2.0, 1.0, Material::IronNickel),
            0.5 * m * 1.0e6 / 4.184e15
        );
    }

    #[test]
    fn test_risk_tier_boundaries_are_exclusive() {
        assert_eq!(risk_tier(0.0), RiskTier::Low);
        assert_eq!(risk_tier(100.0), RiskTier::Low);
        assert_eq!(risk_tier(101.0), RiskTier::Medium);
        assert_eq!(risk_tier(1000.0), RiskTier::Medium);
        assert_eq!(risk_tier(1001.0), RiskTier::High);
        assert_eq!(risk_tier(10_000.0), RiskTier::High);
        assert_eq!(risk_tier(10_001.0), RiskTier::Critical);
    }

    #[test]
    fn test_zero_energy_is_defined() {
        let effects = compute(0.0, 45.0, 20.0, Material::Stony, Location::Europe);
        assert_eq!(effects.kinetic_energy_megatons, 0.0);
        assert_eq!(effects.crater_diameter_km, 0.0);
        assert_eq!(effects.shockwave_radius_km, 0.0);
        assert_eq!(effects.predicted_fatalities_millions, 0.0);
        assert_eq!(effects.risk_tier, RiskTier::Low);
    }

    #[test]
    fn test_zero_angle_zeroes_shockwave_and_crater() {
        let effects = compute(490.0, 0.0, 12.4, Material::Carbonaceous, Location::Asia);
        assert!(effects.kinetic_energy_megatons > 0.0);
        assert_eq!(effects.shockwave_radius_km, 0.0);
        assert_eq!(effects.crater_diameter_km, 0.0);
    }

    #[test]
    fn test_crater_scales_linearly_with_angle() {
        let at_45 = crater_diameter_km(2000.0, 45.0);
        let at_90 = crater_diameter_km(2000.0, 90.0);
        assert_relative_eq!(at_90, 2.0 * at_45);
    }

    #[test]
    fn test_fatality_multipliers() {
        assert_eq!(fatality_multiplier(Location::PacificOcean), 0.3);
        assert_eq!(fatality_multiplier(Location::ArcticOcean), 0.3);
        assert_eq!(fatality_multiplier(Location::BayOfBengal), 2.0);
        assert_eq!(fatality_multiplier(Location::NorthAmerica), 1.5);
        assert_relative_eq!(fatalities_millions(1000.0, Location::Africa), 0.3);
    }

    #[test]
    fn test_compute_effects_requires_all_inputs() {
        let mut inputs = ScenarioInputs {
            diameter_m: Some(490.0),
            velocity_km_s: Some(12.4),
            material: Some(Material::Carbonaceous),
            angle_deg: Some(45.0),
            location: None,
            ..Default::default()
        };
        assert!(compute_effects(&inputs).is_none());

        inputs.location = Some(Location::BayOfBengal);
        assert_eq!(compute_effects(&inputs), Some(bennu_over_bengal()));

        inputs.angle_deg = None;
        assert!(compute_effects(&inputs).is_none());
    }

    #[test]
    fn test_location_metrics_by_category() {
        let effects = bennu_over_bengal();
        assert_eq!(effects.location_metrics.len(), 4);
        assert_eq!(effects.location_metrics[0].label, "Tsunami Height");
        assert_eq!(effects.location_metrics[0].value, "80m");

        let polar = compute(490.0, 45.0, 12.4, Material::Ice, Location::ArcticOcean);
        assert_eq!(polar.location_metrics[0].label, "Ice Melt Volume");

        // Generic land metrics are static regardless of the physics
        let small = compute(10.0, 45.0, 12.4, Material::Ice, Location::Europe);
        let large = compute(2000.0, 45.0, 30.0, Material::IronNickel, Location::Africa);
        assert_eq!(small.location_metrics, large.location_metrics);
        assert_eq!(small.location_metrics[0].value, "8km");
    }

    #[test]
    fn test_metric_tables_nonempty() {
        for category in [
            LocationCategory::Ocean,
            LocationCategory::BayOfBengal,
            LocationCategory::Polar,
            LocationCategory::Land,
        ] {
            assert!(!metric_table(category).is_empty());
            assert_eq!(location_metrics(category).len(), metric_table(category).len());
        }
    }

    fn any_material() -> impl Strategy<Value = Material> {
        prop::sample::select(Material::ALL.to_vec())
    }

    fn any_location() -> impl Strategy<Value = Location> {
        prop::sample::select(Location::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_compute_is_pure(
            d in 1.0f64..5000.0,
            a in 0.0f64..=90.0,
            v in 1.0f64..80.0,
            m in any_material(),
            l in any_location(),
        ) {
            prop_assert_eq!(compute(d, a, v, m, l), compute(d, a, v, m, l));
        }

        #[test]
        fn prop_energy_monotonic_in_diameter(
            d in 1.0f64..5000.0,
            extra in 1.0f64..1000.0,
            v in 1.0f64..80.0,
            m in any_material(),
        ) {
            prop_assert!(
                kinetic_energy_megatons(d + extra, v, m) > kinetic_energy_megatons(d, v, m)
            );
        }

        #[test]
        fn prop_energy_monotonic_in_velocity(
            d in 1.0f64..5000.0,
            v in 1.0f64..80.0,
            extra in 0.1f64..20.0,
            m in any_material(),
        ) {
            prop_assert!(
                kinetic_energy_megatons(d, v + extra, m) > kinetic_energy_megatons(d, v, m)
            );
        }

        #[test]
        fn prop_results_non_negative(
            d in 0.0f64..5000.0,
            a in 0.0f64..=90.0,
            v in 0.0f64..80.0,
            m in any_material(),
            l in any_location(),
        ) {
            let e = compute(d, a, v, m, l);
            prop_assert!(e.kinetic_energy_megatons >= 0.0);
            prop_assert!(e.crater_diameter_km >= 0.0);
            prop_assert!(e.shockwave_radius_km >= 0.0);
            prop_assert!(e.predicted_fatalities_millions >= 0.0);
        }
    }
}
