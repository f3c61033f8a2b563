//! Energy, crater, shockwave and fatality estimates.
//!
//! Scaling laws are deliberately coarse: linear angle scaling for the
//! crater and a plain sine factor for the shockwave.

use astranex_core::constants::*;
use astranex_core::enums::{Location, Material, RiskTier};
use astranex_core::types::{ImpactEffects, ScenarioInputs};

use crate::metrics::location_metrics;

/// Compute effects from scenario inputs. Returns `None` while any input is unset.
pub fn compute_effects(inputs: &ScenarioInputs) -> Option<ImpactEffects> {
    Some(compute(
        inputs.diameter_m?,
        inputs.angle_deg?,
        inputs.velocity_km_s?,
        inputs.material?,
        inputs.location?,
    ))
}

/// Compute effects for fully specified inputs.
pub fn compute(
    diameter_m: f64,
    angle_deg: f64,
    velocity_km_s: f64,
    material: Material,
    location: Location,
) -> ImpactEffects {
    let energy_mt = kinetic_energy_megatons(diameter_m, velocity_km_s, material);

    ImpactEffects {
        kinetic_energy_megatons: energy_mt,
        crater_diameter_km: crater_diameter_km(energy_mt, angle_deg),
        shockwave_radius_km: shockwave_radius_km(energy_mt, angle_deg),
        predicted_fatalities_millions: fatalities_millions(energy_mt, location),
        risk_tier: risk_tier(energy_mt),
        location_metrics: location_metrics(location.category()),
    }
}

/// Mass of a uniform sphere (kg).
pub fn mass_kg(diameter_m: f64, material: Material) -> f64 {
    let radius = diameter_m / 2.0;
    (4.0 / 3.0) * std::f64::consts::PI * radius.powi(3) * material.density()
}

/// Kinetic energy at impact (J).
pub fn kinetic_energy_joules(diameter_m: f64, velocity_km_s: f64, material: Material) -> f64 {
    let v = velocity_km_s * 1000.0;
    0.5 * mass_kg(diameter_m, material) * v * v
}

pub fn kinetic_energy_megatons(diameter_m: f64, velocity_km_s: f64, material: Material) -> f64 {
    kinetic_energy_joules(diameter_m, velocity_km_s, material) / JOULES_PER_MEGATON
}

pub fn crater_diameter_km(energy_mt: f64, angle_deg: f64) -> f64 {
    CRATER_COEFFICIENT
        * energy_mt.powf(CRATER_EXPONENT)
        * (angle_deg / CRATER_REFERENCE_ANGLE_DEG)
}

/// Zero at a 0° grazing angle.
pub fn shockwave_radius_km(energy_mt: f64, angle_deg: f64) -> f64 {
    SHOCKWAVE_COEFFICIENT * energy_mt.powf(SHOCKWAVE_EXPONENT) * angle_deg.to_radians().sin()
}

pub fn fatality_multiplier(location: Location) -> f64 {
    if location == Location::BayOfBengal {
        FATALITY_MULTIPLIER_BAY_OF_BENGAL
    } else if location.is_ocean() {
        FATALITY_MULTIPLIER_OCEAN
    } else {
        FATALITY_MULTIPLIER_LAND
    }
}

pub fn fatalities_millions(energy_mt: f64, location: Location) -> f64 {
    energy_mt * FATALITIES_PER_MEGATON * fatality_multiplier(location) / 1.0e6
}

/// Tier boundaries are exclusive: exactly 100 Mt is still LOW.
pub fn risk_tier(energy_mt: f64) -> RiskTier {
    if energy_mt > RISK_CRITICAL_ABOVE_MT {
        RiskTier::Critical
    } else if energy_mt > RISK_HIGH_ABOVE_MT {
        RiskTier::High
    } else if energy_mt > RISK_MEDIUM_ABOVE_MT {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}
