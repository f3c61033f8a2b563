//! Evacuation planning and the post-evacuation fatality reduction.

use rand::Rng;
use serde::{Deserialize, Serialize};

use astranex_core::constants::*;
use astranex_core::enums::Location;
use astranex_core::types::{EvacuationPlan, EvacuationZone};

use crate::templates::get_template;

/// Hours available to evacuate, never below `floor_hours`.
pub fn time_available_hours(lead_time_days: u32, floor_hours: u32) -> u32 {
    let window = (lead_time_days as f64 * 24.0 * EVACUATION_WINDOW_FRACTION).round() as u32;
    window.max(floor_hours)
}

/// Plan with the standard 72 hour floor.
pub fn plan_evacuation(
    location: Location,
    fatalities_millions: f64,
    lead_time_days: u32,
) -> EvacuationPlan {
    plan_evacuation_with_floor(location, fatalities_millions, lead_time_days, MIN_EVACUATION_HOURS)
}

/// Partition the at-risk population into the region's three priority zones.
///
/// Predicted fatalities stand in for the at-risk population.
pub fn plan_evacuation_with_floor(
    location: Location,
    fatalities_millions: f64,
    lead_time_days: u32,
    floor_hours: u32,
) -> EvacuationPlan {
    let total_population = fatalities_millions * 1.0e6;
    let template = get_template(location);

    let zones: Vec<EvacuationZone> = template
        .zones
        .iter()
        .zip(1u8..)
        .map(|(spec, rank)| EvacuationZone {
            priority_rank: rank,
            name: spec.name.to_string(),
            population_millions: (total_population * spec.population_fraction).round() / 1.0e6,
            deadline_hours: spec.deadline_hours,
            severity: spec.severity,
        })
        .filter(|z| z.population_millions > 0.0)
        .collect();

    let total_population_at_risk_millions = zones.iter().map(|z| z.population_millions).sum();

    EvacuationPlan {
        location_label: template.location_label,
        time_available_hours: time_available_hours(lead_time_days, floor_hours),
        total_population_at_risk_millions,
        zones,
    }
}

/// Share of baseline fatalities an evacuation avoids, drawn from a range
/// keyed by how severe the baseline is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurvivalBand {
    /// Applies while baseline fatalities (millions) are below this. `None` is unbounded.
    pub below_millions: Option<f64>,
    pub min_fraction: f64,
    pub max_fraction: f64,
}

pub fn default_survival_bands() -> Vec<SurvivalBand> {
    vec![
        SurvivalBand {
            below_millions: Some(1.0),
            min_fraction: 0.5,
            max_fraction: 0.8,
        },
        SurvivalBand {
            below_millions: Some(5.0),
            min_fraction: 0.2,
            max_fraction: 0.5,
        },
        SurvivalBand {
            below_millions: None,
            min_fraction: 0.05,
            max_fraction: 0.15,
        },
    ]
}

/// First band whose bound the baseline falls under.
pub fn select_band(bands: &[SurvivalBand], baseline_millions: f64) -> Option<&SurvivalBand> {
    bands
        .iter()
        .find(|b| b.below_millions.map_or(true, |bound| baseline_millions < bound))
}

/// Result of a completed evacuation, rounded to hundredths of a million.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvacuationOutcome {
    pub mitigation_fraction: f64,
    pub fatalities_mitigated_millions: f64,
    pub residual_fatalities_millions: f64,
}

pub fn resolve_evacuation<R: Rng + ?Sized>(
    baseline_millions: f64,
    bands: &[SurvivalBand],
    rng: &mut R,
) -> EvacuationOutcome {
    let mitigation_fraction = match select_band(bands, baseline_millions) {
        Some(band) => {
            let draw: f64 = rng.gen();
            band.min_fraction + draw * (band.max_fraction - band.min_fraction)
        }
        None => 0.0,
    };

    let mitigated = round_hundredths(baseline_millions * mitigation_fraction);
    EvacuationOutcome {
        mitigation_fraction,
        fatalities_mitigated_millions: mitigated,
        residual_fatalities_millions: round_hundredths(baseline_millions - mitigated),
    }
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
