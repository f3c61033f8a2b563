//! Scenario records and simulation time.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;

/// Physical description of the incoming object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidProfile {
    pub identifier: String,
    pub name: String,
    /// Diameter (m).
    pub diameter_m: f64,
    /// Entry velocity (km/s).
    pub velocity_km_s: f64,
    pub material: Material,
}

/// Operator-chosen impact geometry and target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactParameters {
    /// Impact angle from horizontal, 0 to 90 degrees.
    pub angle_deg: f64,
    pub location: Location,
}

/// Editable scenario inputs. Every field may be unset until an asteroid is
/// selected; the calculator refuses to run while any is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInputs {
    pub asteroid_id: Option<String>,
    pub asteroid_name: Option<String>,
    pub diameter_m: Option<f64>,
    pub velocity_km_s: Option<f64>,
    pub material: Option<Material>,
    pub angle_deg: Option<f64>,
    pub location: Option<Location>,
}

impl ScenarioInputs {
    /// Seed inputs from a profile with the default impact angle.
    pub fn from_profile(profile: &AsteroidProfile, location: Location) -> Self {
        Self {
            asteroid_id: Some(profile.identifier.clone()),
            asteroid_name: Some(profile.name.clone()),
            diameter_m: Some(profile.diameter_m),
            velocity_km_s: Some(profile.velocity_km_s),
            material: Some(profile.material),
            angle_deg: Some(DEFAULT_IMPACT_ANGLE_DEG),
            location: Some(location),
        }
    }

    /// First required field that is still unset, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.diameter_m.is_none() {
            Some("diameter")
        } else if self.angle_deg.is_none() {
            Some("angle")
        } else if self.velocity_km_s.is_none() {
            Some("velocity")
        } else if self.material.is_none() {
            Some("material")
        } else if self.location.is_none() {
            Some("location")
        } else {
            None
        }
    }

    pub fn profile(&self) -> Option<AsteroidProfile> {
        Some(AsteroidProfile {
            identifier: self.asteroid_id.clone().unwrap_or_else(|| "custom".into()),
            name: self
                .asteroid_name
                .clone()
                .unwrap_or_else(|| "Custom Asteroid".into()),
            diameter_m: self.diameter_m?,
            velocity_km_s: self.velocity_km_s?,
            material: self.material?,
        })
    }

    pub fn parameters(&self) -> Option<ImpactParameters> {
        Some(ImpactParameters {
            angle_deg: self.angle_deg?,
            location: self.location?,
        })
    }
}

/// One descriptive key/value line shown alongside the computed effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationMetric {
    pub label: String,
    pub value: String,
}

/// Output of the impact effects calculator. Replaced wholesale on recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactEffects {
    pub kinetic_energy_megatons: f64,
    pub crater_diameter_km: f64,
    pub shockwave_radius_km: f64,
    pub predicted_fatalities_millions: f64,
    pub risk_tier: RiskTier,
    pub location_metrics: Vec<LocationMetric>,
}

/// Operator settings for the next mitigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MitigationSettings {
    pub strategy: Strategy,
    pub lead_time_days: u32,
    pub impactor_mass_kg: f64,
}

impl Default for MitigationSettings {
    fn default() -> Self {
        Self {
            strategy: Strategy::Kinetic,
            lead_time_days: DEFAULT_LEAD_TIME_DAYS,
            impactor_mass_kg: DEFAULT_IMPACTOR_MASS_KG,
        }
    }
}

/// A strategy named in the failure report, with its reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureEntry {
    pub strategy: Strategy,
    pub reason: FailureReason,
}

/// A single committed deflection attempt. Its outcome is resolved once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MitigationAttempt {
    pub id: u32,
    pub strategy: Strategy,
    pub lead_time_days: u32,
    pub impactor_mass_kg: f64,
    pub outcome: MitigationOutcome,
    /// Exactly three entries on failure (attempted strategy first), empty otherwise.
    pub failures: Vec<FailureEntry>,
}

/// A priority zone in an evacuation plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvacuationZone {
    /// 1 is most urgent.
    pub priority_rank: u8,
    pub name: String,
    pub population_millions: f64,
    pub deadline_hours: u32,
    pub severity: SeverityColor,
}

/// Population partitioned into priority zones after a failed deflection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvacuationPlan {
    pub location_label: String,
    pub time_available_hours: u32,
    pub total_population_at_risk_millions: f64,
    pub zones: Vec<EvacuationZone>,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Convert seconds to whole ticks, rounding up so a delay is never shortened.
pub fn secs_to_ticks(secs: f64) -> u64 {
    (secs.max(0.0) * TICK_RATE as f64).ceil() as u64
}
