//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Bulk composition of an asteroid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    IronNickel,
    Stony,
    Carbonaceous,
    Ice,
    Mixed,
}

impl Material {
    pub const ALL: [Material; 5] = [
        Material::IronNickel,
        Material::Stony,
        Material::Carbonaceous,
        Material::Ice,
        Material::Mixed,
    ];

    /// Bulk density in kg/m³. Three buckets only: iron-nickel, stony, everything else.
    pub fn density(self) -> f64 {
        match self {
            Material::IronNickel => DENSITY_IRON_NICKEL,
            Material::Stony => DENSITY_STONY,
            Material::Carbonaceous | Material::Ice | Material::Mixed => DENSITY_DEFAULT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Material::IronNickel => "Iron-Nickel",
            Material::Stony => "Stony",
            Material::Carbonaceous => "Carbonaceous",
            Material::Ice => "Ice",
            Material::Mixed => "Mixed",
        }
    }
}

/// Named impact target regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    PacificOcean,
    AtlanticOcean,
    IndianOcean,
    BayOfBengal,
    NorthAmerica,
    Europe,
    Asia,
    Africa,
    Australia,
    ArcticOcean,
    SouthAmerica,
}

/// Grouping used to pick the descriptive location metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationCategory {
    Ocean,
    BayOfBengal,
    Polar,
    Land,
}

impl Location {
    pub const ALL: [Location; 11] = [
        Location::PacificOcean,
        Location::AtlanticOcean,
        Location::IndianOcean,
        Location::BayOfBengal,
        Location::NorthAmerica,
        Location::Europe,
        Location::Asia,
        Location::Africa,
        Location::Australia,
        Location::ArcticOcean,
        Location::SouthAmerica,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Location::PacificOcean => "Pacific Ocean",
            Location::AtlanticOcean => "Atlantic Ocean",
            Location::IndianOcean => "Indian Ocean",
            Location::BayOfBengal => "Bay of Bengal",
            Location::NorthAmerica => "North America",
            Location::Europe => "Europe",
            Location::Asia => "Asia",
            Location::Africa => "Africa",
            Location::Australia => "Australia",
            Location::ArcticOcean => "Arctic Ocean",
            Location::SouthAmerica => "South America",
        }
    }

    /// Look up a location by its display name.
    pub fn from_name(name: &str) -> Option<Location> {
        Location::ALL.into_iter().find(|l| l.name() == name)
    }

    /// Open-water target. The Arctic counts as ocean here even though its
    /// metrics are polar.
    pub fn is_ocean(self) -> bool {
        matches!(
            self,
            Location::PacificOcean
                | Location::AtlanticOcean
                | Location::IndianOcean
                | Location::ArcticOcean
        )
    }

    pub fn category(self) -> LocationCategory {
        match self {
            Location::BayOfBengal => LocationCategory::BayOfBengal,
            Location::ArcticOcean => LocationCategory::Polar,
            l if l.is_ocean() => LocationCategory::Ocean,
            _ => LocationCategory::Land,
        }
    }
}

/// Impact risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Critical,
    /// Threat deflected. Never produced by the calculator.
    Safe,
}

impl RiskTier {
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Medium => "MEDIUM",
            RiskTier::High => "HIGH",
            RiskTier::Critical => "CRITICAL",
            RiskTier::Safe => "SAFE",
        }
    }
}

/// Planetary defense strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    #[default]
    Kinetic,
    GravityTractor,
    NuclearDisruption,
}

impl Strategy {
    /// Report order: kinetic, tractor, nuclear.
    pub const ALL: [Strategy; 3] = [
        Strategy::Kinetic,
        Strategy::GravityTractor,
        Strategy::NuclearDisruption,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Kinetic => "Kinetic Impactor",
            Strategy::GravityTractor => "Gravity Tractor",
            Strategy::NuclearDisruption => "Nuclear Disruption",
        }
    }
}

/// Why a strategy failed (or would have failed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    /// Kinetic: launch window already closed.
    DeadlineImpossible,
    /// Kinetic: impactor too light for a large object.
    InsufficientMass,
    /// Tractor: not enough time to accumulate thrust.
    InsufficientTime,
    /// Nuclear: object too small, shatters into several threats.
    FragmentationRisk,
    /// Passed its rules but lost the success roll.
    MissionFailure,
}

impl FailureReason {
    pub fn text(self) -> &'static str {
        match self {
            FailureReason::DeadlineImpossible => "Impossible deadline (too close to impact)",
            FailureReason::InsufficientMass => "Insufficient mass (impactor too light for object size)",
            FailureReason::InsufficientTime => "Insufficient time (cannot accumulate necessary thrust)",
            FailureReason::FragmentationRisk => "High fragmentation risk (creates multiple fragments)",
            FailureReason::MissionFailure => "Mission critical failure (impulse/timing mismatch)",
        }
    }
}

/// Resolution state of a mitigation attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MitigationOutcome {
    #[default]
    Pending,
    Success,
    Failed,
}

/// Scenario phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioPhase {
    #[default]
    Unconfigured,
    Idle,
    Impacted,
    Deflecting,
    Success,
    EvacuationPending,
    Evacuating,
    ImpactAfterEvacuation,
}

impl ScenarioPhase {
    /// A deferred resolution is outstanding.
    pub fn is_deliberating(self) -> bool {
        matches!(self, ScenarioPhase::Deflecting | ScenarioPhase::Evacuating)
    }
}

/// Evacuation zone severity colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeverityColor {
    Red,
    Orange,
    Yellow,
}

impl SeverityColor {
    pub fn label(self) -> &'static str {
        match self {
            SeverityColor::Red => "RED",
            SeverityColor::Orange => "ORANGE",
            SeverityColor::Yellow => "YELLOW",
        }
    }
}
