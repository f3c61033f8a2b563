//! Operator commands sent from the presentation layer to the engine.
//!
//! Commands are either applied immediately (returning a validation result)
//! or queued for processing at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScenarioCommand {
    // --- Scenario setup ---
    /// Pick a catalog asteroid. Location defaults to the Bay of Bengal.
    SelectAsteroid {
        asteroid_id: String,
        location: Option<Location>,
    },
    /// Supply a free-form asteroid.
    SelectCustom {
        diameter_m: f64,
        velocity_km_s: f64,
        material: Material,
        location: Option<Location>,
    },

    // --- Parameter edits ---
    SetDiameter { meters: f64 },
    SetVelocity { km_per_sec: f64 },
    SetMaterial { material: Material },
    SetAngle { degrees: f64 },
    SetLocation { location: Location },

    // --- Mitigation settings ---
    SetStrategy { strategy: Strategy },
    SetLeadTime { days: u32 },
    SetImpactorMass { kg: f64 },

    // --- Pipeline ---
    /// Compute impact effects for the current inputs.
    RunSimulation,
    /// Commit a deflection attempt with the current mitigation settings.
    DeployMitigation,
    /// Start the civil evacuation after a failed deflection.
    ConfirmEvacuation,
    /// Discard everything and return to the unconfigured state.
    Reset,
}

impl ScenarioCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioCommand::SelectAsteroid { .. } => "SelectAsteroid",
            ScenarioCommand::SelectCustom { .. } => "SelectCustom",
            ScenarioCommand::SetDiameter { .. } => "SetDiameter",
            ScenarioCommand::SetVelocity { .. } => "SetVelocity",
            ScenarioCommand::SetMaterial { .. } => "SetMaterial",
            ScenarioCommand::SetAngle { .. } => "SetAngle",
            ScenarioCommand::SetLocation { .. } => "SetLocation",
            ScenarioCommand::SetStrategy { .. } => "SetStrategy",
            ScenarioCommand::SetLeadTime { .. } => "SetLeadTime",
            ScenarioCommand::SetImpactorMass { .. } => "SetImpactorMass",
            ScenarioCommand::RunSimulation => "RunSimulation",
            ScenarioCommand::DeployMitigation => "DeployMitigation",
            ScenarioCommand::ConfirmEvacuation => "ConfirmEvacuation",
            ScenarioCommand::Reset => "Reset",
        }
    }
}
