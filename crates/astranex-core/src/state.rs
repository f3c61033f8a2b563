//! Scenario snapshot: the complete readable state handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::enums::ScenarioPhase;
use crate::events::EngineEvent;
use crate::types::*;

/// Read-only view of the scenario after a tick or command.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioSnapshot {
    pub time: SimTime,
    pub phase: ScenarioPhase,
    /// Bumped on every reset, selection and parameter edit.
    pub generation: u64,
    pub inputs: ScenarioInputs,
    pub mitigation: MitigationSettings,
    pub effects: Option<ImpactEffects>,
    pub attempt: Option<MitigationAttempt>,
    pub evacuation_plan: Option<EvacuationPlan>,
    /// Fatalities avoided by the completed evacuation (millions).
    pub fatalities_mitigated_millions: f64,
    /// Seconds left on the outstanding deliberation, if any.
    pub pending_secs: Option<f64>,
    pub events: Vec<EngineEvent>,
}
