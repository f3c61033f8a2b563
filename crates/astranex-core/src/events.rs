//! Events emitted by the engine for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineEvent {
    PhaseChanged {
        from: ScenarioPhase,
        to: ScenarioPhase,
    },
    EffectsComputed {
        risk_tier: RiskTier,
        kinetic_energy_megatons: f64,
    },
    /// Deflection committed; resolves after the deliberation delay.
    DeflectionStarted {
        attempt_id: u32,
        strategy: Strategy,
        resolves_in_secs: f64,
    },
    DeflectionResolved {
        attempt_id: u32,
        outcome: MitigationOutcome,
    },
    EvacuationStarted { resolves_in_secs: f64 },
    EvacuationCompleted {
        fatalities_mitigated_millions: f64,
        residual_fatalities_millions: f64,
    },
    /// A timer from an earlier scenario fired and was ignored.
    StaleResolutionDiscarded { generation: u64 },
    /// A queued command failed validation.
    CommandRejected { command: String, reason: String },
}
