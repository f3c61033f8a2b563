//! Threat assessment report: the read-only export of one scenario.
//!
//! The exporter that paginates this into a document lives outside the
//! engine. Here we only assemble the record and a plain-text rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use astranex_core::enums::{MitigationOutcome, RiskTier, ScenarioPhase};
use astranex_core::types::*;

/// Everything an exporter needs, captured at the moment of export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatReport {
    pub phase: ScenarioPhase,
    pub asteroid: AsteroidProfile,
    pub parameters: ImpactParameters,
    pub effects: ImpactEffects,
    pub attempt: Option<MitigationAttempt>,
    pub evacuation_plan: Option<EvacuationPlan>,
    pub fatalities_mitigated_millions: f64,
}

impl ThreatReport {
    /// `None` when the scenario is unconfigured or its inputs are incomplete.
    pub fn from_scenario(
        phase: ScenarioPhase,
        inputs: &ScenarioInputs,
        effects: &ImpactEffects,
        attempt: Option<&MitigationAttempt>,
        evacuation_plan: Option<&EvacuationPlan>,
        fatalities_mitigated_millions: f64,
    ) -> Option<Self> {
        if phase == ScenarioPhase::Unconfigured {
            return None;
        }
        Some(Self {
            phase,
            asteroid: inputs.profile()?,
            parameters: inputs.parameters()?,
            effects: effects.clone(),
            attempt: attempt.cloned(),
            evacuation_plan: evacuation_plan.cloned(),
            fatalities_mitigated_millions,
        })
    }

    pub fn risk_tier(&self) -> RiskTier {
        self.effects.risk_tier
    }

    pub fn evacuation_completed(&self) -> bool {
        self.phase == ScenarioPhase::ImpactAfterEvacuation
    }

    /// Suggested document name, e.g. `AstraNex-Threat-Report-Bennu-HIGH`.
    pub fn file_stem(&self) -> String {
        format!(
            "AstraNex-Threat-Report-{}-{}",
            self.asteroid.name,
            self.risk_tier().label()
        )
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn render_text(&self) -> String {
        self.to_string()
    }

    fn write_defense(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(attempt) = &self.attempt else {
            return writeln!(f, "- Action: Threat detected. Initiate defense planning immediately.");
        };
        match attempt.outcome {
            MitigationOutcome::Pending => {
                writeln!(f, "- Defense Strategy: {} - IN PROGRESS", attempt.strategy.name())
            }
            MitigationOutcome::Success => {
                writeln!(f, "- Defense Strategy: {} - SUCCESSFUL", attempt.strategy.name())?;
                writeln!(
                    f,
                    "- Final Status: Threat neutralized. Begin recovery and long-term monitoring."
                )
            }
            MitigationOutcome::Failed => {
                writeln!(
                    f,
                    "- Defense Strategy Attempt: {} - FAILED!",
                    attempt.strategy.name()
                )?;
                writeln!(f, "- Failed Strategies Summary:")?;
                for failure in &attempt.failures {
                    writeln!(f, "  * {}: {}", failure.strategy.name(), failure.reason.text())?;
                }
                if self.evacuation_completed() {
                    writeln!(f, "- Civil Evacuation: ACTIVATED AND COMPLETED SUCCESSFULLY")?;
                    writeln!(
                        f,
                        "- Final Status: Impact occurred. Emergency response and aid deployment prioritized."
                    )
                } else {
                    writeln!(f, "- Immediate Action: ACTIVATE FULL CIVIL EVACUATION PROTOCOL.")
                }
            }
        }
    }
}

impl fmt::Display for ThreatReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.effects;

        writeln!(f, "ASTRA-NEX THREAT ASSESSMENT REPORT")?;
        writeln!(f)?;
        writeln!(f, "1. EXECUTIVE SUMMARY")?;
        writeln!(f, "Asteroid Name: {}", self.asteroid.name)?;
        writeln!(f, "Impact Location: {}", self.parameters.location.name())?;
        writeln!(f, "Risk Level Assessment: {}", self.risk_tier().label())?;
        writeln!(f)?;

        writeln!(f, "2. IMPACT ANALYSIS")?;
        writeln!(f, "- Kinetic Energy: {:.0} Megatons", e.kinetic_energy_megatons)?;
        if self.evacuation_completed() {
            writeln!(
                f,
                "- Post-Evacuation Fatalities: {:.2} Million (Est.)",
                e.predicted_fatalities_millions
            )?;
            writeln!(
                f,
                "  (Mitigated Fatalities: {:.2} Million)",
                self.fatalities_mitigated_millions
            )?;
        } else {
            writeln!(
                f,
                "- Predicted Fatalities: {:.2} Million (Est.)",
                e.predicted_fatalities_millions
            )?;
        }
        writeln!(f, "- Crater Diameter: {:.2} km", e.crater_diameter_km)?;
        writeln!(f, "- Shockwave Radius: {:.0} km", e.shockwave_radius_km)?;
        writeln!(f)?;

        writeln!(f, "3. DEFENSE AND EVACUATION")?;
        self.write_defense(f)?;

        if let Some(plan) = &self.evacuation_plan {
            writeln!(f)?;
            writeln!(f, "4. EVACUATION PLAN SUMMARY")?;
            writeln!(
                f,
                "Target: {} | Time Available: {} hrs",
                plan.location_label, plan.time_available_hours
            )?;
            writeln!(
                f,
                "Total Population in Zones: {:.1} Million",
                plan.total_population_at_risk_millions
            )?;
            for zone in &plan.zones {
                writeln!(
                    f,
                    "Zone {} ({}): {}",
                    zone.priority_rank,
                    zone.severity.label(),
                    zone.name
                )?;
                writeln!(
                    f,
                    "  - Population: {:.1} Million | Deadline: {} hrs",
                    zone.population_millions, zone.deadline_hours
                )?;
            }
        }
        Ok(())
    }
}
