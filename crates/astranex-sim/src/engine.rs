//! Scenario engine: the impact simulator state machine.
//!
//! `ScenarioEngine` owns the one current scenario, validates operator
//! commands, runs the calculator, evaluator and planner, and resolves the
//! deliberation delays on a fixed tick. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use astranex_core::catalog;
use astranex_core::commands::ScenarioCommand;
use astranex_core::constants::DT;
use astranex_core::enums::*;
use astranex_core::events::EngineEvent;
use astranex_core::state::ScenarioSnapshot;
use astranex_core::types::*;
use astranex_defense::evacuation::{plan_evacuation_with_floor, resolve_evacuation};
use astranex_defense::mitigation::{evaluate_mitigation, MitigationRequest};
use astranex_impact::compute_effects;

use crate::config::SimConfig;
use crate::deferred::{DeferredQueue, DeferredResolution, Resolution};
use crate::error::CommandError;
use crate::report::ThreatReport;

/// The scenario engine. Owns all scenario state and the random source.
pub struct ScenarioEngine<R = ChaCha8Rng> {
    config: SimConfig,
    rng: R,
    time: SimTime,
    phase: ScenarioPhase,
    generation: u64,
    inputs: ScenarioInputs,
    mitigation: MitigationSettings,
    effects: Option<ImpactEffects>,
    attempt: Option<MitigationAttempt>,
    evacuation_plan: Option<EvacuationPlan>,
    fatalities_mitigated_millions: f64,
    next_attempt_id: u32,
    deferred: DeferredQueue,
    command_queue: VecDeque<ScenarioCommand>,
    events: Vec<EngineEvent>,
}

impl ScenarioEngine<ChaCha8Rng> {
    /// Create an engine whose randomness is seeded from the config.
    pub fn new(config: SimConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> ScenarioEngine<R> {
    /// Create an engine drawing from the given random source.
    pub fn with_rng(config: SimConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            time: SimTime::default(),
            phase: ScenarioPhase::default(),
            generation: 0,
            inputs: ScenarioInputs::default(),
            mitigation: MitigationSettings::default(),
            effects: None,
            attempt: None,
            evacuation_plan: None,
            fatalities_mitigated_millions: 0.0,
            next_attempt_id: 0,
            deferred: DeferredQueue::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    // --- Accessors ---

    pub fn phase(&self) -> ScenarioPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn time_scale(&self) -> f64 {
        self.config.time_scale
    }

    pub fn inputs(&self) -> &ScenarioInputs {
        &self.inputs
    }

    pub fn mitigation(&self) -> MitigationSettings {
        self.mitigation
    }

    pub fn effects(&self) -> Option<&ImpactEffects> {
        self.effects.as_ref()
    }

    pub fn attempt(&self) -> Option<&MitigationAttempt> {
        self.attempt.as_ref()
    }

    pub fn evacuation_plan(&self) -> Option<&EvacuationPlan> {
        self.evacuation_plan.as_ref()
    }

    pub fn fatalities_mitigated_millions(&self) -> f64 {
        self.fatalities_mitigated_millions
    }

    /// Number of timers still outstanding, stale ones included.
    pub fn pending_timers(&self) -> usize {
        self.deferred.len()
    }

    /// Export record for the current scenario, if there is anything to report.
    pub fn report(&self) -> Option<ThreatReport> {
        ThreatReport::from_scenario(
            self.phase,
            &self.inputs,
            self.effects.as_ref()?,
            self.attempt.as_ref(),
            self.evacuation_plan.as_ref(),
            self.fatalities_mitigated_millions,
        )
    }

    // --- Operations ---

    pub fn select_asteroid(
        &mut self,
        asteroid_id: &str,
        location: Option<Location>,
    ) -> Result<(), CommandError> {
        self.apply(ScenarioCommand::SelectAsteroid {
            asteroid_id: asteroid_id.to_string(),
            location,
        })
    }

    pub fn run_simulation(&mut self) -> Result<(), CommandError> {
        self.apply(ScenarioCommand::RunSimulation)
    }

    pub fn deploy_mitigation(&mut self) -> Result<(), CommandError> {
        self.apply(ScenarioCommand::DeployMitigation)
    }

    pub fn confirm_evacuation(&mut self) -> Result<(), CommandError> {
        self.apply(ScenarioCommand::ConfirmEvacuation)
    }

    pub fn reset(&mut self) {
        self.handle_reset();
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: ScenarioCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = ScenarioCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one tick: apply queued commands, fire due timers, and return
    /// the resulting snapshot. Events are drained into the snapshot.
    pub fn tick(&mut self) -> ScenarioSnapshot {
        while let Some(command) = self.command_queue.pop_front() {
            let name = command.name();
            if let Err(err) = self.apply(command) {
                self.events.push(EngineEvent::CommandRejected {
                    command: name.to_string(),
                    reason: err.to_string(),
                });
            }
        }

        self.time.advance();

        for due in self.deferred.take_due(self.time.tick) {
            self.fire(due);
        }

        let mut snapshot = self.snapshot();
        snapshot.events = std::mem::take(&mut self.events);
        snapshot
    }

    /// Current state without draining events.
    pub fn snapshot(&self) -> ScenarioSnapshot {
        ScenarioSnapshot {
            time: self.time,
            phase: self.phase,
            generation: self.generation,
            inputs: self.inputs.clone(),
            mitigation: self.mitigation,
            effects: self.effects.clone(),
            attempt: self.attempt.clone(),
            evacuation_plan: self.evacuation_plan.clone(),
            fatalities_mitigated_millions: self.fatalities_mitigated_millions,
            pending_secs: self
                .deferred
                .remaining_ticks(self.time.tick, self.generation)
                .map(|ticks| ticks as f64 * DT),
            events: self.events.clone(),
        }
    }

    /// Validate and apply a command immediately.
    pub fn apply(&mut self, command: ScenarioCommand) -> Result<(), CommandError> {
        debug!(command = command.name(), phase = ?self.phase, "Applying command");
        let name = command.name();
        let result = self.handle_command(command);
        if let Err(err) = &result {
            warn!(command = name, phase = ?self.phase, error = %err, "Command rejected");
        }
        result
    }

    fn handle_command(&mut self, command: ScenarioCommand) -> Result<(), CommandError> {
        let name = command.name();
        match command {
            ScenarioCommand::SelectAsteroid {
                asteroid_id,
                location,
            } => {
                let entry = catalog::find(&asteroid_id)
                    .ok_or_else(|| CommandError::UnknownAsteroid(asteroid_id.clone()))?;
                self.start_scenario(entry.to_profile(), location);
            }
            ScenarioCommand::SelectCustom {
                diameter_m,
                velocity_km_s,
                material,
                location,
            } => {
                check_positive("diameter", diameter_m)?;
                check_positive("velocity", velocity_km_s)?;
                let profile = AsteroidProfile {
                    identifier: "custom".into(),
                    name: "Custom Asteroid".into(),
                    diameter_m,
                    velocity_km_s,
                    material,
                };
                self.start_scenario(profile, location);
            }
            ScenarioCommand::SetDiameter { meters } => {
                check_positive("diameter", meters)?;
                self.edit_parameter(name, |inputs| inputs.diameter_m = Some(meters))?;
            }
            ScenarioCommand::SetVelocity { km_per_sec } => {
                check_positive("velocity", km_per_sec)?;
                self.edit_parameter(name, |inputs| inputs.velocity_km_s = Some(km_per_sec))?;
            }
            ScenarioCommand::SetMaterial { material } => {
                self.edit_parameter(name, |inputs| inputs.material = Some(material))?;
            }
            ScenarioCommand::SetAngle { degrees } => {
                if !(0.0..=90.0).contains(&degrees) {
                    return Err(CommandError::InvalidValue {
                        field: "angle",
                        value: degrees,
                    });
                }
                self.edit_parameter(name, |inputs| inputs.angle_deg = Some(degrees))?;
            }
            ScenarioCommand::SetLocation { location } => {
                self.edit_parameter(name, |inputs| inputs.location = Some(location))?;
            }
            ScenarioCommand::SetStrategy { strategy } => {
                self.ensure_not_deliberating(name)?;
                self.mitigation.strategy = strategy;
            }
            ScenarioCommand::SetLeadTime { days } => {
                self.ensure_not_deliberating(name)?;
                if days == 0 {
                    return Err(CommandError::InvalidValue {
                        field: "lead time",
                        value: 0.0,
                    });
                }
                self.mitigation.lead_time_days = days;
            }
            ScenarioCommand::SetImpactorMass { kg } => {
                self.ensure_not_deliberating(name)?;
                check_positive("impactor mass", kg)?;
                self.mitigation.impactor_mass_kg = kg;
            }
            ScenarioCommand::RunSimulation => self.handle_run_simulation()?,
            ScenarioCommand::DeployMitigation => self.handle_deploy_mitigation()?,
            ScenarioCommand::ConfirmEvacuation => self.handle_confirm_evacuation()?,
            ScenarioCommand::Reset => self.handle_reset(),
        }
        Ok(())
    }

    /// Begin a fresh scenario. Allowed from any phase; in-flight timers go stale.
    fn start_scenario(&mut self, profile: AsteroidProfile, location: Option<Location>) {
        let location = location.unwrap_or(Location::BayOfBengal);
        info!(asteroid = %profile.name, location = location.name(), "Scenario configured");
        self.inputs = ScenarioInputs::from_profile(&profile, location);
        self.discard_derived();
        self.generation += 1;
        self.set_phase(ScenarioPhase::Idle);
    }

    fn edit_parameter(
        &mut self,
        command: &'static str,
        edit: impl FnOnce(&mut ScenarioInputs),
    ) -> Result<(), CommandError> {
        if self.phase == ScenarioPhase::Unconfigured {
            return Err(CommandError::NotConfigured);
        }
        self.ensure_not_deliberating(command)?;
        edit(&mut self.inputs);
        self.discard_derived();
        self.generation += 1;
        self.set_phase(ScenarioPhase::Idle);
        Ok(())
    }

    fn handle_run_simulation(&mut self) -> Result<(), CommandError> {
        if !matches!(
            self.phase,
            ScenarioPhase::Unconfigured | ScenarioPhase::Idle | ScenarioPhase::Impacted
        ) {
            return Err(CommandError::InvalidPhase {
                command: "RunSimulation",
                phase: self.phase,
            });
        }
        if let Some(field) = self.inputs.missing_field() {
            return Err(CommandError::MissingParameter(field));
        }
        let effects = compute_effects(&self.inputs).ok_or(CommandError::NotConfigured)?;

        self.events.push(EngineEvent::EffectsComputed {
            risk_tier: effects.risk_tier,
            kinetic_energy_megatons: effects.kinetic_energy_megatons,
        });
        info!(
            energy_mt = effects.kinetic_energy_megatons,
            risk = effects.risk_tier.label(),
            "Impact simulated"
        );
        self.effects = Some(effects);
        self.attempt = None;
        self.evacuation_plan = None;
        self.fatalities_mitigated_millions = 0.0;
        self.set_phase(ScenarioPhase::Impacted);
        Ok(())
    }

    fn handle_deploy_mitigation(&mut self) -> Result<(), CommandError> {
        if self.phase != ScenarioPhase::Impacted {
            return Err(CommandError::InvalidPhase {
                command: "DeployMitigation",
                phase: self.phase,
            });
        }
        let diameter_m = self
            .inputs
            .diameter_m
            .ok_or(CommandError::MissingParameter("diameter"))?;

        let request = MitigationRequest {
            strategy: self.mitigation.strategy,
            lead_time_days: self.mitigation.lead_time_days,
            impactor_mass_kg: self.mitigation.impactor_mass_kg,
            diameter_m,
        };
        let id = self.next_attempt_id;
        self.next_attempt_id += 1;

        // Outcome is decided now and revealed when the delay elapses.
        let resolved = evaluate_mitigation(id, &request, &mut self.rng);
        self.attempt = Some(MitigationAttempt {
            outcome: MitigationOutcome::Pending,
            failures: Vec::new(),
            ..resolved.clone()
        });

        let delay = self.config.deflection_delay_ticks();
        self.deferred.schedule(
            self.generation,
            self.time.tick + delay,
            Resolution::Deflection(resolved),
        );
        self.events.push(EngineEvent::DeflectionStarted {
            attempt_id: id,
            strategy: request.strategy,
            resolves_in_secs: delay as f64 * DT,
        });
        info!(attempt = id, strategy = request.strategy.name(), "Deflection deployed");
        self.set_phase(ScenarioPhase::Deflecting);
        Ok(())
    }

    fn handle_confirm_evacuation(&mut self) -> Result<(), CommandError> {
        if self.phase != ScenarioPhase::EvacuationPending {
            return Err(CommandError::InvalidPhase {
                command: "ConfirmEvacuation",
                phase: self.phase,
            });
        }
        let baseline = self
            .effects
            .as_ref()
            .map(|e| e.predicted_fatalities_millions)
            .ok_or(CommandError::NotConfigured)?;

        let outcome = resolve_evacuation(baseline, &self.config.survival_bands, &mut self.rng);

        let delay = self.config.evacuation_delay_ticks();
        self.deferred.schedule(
            self.generation,
            self.time.tick + delay,
            Resolution::Evacuation(outcome),
        );
        self.events.push(EngineEvent::EvacuationStarted {
            resolves_in_secs: delay as f64 * DT,
        });
        info!(baseline_millions = baseline, "Evacuation started");
        self.set_phase(ScenarioPhase::Evacuating);
        Ok(())
    }

    fn handle_reset(&mut self) {
        info!(generation = self.generation, "Scenario reset");
        self.inputs = ScenarioInputs::default();
        self.discard_derived();
        self.generation += 1;
        self.set_phase(ScenarioPhase::Unconfigured);
    }

    /// Apply a timer that has elapsed, unless its scenario is gone.
    fn fire(&mut self, due: DeferredResolution) {
        if due.generation != self.generation {
            warn!(
                timer_generation = due.generation,
                current_generation = self.generation,
                "Discarding stale resolution"
            );
            self.events.push(EngineEvent::StaleResolutionDiscarded {
                generation: due.generation,
            });
            return;
        }

        match due.resolution {
            Resolution::Deflection(attempt) => self.resolve_deflection(attempt),
            Resolution::Evacuation(outcome) => {
                if self.phase != ScenarioPhase::Evacuating {
                    return;
                }
                self.effects = self.effects.take().map(|effects| ImpactEffects {
                    predicted_fatalities_millions: outcome.residual_fatalities_millions,
                    ..effects
                });
                self.fatalities_mitigated_millions = outcome.fatalities_mitigated_millions;
                self.events.push(EngineEvent::EvacuationCompleted {
                    fatalities_mitigated_millions: outcome.fatalities_mitigated_millions,
                    residual_fatalities_millions: outcome.residual_fatalities_millions,
                });
                info!(
                    mitigated_millions = outcome.fatalities_mitigated_millions,
                    residual_millions = outcome.residual_fatalities_millions,
                    "Evacuation complete"
                );
                self.set_phase(ScenarioPhase::ImpactAfterEvacuation);
            }
        }
    }

    fn resolve_deflection(&mut self, attempt: MitigationAttempt) {
        let current = self.attempt.as_ref().map(|a| a.id);
        if self.phase != ScenarioPhase::Deflecting || current != Some(attempt.id) {
            return;
        }

        self.events.push(EngineEvent::DeflectionResolved {
            attempt_id: attempt.id,
            outcome: attempt.outcome,
        });
        info!(attempt = attempt.id, outcome = ?attempt.outcome, "Deflection resolved");

        match attempt.outcome {
            MitigationOutcome::Success => {
                self.effects = self.effects.take().map(|effects| ImpactEffects {
                    risk_tier: RiskTier::Safe,
                    ..effects
                });
                self.attempt = Some(attempt);
                self.set_phase(ScenarioPhase::Success);
            }
            _ => {
                self.effects = compute_effects(&self.inputs);
                if let (Some(effects), Some(location)) = (&self.effects, self.inputs.location) {
                    self.evacuation_plan = Some(plan_evacuation_with_floor(
                        location,
                        effects.predicted_fatalities_millions,
                        attempt.lead_time_days,
                        self.config.min_evacuation_hours,
                    ));
                }
                self.attempt = Some(attempt);
                self.set_phase(ScenarioPhase::EvacuationPending);
            }
        }
    }

    fn ensure_not_deliberating(&self, command: &'static str) -> Result<(), CommandError> {
        if self.phase.is_deliberating() {
            return Err(CommandError::InvalidPhase {
                command,
                phase: self.phase,
            });
        }
        Ok(())
    }

    fn discard_derived(&mut self) {
        self.effects = None;
        self.attempt = None;
        self.evacuation_plan = None;
        self.fatalities_mitigated_millions = 0.0;
    }

    fn set_phase(&mut self, to: ScenarioPhase) {
        if self.phase == to {
            return;
        }
        let from = std::mem::replace(&mut self.phase, to);
        info!(?from, ?to, "Phase changed");
        self.events.push(EngineEvent::PhaseChanged { from, to });
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), CommandError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CommandError::InvalidValue { field, value })
    }
}
