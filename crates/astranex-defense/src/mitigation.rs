//! Deflection attempt evaluation.

use rand::Rng;

use astranex_core::constants::*;
use astranex_core::enums::{FailureReason, MitigationOutcome, Strategy};
use astranex_core::types::{FailureEntry, MitigationAttempt};

/// Inputs to a single deflection attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MitigationRequest {
    pub strategy: Strategy,
    pub lead_time_days: u32,
    pub impactor_mass_kg: f64,
    pub diameter_m: f64,
}

/// Resolved attempt, before it is stamped with an identity.
#[derive(Debug, Clone, PartialEq)]
pub struct MitigationVerdict {
    pub outcome: MitigationOutcome,
    /// Strategies whose hard rules fire for this scenario.
    pub disqualified: Vec<FailureEntry>,
    /// Failure report, empty on success.
    pub failures: Vec<FailureEntry>,
    /// The uniform draw, if the attempt got as far as the roll.
    pub roll: Option<f64>,
}

/// Hard rule for one strategy. `None` means eligible for the roll.
pub fn disqualification(strategy: Strategy, request: &MitigationRequest) -> Option<FailureReason> {
    match strategy {
        Strategy::Kinetic => {
            if request.lead_time_days < KINETIC_MIN_LEAD_DAYS {
                Some(FailureReason::DeadlineImpossible)
            } else if request.diameter_m > KINETIC_LARGE_OBJECT_DIAMETER_M
                && request.impactor_mass_kg < KINETIC_MIN_MASS_LARGE_OBJECT_KG
            {
                Some(FailureReason::InsufficientMass)
            } else {
                None
            }
        }
        Strategy::GravityTractor => {
            (request.lead_time_days < TRACTOR_MIN_LEAD_DAYS).then_some(FailureReason::InsufficientTime)
        }
        Strategy::NuclearDisruption => {
            (request.diameter_m < NUCLEAR_MIN_DIAMETER_M).then_some(FailureReason::FragmentationRisk)
        }
    }
}

/// Run every strategy's rules, not only the chosen one.
pub fn disqualified_strategies(request: &MitigationRequest) -> Vec<FailureEntry> {
    Strategy::ALL
        .into_iter()
        .filter_map(|strategy| {
            disqualification(strategy, request).map(|reason| FailureEntry { strategy, reason })
        })
        .collect()
}

pub fn success_chance(lead_time_days: u32) -> f64 {
    if lead_time_days > LONG_LEAD_DAYS {
        SUCCESS_CHANCE_LONG_LEAD
    } else if lead_time_days > MEDIUM_LEAD_DAYS {
        SUCCESS_CHANCE_MEDIUM_LEAD
    } else {
        SUCCESS_CHANCE_SHORT_LEAD
    }
}

/// Reason reported for a strategy that was not actually attempted and
/// whose own rules did not fire.
fn fallback_reason(strategy: Strategy) -> FailureReason {
    match strategy {
        Strategy::Kinetic => FailureReason::InsufficientMass,
        Strategy::GravityTractor => FailureReason::InsufficientTime,
        Strategy::NuclearDisruption => FailureReason::FragmentationRisk,
    }
}

/// Build the three-strategy failure report: the attempted strategy first,
/// then the other two in catalogue order.
pub fn failure_report(attempted: Strategy, disqualified: &[FailureEntry]) -> Vec<FailureEntry> {
    let known = |strategy: Strategy| {
        disqualified
            .iter()
            .find(|f| f.strategy == strategy)
            .map(|f| f.reason)
    };

    let mut report = vec![FailureEntry {
        strategy: attempted,
        reason: known(attempted).unwrap_or(FailureReason::MissionFailure),
    }];
    for strategy in Strategy::ALL {
        if report.iter().any(|f| f.strategy == strategy) {
            continue;
        }
        report.push(FailureEntry {
            strategy,
            reason: known(strategy).unwrap_or_else(|| fallback_reason(strategy)),
        });
    }
    report
}

/// Evaluate an attempt. A disqualified strategy fails without consuming a draw.
pub fn evaluate<R: Rng + ?Sized>(request: &MitigationRequest, rng: &mut R) -> MitigationVerdict {
    let disqualified = disqualified_strategies(request);

    let (outcome, roll) = if disqualified.iter().any(|f| f.strategy == request.strategy) {
        (MitigationOutcome::Failed, None)
    } else {
        let roll: f64 = rng.gen();
        let outcome = if roll < success_chance(request.lead_time_days) {
            MitigationOutcome::Success
        } else {
            MitigationOutcome::Failed
        };
        (outcome, Some(roll))
    };

    let failures = match outcome {
        MitigationOutcome::Failed => failure_report(request.strategy, &disqualified),
        _ => Vec::new(),
    };

    MitigationVerdict {
        outcome,
        disqualified,
        failures,
        roll,
    }
}

/// Evaluate and stamp the result as attempt `id`.
pub fn evaluate_mitigation<R: Rng + ?Sized>(
    id: u32,
    request: &MitigationRequest,
    rng: &mut R,
) -> MitigationAttempt {
    let verdict = evaluate(request, rng);
    MitigationAttempt {
        id,
        strategy: request.strategy,
        lead_time_days: request.lead_time_days,
        impactor_mass_kg: request.impactor_mass_kg,
        outcome: verdict.outcome,
        failures: verdict.failures,
    }
}
