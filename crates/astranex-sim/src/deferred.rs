//! Deferred resolutions: deliberation results waiting out their delay.
//!
//! Timers cannot be cancelled once scheduled. Each one carries the scenario
//! generation it was started under; the engine drops any that fire after
//! the generation has moved on.

use astranex_core::types::MitigationAttempt;
use astranex_defense::evacuation::EvacuationOutcome;

/// Result decided at commit time, applied when the timer fires.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Deflection(MitigationAttempt),
    Evacuation(EvacuationOutcome),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeferredResolution {
    pub generation: u64,
    pub due_tick: u64,
    pub resolution: Resolution,
}

/// Outstanding timers, in scheduling order.
#[derive(Debug, Clone, Default)]
pub struct DeferredQueue {
    pending: Vec<DeferredResolution>,
}

impl DeferredQueue {
    pub fn schedule(&mut self, generation: u64, due_tick: u64, resolution: Resolution) {
        self.pending.push(DeferredResolution {
            generation,
            due_tick,
            resolution,
        });
    }

    /// Remove and return every timer due at or before `tick`.
    pub fn take_due(&mut self, tick: u64) -> Vec<DeferredResolution> {
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|d| d.due_tick <= tick);
        self.pending = waiting;
        due
    }

    /// Ticks until the next timer belonging to `generation` fires.
    pub fn remaining_ticks(&self, tick: u64, generation: u64) -> Option<u64> {
        self.pending
            .iter()
            .filter(|d| d.generation == generation)
            .map(|d| d.due_tick.saturating_sub(tick))
            .min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
