//! Chorus, tremolo, and filter-sweep LFOs.
//!
//! All three phase accumulators advance every sample regardless of
//! whether the corresponding effect is currently audible, so that phase
//! relationships stay consistent across presets and runs.

use crate::oscillator::PhaseAccumulator;

/// Fixed rate of the brightness-sweep filter LFO.
pub const FILTER_LFO_RATE: f64 = 0.1;

/// The three modulation sources driven off the current preset.
pub struct ModulationState {
    chorus_phase: PhaseAccumulator,
    tremolo_phase: PhaseAccumulator,
    filter_phase: PhaseAccumulator,
}

/// One sample's worth of modulation outputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModulationSample {
    pub chorus_mod: f64,
    pub tremolo_amount: f64,
    pub filter_mod_amount: f64,
}

impl ModulationState {
    pub fn new(sample_rate: f64) -> Self {
        Self {
            chorus_phase: PhaseAccumulator::new(sample_rate),
            tremolo_phase: PhaseAccumulator::new(sample_rate),
            filter_phase: PhaseAccumulator::new(sample_rate),
        }
    }

    /// Advances all three LFOs by one sample and derives their outputs.
    pub fn advance(
        &mut self,
        chorus_rate: f64,
        chorus_depth: f64,
        tremolo_rate: f64,
        tremolo_depth: f64,
        filter_mod: f64,
    ) -> ModulationSample {
        let chorus_phase = self.chorus_phase.advance(chorus_rate);
        let tremolo_phase = self.tremolo_phase.advance(tremolo_rate);
        let filter_phase = self.filter_phase.advance(FILTER_LFO_RATE);

        let chorus_mod = chorus_depth * chorus_phase.sin();
        let tremolo_amount = 1.0 - tremolo_depth * (0.5 + 0.5 * tremolo_phase.sin());
        let filter_mod_amount = 0.5 + 0.5 * filter_phase.sin() * filter_mod;

        ModulationSample {
            chorus_mod,
            tremolo_amount,
            filter_mod_amount,
        }
    }
}
