//! The top-level sweep: runs the self-test transfer over and over with a growing pre-load delay,
//! so the analyser capture walks the reload point across the erratum's failure boundary.
//!
//! One capture per delay value is all the characterization needs; the sweep just has to hit every
//! value between its bounds exactly once, in increasing order, and leave enough idle time between
//! transfers for the capture equipment to keep up.

use crate::debug_util;
use crate::self_test::{self, CycleDelay, TransferIo};
use log::{debug, info};

/// The delay schedule and pacing for one sweep. All values are CPU clock cycles.
pub struct SweepConfig {
    /// The delay used for the first transfer.
    pub min_delay_cycles: u32,
    /// The largest delay the sweep may use. Inclusive: a transfer runs at exactly this value when
    /// the step size lands on it.
    pub max_delay_cycles: u32,
    /// How much the delay grows after each transfer. Must be non-zero.
    pub step_cycles: u32,
    /// Idle time inserted after every transfer so the protocol analyser can keep up.
    pub pacing_cycles: u32,
}

/// Returns the delay values the sweep will use, in order: `min, min + step, …` up to and
/// including `max` (when the step lands on it exactly).
pub fn delay_schedule(config: &SweepConfig) -> impl Iterator<Item = u32> {
    debug_assert!(config.step_cycles > 0);
    (config.min_delay_cycles..=config.max_delay_cycles).step_by(config.step_cycles as usize)
}

/// Runs one transfer of `pattern` per scheduled delay value, pacing between transfers.
///
/// The clock generator and peripheral configuration must have completed before this is called;
/// the engine itself parks all transfer state between iterations, so the sweep needs no state
/// beyond the current delay.
pub fn run_sweep<I: TransferIo, D: CycleDelay>(
    io: &mut I,
    delay: &mut D,
    pattern: &[u8],
    config: &SweepConfig,
) {
    info!(
        "sweeping transmit-load delay from {} to {} cycles in steps of {}",
        config.min_delay_cycles, config.max_delay_cycles, config.step_cycles
    );
    debug_util::log_pattern(log::Level::Debug, pattern);

    for delay_cycles in delay_schedule(config) {
        debug!("transfer with {delay_cycles}-cycle load delay");
        self_test::run_self_test(io, delay, pattern, delay_cycles);
        delay.delay_cycles(config.pacing_cycles);
    }
}
