//! Per-step statistics.

use lifegrid_core::Generation;

/// Counts and timing collected during a single [`advance`](crate::LifeEngine::advance).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// The generation produced by the step.
    pub generation: Generation,
    /// Cells that were dead and are now alive.
    pub births: usize,
    /// Cells that were alive and are now dead.
    pub deaths: usize,
    /// Live cells after the step.
    pub population: usize,
    /// Wall-clock time for the step, in microseconds.
    pub total_us: u64,
}

impl StepMetrics {
    /// Whether the step changed no cell at all.
    pub fn is_stable(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}
