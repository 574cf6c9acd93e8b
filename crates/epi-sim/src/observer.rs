//! Simulation observer trait for progress reporting and data collection.

use epi_agent::{Population, StateCounts};
use epi_core::Tick;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// This is the read-only seam for external collaborators: a renderer reads
/// agent positions/states from the snapshot hook, a persistence or plotting
/// collaborator reads the per-step aggregate counts from `on_step_end`.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — console progress
///
/// ```rust,ignore
/// struct Progress { interval: u64 }
///
/// impl SimObserver for Progress {
///     fn on_step_end(&mut self, tick: Tick, counts: &StateCounts) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {counts}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any processing.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called at the end of each step with that step's aggregate counts.
    fn on_step_end(&mut self, _tick: Tick, _counts: &StateCounts) {}

    /// Called every `config.snapshot_interval` steps (never when 0) with
    /// read-only access to the full population, after motion resolution.
    fn on_snapshot(&mut self, _tick: Tick, _population: &Population) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Accumulates the full per-step counts series in memory.
///
/// One row per completed step, in step order — the tabular series a plotting
/// collaborator consumes (rows = time steps, columns = state counts).
#[derive(Default)]
pub struct CountsHistory {
    pub rows: Vec<StateCounts>,
}

impl CountsHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SimObserver for CountsHistory {
    fn on_step_end(&mut self, _tick: Tick, counts: &StateCounts) {
        self.rows.push(*counts);
    }
}
