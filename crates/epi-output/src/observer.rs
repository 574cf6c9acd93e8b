//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use epi_agent::{Population, StateCounts};
use epi_core::{RunId, Tick};
use epi_sim::SimObserver;

use crate::row::{AgentSnapshotRow, StateCountsRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes per-step counts and population snapshots to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
///
/// For ensembles, reuse one observer across runs and call
/// [`set_run`][Self::set_run] before each run; every row carries the run tag.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    run:        RunId,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, tagged as run 0.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            run:        RunId(0),
            last_error: None,
        }
    }

    /// Tag all subsequent rows with `run`.
    pub fn set_run(&mut self, run: RunId) {
        self.run = run;
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, tick: Tick, counts: &StateCounts) {
        let row = StateCountsRow {
            run:         self.run.0,
            step:        tick.0,
            susceptible: counts.susceptible as u64,
            infectious:  counts.infectious as u64,
            recovered:   counts.recovered as u64,
            dead:        counts.dead as u64,
            quarantined: counts.quarantined as u64,
        };
        let result = self.writer.write_counts(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, population: &Population) {
        let rows: Vec<AgentSnapshotRow> = population
            .iter()
            .enumerate()
            .map(|(i, agent)| AgentSnapshotRow {
                run:      self.run.0,
                step:     tick.0,
                agent_id: i as u32,
                x:        agent.position.x,
                y:        agent.position.y,
                state:    agent.state.letter(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
