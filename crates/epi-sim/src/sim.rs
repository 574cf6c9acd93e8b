//! The `Sim` struct and its step loop.

use epi_agent::{Population, StateCounts};
use epi_core::{SimConfig, SimRng, Tick};
use epi_disease::{HospitalPolicy, ModelVariant, contact_pass, transition_pass};
use epi_motion::advance_population;

use crate::SimObserver;

/// The main simulation runner.
///
/// `Sim` owns all run state: the population, the single RNG stream every
/// stochastic decision draws from, the disease-model variant, the optional
/// hospital policy, and the previous completed step's aggregate counts.
///
/// That last field is the capacity signal: it is written exactly once per
/// step (phase ④) and read only by the following step's transition phase —
/// a single-writer/single-reader handoff with a deliberate one-step lag.
/// Before the first step completes it reads zero.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration (step count, transition cadence, seed, …).
    pub config: SimConfig,

    /// The agents and their shared domain bounds.
    pub population: Population,

    /// Which transitions are active.
    pub variant: ModelVariant,

    /// Capacity-modulated mortality, if configured.
    pub hospital: Option<HospitalPolicy>,

    /// The single randomness stream for the whole run.
    pub rng: SimRng,

    /// The next tick to execute.
    pub current_tick: Tick,

    /// Aggregate counts of the most recently completed step.
    pub last_counts: StateCounts,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        log::info!(
            "starting run: {} agents, {} steps, variant {:?}, seed {}",
            self.population.len(),
            self.config.total_steps,
            self.variant,
            self.config.seed
        );
        while self.current_tick < self.config.end_tick() {
            self.step(observer);
        }
        observer.on_sim_end(self.current_tick);
        log::info!("run complete at {}: {}", self.current_tick, self.last_counts);
    }

    /// Run exactly `n` steps from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    // ── Core step processing ──────────────────────────────────────────────

    /// Execute one step: contact, transition (on cadence), motion, tally.
    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.current_tick;
        observer.on_step_start(now);

        // ── Phase ①: contact resolution over all ordered pairs ────────────
        contact_pass(&mut self.population, self.variant, &mut self.rng);

        // ── Phase ②: health-state transitions on the coarse cadence ───────
        //
        // The capacity signal is the PREVIOUS completed step's Infectious
        // count — never this step's partial state.
        if self.config.is_transition_step(now) {
            transition_pass(
                &mut self.population,
                self.variant,
                self.hospital.as_ref(),
                self.last_counts.infectious,
                &mut self.rng,
            );
        }

        // ── Phase ③: motion resolution ────────────────────────────────────
        advance_population(&mut self.population);

        // ── Phase ④: aggregation ──────────────────────────────────────────
        let counts = self.population.counts();
        self.last_counts = counts;
        observer.on_step_end(now, &counts);

        if self.config.snapshot_interval > 0 && now.0 % self.config.snapshot_interval == 0 {
            observer.on_snapshot(now, &self.population);
        }

        self.current_tick = Tick(now.0 + 1);
    }
}
