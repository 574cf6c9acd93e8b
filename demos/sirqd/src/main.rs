//! sirqd — SIRQD epidemic with capacity-limited care.
//!
//! 100 agents in an 800×600 domain; newly infected agents enter quarantine
//! half the time, and the death rate doubles while more than 20 agents are
//! simultaneously infectious.  Per-step state counts and periodic position
//! snapshots land in `output/sirqd/`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use epi_agent::{DiseaseRates, PopulationBuilder, StateCounts};
use epi_core::{SimConfig, SimRng, Tick};
use epi_disease::{HospitalPolicy, ModelVariant};
use epi_output::{CsvWriter, SimOutputObserver};
use epi_sim::{SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const WIDTH:  f64 = 800.0;
const HEIGHT: f64 = 600.0;
const RADIUS: f64 = 15.0;

const TOTAL_STEPS: u64 = 2_000;
const SEED:        u64 = 42;

const BETA:  f64 = 0.05;  // infection rate
const GAMMA: f64 = 0.015; // recovery rate
const MU:    f64 = 0.015; // death rate
const KAPPA: f64 = 0.5;   // quarantine rate

const HOSPITAL_LIMIT:  usize = 20;
const HOSPITAL_FACTOR: f64   = 2.0;

const AGENTS:  usize = 100;
const INIT_I:  usize = 5;

const SNAPSHOT_INTERVAL: u64 = 100;
const PROGRESS_INTERVAL: u64 = 200;

// ── Observer wrapper to print progress while writing CSV ──────────────────────

struct ProgressObserver<O: SimObserver> {
    inner: O,
}

impl<O: SimObserver> SimObserver for ProgressObserver<O> {
    fn on_step_start(&mut self, tick: Tick) {
        self.inner.on_step_start(tick);
    }

    fn on_step_end(&mut self, tick: Tick, counts: &StateCounts) {
        if tick.0 % PROGRESS_INTERVAL == 0 {
            println!("  {tick}: {counts}");
        }
        self.inner.on_step_end(tick, counts);
    }

    fn on_snapshot(&mut self, tick: Tick, population: &epi_agent::Population) {
        self.inner.on_snapshot(tick, population);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== sirqd — agent epidemic with hospital limit ===");
    println!("Agents: {AGENTS}  |  Steps: {TOTAL_STEPS}  |  Seed: {SEED}");
    println!("beta {BETA}  gamma {GAMMA}  mu {MU}  kappa {KAPPA}  |  limit {HOSPITAL_LIMIT} factor {HOSPITAL_FACTOR}");
    println!();

    // 1. Population: 100 agents, 5 random seeds flipped to Infectious.
    let mut config = SimConfig::new(TOTAL_STEPS, SEED);
    config.snapshot_interval = SNAPSHOT_INTERVAL;
    let mut rng = SimRng::new(config.seed);
    let population = PopulationBuilder::new(
        WIDTH,
        HEIGHT,
        RADIUS,
        DiseaseRates::sirqd(BETA, GAMMA, MU, KAPPA),
    )
    .susceptible(AGENTS)
    .seed_infections(INIT_I)
    .build(&mut rng)?;

    // 2. Sim with capacity feedback.
    let mut sim = SimBuilder::new(config, population, rng)
        .variant(ModelVariant::Sirqd)
        .hospital(HospitalPolicy::new(HOSPITAL_LIMIT, HOSPITAL_FACTOR)?)
        .build()?;

    // 3. CSV output.
    std::fs::create_dir_all("output/sirqd")?;
    let writer = CsvWriter::new(Path::new("output/sirqd"))?;
    let mut obs = ProgressObserver { inner: SimOutputObserver::new(writer) };

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    let final_counts = sim.last_counts;
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  final: {final_counts}");
    println!(
        "  attack rate: {:.1} %",
        100.0 * (AGENTS - final_counts.susceptible) as f64 / AGENTS as f64
    );
    println!("  output/sirqd/state_counts.csv, agent_snapshots.csv written");

    Ok(())
}
