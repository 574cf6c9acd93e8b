//! homes — repeated home-confinement / super-spreader ensemble.
//!
//! 200 agents live in a grid of 40 overlapping circular homes (5 per home)
//! while 10 free-roamers cross the whole domain, acting as super-spreaders
//! between otherwise-isolated households.  Ten independent runs accumulate
//! into one long-format `state_counts.csv` keyed by the `run` column.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use epi_agent::{DiseaseRates, HomeLayout, PopulationBuilder};
use epi_core::{RunId, SimConfig, SimRng};
use epi_disease::ModelVariant;
use epi_output::{CsvWriter, SimOutputObserver};
use epi_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const WIDTH:  f64 = 600.0;
const HEIGHT: f64 = 600.0;
const RADIUS: f64 = 10.0;

const TOTAL_STEPS: u64   = 5_000;
const REPEATS:     u32   = 10;
const ROOT_SEED:   u64   = 42;

const BETA:  f64 = 0.05;
const GAMMA: f64 = 0.0015;

const SUPER_SPREADERS: usize = 10;
const INIT_I:          usize = 10;

const LAYOUT: HomeLayout = HomeLayout {
    homes:           40,
    columns:         5,
    home_radius:     70.0,
    margin:          10.0,
    people_per_home: 5,
};

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let home_people = LAYOUT.homes * LAYOUT.people_per_home;
    println!("=== homes — super-spreader ensemble ===");
    println!(
        "{} home agents in {} homes + {} roamers  |  {} runs x {} steps  |  seed {}",
        home_people, LAYOUT.homes, SUPER_SPREADERS, REPEATS, TOTAL_STEPS, ROOT_SEED
    );
    println!();

    std::fs::create_dir_all("output/homes")?;
    let writer = CsvWriter::new(Path::new("output/homes"))?;
    let mut obs = SimOutputObserver::new(writer);

    let mut root = SimRng::new(ROOT_SEED);
    let t0 = Instant::now();

    for run in 0..REPEATS {
        // Each run gets its own deterministic stream derived from the root.
        let mut rng = root.child(run as u64);
        let config = SimConfig::new(TOTAL_STEPS, ROOT_SEED);

        let population = PopulationBuilder::new(
            WIDTH,
            HEIGHT,
            RADIUS,
            DiseaseRates::sir(BETA, GAMMA),
        )
        .homes(LAYOUT)
        .susceptible(SUPER_SPREADERS)
        .seed_infections(INIT_I)
        .build(&mut rng)?;

        let mut sim = SimBuilder::new(config, population, rng)
            .variant(ModelVariant::Sir)
            .build()?;

        obs.set_run(RunId(run));
        sim.run(&mut obs);

        let total = sim.population.len();
        let c = sim.last_counts;
        let roaming_infected = sim
            .population
            .iter()
            .filter(|a| a.home.is_none() && a.state != epi_agent::HealthState::Susceptible)
            .count();
        println!(
            "  run {run:2}: final {c}  |  attack {:5.1} %  |  roamers touched {roaming_infected}/{SUPER_SPREADERS}",
            100.0 * (total - c.susceptible) as f64 / total as f64
        );
    }

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    println!();
    println!(
        "{} runs complete in {:.1} s — output/homes/state_counts.csv written",
        REPEATS,
        t0.elapsed().as_secs_f64()
    );

    Ok(())
}
