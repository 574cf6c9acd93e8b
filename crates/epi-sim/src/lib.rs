//! `epi-sim` — step loop orchestrator for the `rust_epi` framework.
//!
//! # Step phases
//!
//! ```text
//! for tick in 0..config.total_steps:
//!   ① Contact    — infection rule over every ordered pair of agents
//!   ② Transition — every `transition_period`-th tick, run the health-state
//!                  machine for all agents, feeding it the PREVIOUS step's
//!                  Infectious count (capacity signal, one-step lag)
//!   ③ Motion     — boundary/home-reflected velocity integration
//!   ④ Aggregate  — tally per-state counts; hand to the observer and keep
//!                  as the next step's capacity signal
//! ```
//!
//! The loop is single-threaded and step-synchronous; the contact phase
//! deliberately mutates as it scans (see `epi-disease`), which is part of the
//! reproduced reference semantics.  The run always completes all configured
//! steps — an epidemic that burns out keeps ticking to the end.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_agent::{DiseaseRates, PopulationBuilder};
//! use epi_core::{SimConfig, SimRng};
//! use epi_disease::ModelVariant;
//! use epi_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::new(2000, 42);
//! let mut rng = SimRng::new(config.seed);
//! let population = PopulationBuilder::new(800.0, 600.0, 15.0, DiseaseRates::sir(0.05, 0.015))
//!     .susceptible(95)
//!     .infectious(5)
//!     .build(&mut rng)?;
//! let mut sim = SimBuilder::new(config, population, rng)
//!     .variant(ModelVariant::Sir)
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{CountsHistory, NoopObserver, SimObserver};
pub use sim::Sim;
