//! `epi-agent` — the population data model for the `rust_epi` framework.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`state`]      | `HealthState` — the five-state epidemiological enum      |
//! | [`params`]     | `DiseaseRates` — per-agent β/γ/μ/κ, validated            |
//! | [`agent`]      | `Agent` record and the optional `Home` capability field  |
//! | [`counts`]     | `StateCounts` — per-step aggregate tally                 |
//! | [`population`] | `Population` — the ordered agent collection              |
//! | [`factory`]    | `PopulationBuilder`, `HomeLayout` — construction/seeding |
//!
//! # Design note
//!
//! The agent is one record with capability fields (`home`, `cohort`, a
//! per-agent `mu`) rather than a hierarchy of agent types.  Which transitions
//! are active is selected by the disease-model variant enum in `epi-disease`,
//! so "extending" the model means populating a field and picking a variant,
//! never adding a type.

pub mod agent;
pub mod counts;
pub mod factory;
pub mod params;
pub mod population;
pub mod state;


pub use agent::{Agent, Home};
pub use counts::StateCounts;
pub use factory::{CohortSpec, HomeLayout, PopulationBuilder};
pub use params::DiseaseRates;
pub use population::Population;
pub use state::HealthState;
