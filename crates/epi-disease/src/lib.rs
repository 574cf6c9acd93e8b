//! `epi-disease` — the stochastic epidemiological rules of the `rust_epi`
//! framework.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`variant`]    | `ModelVariant` — which transitions are active             |
//! | [`hospital`]   | `HospitalPolicy` — capacity-modulated death rate          |
//! | [`transition`] | The per-tick health-state machine                         |
//! | [`contact`]    | Pairwise proximity test and probabilistic transmission    |
//!
//! # Design notes
//!
//! The reference implementation expressed SIR/SIRD/SIRQD as an inheritance
//! chain of agent classes, each overriding one update method.  Here the agent
//! is a single record and the active transition set is a [`ModelVariant`]
//! value matched inside one transition function — same extension structure,
//! no virtual dispatch.
//!
//! Every probabilistic test is one independent uniform draw from the driver's
//! `SimRng` compared against the relevant rate, so trajectories are fully
//! reproducible from the master seed.

pub mod contact;
pub mod hospital;
pub mod transition;
pub mod variant;


pub use contact::{CONTACT_RANGE_FACTOR, contact_pass, expose};
pub use hospital::HospitalPolicy;
pub use transition::{transition_agent, transition_pass};
pub use variant::ModelVariant;
