//! `epi-core` — foundational types for the `rust_epi` epidemic simulation
//! framework.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `AgentId`, `CohortId`, `RunId`                    |
//! | [`vec2`]    | `Vec2` — 2-D position/velocity arithmetic         |
//! | [`time`]    | `Tick`, `SimConfig`                               |
//! | [`rng`]     | `SimRng` — the explicit seeded randomness handle  |
//! | [`error`]   | `EpiError`, `EpiResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{EpiError, EpiResult};
pub use ids::{AgentId, CohortId, RunId};
pub use rng::SimRng;
pub use time::{SimConfig, Tick};
pub use vec2::Vec2;
