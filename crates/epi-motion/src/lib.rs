//! `epi-motion` — the vector motion model of the `rust_epi` framework.
//!
//! # Crate layout
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`motion`] | Per-step velocity integration with boundary reflection |
//! | [`home`]   | Elastic reflection off a circular home boundary        |
//!
//! # Movement model
//!
//! Each step, every agent:
//!
//! 1. reflects the x/y velocity component if its position breaches the
//!    `[radius, dim − radius]` band on that axis;
//! 2. if home-confined and at or beyond the home boundary, reflects the
//!    radial velocity component only (tangential motion is preserved — an
//!    elastic bounce off the circle, not a full reversal);
//! 3. integrates `position += velocity`.
//!
//! Halted agents (zero velocity — Dead, Quarantined) pass through every step
//! unchanged: both reflections and the integration are no-ops on them.

pub mod home;
pub mod motion;

#[cfg(test)]
mod tests;

pub use home::reflect_home;
pub use motion::{advance_agent, advance_population};
