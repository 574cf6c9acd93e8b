//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `EpiError` via `From` impls, or keep them separate and wrap `EpiError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.
//!
//! The taxonomy is deliberately narrow: this is a closed numerical simulation
//! with no I/O failure surface in the core.  Everything here is a
//! construction-time configuration fault, surfaced eagerly rather than
//! silently clamped — a clamped rate would mask experiment misconfiguration.

use thiserror::Error;

/// The top-level error type for `epi-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EpiError {
    #[error("rate `{name}` must be in [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    #[error("{what} must be positive, got {got}")]
    NonPositiveCount { what: &'static str, got: usize },

    #[error("domain {width}x{height} cannot contain an agent of radius {radius}")]
    DomainTooSmall { width: f64, height: f64, radius: f64 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `epi-*` crates.
pub type EpiResult<T> = Result<T, EpiError>;
