//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter; one tick is one
//! movement/contact step.  Health-state transitions run on a coarser cadence
//! of one transition tick every `transition_period` steps.  Running the
//! stochastic transitions at full step rate would make the recovery and
//! death rates effectively too large relative to step granularity (bulk
//! recovery in a handful of steps); the periodic cadence decouples the
//! motion/contact frequency from the epidemiological time constant.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.
///
/// Stored as `u64`; runs in practice last thousands of steps, so overflow is
/// not a concern at any conceivable scale.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built in application code (or deserialized from a config file
/// with the `serde` feature) and handed to `SimBuilder`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total steps to simulate.  The run always completes all of them — there
    /// is no early exit when the epidemic burns out.
    pub total_steps: u64,

    /// Health-state transitions fire on steps where
    /// `tick % transition_period == 0` (so step 0 is a transition tick).
    /// Must be at least 1.
    pub transition_period: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Hand a full population snapshot to the observer every N steps.
    /// 0 = never.
    pub snapshot_interval: u64,
}

impl SimConfig {
    /// The reference transition cadence: one transition tick per 10 steps.
    pub const DEFAULT_TRANSITION_PERIOD: u64 = 10;

    /// A config with the default cadence and no snapshots.
    pub fn new(total_steps: u64, seed: u64) -> Self {
        Self {
            total_steps,
            transition_period: Self::DEFAULT_TRANSITION_PERIOD,
            seed,
            snapshot_interval: 0,
        }
    }

    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_steps)
    }

    /// `true` when health-state transitions run on `tick`.
    #[inline]
    pub fn is_transition_step(&self, tick: Tick) -> bool {
        tick.0 % self.transition_period == 0
    }
}
