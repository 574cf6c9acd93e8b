//! Capacity-modulated mortality.

use epi_core::{EpiError, EpiResult};

/// Care-capacity feedback: when the previously observed Infectious count
/// exceeds `limit`, the per-tick death probability is multiplied by `factor`.
///
/// The signal is the driver's aggregate tally of the *previous completed*
/// step — capacity feedback always lags one step, and is never recomputed
/// mid-pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HospitalPolicy {
    /// Infectious count above which care is saturated.
    pub limit: usize,
    /// Multiplier applied to `mu` while saturated.  Must be at least 1.
    pub factor: f64,
}

impl HospitalPolicy {
    pub fn new(limit: usize, factor: f64) -> EpiResult<Self> {
        let policy = Self { limit, factor };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> EpiResult<()> {
        if !self.factor.is_finite() || self.factor < 1.0 {
            return Err(EpiError::Config(format!(
                "hospital factor must be >= 1, got {}",
                self.factor
            )));
        }
        Ok(())
    }

    /// The death probability to use this tick given the previous step's
    /// Infectious count.
    #[inline]
    pub fn effective_mu(&self, mu: f64, prev_infectious: usize) -> f64 {
        if prev_infectious > self.limit {
            mu * self.factor
        } else {
            mu
        }
    }
}
