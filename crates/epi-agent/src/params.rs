//! Per-agent disease rate parameters.

use epi_core::{EpiError, EpiResult};

/// The four stochastic rates carried by every agent.
///
/// All are probabilities: `beta` per qualifying contact, the others per
/// transition tick.  `mu` is stored per agent (not per run) so that
/// age-profile populations can give cohorts distinct death rates without any
/// change to the transition logic.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiseaseRates {
    /// Transmission probability per qualifying contact.
    pub beta: f64,
    /// Recovery probability per transition tick.
    pub gamma: f64,
    /// Death probability per transition tick (may be capacity-modulated).
    pub mu: f64,
    /// Probability that a new infection is routed to quarantine.
    pub kappa: f64,
}

impl DiseaseRates {
    /// Rates for a plain SIR model (no death, no quarantine).
    pub fn sir(beta: f64, gamma: f64) -> Self {
        Self { beta, gamma, mu: 0.0, kappa: 0.0 }
    }

    /// Rates for a SIRD model (death, no quarantine).
    pub fn sird(beta: f64, gamma: f64, mu: f64) -> Self {
        Self { beta, gamma, mu, kappa: 0.0 }
    }

    /// Rates for the full SIRQD model.
    pub fn sirqd(beta: f64, gamma: f64, mu: f64, kappa: f64) -> Self {
        Self { beta, gamma, mu, kappa }
    }

    /// Replace `mu`, keeping the other rates.  Used by cohort construction.
    pub fn with_mu(self, mu: f64) -> Self {
        Self { mu, ..self }
    }

    /// Reject any rate outside `[0, 1]`.
    ///
    /// Called by the population factory before any agent is built, so a
    /// mistyped rate fails the run immediately instead of skewing it.
    pub fn validate(&self) -> EpiResult<()> {
        for (name, value) in [
            ("beta", self.beta),
            ("gamma", self.gamma),
            ("mu", self.mu),
            ("kappa", self.kappa),
        ] {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                return Err(EpiError::RateOutOfRange { name, value });
            }
        }
        Ok(())
    }
}
