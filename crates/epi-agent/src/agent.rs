//! The agent record.

use epi_core::{CohortId, Vec2};

use crate::{DiseaseRates, HealthState};

/// A circular confinement region the motion model keeps an agent inside.
///
/// Presence of a home on an agent selects the home-confined motion variant:
/// the velocity's radial component is reflected whenever the agent reaches
/// the home boundary, preserving tangential motion.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Home {
    pub center: Vec2,
    pub radius: f64,
}

/// One simulated individual.
///
/// A single record with capability fields rather than a type hierarchy:
/// `home` selects confined motion, `cohort` tags an age profile (the cohort's
/// death rate lives in `rates.mu`), and the active transition set is chosen
/// by the disease-model variant in `epi-disease`.
///
/// `position` and `velocity` are owned exclusively by the agent and mutated
/// in place by the contact, transition, and motion rules; an agent is never
/// removed from its population mid-run (a dead agent stays as a stationary
/// member so death shows up as a state count, not a deletion).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Geometric size used for boundary and contact tests.
    pub radius: f64,
    pub state: HealthState,
    pub rates: DiseaseRates,
    /// Confinement region; `None` for free-roaming agents.
    pub home: Option<Home>,
    /// Age-profile tag; `CohortId::INVALID` when the population has none.
    pub cohort: CohortId,
}

impl Agent {
    /// A free-roaming agent with no cohort tag.
    pub fn new(
        position: Vec2,
        velocity: Vec2,
        radius:   f64,
        rates:    DiseaseRates,
        state:    HealthState,
    ) -> Self {
        Self {
            position,
            velocity,
            radius,
            state,
            rates,
            home:   None,
            cohort: CohortId::INVALID,
        }
    }

    /// Attach a confinement home.
    pub fn with_home(mut self, home: Home) -> Self {
        self.home = Some(home);
        self
    }

    /// Attach an age-profile cohort tag.
    pub fn with_cohort(mut self, cohort: CohortId) -> Self {
        self.cohort = cohort;
        self
    }

    /// Zero the velocity (entering `Dead` or `Quarantined`).
    #[inline]
    pub fn halt(&mut self) {
        self.velocity = Vec2::ZERO;
    }
}
