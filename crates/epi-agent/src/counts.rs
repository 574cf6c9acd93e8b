//! Per-step aggregate state counts.

use std::fmt;

use crate::HealthState;

/// Number of agents in each health state at one observation point.
///
/// Derived data with no independent identity: recomputed from the population
/// after every step.  The driver keeps the previous completed step's value as
/// the capacity signal for the hospital-limit death rule.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateCounts {
    pub susceptible: usize,
    pub infectious:  usize,
    pub recovered:   usize,
    pub dead:        usize,
    pub quarantined: usize,
}

impl StateCounts {
    /// Tally an iterator of states.
    pub fn tally<I: IntoIterator<Item = HealthState>>(states: I) -> Self {
        let mut counts = StateCounts::default();
        for state in states {
            counts.bump(state);
        }
        counts
    }

    /// Increment the count for `state`.
    #[inline]
    pub fn bump(&mut self, state: HealthState) {
        *self.slot_mut(state) += 1;
    }

    /// The count for one state.
    #[inline]
    pub fn get(&self, state: HealthState) -> usize {
        match state {
            HealthState::Susceptible => self.susceptible,
            HealthState::Infectious  => self.infectious,
            HealthState::Recovered   => self.recovered,
            HealthState::Dead        => self.dead,
            HealthState::Quarantined => self.quarantined,
        }
    }

    /// Sum over all states — equals the population size at every step.
    #[inline]
    pub fn total(&self) -> usize {
        self.susceptible + self.infectious + self.recovered + self.dead + self.quarantined
    }

    fn slot_mut(&mut self, state: HealthState) -> &mut usize {
        match state {
            HealthState::Susceptible => &mut self.susceptible,
            HealthState::Infectious  => &mut self.infectious,
            HealthState::Recovered   => &mut self.recovered,
            HealthState::Dead        => &mut self.dead,
            HealthState::Quarantined => &mut self.quarantined,
        }
    }
}

impl fmt::Display for StateCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S={} I={} R={} D={} Q={}",
            self.susceptible, self.infectious, self.recovered, self.dead, self.quarantined
        )
    }
}
