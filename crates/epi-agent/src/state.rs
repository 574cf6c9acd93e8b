//! The epidemiological health state.

use std::fmt;

/// Health state of one agent.
///
/// Which states are reachable depends on the disease-model variant: the base
/// SIR model never produces `Dead` or `Quarantined`, the SIRD variant adds
/// `Dead`, and the SIRQD variant uses all five.  Legal transitions are
/// enforced by the transition and infection rules in `epi-disease`, never by
/// this type.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthState {
    Susceptible,
    Infectious,
    Recovered,
    Dead,
    Quarantined,
}

impl HealthState {
    /// All states, in aggregate-count column order.
    pub const ALL: [HealthState; 5] = [
        HealthState::Susceptible,
        HealthState::Infectious,
        HealthState::Recovered,
        HealthState::Dead,
        HealthState::Quarantined,
    ];

    /// Terminal states are never left once entered.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, HealthState::Recovered | HealthState::Dead)
    }

    /// States in which the agent does not move.
    #[inline]
    pub fn is_immobilized(self) -> bool {
        matches!(self, HealthState::Dead | HealthState::Quarantined)
    }

    /// Single-letter label used in output files and logs.
    #[inline]
    pub fn letter(self) -> char {
        match self {
            HealthState::Susceptible => 'S',
            HealthState::Infectious  => 'I',
            HealthState::Recovered   => 'R',
            HealthState::Dead        => 'D',
            HealthState::Quarantined => 'Q',
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
