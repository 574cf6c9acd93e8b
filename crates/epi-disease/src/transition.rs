//! The per-tick health-state machine.

use epi_agent::{Agent, HealthState, Population};
use epi_core::{SimRng, Vec2};

use crate::{HospitalPolicy, ModelVariant};

/// Run one stochastic transition tick for a single agent.
///
/// Each candidate transition is one independent uniform draw against its
/// rate.  An Infectious agent could in principle pass both the recovery and
/// the death test in the same tick; the fixed precedence here is that the
/// recovery test runs first and, on success, aborts the death test, so an
/// agent makes at most one transition per tick.
///
/// State effects on mobility:
/// - entering `Dead` zeroes the velocity permanently;
/// - leaving `Quarantined` for `Recovered` draws a fresh uniform `[-1, 1]`
///   velocity (quarantine release puts the agent back in motion).
///
/// Susceptible, Recovered, and Dead agents are untouched — infection happens
/// in the contact rule, and terminal states are never left.
pub fn transition_agent(
    agent:           &mut Agent,
    variant:         ModelVariant,
    hospital:        Option<&HospitalPolicy>,
    prev_infectious: usize,
    rng:             &mut SimRng,
) {
    match agent.state {
        HealthState::Infectious => {
            if rng.gen_bool(agent.rates.gamma) {
                agent.state = HealthState::Recovered;
                return;
            }
            if variant.allows_death() && rng.gen_bool(death_rate(agent, hospital, prev_infectious)) {
                agent.state = HealthState::Dead;
                agent.halt();
            }
        }

        HealthState::Quarantined => {
            // Only reachable under Sirqd; tested like Infectious but with a
            // velocity reset on release.
            if rng.gen_bool(agent.rates.gamma) {
                agent.state = HealthState::Recovered;
                agent.velocity = Vec2::new(
                    (rng.random::<f64>() - 0.5) * 2.0,
                    (rng.random::<f64>() - 0.5) * 2.0,
                );
                return;
            }
            if variant.allows_death() && rng.gen_bool(death_rate(agent, hospital, prev_infectious)) {
                agent.state = HealthState::Dead;
            }
        }

        HealthState::Susceptible | HealthState::Recovered | HealthState::Dead => {}
    }
}

/// Run a transition tick for every agent in the population.
///
/// `prev_infectious` is the Infectious aggregate count of the previous
/// completed step (zero before the first step completes).
pub fn transition_pass(
    population:      &mut Population,
    variant:         ModelVariant,
    hospital:        Option<&HospitalPolicy>,
    prev_infectious: usize,
    rng:             &mut SimRng,
) {
    for agent in population.iter_mut() {
        transition_agent(agent, variant, hospital, prev_infectious, rng);
    }
}

#[inline]
fn death_rate(agent: &Agent, hospital: Option<&HospitalPolicy>, prev_infectious: usize) -> f64 {
    match hospital {
        Some(policy) => policy.effective_mu(agent.rates.mu, prev_infectious),
        None         => agent.rates.mu,
    }
}
