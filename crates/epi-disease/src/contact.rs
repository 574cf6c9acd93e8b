//! Pairwise proximity contact and probabilistic transmission.

use epi_agent::{Agent, HealthState, Population};
use epi_core::{SimRng, Vec2};

use crate::ModelVariant;

/// Contact range as a multiple of the susceptible agent's radius.
pub const CONTACT_RANGE_FACTOR: f64 = 1.5;

/// Evaluate one directed exposure: `other` (state/position) against `agent`.
///
/// Fires only when `agent` is Susceptible, the other agent is Infectious,
/// and the pair is closer than `1.5 × agent.radius`.  The transmission draw
/// uses `agent.rates.beta` — susceptibility belongs to the exposed agent, not
/// to the source.  On exposure, the Sirqd variant routes the agent to
/// Quarantined with probability `kappa` (halting it), otherwise to
/// Infectious.
///
/// Returns `true` when the exposure fired.
pub fn expose(
    agent:          &mut Agent,
    other_state:    HealthState,
    other_position: Vec2,
    variant:        ModelVariant,
    rng:            &mut SimRng,
) -> bool {
    if agent.state != HealthState::Susceptible || other_state != HealthState::Infectious {
        return false;
    }
    if agent.position.distance(other_position) >= CONTACT_RANGE_FACTOR * agent.radius {
        return false;
    }
    if !rng.gen_bool(agent.rates.beta) {
        return false;
    }

    if variant.allows_quarantine() && rng.gen_bool(agent.rates.kappa) {
        agent.state = HealthState::Quarantined;
        agent.halt();
    } else {
        agent.state = HealthState::Infectious;
    }
    true
}

/// Run the contact rule over every ordered pair of distinct agents.
///
/// Cost is quadratic in the population size; this is the baseline semantics,
/// with no spatial index.
///
/// Consistency model: read-write-as-you-go.  An agent infected earlier in
/// the pass is immediately visible as Infectious to later pair tests in the
/// same pass.  The Susceptible guard makes re-testing an already-exposed
/// agent a no-op, so each susceptible agent is exposed at most once per
/// pass regardless of how many infectious neighbors are in range.
pub fn contact_pass(population: &mut Population, variant: ModelVariant, rng: &mut SimRng) {
    let n = population.len();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            // Copy the source's state/position so `agents[i]` can be
            // mutated while `agents[j]` stays borrowed-free.
            let other_state    = population.agents[j].state;
            let other_position = population.agents[j].position;
            expose(&mut population.agents[i], other_state, other_position, variant, rng);
        }
    }
}
