//! Velocity integration with rectangular boundary reflection.

use epi_agent::{Agent, Population};

use crate::home::reflect_home;

/// Advance one agent by one step.
///
/// Velocity components are reflected before the position update, so a
/// breached band is corrected on the following step's movement; positions
/// stay inside `[0, dim]` on both axes for any speed up to the agent radius.
pub fn advance_agent(agent: &mut Agent, width: f64, height: f64) {
    if agent.position.x + agent.radius > width || agent.position.x - agent.radius < 0.0 {
        agent.velocity.x = -agent.velocity.x;
    }
    if agent.position.y + agent.radius > height || agent.position.y - agent.radius < 0.0 {
        agent.velocity.y = -agent.velocity.y;
    }

    if agent.home.is_some() {
        reflect_home(agent);
    }

    agent.position += agent.velocity;
}

/// Advance every agent in the population by one step.
pub fn advance_population(population: &mut Population) {
    let (width, height) = (population.width, population.height);
    for agent in population.iter_mut() {
        advance_agent(agent, width, height);
    }
}
