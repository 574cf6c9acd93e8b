//! Elastic reflection off the home-confinement circle.

use epi_agent::Agent;

/// Reflect the radial component of a home-confined agent's velocity when the
/// agent has reached its home boundary.
///
/// With `n` the outward normal (agent position minus home center), the
/// velocity `v` splits into a radial part `u = (v·n / n·n) n` and a
/// tangential part `w = v − u`; the bounce keeps the tangential part and
/// reverses the radial one: `v ← w − u`.
///
/// The projection divides by `n·n`, so an agent sitting exactly at its home
/// center has no defined normal; that case is a no-op rather than a NaN
/// velocity.  No-op as well for agents inside the boundary or without a home.
pub fn reflect_home(agent: &mut Agent) {
    let Some(home) = agent.home else {
        return;
    };

    let normal = agent.position - home.center;
    if normal.norm() <= home.radius - agent.radius {
        return;
    }
    let norm_sq = normal.norm_sq();
    if norm_sq == 0.0 {
        return;
    }

    let u = normal * (agent.velocity.dot(normal) / norm_sq);
    let w = agent.velocity - u;
    agent.velocity = w - u;
}
