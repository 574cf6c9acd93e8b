//! Unit tests for boundary reflection and home confinement.

use epi_agent::{Agent, DiseaseRates, HealthState, Home};
use epi_core::Vec2;

use crate::{advance_agent, advance_population, reflect_home};

// ── Helpers ───────────────────────────────────────────────────────────────────

const W: f64 = 600.0;
const H: f64 = 600.0;
const R: f64 = 10.0;

fn roamer(position: Vec2, velocity: Vec2) -> Agent {
    Agent::new(position, velocity, R, DiseaseRates::sir(0.05, 0.015), HealthState::Susceptible)
}

fn homebody(position: Vec2, velocity: Vec2, center: Vec2, home_radius: f64) -> Agent {
    roamer(position, velocity).with_home(Home { center, radius: home_radius })
}

// ── Boundary reflection ───────────────────────────────────────────────────────

#[cfg(test)]
mod bounds {
    use super::*;

    #[test]
    fn free_movement_inside_domain() {
        let mut a = roamer(Vec2::new(300.0, 300.0), Vec2::new(0.7, -0.4));
        advance_agent(&mut a, W, H);
        assert_eq!(a.position, Vec2::new(300.7, 299.6));
        assert_eq!(a.velocity, Vec2::new(0.7, -0.4));
    }

    #[test]
    fn right_wall_reflects_x_only() {
        let mut a = roamer(Vec2::new(W - R + 0.5, 300.0), Vec2::new(1.0, 0.25));
        advance_agent(&mut a, W, H);
        assert_eq!(a.velocity, Vec2::new(-1.0, 0.25));
        assert!(a.position.x < W - R + 0.5);
    }

    #[test]
    fn left_wall_reflects_x_only() {
        let mut a = roamer(Vec2::new(R - 0.5, 300.0), Vec2::new(-1.0, 0.25));
        advance_agent(&mut a, W, H);
        assert_eq!(a.velocity, Vec2::new(1.0, 0.25));
    }

    #[test]
    fn floor_and_ceiling_reflect_y_only() {
        let mut top = roamer(Vec2::new(300.0, H - R + 0.2), Vec2::new(0.3, 1.0));
        advance_agent(&mut top, W, H);
        assert_eq!(top.velocity, Vec2::new(0.3, -1.0));

        let mut bottom = roamer(Vec2::new(300.0, R - 0.2), Vec2::new(0.3, -1.0));
        advance_agent(&mut bottom, W, H);
        assert_eq!(bottom.velocity, Vec2::new(0.3, 1.0));
    }

    #[test]
    fn corner_reflects_both_components() {
        let mut a = roamer(Vec2::new(W - R, H - R), Vec2::new(0.8, 0.9));
        advance_agent(&mut a, W, H);
        assert_eq!(a.velocity, Vec2::new(-0.8, -0.9));
    }

    #[test]
    fn halted_agent_never_moves() {
        let mut a = roamer(Vec2::new(W - R, 300.0), Vec2::ZERO);
        for _ in 0..10 {
            advance_agent(&mut a, W, H);
        }
        assert_eq!(a.position, Vec2::new(W - R, 300.0));
        assert!(a.velocity.is_zero());
    }

    #[test]
    fn long_run_stays_in_domain() {
        // Speeds are at most 1 < radius, so containment must hold forever.
        let mut a = roamer(Vec2::new(R + 0.1, H - R - 0.1), Vec2::new(0.93, -0.87));
        for _ in 0..20_000 {
            advance_agent(&mut a, W, H);
            assert!(a.position.x >= 0.0 && a.position.x <= W, "x = {}", a.position.x);
            assert!(a.position.y >= 0.0 && a.position.y <= H, "y = {}", a.position.y);
        }
    }
}

// ── Home confinement ──────────────────────────────────────────────────────────

#[cfg(test)]
mod home {
    use super::*;

    const CENTER: Vec2 = Vec2 { x: 300.0, y: 300.0 };
    const HOME_R: f64 = 70.0;

    #[test]
    fn inside_home_is_untouched() {
        let mut a = homebody(Vec2::new(310.0, 300.0), Vec2::new(1.0, 0.5), CENTER, HOME_R);
        reflect_home(&mut a);
        assert_eq!(a.velocity, Vec2::new(1.0, 0.5));
    }

    #[test]
    fn radial_exit_is_reversed() {
        // Heading straight out along +x at the boundary: pure radial velocity
        // flips sign entirely.
        let mut a = homebody(Vec2::new(300.0 + HOME_R - R + 0.5, 300.0), Vec2::new(1.0, 0.0), CENTER, HOME_R);
        reflect_home(&mut a);
        assert!((a.velocity.x - -1.0).abs() < 1e-12);
        assert!(a.velocity.y.abs() < 1e-12);
    }

    #[test]
    fn tangential_component_is_preserved() {
        // At the east boundary moving diagonally: x (radial) flips, y
        // (tangential) is kept.
        let mut a = homebody(Vec2::new(300.0 + HOME_R - R + 0.5, 300.0), Vec2::new(0.6, 0.8), CENTER, HOME_R);
        reflect_home(&mut a);
        assert!((a.velocity.x - -0.6).abs() < 1e-12);
        assert!((a.velocity.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn reflection_preserves_speed() {
        let v = Vec2::new(0.6, -0.8);
        let mut a = homebody(Vec2::new(349.0, 332.0), v, CENTER, HOME_R);
        // Force the boundary case regardless of exact position by moving the
        // agent radially outward first.
        a.position = CENTER + Vec2::new(HOME_R - R + 1.0, 0.0);
        reflect_home(&mut a);
        assert!((a.velocity.norm() - v.norm()).abs() < 1e-12);
    }

    #[test]
    fn agent_at_home_center_is_a_no_op() {
        // Degenerate geometry: zero-length normal must not produce NaNs.
        let mut a = homebody(CENTER, Vec2::new(0.4, 0.3), CENTER, R);
        reflect_home(&mut a);
        assert_eq!(a.velocity, Vec2::new(0.4, 0.3));
        assert!(a.velocity.x.is_finite() && a.velocity.y.is_finite());
    }

    #[test]
    fn roamer_is_never_home_reflected() {
        let mut a = roamer(Vec2::new(500.0, 300.0), Vec2::new(1.0, 0.0));
        reflect_home(&mut a);
        assert_eq!(a.velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn long_run_stays_within_home() {
        let mut a = homebody(Vec2::new(310.0, 290.0), Vec2::new(0.81, 0.59), CENTER, HOME_R);
        for _ in 0..20_000 {
            advance_agent(&mut a, W, H);
            let dist = a.position.distance(CENTER);
            assert!(dist <= HOME_R + 1e-6, "escaped home: dist = {dist}");
        }
    }
}

// ── Population pass ───────────────────────────────────────────────────────────

#[cfg(test)]
mod population_pass {
    use super::*;
    use epi_agent::Population;

    #[test]
    fn advances_every_agent() {
        let agents = vec![
            roamer(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0)),
            roamer(Vec2::new(200.0, 200.0), Vec2::new(0.0, -1.0)),
        ];
        let mut pop = Population::new(agents, W, H);
        advance_population(&mut pop);
        assert_eq!(pop.agents[0].position, Vec2::new(101.0, 100.0));
        assert_eq!(pop.agents[1].position, Vec2::new(200.0, 199.0));
    }
}
