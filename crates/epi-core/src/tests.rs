//! Unit tests for epi-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, CohortId, RunId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(RunId(100) > RunId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(CohortId::INVALID.0, u16::MAX);
        assert_eq!(CohortId::default(), CohortId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod vec2 {
    use crate::Vec2;

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn add_assign() {
        let mut p = Vec2::new(1.0, 1.0);
        p += Vec2::new(0.5, -0.5);
        assert_eq!(p, Vec2::new(1.5, 0.5));
    }

    #[test]
    fn norms() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.norm_sq(), 25.0);
        assert_eq!(v.norm(), 5.0);
        assert_eq!(Vec2::ZERO.norm(), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(1.0, 1.0);
        assert!((a.distance(b) - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn dot_orthogonal() {
        assert_eq!(Vec2::new(1.0, 0.0).dot(Vec2::new(0.0, 5.0)), 0.0);
    }

    #[test]
    fn zero_flag() {
        assert!(Vec2::ZERO.is_zero());
        assert!(!Vec2::new(0.0, 1e-9).is_zero());
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn transition_cadence() {
        let cfg = SimConfig::new(2000, 42);
        assert_eq!(cfg.transition_period, 10);
        // Step 0 is a transition tick, matching the reference cadence.
        assert!(cfg.is_transition_step(Tick(0)));
        assert!(!cfg.is_transition_step(Tick(9)));
        assert!(cfg.is_transition_step(Tick(10)));
        assert!(cfg.is_transition_step(Tick(1990)));
    }

    #[test]
    fn end_tick() {
        assert_eq!(SimConfig::new(2000, 0).end_tick(), Tick(2000));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let va: Vec<u64> = (0..8).map(|_| a.random()).collect();
        let vb: Vec<u64> = (0..8).map(|_| b.random()).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        for _ in 0..50 {
            assert!(rng.gen_bool(1.0));
            assert!(!rng.gen_bool(0.0));
        }
        // Out-of-range probabilities clamp rather than panic.
        assert!(rng.gen_bool(2.0));
        assert!(!rng.gen_bool(-1.0));
    }

    #[test]
    fn gen_range_bounds() {
        let mut rng = SimRng::new(3);
        for _ in 0..1000 {
            let v: f64 = rng.gen_range(-1.0..1.0);
            assert!((-1.0..1.0).contains(&v));
        }
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = SimRng::new(9);
        let mut v: Vec<u32> = (0..32).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn children_are_deterministic() {
        let mut root_a = SimRng::new(11);
        let mut root_b = SimRng::new(11);
        let mut ca = root_a.child(3);
        let mut cb = root_b.child(3);
        assert_eq!(ca.random::<u64>(), cb.random::<u64>());
    }
}
