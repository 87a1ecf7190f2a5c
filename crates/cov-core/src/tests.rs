//! Unit tests for cov-core primitives.

use crate::{Area, ScenarioConfig};

fn scenario() -> ScenarioConfig {
    ScenarioConfig {
        agent_count:    3,
        area:           Area::new(100, 50),
        duration:       10,
        comm_radius:    2.0,
        model_kind:     "RandomWaypoint".into(),
        min_speed:      1.0,
        max_speed:      3.0,
        wait_time:      2,
        seed:           7,
        history_window: 0,
        log_path:       None,
    }
}

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Area, Point};

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn cell_truncates() {
        assert_eq!(Point::new(5.9, 0.2).cell(), (5, 0));
        assert_eq!(Point::new(10.0, 10.0).cell(), (10, 10));
    }

    #[test]
    fn area_contains_is_closed() {
        let area = Area::new(10, 20);
        assert!(area.contains(Point::new(0.0, 0.0)));
        assert!(area.contains(Point::new(10.0, 20.0)));
        assert!(!area.contains(Point::new(10.01, 5.0)));
        assert!(!area.contains(Point::new(5.0, -0.01)));
    }

    #[test]
    fn area_clamp() {
        let area = Area::new(10, 10);
        assert_eq!(area.clamp(Point::new(-3.0, 12.0)), Point::new(0.0, 10.0));
        assert_eq!(area.clamp(Point::new(4.0, 5.0)), Point::new(4.0, 5.0));
        assert_eq!(area.cell_count(), 100);
    }
}

#[cfg(test)]
mod config {
    use super::scenario;
    use crate::{Area, CovError};

    #[test]
    fn history_rules() {
        let mut cfg = scenario();
        for window in [-5, 0, 1] {
            cfg.history_window = window;
            assert!(!cfg.history_enabled());
            assert_eq!(cfg.effective_window(), 1);
        }
        cfg.history_window = 4;
        assert!(cfg.history_enabled());
        assert_eq!(cfg.effective_window(), 4);
    }

    #[test]
    fn with_seed_changes_only_seed() {
        let cfg = scenario();
        let next = cfg.with_seed(17);
        assert_eq!(next.seed, 17);
        assert_eq!(next.with_seed(7), cfg);
    }

    #[test]
    fn valid_scenario_passes() {
        assert!(scenario().validate().is_ok());
    }

    #[test]
    fn empty_area_rejected() {
        let mut cfg = scenario();
        cfg.area = Area::new(0, 10);
        assert!(matches!(cfg.validate(), Err(CovError::EmptyArea { .. })));
    }

    #[test]
    fn inverted_speeds_rejected() {
        let mut cfg = scenario();
        cfg.min_speed = 5.0;
        cfg.max_speed = 1.0;
        assert!(matches!(cfg.validate(), Err(CovError::SpeedRange { .. })));

        cfg.min_speed = f64::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_radius_rejected() {
        let mut cfg = scenario();
        cfg.comm_radius = -1.0;
        assert!(matches!(cfg.validate(), Err(CovError::Config(_))));
    }
}

#[cfg(test)]
mod rng {
    use proptest::prelude::*;

    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn scenario_seed_reuses_bits() {
        let mut a = SimRng::from_scenario_seed(-1);
        let mut b = SimRng::new(u64::MAX);
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }

    #[test]
    fn degenerate_interval_returns_low() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.uniform_closed(2.5, 2.5), 2.5);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    proptest! {
        #[test]
        fn uniform_closed_in_bounds(seed in any::<u64>(), lo in 0.0f64..50.0, span in 0.0f64..50.0) {
            let mut rng = SimRng::new(seed);
            let v = rng.uniform_closed(lo, lo + span);
            prop_assert!(v >= lo && v <= lo + span);
        }

        #[test]
        fn sign_is_unit(seed in any::<u64>()) {
            let mut rng = SimRng::new(seed);
            let s = rng.sign();
            prop_assert!(s == 1 || s == -1);
        }
    }
}
