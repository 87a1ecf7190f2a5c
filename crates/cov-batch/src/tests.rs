//! Unit tests for cov-batch.

use cov_core::{Area, ScenarioConfig};

use crate::BatchConfig;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn scenario(model: &str, seed: i64) -> ScenarioConfig {
    ScenarioConfig {
        agent_count:    3,
        area:           Area::new(30, 30),
        duration:       25,
        comm_radius:    2.0,
        model_kind:     model.into(),
        min_speed:      1.0,
        max_speed:      2.0,
        wait_time:      1,
        seed,
        history_window: 4,
        log_path:       None,
    }
}

fn batch(repetitions: u32, workers: usize) -> BatchConfig {
    BatchConfig { repetitions, workers, ..BatchConfig::default() }
}

fn mixed_scenarios() -> Vec<ScenarioConfig> {
    vec![
        scenario("RandomWaypoint", 1),
        scenario("RandomDirection", 2),
        scenario("Enterprise", 3),
        scenario("RandomWaypoint", 4),
        scenario("Enterprise", 5),
    ]
}

// ── Config & rows ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod rows {
    use super::*;
    use crate::ResultRow;
    use crate::row::round2;

    #[test]
    fn defaults() {
        let cfg = BatchConfig::default();
        assert_eq!(cfg.repetitions, 1000);
        assert_eq!(cfg.workers, 12);
        assert_eq!(cfg.seed_stride, 10);
        assert_eq!(cfg.final_seed(7), 7 + 10_000);
    }

    #[test]
    fn rounding() {
        assert_eq!(round2(5.0), 5.0);
        assert_eq!(round2(12.3456), 12.35);
        assert_eq!(round2(0.004), 0.0);
    }

    #[test]
    fn record_fields() {
        let row = ResultRow {
            model_kind:       "Enterprise".into(),
            final_seed:       130,
            agent_count:      4,
            comm_radius:      2.5,
            log_path:         None,
            average_coverage: 5.0,
        };
        assert_eq!(row.to_record(), ["Enterprise", "130", "4", "2.5", "", "5.00"]);
        assert_eq!(ResultRow::HEADERS.len(), 6);
    }
}

// ── Single scenario ───────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_runs {
    use super::*;
    use crate::BatchRunner;
    use crate::row::round2;
    use cov_sim::{NoopObserver, Simulator};

    #[test]
    fn zero_duration_averages_to_zero() {
        let mut cfg = scenario("RandomWaypoint", 9);
        cfg.agent_count = 1;
        cfg.area = Area::new(100, 100);
        cfg.min_speed = 1.0;
        cfg.max_speed = 1.0;
        cfg.wait_time = 0;
        cfg.duration = 0;
        cfg.history_window = 0;
        let row = BatchRunner::new(BatchConfig::default()).run_scenario(&cfg).unwrap();
        assert_eq!(row.coverage_field(), "0.00");
        assert_eq!(row.final_seed, 9 + 10 * 1000);
    }

    #[test]
    fn average_over_strided_seeds() {
        let cfg = scenario("RandomDirection", 100);
        let row = BatchRunner::new(batch(3, 1)).run_scenario(&cfg).unwrap();

        let expected: f64 = [100, 110, 120]
            .iter()
            .map(|&s| Simulator::new(&cfg.with_seed(s)).unwrap().run(&mut NoopObserver))
            .sum::<f64>()
            / 3.0;
        assert_eq!(row.average_coverage, round2(expected));
        assert_eq!(row.final_seed, 130);
        assert_eq!(row.model_kind, "RandomDirection");
        assert_eq!(row.agent_count, 3);
    }

    #[test]
    fn zero_repetitions() {
        let row = BatchRunner::new(batch(0, 1)).run_scenario(&scenario("Enterprise", 4)).unwrap();
        assert_eq!(row.average_coverage, 0.0);
        assert_eq!(row.final_seed, 4);
    }

    #[test]
    fn unsupported_model_is_an_error() {
        let result = BatchRunner::new(batch(2, 1)).run_scenario(&scenario("Levy", 1));
        assert!(result.is_err());
    }
}

// ── Whole batch ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod batches {
    use super::*;
    use crate::BatchRunner;

    #[test]
    fn slots_follow_submission_order() {
        let scenarios = mixed_scenarios();
        let slots = BatchRunner::new(batch(4, 3)).run(&scenarios).unwrap();
        assert_eq!(slots.len(), scenarios.len());
        for (slot, cfg) in slots.iter().zip(&scenarios) {
            let row = slot.as_ref().unwrap();
            assert_eq!(row.model_kind, cfg.model_kind);
            assert_eq!(row.final_seed, cfg.seed + 40);
        }
    }

    #[test]
    fn deterministic_across_runs_and_worker_counts() {
        let scenarios = mixed_scenarios();
        let serial = BatchRunner::new(batch(6, 1)).run(&scenarios).unwrap();
        let parallel = BatchRunner::new(batch(6, 4)).run(&scenarios).unwrap();
        let again = BatchRunner::new(batch(6, 4)).run(&scenarios).unwrap();
        assert_eq!(serial, parallel);
        assert_eq!(parallel, again);
        for (a, b) in serial.iter().flatten().zip(parallel.iter().flatten()) {
            assert_eq!(a.average_coverage.to_bits(), b.average_coverage.to_bits());
        }
    }

    #[test]
    fn failed_scenario_is_skipped() {
        let mut scenarios = mixed_scenarios();
        scenarios[1].model_kind = "Levy".into();
        scenarios[3].min_speed = 5.0;
        scenarios[3].max_speed = 1.0;

        let slots = BatchRunner::new(batch(3, 4)).run(&scenarios).unwrap();
        assert!(slots[0].is_some());
        assert!(slots[1].is_none());
        assert!(slots[2].is_some());
        assert!(slots[3].is_none());
        assert!(slots[4].is_some());
    }

    #[test]
    fn run_into_writes_successful_rows_in_order() {
        let mut scenarios = mixed_scenarios();
        scenarios[2].model_kind = "Manhattan".into();

        let mut sink: Vec<crate::ResultRow> = Vec::new();
        let written = BatchRunner::new(batch(2, 2)).run_into(&scenarios, &mut sink).unwrap();
        assert_eq!(written, 4);
        let seeds: Vec<i64> = sink.iter().map(|r| r.final_seed).collect();
        assert_eq!(seeds, [1 + 20, 2 + 20, 4 + 20, 5 + 20]);
    }

    #[test]
    fn empty_batch() {
        let slots = BatchRunner::new(batch(2, 2)).run(&[]).unwrap();
        assert!(slots.is_empty());
    }
}

// ── Traces ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod traces {
    use super::*;
    use crate::{BatchRunner, MemoryTraces, TraceSinks};
    use cov_sim::Simulator;

    #[test]
    fn trace_holds_only_last_repetition() {
        let mut cfg = scenario("RandomWaypoint", 50);
        cfg.log_path = Some("traces/rw.csv".into());

        let runner = BatchRunner::with_traces(batch(3, 1), MemoryTraces::new());
        let row = runner.run_scenario(&cfg).unwrap();
        assert_eq!(row.log_path.as_deref(), Some("traces/rw.csv"));

        let stored = runner.traces().get("traces/rw.csv").unwrap();
        assert_eq!(stored.len(), 3 * 25);

        // Replay the last repetition (seed 50 + 2 × 10) independently.
        let reference = MemoryTraces::new();
        let mut obs = reference.open("last").unwrap();
        Simulator::new(&cfg.with_seed(70)).unwrap().run(&mut obs);
        assert_eq!(reference.get("last").unwrap(), stored);
    }

    #[test]
    fn scenarios_without_path_leave_no_trace() {
        let traces = MemoryTraces::new();
        let runner = BatchRunner::with_traces(batch(2, 2), traces.clone());
        let mut scenarios = mixed_scenarios();
        scenarios[0].log_path = Some("a".into());
        scenarios[4].log_path = Some("b".into());
        runner.run(&scenarios).unwrap();
        assert_eq!(traces.paths(), ["a", "b"]);
    }

    #[test]
    fn open_truncates_previous_trace() {
        let traces = MemoryTraces::new();
        let cfg = scenario("Enterprise", 1);
        let mut obs = traces.open("p").unwrap();
        Simulator::new(&cfg).unwrap().run(&mut obs);
        assert!(!traces.get("p").unwrap().is_empty());

        let _reopened = traces.open("p").unwrap();
        assert_eq!(traces.get("p").unwrap(), Vec::new());
    }
}

// ── Sink failures ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod sink_errors {
    use std::io;

    use super::*;
    use crate::{BatchError, BatchResult, BatchRunner, NoTraces, ResultRow, ResultSink, TraceSinks};
    use cov_sim::NoopObserver;

    struct ReadOnlySink;

    impl ResultSink for ReadOnlySink {
        fn write_rows(&mut self, _rows: &[ResultRow]) -> BatchResult<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    /// Refuses any path under `locked/`.
    struct LockedTraces;

    impl TraceSinks for LockedTraces {
        type Observer = NoopObserver;

        fn open(&self, path: &str) -> BatchResult<NoopObserver> {
            if path.starts_with("locked/") {
                Err(BatchError::Trace { path: path.into(), reason: "locked".into() })
            } else {
                NoTraces.open(path)
            }
        }
    }

    #[test]
    fn result_sink_io_error_propagates() {
        let err = BatchRunner::new(batch(1, 1))
            .run_into(&mixed_scenarios(), &mut ReadOnlySink)
            .unwrap_err();
        assert!(matches!(err, BatchError::Io(_)));
    }

    #[test]
    fn trace_open_error_fails_only_its_scenario() {
        let mut scenarios = mixed_scenarios();
        scenarios[0].log_path = Some("locked/a.csv".into());
        scenarios[2].log_path = Some("open/b.csv".into());
        let runner = BatchRunner::with_traces(batch(2, 2), LockedTraces);

        let err = runner.run_scenario(&scenarios[0]).unwrap_err();
        assert!(matches!(err, BatchError::Trace { ref path, .. } if path == "locked/a.csv"));

        let slots = runner.run(&scenarios).unwrap();
        assert!(slots[0].is_none());
        assert!(slots[1..].iter().all(Option::is_some));
    }
}
