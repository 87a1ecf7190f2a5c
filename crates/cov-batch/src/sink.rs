//! Seams to the external collaborators that persist results and traces.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use cov_sim::{NoopObserver, PositionRow, SimObserver};

use crate::{BatchResult, ResultRow};

// ── Result rows ───────────────────────────────────────────────────────────────

/// Receives the batch's result rows once every scenario task has joined.
pub trait ResultSink {
    /// Write rows in the order given (submission order).
    fn write_rows(&mut self, rows: &[ResultRow]) -> BatchResult<()>;

    /// Flush any buffered output.
    fn finish(&mut self) -> BatchResult<()> {
        Ok(())
    }
}

impl ResultSink for Vec<ResultRow> {
    fn write_rows(&mut self, rows: &[ResultRow]) -> BatchResult<()> {
        self.extend_from_slice(rows);
        Ok(())
    }
}

// ── Position traces ───────────────────────────────────────────────────────────

/// Opens a position trace for one repetition of a scenario with a log path.
///
/// `open` is called at the start of every repetition and must discard
/// whatever `path` previously held, so a scenario's trace reflects only its
/// last repetition.  Called concurrently from scenario tasks.
pub trait TraceSinks: Sync {
    type Observer: SimObserver;

    fn open(&self, path: &str) -> BatchResult<Self::Observer>;
}

/// Ignores log paths entirely.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTraces;

impl TraceSinks for NoTraces {
    type Observer = NoopObserver;

    fn open(&self, _path: &str) -> BatchResult<NoopObserver> {
        Ok(NoopObserver)
    }
}

type TraceMap = HashMap<String, Vec<PositionRow>>;

/// Keeps traces in memory, keyed by log path.
#[derive(Clone, Debug, Default)]
pub struct MemoryTraces {
    traces: Arc<Mutex<TraceMap>>,
}

impl MemoryTraces {
    pub fn new() -> Self {
        Self::default()
    }

    /// The trace currently stored under `path`.
    pub fn get(&self, path: &str) -> Option<Vec<PositionRow>> {
        self.lock().get(path).cloned()
    }

    /// All paths with a stored trace, sorted.
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.lock().keys().cloned().collect();
        paths.sort();
        paths
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, TraceMap> {
        self.traces.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TraceSinks for MemoryTraces {
    type Observer = TraceBuffer;

    fn open(&self, path: &str) -> BatchResult<TraceBuffer> {
        self.lock().insert(path.to_owned(), Vec::new());
        Ok(TraceBuffer {
            path:   path.to_owned(),
            rows:   Vec::new(),
            traces: Arc::clone(&self.traces),
        })
    }
}

/// Collects one repetition's rows and stores them under its path when the
/// trial ends.
pub struct TraceBuffer {
    path:   String,
    rows:   Vec<PositionRow>,
    traces: Arc<Mutex<TraceMap>>,
}

impl SimObserver for TraceBuffer {
    fn on_position(&mut self, row: &PositionRow) {
        self.rows.push(*row);
    }

    fn on_sim_end(&mut self, _coverage: f64) {
        let rows = std::mem::take(&mut self.rows);
        self.traces
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(self.path.clone(), rows);
    }
}
