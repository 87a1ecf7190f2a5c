//! Simulation observer trait for position traces and progress reporting.

use cov_core::AgentId;

/// One agent's position after it moved in step `tick`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRow {
    pub agent_id: AgentId,
    pub tick:     u32,
    pub x:        f64,
    pub y:        f64,
}

/// Callbacks invoked by [`Simulator`][crate::Simulator] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — trace collector
///
/// ```rust,ignore
/// struct Trace(Vec<PositionRow>);
///
/// impl SimObserver for Trace {
///     fn on_position(&mut self, row: &PositionRow) {
///         self.0.push(*row);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per agent per step, after the agent moved and stamped.
    fn on_position(&mut self, _row: &PositionRow) {}

    /// Called at the end of each step.
    ///
    /// `sample` is the windowed coverage recorded this step, or `None` when
    /// history is disabled or the window has not filled yet.
    fn on_step_end(&mut self, _tick: u32, _sample: Option<f64>) {}

    /// Called once after the final step with the trial's coverage metric.
    fn on_sim_end(&mut self, _coverage: f64) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
