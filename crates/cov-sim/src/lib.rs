//! `cov-sim` — one trial of a coverage scenario.
//!
//! # Step loop
//!
//! ```text
//! for t in 0..duration:
//!   for agent in ascending AgentId:
//!     ① move    — agent's mobility model mutates its position
//!     ② stamp   — grid.stamp(trunc(x), trunc(y), key)
//!                 key = t when history is enabled, else 0
//!     ③ trace   — observer.on_position(id, t, x, y)
//!   ④ sample    — if history is enabled and t >= window - 1:
//!                 push grid.coverage_across_history()
//!
//! metric = mean(samples)                       (history enabled)
//!        = grid.coverage_across_history()      (history disabled)
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cov_sim::{NoopObserver, Simulator};
//!
//! let mut sim = Simulator::new(&config)?;
//! let coverage = sim.run(&mut NoopObserver);
//! ```

pub mod agent;
pub mod error;
pub mod observer;
pub mod sim;


pub use agent::Agent;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, PositionRow, SimObserver};
pub use sim::Simulator;
