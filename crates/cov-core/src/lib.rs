//! `cov-core` — foundational types for the coverage simulator.
//!
//! This crate is a dependency of every other `cov-*` crate.  It has no
//! `cov-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `AgentId`                                             |
//! | [`geo`]      | `Point`, `Area`                                       |
//! | [`config`]   | `ScenarioConfig`                                      |
//! | [`rng`]      | `SimRng` (one stream per trial)                       |
//! | [`error`]    | `CovError`, `CovResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ScenarioConfig;
pub use error::{CovError, CovResult};
pub use geo::{Area, Point};
pub use ids::AgentId;
pub use rng::SimRng;
