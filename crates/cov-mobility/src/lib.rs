//! `cov-mobility` — per-agent stochastic movement rules.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                       |
//! |----------------|----------------------------------------------------------------|
//! | [`kind`]       | `ModelKind` — parsed model name                                |
//! | [`model`]      | `MobilityModel` (tagged variant), `MobilityParams`             |
//! | [`waypoint`]   | `RandomWaypoint` — travel to random targets, pause on arrival  |
//! | [`direction`]  | `RandomDirection` — straight lines until a wall, then re-draw  |
//! | [`enterprise`] | `Enterprise` — trace-driven speed/heading perturbation         |
//! | [`empirical`]  | `ExponentialTable`, `SpeedClass` — discretised distributions   |
//! | [`error`]      | `MobilityError`, `MobilityResult<T>`                           |
//!
//! # Step contract
//!
//! Every model exposes the same capability:
//!
//! ```text
//! step(&mut self, position: &mut Point, params: &MobilityParams, rng: &mut SimRng)
//! ```
//!
//! A model instance carries the mutable motion state of exactly one agent
//! (heading, speed, timers) and is never shared.  All randomness comes from
//! the `SimRng` passed in; models never seed their own.

pub mod direction;
pub mod empirical;
pub mod enterprise;
pub mod error;
pub mod kind;
pub mod model;
pub mod waypoint;


pub use direction::RandomDirection;
pub use empirical::{ExponentialTable, SpeedClass};
pub use enterprise::Enterprise;
pub use error::{MobilityError, MobilityResult};
pub use kind::ModelKind;
pub use model::{MobilityModel, MobilityParams};
pub use waypoint::RandomWaypoint;

/// Motion phase shared by the waypoint and direction models.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Traveling,
    Waiting,
}
