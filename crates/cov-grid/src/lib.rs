//! `cov-grid` — which cells of the area have been reached, and when.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`mask`]   | `DiskMask` — precomputed circular stencil                    |
//! | [`grid`]   | `CoverageGrid` — ring buffer of boolean occupancy slots      |
//! | [`error`]  | `GridError`, `GridResult<T>`                                 |
//!
//! # Time slots
//!
//! The grid keeps `window` boolean layers.  A stamp at time `t` writes into
//! layer `t mod window`.  A layer is cleared lazily: only the first stamp
//! carrying a *new* time value clears it, so every agent stamping within one
//! time step accumulates into the same layer.

pub mod error;
pub mod grid;
pub mod mask;


pub use error::{GridError, GridResult};
pub use grid::CoverageGrid;
pub use mask::DiskMask;
