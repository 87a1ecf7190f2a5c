//! Circular stamping stencil.

use crate::{GridError, GridResult};

/// Square mask of side `2·r + 1` (with `r = floor(radius)`) whose cell
/// `(i, j)` is set iff `(i − r)² + (j − r)² ≤ radius²`.
///
/// The set cells are also kept as a flat list of `(dx, dy)` offsets from
/// the centre so stamping touches only cells that are actually inside the
/// disk.
#[derive(Clone, Debug, PartialEq)]
pub struct DiskMask {
    radius:  f64,
    r:       usize,
    cells:   Vec<bool>,
    offsets: Vec<(i64, i64)>,
}

impl DiskMask {
    pub fn new(radius: f64) -> GridResult<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GridError::Radius(radius));
        }
        let r = radius.floor() as usize;
        let side = 2 * r + 1;
        let limit = radius * radius;

        let mut cells = vec![false; side * side];
        let mut offsets = Vec::new();
        for j in 0..side {
            for i in 0..side {
                let dx = i as i64 - r as i64;
                let dy = j as i64 - r as i64;
                if ((dx * dx + dy * dy) as f64) <= limit {
                    cells[j * side + i] = true;
                    offsets.push((dx, dy));
                }
            }
        }

        Ok(Self { radius, r, cells, offsets })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Integer half-width `floor(radius)`.
    pub fn half_width(&self) -> usize {
        self.r
    }

    /// Side length of the square stencil.
    pub fn side(&self) -> usize {
        2 * self.r + 1
    }

    /// Whether stencil cell `(i, j)` (both in `0..side`) is inside the disk.
    /// Out-of-range indices are outside.
    pub fn contains(&self, i: usize, j: usize) -> bool {
        let side = self.side();
        i < side && j < side && self.cells[j * side + i]
    }

    /// Offsets `(dx, dy)` from the centre of every set cell, row-major.
    pub fn offsets(&self) -> &[(i64, i64)] {
        &self.offsets
    }

    /// Number of set cells.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
