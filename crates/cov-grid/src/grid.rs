//! The `CoverageGrid` ring buffer.

use cov_core::Area;

use crate::{DiskMask, GridError, GridResult};

/// Boolean occupancy of every cell of an [`Area`], replicated into
/// `window` time slots.
///
/// Slots are stored back to back in one `Vec<bool>`: slot `s` occupies
/// `s * cells .. (s + 1) * cells`, and cell `(x, y)` sits at `y * width + x`
/// within its slot.
#[derive(Clone, Debug)]
pub struct CoverageGrid {
    area:      Area,
    window:    usize,
    mask:      DiskMask,
    cells:     Vec<bool>,
    /// Time value of the most recent stamp; a different value clears its slot.
    last_time: Option<i64>,
}

impl CoverageGrid {
    /// Create an empty grid over `area` holding `window` slots and stamping
    /// disks of `radius` cells.
    pub fn new(area: Area, radius: f64, window: usize) -> GridResult<Self> {
        if area.cell_count() == 0 {
            return Err(GridError::EmptyArea { width: area.width, height: area.height });
        }
        if window == 0 {
            return Err(GridError::ZeroWindow);
        }
        let mask = DiskMask::new(radius)?;
        Ok(Self {
            area,
            window,
            mask,
            cells: vec![false; area.cell_count() * window],
            last_time: None,
        })
    }

    pub fn area(&self) -> Area {
        self.area
    }

    pub fn window_len(&self) -> usize {
        self.window
    }

    pub fn mask(&self) -> &DiskMask {
        &self.mask
    }

    #[inline]
    fn slot_of(&self, time: i64) -> usize {
        time.rem_euclid(self.window as i64) as usize
    }

    #[inline]
    fn slot(&self, slot: usize) -> &[bool] {
        let n = self.area.cell_count();
        &self.cells[slot * n..(slot + 1) * n]
    }

    /// Mark every cell within the disk around `(cx, cy)` as reached at
    /// `time`.  Disk cells outside the area are ignored.
    pub fn stamp(&mut self, cx: i64, cy: i64, time: i64) {
        let slot = self.slot_of(time);
        let n = self.area.cell_count();
        let base = slot * n;

        if self.last_time != Some(time) {
            self.cells[base..base + n].fill(false);
            self.last_time = Some(time);
        }

        let width = self.area.width as i64;
        let height = self.area.height as i64;
        for &(dx, dy) in self.mask.offsets() {
            let x = cx + dx;
            let y = cy + dy;
            if (0..width).contains(&x) && (0..height).contains(&y) {
                self.cells[base + (y * width + x) as usize] = true;
            }
        }
    }

    /// Reached cells in the slot `time` maps to.
    pub fn covered_cells_at_slot(&self, time: i64) -> usize {
        self.slot(self.slot_of(time)).iter().filter(|&&c| c).count()
    }

    /// Cells reached in any slot of the window.
    pub fn covered_cells_across_history(&self) -> usize {
        let n = self.area.cell_count();
        (0..n)
            .filter(|&i| (0..self.window).any(|s| self.cells[s * n + i]))
            .count()
    }

    /// Percentage of the area reached in the slot `time` maps to.
    pub fn coverage_at_slot(&self, time: i64) -> f64 {
        self.percent(self.covered_cells_at_slot(time))
    }

    /// Percentage of the area reached in *any* slot of the window.
    pub fn coverage_across_history(&self) -> f64 {
        self.percent(self.covered_cells_across_history())
    }

    fn percent(&self, covered: usize) -> f64 {
        covered as f64 * 100.0 / self.area.cell_count() as f64
    }
}
