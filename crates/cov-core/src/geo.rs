//! Planar position and area types.
//!
//! Positions are continuous `f64` coordinates measured in grid cells; the
//! coverage grid truncates them to integer cell indices when stamping.

/// A mutable planar position.  Each agent owns exactly one.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Integer cell containing this point (truncation toward zero).
    #[inline]
    pub fn cell(self) -> (i64, i64) {
        (self.x as i64, self.y as i64)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// The bounded rectangle agents roam in.  Immutable for the life of a trial
/// and shared read-only between agents and the coverage grid.
///
/// Valid coordinates are `0.0 ..= width` and `0.0 ..= height`; grid cells are
/// `0 .. width` × `0 .. height`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    pub width:  u32,
    pub height: u32,
}

impl Area {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of grid cells covered by the area.
    #[inline]
    pub fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// `true` if `p` lies within the closed rectangle `[0, width] × [0, height]`.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (0.0..=self.width as f64).contains(&p.x) && (0.0..=self.height as f64).contains(&p.y)
    }

    /// Clamp `p` onto the closed rectangle.
    #[inline]
    pub fn clamp(self, p: Point) -> Point {
        Point {
            x: p.x.clamp(0.0, self.width as f64),
            y: p.y.clamp(0.0, self.height as f64),
        }
    }
}
