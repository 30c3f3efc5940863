//! Planar positions and axis-aligned bounds.
//!
//! Positions are stored as `f64` in whatever unit the tracking data uses
//! (pixels, centimetres, …).  Nothing in the workspace assumes a unit; the
//! curve encoders only require that coordinates fit their grid.

use std::fmt;

/// A 2-D position in tracking-data coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `false` if either coordinate is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Integer cell obtained by truncating both coordinates toward zero.
    ///
    /// The fractional part is discarded on purpose: two agents inside the same
    /// unit cell compare as equal.  Non-finite coordinates saturate (NaN → 0).
    #[inline]
    pub fn truncated(self) -> [i64; 2] {
        [self.x.trunc() as i64, self.y.trunc() as i64]
    }

    #[inline]
    pub fn as_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<[f64; 2]> for Position {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box of a set of positions.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

impl Bounds {
    /// Degenerate box containing exactly `p`.
    pub fn point(p: Position) -> Self {
        Self { min: p, max: p }
    }

    /// Bounds of all positions, or `None` when the iterator is empty.
    ///
    /// NaN coordinates are ignored by `f64::min`/`max`, so a NaN position
    /// never widens the box.
    pub fn of<I: IntoIterator<Item = Position>>(positions: I) -> Option<Self> {
        let mut iter = positions.into_iter();
        let first = iter.next()?;
        let mut b = Self::point(first);
        for p in iter {
            b.extend(p);
        }
        Some(b)
    }

    /// Grow the box to include `p`.
    pub fn extend(&mut self, p: Position) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }
}
