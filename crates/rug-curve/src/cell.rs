//! Mapping real positions onto the integer curve grid.

use std::fmt;

use rug_core::Position;

use crate::{CurveError, CurveOrder, CurveResult};

/// Coordinate axis, used to report which coordinate was rejected.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

/// An integer cell `(x, y)` of a `2^r × 2^r` curve grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub x: u32,
    pub y: u32,
}

impl GridCell {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Cell containing `pos` on the grid of `order`.
    ///
    /// Each coordinate is truncated toward zero, so `(3.99, 0.2)` lands in
    /// cell `(3, 0)` and `-0.5` still lands in column 0.  This precision loss
    /// is intended: the curve only distinguishes cells, and agents sharing a
    /// cell keep their input order in a stable sort.
    ///
    /// NaN, infinities and coordinates outside `[0, 2^r)` after truncation
    /// are rejected with [`CurveError::OutOfRange`].
    pub fn from_position(pos: Position, order: CurveOrder) -> CurveResult<Self> {
        Ok(Self {
            x: to_cell(Axis::X, pos.x, order)?,
            y: to_cell(Axis::Y, pos.y, order)?,
        })
    }

    /// `true` if both coordinates lie inside the grid of `order`.
    #[inline]
    pub fn fits(self, order: CurveOrder) -> bool {
        self.x <= order.max_coord() && self.y <= order.max_coord()
    }
}

fn to_cell(axis: Axis, value: f64, order: CurveOrder) -> CurveResult<u32> {
    let cell = value.trunc();
    // Written so that NaN fails the comparison.
    if cell >= 0.0 && cell < order.side() as f64 {
        Ok(cell as u32)
    } else {
        Err(CurveError::OutOfRange { axis, value, order: order.get() })
    }
}
