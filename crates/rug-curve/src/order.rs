//! Grid resolution of a curve.

use std::fmt;

use crate::{CurveError, CurveResult};

/// Curve order `r`: the grid has `2^r` cells per axis.
///
/// Orders are limited to `1..=32` so that a cell fits two `u32` coordinates
/// and a curve index fits a `u64`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct CurveOrder(u32);

impl CurveOrder {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 32;

    /// A 4×4 grid.  Real tracking data almost always needs a larger order;
    /// see [`CurveOrder::covering`].
    pub const DEFAULT: CurveOrder = CurveOrder(2);

    pub fn new(order: u32) -> CurveResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&order) {
            Ok(Self(order))
        } else {
            Err(CurveError::InvalidOrder(order))
        }
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Cells per axis, `2^r`.
    #[inline]
    pub fn side(self) -> u64 {
        1u64 << self.0
    }

    /// Largest cell coordinate, `2^r - 1`.
    #[inline]
    pub fn max_coord(self) -> u32 {
        (self.side() - 1) as u32
    }

    /// Smallest order whose grid holds a coordinate of `max` after
    /// truncation toward zero.
    ///
    /// Fails if `max` is negative, non-finite, or needs more than 32 bits.
    pub fn covering(max: f64) -> CurveResult<Self> {
        let cell = max.trunc();
        if !(cell >= 0.0 && cell < (1u64 << Self::MAX) as f64) {
            return Err(CurveError::Uncoverable(max));
        }
        let cell = cell as u64;
        let bits = (u64::BITS - cell.leading_zeros()).max(Self::MIN);
        Self::new(bits)
    }
}

impl Default for CurveOrder {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for CurveOrder {
    type Error = CurveError;
    fn try_from(order: u32) -> CurveResult<Self> {
        Self::new(order)
    }
}

impl From<CurveOrder> for u32 {
    fn from(order: CurveOrder) -> u32 {
        order.0
    }
}

impl fmt::Display for CurveOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r={} ({}×{})", self.0, self.side(), self.side())
    }
}
