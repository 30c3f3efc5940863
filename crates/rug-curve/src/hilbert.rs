//! Hilbert index via the odd/even bit recurrence.
//!
//! The index of a cell is assembled from two `r`-bit streams:
//!
//! - the *even* stream is simply `x ^ y`;
//! - the *odd* stream is refined over `r - 1` rounds of a fixed-point
//!   recurrence on two state words `v0`, `v1` driven by the complements of
//!   `x` and `y`.
//!
//! The streams are then interleaved with the odd stream in the high bit of
//! each pair.  For `r = 1` the curve visits `(0,0) → (1,0) → (1,1) → (0,1)`.
//! The orientation of the curve alternates with the parity of `r`; every
//! order is a bijection from the grid onto `0..4^r` whose consecutive indices
//! are edge-adjacent cells.

use crate::bits::interleave;
use crate::{CurveOrder, GridCell};

/// Hilbert curve index of `cell` on the `2^r` grid of `order`.
///
/// Precondition: `cell.fits(order)`.  Cells outside the grid are not
/// rejected here (callers go through [`GridCell::from_position`]); they
/// produce an unspecified but deterministic index.
pub fn hilbert_index(cell: GridCell, order: CurveOrder) -> u64 {
    let r = order.get();
    let mask = order.side() - 1;
    let x = cell.x as u64 & mask;
    let y = cell.y as u64 & mask;

    let not_x = !x & mask;
    let not_y = !y & mask;
    let even = x ^ y;
    let temp = not_y ^ x;

    let mut v0: u64 = 0;
    let mut v1: u64 = 0;
    for _ in 1..r {
        v1 = ((v1 & even) | ((v0 ^ not_x) & temp)) >> 1;
        v0 = ((v0 & (v1 ^ not_y)) | (!v0 & (v1 ^ not_x))) >> 1;
    }
    let odd = (!v0 & (v1 ^ y)) | (v0 & (v1 ^ not_x));

    interleave(odd as u32, even as u32)
}
