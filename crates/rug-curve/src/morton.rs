//! Morton (Z-order) index.

use crate::bits::{compact1by1, interleave};
use crate::GridCell;

/// Z-order index of `cell`: plain bit interleaving with `x` on the even bits
/// and `y` on the odd bits.
///
/// ```text
///   y
///   1 │ 2  3
///   0 │ 0  1
///     └──────
///       0  1  x
/// ```
///
/// The index does not depend on the curve order; the order only bounds which
/// cells are admissible.
#[inline]
pub fn morton_index(cell: GridCell) -> u64 {
    interleave(cell.y, cell.x)
}

/// Cell whose Z-order index is `index`.
#[inline]
pub fn morton_cell(index: u64) -> GridCell {
    GridCell::new(compact1by1(index), compact1by1(index >> 1))
}
