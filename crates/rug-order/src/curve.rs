//! Shared machinery of the space-filling-curve strategies.

use rug_core::Frame;
use rug_curve::{CurveOrder, GridCell};

use crate::{OrderError, OrderResult};

/// Slot indices sorted by the curve key of each agent's grid cell.
///
/// The sort is stable: agents sharing a cell keep their input order.
pub(crate) fn sort_by_curve<F>(
    strategy: &'static str,
    frame:    &Frame,
    order:    CurveOrder,
    key:      F,
) -> OrderResult<Vec<usize>>
where
    F: Fn(GridCell) -> u64,
{
    let keys = frame
        .iter()
        .map(|record| {
            GridCell::from_position(record.position(), order)
                .map(&key)
                .map_err(|source| OrderError::OutOfRange {
                    strategy,
                    agent: record.id(),
                    source,
                })
        })
        .collect::<OrderResult<Vec<u64>>>()?;

    let mut slots: Vec<usize> = (0..keys.len()).collect();
    slots.sort_by_key(|&slot| keys[slot]);
    Ok(slots)
}
