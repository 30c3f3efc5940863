//! R-tree strategy.

use rug_core::{Frame, Position};
use rug_spatial::{FrameRTree, SpatialError};

use crate::config::OrderingConfig;
use crate::strategy::OrderingStrategy;
use crate::{OrderError, OrderResult};

/// Bulk-loads the frame into an R*-tree (fan-out 15..=30) and emits the
/// leaves depth first, visiting siblings in order of their bounding boxes'
/// lower-left corner.
///
/// Bulk loading and the sibling sort are both deterministic, so the same
/// frame always yields the same order.
#[derive(Copy, Clone, Debug, Default)]
pub struct RTreeStrategy;

impl RTreeStrategy {
    pub const NAME: &'static str = "R-Tree";
}

impl OrderingStrategy for RTreeStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn slot_order(&self, frame: &Frame, _config: &OrderingConfig) -> OrderResult<Vec<usize>> {
        if frame.is_empty() {
            return Ok(Vec::new());
        }
        let tree = FrameRTree::bulk_load(frame.positions().map(Position::as_array)).map_err(
            |err| match err {
                SpatialError::NonFinitePoint { slot, .. } => {
                    let record = &frame.records()[slot];
                    OrderError::NonFinitePosition {
                        strategy: Self::NAME,
                        agent:    record.id(),
                        position: record.position(),
                    }
                }
            },
        )?;
        Ok(tree.envelope_order())
    }
}
