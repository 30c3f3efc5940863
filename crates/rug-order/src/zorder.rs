//! Z-order (Morton) strategy.

use rug_core::Frame;
use rug_curve::morton_index;

use crate::config::OrderingConfig;
use crate::curve::sort_by_curve;
use crate::strategy::OrderingStrategy;
use crate::OrderResult;

/// Orders agents by the Morton code of their truncated position: x bits on
/// the even positions, y bits on the odd positions.
///
/// Coordinates are range-checked against `config.curve_order` exactly like
/// the Hilbert strategy; the code itself doesn't depend on the order.
#[derive(Copy, Clone, Debug, Default)]
pub struct ZOrderStrategy;

impl ZOrderStrategy {
    pub const NAME: &'static str = "Z-Order";
}

impl OrderingStrategy for ZOrderStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn slot_order(&self, frame: &Frame, config: &OrderingConfig) -> OrderResult<Vec<usize>> {
        sort_by_curve(Self::NAME, frame, config.curve_order, morton_index)
    }
}
