//! Hilbert-curve strategy.

use rug_core::Frame;
use rug_curve::hilbert_index;

use crate::config::OrderingConfig;
use crate::curve::sort_by_curve;
use crate::strategy::OrderingStrategy;
use crate::OrderResult;

/// Orders agents by the Hilbert index of their truncated position on a
/// `2^r × 2^r` grid, `r = config.curve_order`.
///
/// Neighbouring cells along the curve are always grid neighbours, so agents
/// that are close in the plane tend to land in nearby rows.
#[derive(Copy, Clone, Debug, Default)]
pub struct HilbertStrategy;

impl HilbertStrategy {
    pub const NAME: &'static str = "Hilbert curve";
}

impl OrderingStrategy for HilbertStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn slot_order(&self, frame: &Frame, config: &OrderingConfig) -> OrderResult<Vec<usize>> {
        let order = config.curve_order;
        sort_by_curve(Self::NAME, frame, order, |cell| hilbert_index(cell, order))
    }
}
