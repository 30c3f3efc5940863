//! Point-quadtree strategy.

use rug_core::{Frame, Position};
use rug_spatial::PointQuadTree;

use crate::config::OrderingConfig;
use crate::strategy::OrderingStrategy;
use crate::{OrderError, OrderResult};

/// Builds a point quadtree from the frame's agents in slot order and emits
/// them in its NW, NE, node, SW, SE traversal.
///
/// Positions are truncated toward zero before insertion, so agents in the
/// same unit cell compare equal and fall into the NE quadrant of each other.
/// The result depends on insertion order: the first agent is always the
/// root.  NaN and infinite positions have no cell and are rejected.
#[derive(Copy, Clone, Debug, Default)]
pub struct QuadTreeStrategy;

impl QuadTreeStrategy {
    pub const NAME: &'static str = "Point QuadTree";
}

impl OrderingStrategy for QuadTreeStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn slot_order(&self, frame: &Frame, _config: &OrderingConfig) -> OrderResult<Vec<usize>> {
        if frame.is_empty() {
            return Ok(Vec::new());
        }
        let mut tree: PointQuadTree<i64, usize> = PointQuadTree::with_capacity(frame.len());
        for (slot, record) in frame.iter().enumerate() {
            let position = record.position();
            if !position.is_finite() {
                return Err(OrderError::NonFinitePosition {
                    strategy: Self::NAME,
                    agent:    record.id(),
                    position,
                });
            }
            tree.insert(Position::truncated(position), slot);
        }
        Ok(tree.iter().copied().collect())
    }
}
