//! R*-tree over one frame's points, via `rstar`.
//!
//! # Enumeration order
//!
//! `RTree::iter` walks nodes in whatever child order the bulk loader happened
//! to leave behind, which is an implementation detail of `rstar`.  Instead,
//! [`FrameRTree::envelope_order`] performs its own depth-first walk and visits
//! the children of every node sorted by their bounding box:
//!
//! 1. lower corner `x`, then lower corner `y`;
//! 2. upper corner `x`, then upper corner `y`;
//! 3. remaining ties keep the order stored in the tree (stable sort).
//!
//! Bulk loading is deterministic for a given input sequence, so the same
//! frame always produces the same order.

use std::cmp::Ordering;

use rstar::{ParentNode, RStarInsertionStrategy, RTree, RTreeNode, RTreeObject, RTreeParams, AABB};

use crate::{SpatialError, SpatialResult};

// ── Parameters ────────────────────────────────────────────────────────────────

/// Node fan-out used for frame trees: 15 to 30 children per node.
pub struct FrameTreeParams;

impl RTreeParams for FrameTreeParams {
    const MIN_SIZE: usize = 15;
    const MAX_SIZE: usize = 30;
    const REINSERTION_COUNT: usize = 10;
    type DefaultInsertionStrategy = RStarInsertionStrategy;
}

// ── Tree entry ────────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a `[x, y]` point and the frame slot it came
/// from.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotEntry {
    pub point: [f64; 2],
    pub slot:  usize,
}

impl RTreeObject for SlotEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

// ── FrameRTree ────────────────────────────────────────────────────────────────

/// Bulk-loaded R*-tree holding one frame's slots.
pub struct FrameRTree {
    tree: RTree<SlotEntry, FrameTreeParams>,
}

impl FrameRTree {
    /// Bulk-load the points of a frame; the `i`-th point is recorded as slot
    /// `i`.
    ///
    /// Time complexity: O(N log N).  Fails on the first NaN or infinite
    /// coordinate, since such points have no meaningful bounding box.
    pub fn bulk_load<I>(points: I) -> SpatialResult<Self>
    where
        I: IntoIterator<Item = [f64; 2]>,
    {
        let entries = points
            .into_iter()
            .enumerate()
            .map(|(slot, point)| {
                if point[0].is_finite() && point[1].is_finite() {
                    Ok(SlotEntry { point, slot })
                } else {
                    Err(SpatialError::NonFinitePoint { slot, x: point[0], y: point[1] })
                }
            })
            .collect::<SpatialResult<Vec<_>>>()?;

        Ok(Self { tree: RTree::bulk_load_with_params(entries) })
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    pub(crate) fn root(&self) -> &ParentNode<SlotEntry> {
        self.tree.root()
    }

    /// Slots in deterministic depth-first envelope order (see module docs).
    pub fn envelope_order(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<&RTreeNode<SlotEntry>> = Vec::new();
        push_sorted(&mut stack, self.root().children());

        while let Some(node) = stack.pop() {
            match node {
                RTreeNode::Leaf(entry) => out.push(entry.slot),
                RTreeNode::Parent(parent) => push_sorted(&mut stack, parent.children()),
            }
        }
        out
    }

    /// Largest number of children under any one node.
    pub fn max_fanout(&self) -> usize {
        let mut widest = self.root().children().len();
        let mut stack: Vec<&RTreeNode<SlotEntry>> = self.root().children().iter().collect();
        while let Some(node) = stack.pop() {
            if let RTreeNode::Parent(parent) = node {
                widest = widest.max(parent.children().len());
                stack.extend(parent.children());
            }
        }
        widest
    }

    /// Number of levels, counting the root and the leaf entries.
    pub fn height(&self) -> usize {
        let mut levels = 1;
        let mut children = self.root().children();
        while let Some(RTreeNode::Parent(parent)) = children.first() {
            levels += 1;
            children = parent.children();
        }
        if !children.is_empty() {
            levels += 1;
        }
        levels
    }
}

/// Push `children` so that they pop off `stack` in ascending envelope order.
fn push_sorted<'a>(stack: &mut Vec<&'a RTreeNode<SlotEntry>>, children: &'a [RTreeNode<SlotEntry>]) {
    let mut sorted: Vec<&RTreeNode<SlotEntry>> = children.iter().collect();
    sorted.sort_by(|a, b| cmp_envelopes(&a.envelope(), &b.envelope()));
    stack.extend(sorted.into_iter().rev());
}

fn cmp_envelopes(a: &AABB<[f64; 2]>, b: &AABB<[f64; 2]>) -> Ordering {
    let (al, au) = (a.lower(), a.upper());
    let (bl, bu) = (b.lower(), b.upper());
    al[0]
        .total_cmp(&bl[0])
        .then(al[1].total_cmp(&bl[1]))
        .then(au[0].total_cmp(&bu[0]))
        .then(au[1].total_cmp(&bu[1]))
}
