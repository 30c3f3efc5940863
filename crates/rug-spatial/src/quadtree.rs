//! Point quadtree stored in an arena.
//!
//! # Shape
//!
//! Every node holds one point and up to four children, one per quadrant
//! relative to that point.  The first inserted point is the root and the tree
//! is never rebalanced, so its shape depends on insertion order: the same
//! point set inserted in a different order can yield a different traversal.
//!
//! # Layout
//!
//! Nodes live in a single `Vec` in insertion order; children are
//! `Option<usize>` indices into the same `Vec`.  There are no owning child
//! pointers, insertion is a loop rather than recursion, and traversal uses an
//! explicit stack, so degenerate (chain-shaped) trees cannot overflow the
//! call stack.

// ── Quadrant ──────────────────────────────────────────────────────────────────

/// Quadrant of a point relative to a node's point.
///
/// Ties go east/north: a point sharing the node's `x` is not west of it, a
/// point sharing its `y` is not south of it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Quadrant {
    NW = 0,
    NE = 1,
    SE = 2,
    SW = 3,
}

impl Quadrant {
    /// Quadrant of `p` relative to `q`.
    #[inline]
    pub fn classify<C: PartialOrd>(p: &[C; 2], q: &[C; 2]) -> Quadrant {
        let west = p[0] < q[0];
        let south = p[1] < q[1];
        match (west, south) {
            (true, true) => Quadrant::SW,
            (true, false) => Quadrant::NW,
            (false, true) => Quadrant::SE,
            (false, false) => Quadrant::NE,
        }
    }

    #[inline]
    fn slot(self) -> usize {
        self as usize
    }
}

// ── PointQuadTree ─────────────────────────────────────────────────────────────

struct QuadNode<C, V> {
    point:    [C; 2],
    value:    V,
    children: [Option<usize>; 4],
}

/// Unbalanced point quadtree mapping 2-D points to values.
///
/// `C` is the coordinate type (anything `PartialOrd`), `V` the payload.
pub struct PointQuadTree<C, V> {
    nodes: Vec<QuadNode<C, V>>,
}

impl<C: PartialOrd, V> PointQuadTree<C, V> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(points: usize) -> Self {
        Self { nodes: Vec::with_capacity(points) }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert `point` with its payload.
    ///
    /// Descends from the root choosing the child of the point's
    /// [`Quadrant`] until an empty child is found.  Equal points are kept as
    /// separate nodes (each one lands in the NE subtree of the previous).
    pub fn insert(&mut self, point: [C; 2], value: V) {
        let new = self.nodes.len();
        if new > 0 {
            let mut cur = 0;
            loop {
                let q = Quadrant::classify(&point, &self.nodes[cur].point).slot();
                match self.nodes[cur].children[q] {
                    Some(next) => cur = next,
                    None => {
                        self.nodes[cur].children[q] = Some(new);
                        break;
                    }
                }
            }
        }
        self.nodes.push(QuadNode { point, value, children: [None; 4] });
    }

    /// Payloads in traversal order: NW subtree, NE subtree, the node itself,
    /// SW subtree, SE subtree — applied recursively from the root.
    ///
    /// This is not a classic in-order walk; rows of the rug are assigned in
    /// exactly this order.  An empty tree yields nothing.
    pub fn iter(&self) -> Iter<'_, C, V> {
        let mut stack = Vec::new();
        if !self.nodes.is_empty() {
            stack.push(Visit::Expand(0));
        }
        Iter { tree: self, stack }
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = Vec::new();
        if !self.nodes.is_empty() {
            stack.push((0usize, 1usize));
        }
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for child in self.nodes[node].children.iter().flatten() {
                stack.push((*child, depth + 1));
            }
        }
        deepest
    }
}

impl<C: PartialOrd, V> Default for PointQuadTree<C, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PartialOrd, V> FromIterator<([C; 2], V)> for PointQuadTree<C, V> {
    /// Insert every `(point, value)` pair in iteration order.
    fn from_iter<I: IntoIterator<Item = ([C; 2], V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut tree = Self::with_capacity(iter.size_hint().0);
        for (point, value) in iter {
            tree.insert(point, value);
        }
        tree
    }
}

// ── Traversal ─────────────────────────────────────────────────────────────────

enum Visit {
    /// Schedule a node's subtrees and the node itself.
    Expand(usize),
    /// Yield a node's payload.
    Emit(usize),
}

/// Iterator returned by [`PointQuadTree::iter`].
pub struct Iter<'a, C, V> {
    tree:  &'a PointQuadTree<C, V>,
    stack: Vec<Visit>,
}

impl<'a, C, V> Iterator for Iter<'a, C, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        while let Some(visit) = self.stack.pop() {
            match visit {
                Visit::Emit(node) => return Some(&self.tree.nodes[node].value),
                Visit::Expand(node) => {
                    let [nw, ne, se, sw] = self.tree.nodes[node].children;
                    // Pushed in reverse of the visiting order.
                    self.stack.extend(se.map(Visit::Expand));
                    self.stack.extend(sw.map(Visit::Expand));
                    self.stack.push(Visit::Emit(node));
                    self.stack.extend(ne.map(Visit::Expand));
                    self.stack.extend(nw.map(Visit::Expand));
                }
            }
        }
        None
    }
}
