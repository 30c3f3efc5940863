//! `rug-spatial` — spatial trees that turn a point set into a linear order.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`quadtree`] | `PointQuadTree` (arena point quadtree), `Quadrant`        |
//! | [`rtree`]    | `FrameRTree` (R*-tree via `rstar`), `FrameTreeParams`     |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                        |
//!
//! Both trees are built once per frame and dropped afterwards; neither keeps
//! state between frames.

pub mod error;
pub mod quadtree;
pub mod rtree;


pub use error::{SpatialError, SpatialResult};
pub use quadtree::{PointQuadTree, Quadrant};
pub use rtree::{FrameRTree, FrameTreeParams, SlotEntry};
