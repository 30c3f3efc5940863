//! `rug-curve` — space-filling curve keys for 2-D grid cells.
//!
//! Curve strategies sort agents by the curve index of the grid cell their
//! position falls into.  Everything here is a pure integer function; no state
//! survives a call.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`order`]   | `CurveOrder` (grid resolution `2^r` per axis)               |
//! | [`cell`]    | `GridCell`, `Axis`, position → cell truncation              |
//! | [`bits`]    | `part1by1`, `interleave`                                    |
//! | [`hilbert`] | `hilbert_index`                                             |
//! | [`morton`]  | `morton_index` (Z-order)                                    |
//! | [`error`]   | `CurveError`, `CurveResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `CurveOrder`, `GridCell`.|

pub mod bits;
pub mod cell;
pub mod error;
pub mod hilbert;
pub mod morton;
pub mod order;


pub use cell::{Axis, GridCell};
pub use error::{CurveError, CurveResult};
pub use hilbert::hilbert_index;
pub use morton::{morton_cell, morton_index};
pub use order::CurveOrder;
