//! `rug-core` — data model shared by every `rug-*` crate.
//!
//! A motion rug has one row per tracked agent and one column per frame.  This
//! crate holds the records those rows are built from; it does no ordering and
//! no I/O of its own.
//!
//! # What lives here
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`ids`]       | `AgentId`, `FrameIndex`                                |
//! | [`geo`]       | `Position`, `Bounds`                                   |
//! | [`record`]    | `AgentRecord`, `FeatureMap`                            |
//! | [`frame`]     | `Frame` (one time step, ordered agent slots)           |
//! | [`dataset`]   | `Dataset` (frames of equal population)                 |
//! | [`error`]     | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod dataset;
pub mod error;
pub mod frame;
pub mod geo;
pub mod ids;
pub mod record;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dataset::Dataset;
pub use error::{CoreError, CoreResult};
pub use frame::Frame;
pub use geo::{Bounds, Position};
pub use ids::{AgentId, FrameIndex};
pub use record::{AgentRecord, FeatureMap};
