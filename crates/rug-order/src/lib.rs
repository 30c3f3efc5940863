//! `rug-order` — ordering strategies and the frame dispatcher.
//!
//! A motion rug is only readable if agents that are close in space end up
//! in nearby rows.  This crate decides the row order: each strategy maps one
//! frame to a permutation of its agents, and the [`Dispatcher`] applies a
//! strategy to every frame of a [`Dataset`][rug_core::Dataset].
//!
//! # What lives here
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`strategy`]    | `OrderingStrategy` trait, `StrategyKind` selector    |
//! | [`hilbert`]     | `HilbertStrategy`                                    |
//! | [`quadtree`]    | `QuadTreeStrategy`                                   |
//! | [`rtree`]       | `RTreeStrategy`                                      |
//! | [`zorder`]      | `ZOrderStrategy`                                     |
//! | [`config`]      | `OrderingConfig`                                     |
//! | [`dispatcher`]  | `Dispatcher` (per-frame loop, permutation check)     |
//! | [`observer`]    | `OrderObserver`, `NoopObserver`                      |
//! | [`cancel`]      | `CancelToken`                                        |
//! | [`session`]     | `RugSession` (named datasets, cached orderings)      |
//! | [`error`]       | `OrderError`, `OrderResult`                          |
//!
//! # Quick start
//!
//! ```rust,ignore
//! let config = OrderingConfig::fitted(&dataset)?;
//! let ordered = Dispatcher::new(StrategyKind::Hilbert, config)
//!     .run(dataset, &mut NoopObserver)?;
//! ```
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Order frames on Rayon's thread pool.                    |
//! | `serde`    | `Serialize`/`Deserialize` on config and selector types. |

pub mod cancel;
pub mod config;
mod curve;
pub mod dispatcher;
pub mod error;
pub mod hilbert;
pub mod observer;
pub mod quadtree;
pub mod rtree;
pub mod session;
pub mod strategy;
pub mod zorder;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cancel::CancelToken;
pub use config::OrderingConfig;
pub use dispatcher::Dispatcher;
pub use error::{OrderError, OrderResult};
pub use hilbert::HilbertStrategy;
pub use observer::{NoopObserver, OrderObserver};
pub use quadtree::QuadTreeStrategy;
pub use rtree::RTreeStrategy;
pub use session::RugSession;
pub use strategy::{OrderingStrategy, StrategyKind};
pub use zorder::ZOrderStrategy;
