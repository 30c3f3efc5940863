//! The `OrderingStrategy` trait and the built-in strategy selector.
//!
//! A strategy maps one frame to a permutation of that frame.  Strategies are
//! stateless: everything they need arrives through the frame and the shared
//! [`OrderingConfig`], so one instance can serve many threads at once.

use std::fmt;
use std::str::FromStr;

use rug_core::Frame;

use crate::config::OrderingConfig;
use crate::hilbert::HilbertStrategy;
use crate::quadtree::QuadTreeStrategy;
use crate::rtree::RTreeStrategy;
use crate::zorder::ZOrderStrategy;
use crate::{OrderError, OrderResult};

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Orders the agent slots of a single frame.
///
/// Implementors provide [`slot_order`](Self::slot_order); the provided
/// [`order`](Self::order) applies it.  The slot list must be a permutation of
/// `0..frame.len()`.  If it isn't, `order` reports
/// [`OrderError::ShapeInvariant`] instead of producing a broken frame.
pub trait OrderingStrategy: Send + Sync {
    /// Stable human-readable name.  Used in logs and as the session cache key.
    fn name(&self) -> &'static str;

    /// Input slot indices in output order.
    fn slot_order(&self, frame: &Frame, config: &OrderingConfig) -> OrderResult<Vec<usize>>;

    fn order(&self, frame: Frame, config: &OrderingConfig) -> OrderResult<Frame> {
        let slots = self.slot_order(&frame, config)?;
        frame.reorder(&slots).map_err(|e| OrderError::ShapeInvariant {
            strategy: self.name(),
            detail:   e.to_string(),
        })
    }
}

impl<S: OrderingStrategy + ?Sized> OrderingStrategy for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn slot_order(&self, frame: &Frame, config: &OrderingConfig) -> OrderResult<Vec<usize>> {
        (**self).slot_order(frame, config)
    }

    fn order(&self, frame: Frame, config: &OrderingConfig) -> OrderResult<Frame> {
        (**self).order(frame, config)
    }
}

impl<S: OrderingStrategy + ?Sized> OrderingStrategy for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn slot_order(&self, frame: &Frame, config: &OrderingConfig) -> OrderResult<Vec<usize>> {
        (**self).slot_order(frame, config)
    }

    fn order(&self, frame: Frame, config: &OrderingConfig) -> OrderResult<Frame> {
        (**self).order(frame, config)
    }
}

// ── Built-in selector ─────────────────────────────────────────────────────────

/// The four built-in strategies, selectable by name.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyKind {
    Hilbert,
    QuadTree,
    RTree,
    ZOrder,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Hilbert,
        StrategyKind::QuadTree,
        StrategyKind::RTree,
        StrategyKind::ZOrder,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Hilbert  => HilbertStrategy::NAME,
            StrategyKind::QuadTree => QuadTreeStrategy::NAME,
            StrategyKind::RTree    => RTreeStrategy::NAME,
            StrategyKind::ZOrder   => ZOrderStrategy::NAME,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the display name (`"Point QuadTree"`) or a short key
/// (`"quadtree"`), case-insensitively.
impl FromStr for StrategyKind {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if let Some(kind) = Self::ALL.iter().find(|k| k.name().eq_ignore_ascii_case(wanted)) {
            return Ok(*kind);
        }
        match wanted.to_ascii_lowercase().as_str() {
            "hilbert"                   => Ok(StrategyKind::Hilbert),
            "quadtree" | "quad-tree"    => Ok(StrategyKind::QuadTree),
            "rtree" | "r-tree"          => Ok(StrategyKind::RTree),
            "zorder" | "z-order" | "morton" => Ok(StrategyKind::ZOrder),
            _ => Err(OrderError::UnknownStrategy(s.to_owned())),
        }
    }
}

impl OrderingStrategy for StrategyKind {
    fn name(&self) -> &'static str {
        StrategyKind::name(*self)
    }

    fn slot_order(&self, frame: &Frame, config: &OrderingConfig) -> OrderResult<Vec<usize>> {
        match self {
            StrategyKind::Hilbert  => HilbertStrategy.slot_order(frame, config),
            StrategyKind::QuadTree => QuadTreeStrategy.slot_order(frame, config),
            StrategyKind::RTree    => RTreeStrategy.slot_order(frame, config),
            StrategyKind::ZOrder   => ZOrderStrategy.slot_order(frame, config),
        }
    }
}
