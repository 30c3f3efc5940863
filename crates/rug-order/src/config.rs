//! Ordering configuration.

use rug_core::Dataset;
use rug_curve::{CurveError, CurveOrder};

use crate::OrderResult;

/// Parameters shared by every strategy.
///
/// The config is passed by shared reference into each per-frame call and is
/// never mutated during a run, so concurrent runs with different configs
/// cannot interfere.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderingConfig {
    /// Grid resolution of the Hilbert and Z-order strategies.  Every
    /// truncated coordinate must lie in `[0, 2^r)`.  Default: `r = 2`.
    pub curve_order: CurveOrder,

    /// Worker thread count for the `parallel` dispatcher.  `None` uses
    /// Rayon's global pool.  Ignored without the `parallel` feature.
    pub num_threads: Option<usize>,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self { curve_order: CurveOrder::DEFAULT, num_threads: None }
    }
}

impl OrderingConfig {
    pub fn with_curve_order(curve_order: CurveOrder) -> Self {
        Self { curve_order, ..Self::default() }
    }

    /// Smallest curve order that holds every position of `dataset`.
    ///
    /// An empty dataset gets the default order.  Fails if any coordinate is
    /// negative after truncation, since no curve grid can hold it.
    pub fn fitted(dataset: &Dataset) -> OrderResult<Self> {
        let Some(bounds) = dataset.position_bounds() else {
            return Ok(Self::default());
        };
        let low = bounds.min.x.min(bounds.min.y);
        if !(low.trunc() >= 0.0) {
            return Err(CurveError::Uncoverable(low).into());
        }
        let order = CurveOrder::covering(bounds.max.x.max(bounds.max.y))?;
        Ok(Self::with_curve_order(order))
    }
}
