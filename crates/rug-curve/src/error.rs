//! Curve-encoder error type.

use thiserror::Error;

use crate::Axis;

/// Errors produced by `rug-curve`.
#[derive(Debug, Error)]
pub enum CurveError {
    /// A coordinate does not fall in `[0, 2^order)` after truncation.
    ///
    /// This is a caller precondition failure: raise the curve order or clip
    /// the data.  It is never silently wrapped.
    #[error("{axis} coordinate {value} is outside the 2^{order} grid")]
    OutOfRange { axis: Axis, value: f64, order: u32 },

    #[error("curve order {0} is not in 1..={max}", max = crate::CurveOrder::MAX)]
    InvalidOrder(u32),

    #[error("no curve order covers coordinate {0}")]
    Uncoverable(f64),
}

pub type CurveResult<T> = Result<T, CurveError>;
