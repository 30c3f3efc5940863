//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `rug-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("point in slot {slot} is not finite: ({x}, {y})")]
    NonFinitePoint { slot: usize, x: f64, y: f64 },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
