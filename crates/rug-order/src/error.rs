//! Ordering error type.
//!
//! Every failure here is deterministic and local to one frame; nothing is
//! worth retrying.  The dispatcher wraps frame-level errors in
//! [`OrderError::InFrame`] so the offending frame can be located.

use thiserror::Error;

use rug_core::{AgentId, CoreError, FrameIndex, Position};
use rug_curve::CurveError;

#[derive(Debug, Error)]
pub enum OrderError {
    /// A curve strategy met a coordinate outside its grid.  Raise the curve
    /// order (see `OrderingConfig::fitted`) or clip the dataset.
    #[error("{strategy}: {agent} is off the curve grid: {source}")]
    OutOfRange {
        strategy: &'static str,
        agent:    AgentId,
        #[source]
        source:   CurveError,
    },

    #[error("{strategy}: {agent} has a non-finite position {position}")]
    NonFinitePosition {
        strategy: &'static str,
        agent:    AgentId,
        position: Position,
    },

    /// A strategy returned something other than a permutation of its input.
    /// This is a bug in the strategy; the batch is aborted.
    #[error("{strategy} broke the permutation contract: {detail}")]
    ShapeInvariant {
        strategy: &'static str,
        detail:   String,
    },

    #[error("{frame}: {source}")]
    InFrame {
        frame:  FrameIndex,
        #[source]
        source: Box<OrderError>,
    },

    #[error("ordering cancelled at {0}")]
    Cancelled(FrameIndex),

    #[error("unknown ordering strategy {0:?}")]
    UnknownStrategy(String),

    #[error("dataset {0:?} is not in the session")]
    UnknownDataset(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Curve(#[from] CurveError),
}

impl OrderError {
    /// Attach the index of the frame being ordered.
    pub(crate) fn in_frame(self, frame: FrameIndex) -> Self {
        OrderError::InFrame { frame, source: Box::new(self) }
    }

    /// Frame the error was raised in, if known.
    pub fn frame(&self) -> Option<FrameIndex> {
        match self {
            OrderError::InFrame { frame, .. } | OrderError::Cancelled(frame) => Some(*frame),
            _ => None,
        }
    }

    /// The error with any frame context peeled off.
    pub fn root_cause(&self) -> &OrderError {
        match self {
            OrderError::InFrame { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

pub type OrderResult<T> = Result<T, OrderError>;
