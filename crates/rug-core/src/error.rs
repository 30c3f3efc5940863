//! Data-model error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::{AgentId, FrameIndex};

/// Errors raised while assembling or permuting frames and datasets.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("frame {frame} holds {got} agents but the dataset population is {expected}")]
    RaggedFrame {
        frame:    FrameIndex,
        expected: usize,
        got:      usize,
    },

    #[error("frame {frame} contains {agent} more than once")]
    DuplicateAgent { frame: FrameIndex, agent: AgentId },

    #[error("slot order is not a permutation of 0..{len}: {reason}")]
    NotAPermutation { len: usize, reason: String },

    #[error("frame index {0} does not fit in a FrameIndex")]
    TooManyFrames(usize),
}

/// Shorthand result type for `rug-core`.
pub type CoreResult<T> = Result<T, CoreError>;
