//! A recording: frames of one fixed agent population.

use std::collections::{BTreeSet, HashSet};

use crate::{Bounds, CoreError, CoreResult, Frame, FrameIndex};

/// An ordered sequence of frames (outer = frame index, inner = agent slot).
///
/// Every frame holds the same number of agents and no agent appears twice in
/// one frame; both are checked once by [`Dataset::new`].  After construction
/// the frame count and population never change; only slot order differs
/// between a dataset and its orderings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dataset {
    name:   String,
    frames: Vec<Frame>,
}

impl Dataset {
    /// Validate and wrap `frames`.
    ///
    /// The population is taken from the first frame.  An empty frame list is
    /// a valid (empty) dataset.
    pub fn new(name: impl Into<String>, frames: Vec<Frame>) -> CoreResult<Self> {
        let expected = frames.first().map_or(0, Frame::len);
        let mut seen = HashSet::with_capacity(expected);

        for (i, frame) in frames.iter().enumerate() {
            let index = FrameIndex::try_from(i).map_err(|_| CoreError::TooManyFrames(i))?;
            if frame.len() != expected {
                return Err(CoreError::RaggedFrame { frame: index, expected, got: frame.len() });
            }
            seen.clear();
            for agent in frame.ids() {
                if !seen.insert(agent) {
                    return Err(CoreError::DuplicateAgent { frame: index, agent });
                }
            }
        }

        Ok(Self { name: name.into(), frames })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Agents per frame (0 for a dataset without frames).
    pub fn agent_count(&self) -> usize {
        self.frames.first().map_or(0, Frame::len)
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, index: FrameIndex) -> Option<&Frame> {
        self.frames.get(index.index())
    }

    /// Consume the dataset, returning its name and frames.
    pub fn into_parts(self) -> (String, Vec<Frame>) {
        (self.name, self.frames)
    }

    /// Bounding box of every position in every frame.
    pub fn position_bounds(&self) -> Option<Bounds> {
        Bounds::of(self.frames.iter().flat_map(Frame::positions))
    }

    /// Sorted union of the feature names present on any record.
    pub fn feature_names(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .frames
            .iter()
            .flat_map(Frame::iter)
            .flat_map(|r| r.feature_names())
            .collect();
        names.into_iter().map(str::to_owned).collect()
    }

    /// `(min, max)` of `feature` over all records that carry it.
    ///
    /// Returns `None` if no record has the feature.  NaN values are skipped.
    pub fn feature_range(&self, feature: &str) -> Option<(f64, f64)> {
        self.frames
            .iter()
            .flat_map(Frame::iter)
            .filter_map(|r| r.feature(feature))
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
