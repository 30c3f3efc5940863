//! Per-agent, per-frame records.

use std::collections::BTreeMap;

use crate::{AgentId, Position};

/// Named feature values of one record (speed, acceleration, heading, …).
///
/// A `BTreeMap` keeps feature iteration order deterministic.
pub type FeatureMap = BTreeMap<String, f64>;

/// One agent at one time step.
///
/// `id` and `position` are fixed at construction.  Features can be filled in
/// incrementally by a loader before the record is placed into a
/// [`Frame`](crate::Frame); after that the record is shared immutably.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentRecord {
    id:       AgentId,
    position: Position,
    features: FeatureMap,
}

impl AgentRecord {
    pub fn new(id: AgentId, position: Position) -> Self {
        Self { id, position, features: FeatureMap::new() }
    }

    /// Builder-style feature setter, handy in loaders and tests.
    pub fn with_feature(mut self, name: impl Into<String>, value: f64) -> Self {
        self.features.insert(name.into(), value);
        self
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Value of `feature`, or `None` if the loader never set it.
    pub fn feature(&self, feature: &str) -> Option<f64> {
        self.features.get(feature).copied()
    }

    /// Insert or overwrite a feature value, returning the previous one.
    pub fn set_feature(&mut self, feature: impl Into<String>, value: f64) -> Option<f64> {
        self.features.insert(feature.into(), value)
    }

    pub fn feature_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.features.keys().map(String::as_str)
    }

    pub fn features(&self) -> &FeatureMap {
        &self.features
    }
}
