//! A single time step: agent records in slot order.
//!
//! The slot order of a frame is the row order of the rug for that column.
//! Ordering strategies never edit records; they only produce a new slot order
//! which is applied with [`Frame::reorder`].

use std::sync::Arc;

use crate::{AgentId, AgentRecord, CoreError, CoreResult, Position};

/// Ordered agent records for one frame.
///
/// Records sit behind `Arc` so that the base dataset and every reordered copy
/// of it share the same record allocations.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    records: Vec<Arc<AgentRecord>>,
}

impl Frame {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    pub fn with_capacity(agents: usize) -> Self {
        Self { records: Vec::with_capacity(agents) }
    }

    /// Append a record to the last slot.
    pub fn push(&mut self, record: AgentRecord) {
        self.records.push(Arc::new(record));
    }

    /// Append an already shared record to the last slot.
    pub fn push_shared(&mut self, record: Arc<AgentRecord>) {
        self.records.push(record);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record in `slot`, if any.
    pub fn get(&self, slot: usize) -> Option<&AgentRecord> {
        self.records.get(slot).map(Arc::as_ref)
    }

    pub fn records(&self) -> &[Arc<AgentRecord>] {
        &self.records
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &AgentRecord> + '_ {
        self.records.iter().map(Arc::as_ref)
    }

    /// Agent ids in slot order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = AgentId> + '_ {
        self.records.iter().map(|r| r.id())
    }

    /// Positions in slot order.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.records.iter().map(|r| r.position())
    }

    /// Move records into the slot order given by `slots`.
    ///
    /// `slots[i]` is the *input* slot whose record ends up at output slot `i`.
    /// Fails with [`CoreError::NotAPermutation`] unless `slots` names every
    /// slot of `0..len` exactly once; on failure the frame is dropped.
    pub fn reorder(self, slots: &[usize]) -> CoreResult<Frame> {
        let len = self.records.len();
        if slots.len() != len {
            return Err(CoreError::NotAPermutation {
                len,
                reason: format!("{} slots given", slots.len()),
            });
        }

        let mut pending: Vec<Option<Arc<AgentRecord>>> =
            self.records.into_iter().map(Some).collect();
        let mut records = Vec::with_capacity(len);
        for &slot in slots {
            match pending.get_mut(slot).and_then(Option::take) {
                Some(record) => records.push(record),
                None if slot >= len => {
                    return Err(CoreError::NotAPermutation {
                        len,
                        reason: format!("slot {slot} is out of range"),
                    });
                }
                None => {
                    return Err(CoreError::NotAPermutation {
                        len,
                        reason: format!("slot {slot} appears twice"),
                    });
                }
            }
        }
        Ok(Frame { records })
    }
}

impl From<Vec<AgentRecord>> for Frame {
    fn from(records: Vec<AgentRecord>) -> Self {
        records.into_iter().collect()
    }
}

impl FromIterator<AgentRecord> for Frame {
    fn from_iter<I: IntoIterator<Item = AgentRecord>>(iter: I) -> Self {
        Self { records: iter.into_iter().map(Arc::new).collect() }
    }
}

impl FromIterator<Arc<AgentRecord>> for Frame {
    fn from_iter<I: IntoIterator<Item = Arc<AgentRecord>>>(iter: I) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}
