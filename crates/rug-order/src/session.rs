//! Named datasets and their cached orderings.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;

use rug_core::{AgentId, Dataset};

use crate::config::OrderingConfig;
use crate::dispatcher::{check_permutation, frame_index, Dispatcher};
use crate::observer::OrderObserver;
use crate::strategy::OrderingStrategy;
use crate::{OrderError, OrderResult};

struct CachedOrdering {
    config:  Option<OrderingConfig>,
    dataset: Arc<Dataset>,
}

struct SessionEntry {
    base:    Arc<Dataset>,
    ordered: BTreeMap<&'static str, CachedOrdering>,
}

/// A store of base datasets, keyed by dataset name, plus one cached ordering
/// per (dataset, strategy name).
///
/// A cached ordering is reused only when it was produced with the same
/// [`OrderingConfig`]; a different config recomputes and replaces it.
#[derive(Default)]
pub struct RugSession {
    datasets: BTreeMap<String, SessionEntry>,
}

impl RugSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `dataset` under its own name.  Replacing a dataset drops every
    /// ordering cached for it and returns the previous base.
    pub fn add_dataset(&mut self, dataset: Dataset) -> Option<Arc<Dataset>> {
        let name = dataset.name().to_owned();
        let entry = SessionEntry { base: Arc::new(dataset), ordered: BTreeMap::new() };
        self.datasets.insert(name, entry).map(|old| old.base)
    }

    pub fn remove_dataset(&mut self, name: &str) -> Option<Arc<Dataset>> {
        self.datasets.remove(name).map(|entry| entry.base)
    }

    /// Dataset names in sorted order.
    pub fn dataset_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.datasets.keys().map(String::as_str)
    }

    pub fn dataset(&self, name: &str) -> Option<&Arc<Dataset>> {
        self.datasets.get(name).map(|entry| &entry.base)
    }

    /// Cached ordering of `dataset` by the strategy named `strategy`.
    pub fn ordered(&self, dataset: &str, strategy: &str) -> Option<&Arc<Dataset>> {
        self.datasets
            .get(dataset)?
            .ordered
            .get(strategy)
            .map(|cached| &cached.dataset)
    }

    /// Names of the strategies with a cached ordering of `dataset`.
    pub fn ordered_by(&self, dataset: &str) -> Vec<&'static str> {
        self.datasets
            .get(dataset)
            .map(|entry| entry.ordered.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Store an ordering computed elsewhere.
    ///
    /// Every frame must be a permutation of the matching base frame.  The
    /// ordering is kept until replaced, but never counts as a cache hit in
    /// [`order_with`](Self::order_with), because its config is unknown.
    pub fn insert_ordered(
        &mut self,
        strategy: &'static str,
        ordered:  Dataset,
    ) -> OrderResult<Arc<Dataset>> {
        let entry = self
            .datasets
            .get_mut(ordered.name())
            .ok_or_else(|| OrderError::UnknownDataset(ordered.name().to_owned()))?;
        if ordered.frame_count() != entry.base.frame_count()
            || ordered.agent_count() != entry.base.agent_count()
        {
            return Err(OrderError::ShapeInvariant {
                strategy,
                detail: format!(
                    "ordering has {} frames × {} agents, dataset has {} × {}",
                    ordered.frame_count(),
                    ordered.agent_count(),
                    entry.base.frame_count(),
                    entry.base.agent_count(),
                ),
            });
        }
        for (i, (base, frame)) in entry.base.frames().iter().zip(ordered.frames()).enumerate() {
            let index = frame_index(i)?;
            let input: Vec<AgentId> = base.ids().collect();
            check_permutation(strategy, &input, frame).map_err(|e| e.in_frame(index))?;
        }
        let ordered = Arc::new(ordered);
        entry.ordered.insert(strategy, CachedOrdering { config: None, dataset: Arc::clone(&ordered) });
        Ok(ordered)
    }

    /// Ordering of `dataset` by `strategy`, computed on first request and
    /// cached afterwards.
    pub fn order_with<S, O>(
        &mut self,
        dataset:  &str,
        strategy: S,
        config:   &OrderingConfig,
        observer: &mut O,
    ) -> OrderResult<Arc<Dataset>>
    where
        S: OrderingStrategy,
        O: OrderObserver,
    {
        let entry = self
            .datasets
            .get_mut(dataset)
            .ok_or_else(|| OrderError::UnknownDataset(dataset.to_owned()))?;
        let name = strategy.name();

        let hit = entry
            .ordered
            .get(name)
            .filter(|cached| cached.config.as_ref() == Some(config));
        if let Some(cached) = hit {
            debug!("{dataset:?} already ordered with {name}");
            return Ok(Arc::clone(&cached.dataset));
        }

        let base = Dataset::clone(&entry.base);
        let ordered = Arc::new(Dispatcher::new(strategy, config.clone()).run(base, observer)?);
        entry.ordered.insert(
            name,
            CachedOrdering { config: Some(config.clone()), dataset: Arc::clone(&ordered) },
        );
        Ok(ordered)
    }
}
