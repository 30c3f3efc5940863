//! Dataset-level ordering: apply one strategy to every frame.
//!
//! # Per-frame pipeline
//!
//! 1. **Cancellation check.** A cancelled token stops the run with
//!    [`OrderError::Cancelled`] before the frame is touched.
//! 2. **Order.** `strategy.order(frame, &config)`.
//! 3. **Permutation check.** The output must hold exactly the input's agent
//!    identities, counted as a multiset.  Anything else is a strategy bug and
//!    fails with [`OrderError::ShapeInvariant`].
//!
//! Frames are independent.  With the `parallel` feature they are ordered on
//! Rayon's pool; the result, the error reported on failure and the order of
//! observer callbacks are identical to the sequential run.

use log::{debug, info, warn};
use rustc_hash::FxHashMap;

use rug_core::{AgentId, CoreError, Dataset, Frame, FrameIndex};

use crate::cancel::CancelToken;
use crate::config::OrderingConfig;
use crate::observer::OrderObserver;
use crate::strategy::OrderingStrategy;
use crate::{OrderError, OrderResult};

pub struct Dispatcher<S> {
    strategy: S,
    config:   OrderingConfig,
    cancel:   Option<CancelToken>,
}

impl<S: OrderingStrategy> Dispatcher<S> {
    pub fn new(strategy: S, config: OrderingConfig) -> Self {
        Self { strategy, config, cancel: None }
    }

    /// Stop the run at the next frame boundary once `token` is cancelled.
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn config(&self) -> &OrderingConfig {
        &self.config
    }

    /// Order every frame of `dataset`.
    ///
    /// The output keeps the dataset name and frame count, and every output
    /// frame is a permutation of the matching input frame.  The first failing
    /// frame (by index) aborts the run; its error comes back wrapped in
    /// [`OrderError::InFrame`].
    pub fn run<O: OrderObserver>(&self, dataset: Dataset, observer: &mut O) -> OrderResult<Dataset> {
        let strategy = self.strategy.name();
        let (name, frames) = dataset.into_parts();
        info!(
            "ordering {:?}: {} frames with {} (curve order {})",
            name,
            frames.len(),
            strategy,
            self.config.curve_order,
        );
        observer.on_dataset_start(&name, strategy, frames.len());

        let ordered = match self.order_all(frames, observer) {
            Ok(frames) => frames,
            Err(err) => {
                warn!("ordering {name:?} with {strategy} failed: {err}");
                return Err(err);
            }
        };

        let out = Dataset::new(name, ordered)?;
        observer.on_dataset_end(out.name(), strategy);
        info!("ordered {:?}: {} frames × {} agents", out.name(), out.frame_count(), out.agent_count());
        Ok(out)
    }

    /// Order one frame and verify the result is a permutation of it.
    ///
    /// `index` is only used to label errors and log lines.
    pub fn order_frame(&self, index: FrameIndex, frame: Frame) -> OrderResult<Frame> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(OrderError::Cancelled(index));
        }
        let strategy = self.strategy.name();
        if frame.is_empty() {
            debug!("{index} is empty; nothing to order");
        }

        let input: Vec<AgentId> = frame.ids().collect();
        let ordered = self
            .strategy
            .order(frame, &self.config)
            .and_then(|out| check_permutation(strategy, &input, &out).map(|()| out))
            .map_err(|e| e.in_frame(index))?;

        debug!("{index}: ordered {} agents with {strategy}", ordered.len());
        Ok(ordered)
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    #[cfg(not(feature = "parallel"))]
    fn order_all<O: OrderObserver>(
        &self,
        frames:   Vec<Frame>,
        observer: &mut O,
    ) -> OrderResult<Vec<Frame>> {
        let mut out = Vec::with_capacity(frames.len());
        for (i, frame) in frames.into_iter().enumerate() {
            let index = frame_index(i)?;
            let ordered = self.order_frame(index, frame)?;
            report(observer, index, &ordered);
            out.push(ordered);
        }
        Ok(out)
    }

    #[cfg(feature = "parallel")]
    fn order_all<O: OrderObserver>(
        &self,
        frames:   Vec<Frame>,
        observer: &mut O,
    ) -> OrderResult<Vec<Frame>> {
        use rayon::prelude::*;

        let work = || {
            frames
                .into_par_iter()
                .enumerate()
                .map(|(i, frame)| self.order_frame(frame_index(i)?, frame))
                .collect::<Vec<OrderResult<Frame>>>()
        };
        let results = match self.config.num_threads {
            None => work(),
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| OrderError::Config(e.to_string()))?
                .install(work),
        };

        // Sequential pass so the reported error is always the lowest failing
        // frame and callbacks arrive in frame order.
        let mut out = Vec::with_capacity(results.len());
        for (i, result) in results.into_iter().enumerate() {
            let ordered = result?;
            report(observer, frame_index(i)?, &ordered);
            out.push(ordered);
        }
        Ok(out)
    }
}

pub(crate) fn frame_index(i: usize) -> OrderResult<FrameIndex> {
    FrameIndex::try_from(i).map_err(|_| OrderError::Core(CoreError::TooManyFrames(i)))
}

fn report<O: OrderObserver>(observer: &mut O, index: FrameIndex, frame: &Frame) {
    if frame.is_empty() {
        observer.on_empty_frame(index);
    } else {
        observer.on_frame_ordered(index, frame.len());
    }
}

/// `output` must hold the same agent identities as `input`, with the same
/// multiplicities.
pub(crate) fn check_permutation(strategy: &'static str, input: &[AgentId], output: &Frame) -> OrderResult<()> {
    if input.len() != output.len() {
        return Err(OrderError::ShapeInvariant {
            strategy,
            detail: format!("{} agents in, {} agents out", input.len(), output.len()),
        });
    }
    let mut counts: FxHashMap<AgentId, usize> = FxHashMap::default();
    counts.reserve(input.len());
    for &id in input {
        *counts.entry(id).or_default() += 1;
    }
    for id in output.ids() {
        match counts.get_mut(&id) {
            Some(n) if *n > 0 => *n -= 1,
            _ => {
                return Err(OrderError::ShapeInvariant {
                    strategy,
                    detail: format!("{id} is not in the input frame or appears too often"),
                });
            }
        }
    }
    Ok(())
}
