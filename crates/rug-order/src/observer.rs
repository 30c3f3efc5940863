//! Progress callbacks for dataset ordering.

use rug_core::FrameIndex;

/// Callbacks invoked by [`Dispatcher::run`][crate::Dispatcher::run].
///
/// All methods default to no-ops.  Frame callbacks always arrive in frame
/// order, also when the frames were ordered in parallel.
///
/// # Example — empty-frame counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct EmptyFrames(Vec<FrameIndex>);
///
/// impl OrderObserver for EmptyFrames {
///     fn on_empty_frame(&mut self, frame: FrameIndex) {
///         self.0.push(frame);
///     }
/// }
/// ```
pub trait OrderObserver {
    /// Called once before the first frame is ordered.
    fn on_dataset_start(&mut self, _dataset: &str, _strategy: &'static str, _frames: usize) {}

    /// Called for every non-empty frame after it passed the permutation check.
    fn on_frame_ordered(&mut self, _frame: FrameIndex, _agents: usize) {}

    /// Called for every frame with no agents.  Informational, not an error.
    fn on_empty_frame(&mut self, _frame: FrameIndex) {}

    /// Called once after every frame was ordered successfully.  Not called
    /// when the run fails.
    fn on_dataset_end(&mut self, _dataset: &str, _strategy: &'static str) {}
}

/// An [`OrderObserver`] that does nothing.
pub struct NoopObserver;

impl OrderObserver for NoopObserver {}
