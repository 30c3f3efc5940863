//! Unit tests for rug-order.

#[cfg(test)]
mod helpers {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use rug_core::{AgentId, AgentRecord, Dataset, Frame, FrameIndex, Position};

    use crate::OrderObserver;

    /// Frame of `(id, x, y)` agents in the given slot order.
    pub fn frame_at(agents: &[(u32, f64, f64)]) -> Frame {
        agents
            .iter()
            .map(|&(id, x, y)| AgentRecord::new(AgentId(id), Position::new(x, y)))
            .collect()
    }

    pub fn ids(frame: &Frame) -> Vec<u32> {
        frame.ids().map(|id| id.0).collect()
    }

    pub fn sorted_ids(frame: &Frame) -> Vec<u32> {
        let mut ids = ids(frame);
        ids.sort_unstable();
        ids
    }

    /// `frames` frames of `agents` agents wandering in `[0, extent)²`.
    pub fn random_dataset(frames: usize, agents: u32, extent: f64, seed: u64) -> Dataset {
        let mut rng = SmallRng::seed_from_u64(seed);
        let frames = (0..frames)
            .map(|_| {
                (0..agents)
                    .map(|id| {
                        let pos = Position::new(rng.gen_range(0.0..extent), rng.gen_range(0.0..extent));
                        AgentRecord::new(AgentId(id), pos)
                    })
                    .collect()
            })
            .collect();
        Dataset::new("random", frames).unwrap()
    }

    #[derive(Default)]
    pub struct Recorder {
        pub started: Vec<(String, &'static str, usize)>,
        pub ordered: Vec<(FrameIndex, usize)>,
        pub empty:   Vec<FrameIndex>,
        pub ended:   usize,
    }

    impl OrderObserver for Recorder {
        fn on_dataset_start(&mut self, dataset: &str, strategy: &'static str, frames: usize) {
            self.started.push((dataset.to_owned(), strategy, frames));
        }

        fn on_frame_ordered(&mut self, frame: FrameIndex, agents: usize) {
            self.ordered.push((frame, agents));
        }

        fn on_empty_frame(&mut self, frame: FrameIndex) {
            self.empty.push(frame);
        }

        fn on_dataset_end(&mut self, _dataset: &str, _strategy: &'static str) {
            self.ended += 1;
        }
    }
}

// ── Strategy selector ─────────────────────────────────────────────────────────

#[cfg(test)]
mod strategy_kind {
    use crate::{OrderError, StrategyKind};

    #[test]
    fn stable_names() {
        assert_eq!(StrategyKind::Hilbert.name(), "Hilbert curve");
        assert_eq!(StrategyKind::QuadTree.name(), "Point QuadTree");
        assert_eq!(StrategyKind::RTree.name(), "R-Tree");
        assert_eq!(StrategyKind::ZOrder.name(), "Z-Order");
        assert_eq!(StrategyKind::RTree.to_string(), "R-Tree");
    }

    #[test]
    fn parses_display_names_and_short_keys() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.name().parse::<StrategyKind>().unwrap(), kind);
        }
        assert_eq!("point quadtree".parse::<StrategyKind>().unwrap(), StrategyKind::QuadTree);
        assert_eq!("z-order".parse::<StrategyKind>().unwrap(), StrategyKind::ZOrder);
        assert_eq!(" rtree ".parse::<StrategyKind>().unwrap(), StrategyKind::RTree);
        assert_eq!("Hilbert".parse::<StrategyKind>().unwrap(), StrategyKind::Hilbert);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "voronoi".parse::<StrategyKind>().unwrap_err();
        assert!(matches!(err, OrderError::UnknownStrategy(ref s) if s == "voronoi"));
    }
}

// ── Properties shared by every strategy ───────────────────────────────────────

#[cfg(test)]
mod every_strategy {
    use super::helpers::{random_dataset, sorted_ids};
    use crate::{OrderingConfig, OrderingStrategy, StrategyKind};
    use rug_core::Frame;
    use rug_curve::CurveOrder;

    fn config() -> OrderingConfig {
        OrderingConfig::with_curve_order(CurveOrder::new(6).unwrap())
    }

    #[test]
    fn output_is_a_permutation() {
        let dataset = random_dataset(1, 300, 64.0, 7);
        let frame = &dataset.frames()[0];
        for kind in StrategyKind::ALL {
            let ordered = kind.order(frame.clone(), &config()).unwrap();
            assert_eq!(ordered.len(), frame.len(), "{kind}");
            assert_eq!(sorted_ids(&ordered), sorted_ids(frame), "{kind}");
        }
    }

    #[test]
    fn same_input_same_output() {
        let dataset = random_dataset(1, 300, 64.0, 11);
        let frame = &dataset.frames()[0];
        for kind in StrategyKind::ALL {
            let a = kind.order(frame.clone(), &config()).unwrap();
            let b = kind.order(frame.clone(), &config()).unwrap();
            assert_eq!(a, b, "{kind}");
        }
    }

    #[test]
    fn empty_frame_stays_empty() {
        for kind in StrategyKind::ALL {
            let ordered = kind.order(Frame::new(), &OrderingConfig::default()).unwrap();
            assert!(ordered.is_empty(), "{kind}");
        }
    }

    #[test]
    fn single_agent_is_untouched() {
        let dataset = random_dataset(1, 1, 4.0, 3);
        let frame = &dataset.frames()[0];
        for kind in StrategyKind::ALL {
            let ordered = kind.order(frame.clone(), &OrderingConfig::default()).unwrap();
            assert_eq!(&ordered, frame, "{kind}");
        }
    }
}

// ── Curve strategies ──────────────────────────────────────────────────────────

#[cfg(test)]
mod hilbert {
    use super::helpers::{frame_at, ids};
    use crate::{HilbertStrategy, OrderError, OrderingConfig, OrderingStrategy};
    use rug_core::AgentId;
    use rug_curve::{Axis, CurveError, CurveOrder};

    fn order_one() -> OrderingConfig {
        OrderingConfig::with_curve_order(CurveOrder::new(1).unwrap())
    }

    #[test]
    fn two_by_two_grid() {
        let frame = frame_at(&[(0, 0.0, 0.0), (1, 1.0, 0.0), (2, 0.0, 1.0), (3, 1.0, 1.0)]);
        let ordered = HilbertStrategy.order(frame, &order_one()).unwrap();
        assert_eq!(ids(&ordered), [0, 1, 3, 2]);
    }

    #[test]
    fn fractions_are_truncated() {
        let frame = frame_at(&[(0, 0.9, 0.2), (1, 1.7, 0.0), (2, 0.0, 1.99), (3, 1.5, 1.5)]);
        let ordered = HilbertStrategy.order(frame, &order_one()).unwrap();
        assert_eq!(ids(&ordered), [0, 1, 3, 2]);
    }

    #[test]
    fn ties_keep_input_order() {
        let config = OrderingConfig::default();
        let frame = frame_at(&[(5, 0.2, 0.2), (2, 0.7, 0.9), (9, 3.0, 3.0)]);
        assert_eq!(ids(&HilbertStrategy.order(frame, &config).unwrap()), [5, 2, 9]);

        let frame = frame_at(&[(2, 0.7, 0.9), (5, 0.2, 0.2), (9, 3.0, 3.0)]);
        assert_eq!(ids(&HilbertStrategy.order(frame, &config).unwrap()), [2, 5, 9]);
    }

    #[test]
    fn coordinate_off_the_grid_names_the_agent() {
        let frame = frame_at(&[(0, 1.0, 1.0), (4, 1.0, 4.0)]);
        let err = HilbertStrategy.order(frame, &OrderingConfig::default()).unwrap_err();
        match err {
            OrderError::OutOfRange { strategy, agent, source } => {
                assert_eq!(strategy, HilbertStrategy::NAME);
                assert_eq!(agent, AgentId(4));
                assert!(matches!(source, CurveError::OutOfRange { axis: Axis::Y, order: 2, .. }));
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn negative_coordinate_is_rejected() {
        let frame = frame_at(&[(0, -1.5, 0.0)]);
        let err = HilbertStrategy.order(frame, &OrderingConfig::default()).unwrap_err();
        assert!(matches!(err, OrderError::OutOfRange { agent: AgentId(0), .. }));
    }

    #[test]
    fn larger_order_admits_larger_coordinates() {
        let frame = frame_at(&[(0, 100.0, 3.0), (1, 2.0, 90.0)]);
        assert!(HilbertStrategy.order(frame.clone(), &OrderingConfig::default()).is_err());
        let config = OrderingConfig::with_curve_order(CurveOrder::new(7).unwrap());
        assert_eq!(HilbertStrategy.order(frame, &config).unwrap().len(), 2);
    }
}

#[cfg(test)]
mod zorder {
    use super::helpers::{frame_at, ids};
    use crate::{OrderError, OrderingConfig, OrderingStrategy, ZOrderStrategy};
    use rug_core::AgentId;
    use rug_curve::CurveOrder;

    #[test]
    fn x_is_the_low_bit() {
        let config = OrderingConfig::with_curve_order(CurveOrder::new(1).unwrap());
        let frame = frame_at(&[(3, 1.0, 1.0), (2, 0.0, 1.0), (1, 1.0, 0.0), (0, 0.0, 0.0)]);
        assert_eq!(ids(&ZOrderStrategy.order(frame, &config).unwrap()), [0, 1, 2, 3]);
    }

    #[test]
    fn four_by_four_grid() {
        // Morton codes: (0,1)=2, (3,0)=5, (2,2)=12, (3,3)=15.
        let frame = frame_at(&[(0, 3.0, 3.0), (1, 2.0, 2.0), (2, 3.0, 0.0), (3, 0.0, 1.0)]);
        let ordered = ZOrderStrategy.order(frame, &OrderingConfig::default()).unwrap();
        assert_eq!(ids(&ordered), [3, 2, 1, 0]);
    }

    #[test]
    fn range_checked_like_hilbert() {
        let frame = frame_at(&[(8, 4.0, 0.0)]);
        let err = ZOrderStrategy.order(frame, &OrderingConfig::default()).unwrap_err();
        assert!(matches!(err, OrderError::OutOfRange { agent: AgentId(8), .. }));
    }

    #[test]
    fn nan_is_rejected() {
        let frame = frame_at(&[(1, 0.0, 0.0), (2, f64::NAN, 1.0)]);
        let err = ZOrderStrategy.order(frame, &OrderingConfig::default()).unwrap_err();
        assert!(matches!(err, OrderError::OutOfRange { agent: AgentId(2), .. }));
    }
}

// ── Tree strategies ───────────────────────────────────────────────────────────

#[cfg(test)]
mod quadtree {
    use super::helpers::{frame_at, ids};
    use crate::{OrderError, OrderingConfig, OrderingStrategy, QuadTreeStrategy};
    use rug_core::AgentId;

    #[test]
    fn documented_traversal_order() {
        // Root A(5,5); B NW, C NE, D SW, E SE of A; F NW and G SE of B;
        // H SW of C.  Agent id = 10 × slot.
        let frame = frame_at(&[
            (0, 5.2, 5.9),
            (10, 2.5, 8.1),
            (20, 8.0, 8.0),
            (30, 2.9, 2.0),
            (40, 8.4, 2.4),
            (50, 1.0, 9.5),
            (60, 3.3, 6.6),
            (70, 6.0, 7.0),
        ]);
        let ordered = QuadTreeStrategy.order(frame, &OrderingConfig::default()).unwrap();
        assert_eq!(ids(&ordered), [50, 10, 60, 20, 70, 0, 30, 40]);
    }

    #[test]
    fn insertion_order_shapes_the_tree() {
        let config = OrderingConfig::default();
        let a = frame_at(&[(0, 0.0, 0.0), (1, 2.0, 1.0), (2, 1.0, 2.0)]);
        let b = frame_at(&[(2, 1.0, 2.0), (0, 0.0, 0.0), (1, 2.0, 1.0)]);
        assert_eq!(ids(&QuadTreeStrategy.order(a, &config).unwrap()), [2, 1, 0]);
        assert_eq!(ids(&QuadTreeStrategy.order(b, &config).unwrap()), [2, 0, 1]);
    }

    #[test]
    fn same_unit_cell_goes_north_east() {
        // Both truncate to (2, 2), so the second agent lands NE of the first
        // and is emitted before it.
        let frame = frame_at(&[(0, 2.9, 2.9), (1, 2.1, 2.1)]);
        let ordered = QuadTreeStrategy.order(frame, &OrderingConfig::default()).unwrap();
        assert_eq!(ids(&ordered), [1, 0]);
    }

    #[test]
    fn non_finite_position_names_the_agent() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let frame = frame_at(&[(0, 1.0, 1.0), (3, bad, 2.0)]);
            let err = QuadTreeStrategy.order(frame, &OrderingConfig::default()).unwrap_err();
            assert!(matches!(
                err,
                OrderError::NonFinitePosition { strategy: "Point QuadTree", agent: AgentId(3), .. }
            ));
        }
    }

    #[test]
    fn ignores_curve_order() {
        // Quadtrees have no grid, so large and negative coordinates are fine.
        let frame = frame_at(&[(0, -50.0, 1e6), (1, 3.0, -2.0)]);
        let ordered = QuadTreeStrategy.order(frame, &OrderingConfig::default()).unwrap();
        assert_eq!(ordered.len(), 2);
    }
}

#[cfg(test)]
mod rtree {
    use super::helpers::{frame_at, ids};
    use crate::{OrderError, OrderingConfig, OrderingStrategy, RTreeStrategy};
    use rug_core::{AgentId, AgentRecord, Frame, Position};

    #[test]
    fn small_frame_sorts_by_position() {
        let frame = frame_at(&[(0, 3.0, 1.0), (1, 1.0, 5.0), (2, 1.0, 2.0), (3, 2.0, 0.0), (4, 0.5, 9.0)]);
        let ordered = RTreeStrategy.order(frame, &OrderingConfig::default()).unwrap();
        assert_eq!(ids(&ordered), [4, 2, 1, 3, 0]);
    }

    #[test]
    fn non_finite_position_names_the_agent() {
        let mut frame = Frame::new();
        frame.push(AgentRecord::new(AgentId(1), Position::new(0.0, 0.0)));
        frame.push(AgentRecord::new(AgentId(6), Position::new(f64::INFINITY, 0.0)));
        let err = RTreeStrategy.order(frame, &OrderingConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            OrderError::NonFinitePosition { strategy: "R-Tree", agent: AgentId(6), .. }
        ));
    }
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatcher {
    use super::helpers::{frame_at, random_dataset, sorted_ids, Recorder};
    use crate::{
        CancelToken, Dispatcher, HilbertStrategy, NoopObserver, OrderError, OrderResult,
        OrderingConfig, OrderingStrategy, RTreeStrategy, StrategyKind,
    };
    use rug_core::{AgentId, Dataset, Frame, FrameIndex};
    use rug_curve::CurveOrder;

    fn fitted(dataset: &Dataset) -> OrderingConfig {
        OrderingConfig::fitted(dataset).unwrap()
    }

    #[test]
    fn frames_are_permuted_one_by_one() {
        let dataset = random_dataset(12, 80, 500.0, 21);
        for kind in StrategyKind::ALL {
            let out = Dispatcher::new(kind, fitted(&dataset))
                .run(dataset.clone(), &mut NoopObserver)
                .unwrap();
            assert_eq!(out.name(), "random");
            assert_eq!(out.frame_count(), dataset.frame_count());
            for (before, after) in dataset.frames().iter().zip(out.frames()) {
                assert_eq!(sorted_ids(before), sorted_ids(after), "{kind}");
            }
        }
    }

    #[test]
    fn observer_sees_every_frame_in_order() {
        let dataset = random_dataset(5, 10, 4.0, 2);
        let mut rec = Recorder::default();
        Dispatcher::new(HilbertStrategy, OrderingConfig::default())
            .run(dataset, &mut rec)
            .unwrap();
        assert_eq!(rec.started, [("random".to_owned(), HilbertStrategy::NAME, 5)]);
        let expected: Vec<_> = (0..5).map(|i| (FrameIndex(i), 10)).collect();
        assert_eq!(rec.ordered, expected);
        assert!(rec.empty.is_empty());
        assert_eq!(rec.ended, 1);
    }

    #[test]
    fn empty_frames_are_reported_not_failed() {
        let dataset = Dataset::new("blank", vec![Frame::new(), Frame::new(), Frame::new()]).unwrap();
        for kind in StrategyKind::ALL {
            let mut rec = Recorder::default();
            let out = Dispatcher::new(kind, OrderingConfig::default()).run(dataset.clone(), &mut rec).unwrap();
            assert_eq!(out.frame_count(), 3);
            assert!(out.frames().iter().all(Frame::is_empty));
            assert_eq!(rec.empty, [FrameIndex(0), FrameIndex(1), FrameIndex(2)]);
            assert!(rec.ordered.is_empty());
        }
    }

    #[test]
    fn empty_dataset() {
        let dataset = Dataset::new("none", Vec::new()).unwrap();
        let out = Dispatcher::new(RTreeStrategy, OrderingConfig::default())
            .run(dataset, &mut NoopObserver)
            .unwrap();
        assert_eq!(out.frame_count(), 0);
    }

    #[test]
    fn failure_carries_the_frame_index() {
        let frames = vec![
            frame_at(&[(0, 1.0, 1.0), (1, 2.0, 2.0)]),
            frame_at(&[(0, 1.0, 1.0), (1, 2.0, 9.0)]),
            frame_at(&[(0, 1.0, 1.0), (1, 2.0, 2.0)]),
        ];
        let dataset = Dataset::new("walk", frames).unwrap();
        let mut rec = Recorder::default();
        let err = Dispatcher::new(HilbertStrategy, OrderingConfig::default())
            .run(dataset, &mut rec)
            .unwrap_err();

        assert_eq!(err.frame(), Some(FrameIndex(1)));
        assert!(matches!(err.root_cause(), OrderError::OutOfRange { agent: AgentId(1), .. }));
        assert_eq!(rec.ordered, [(FrameIndex(0), 2)]);
        assert_eq!(rec.ended, 0);
    }

    #[test]
    fn lowest_failing_frame_is_reported() {
        let frames = vec![
            frame_at(&[(0, 1.0, 1.0)]),
            frame_at(&[(0, 7.0, 1.0)]),
            frame_at(&[(0, 8.0, 1.0)]),
        ];
        let dataset = Dataset::new("walk", frames).unwrap();
        let err = Dispatcher::new(HilbertStrategy, OrderingConfig::default())
            .run(dataset, &mut NoopObserver)
            .unwrap_err();
        assert_eq!(err.frame(), Some(FrameIndex(1)));
    }

    #[test]
    fn boxed_strategies_dispatch() {
        let dataset = random_dataset(3, 40, 16.0, 5);
        let config = OrderingConfig::with_curve_order(CurveOrder::new(4).unwrap());
        let boxed: Box<dyn OrderingStrategy> = Box::new(RTreeStrategy);
        let a = Dispatcher::new(boxed, config.clone()).run(dataset.clone(), &mut NoopObserver).unwrap();
        let b = Dispatcher::new(RTreeStrategy, config).run(dataset, &mut NoopObserver).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn cancelled_before_start() {
        let token = CancelToken::new();
        token.cancel();
        let err = Dispatcher::new(HilbertStrategy, OrderingConfig::default())
            .cancel_token(token.clone())
            .run(random_dataset(4, 3, 4.0, 1), &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(err, OrderError::Cancelled(FrameIndex(0))));
        assert!(token.is_cancelled());
    }

    /// Drops the last slot.
    struct Truncating;

    impl OrderingStrategy for Truncating {
        fn name(&self) -> &'static str {
            "truncating"
        }

        fn slot_order(&self, frame: &Frame, _config: &OrderingConfig) -> OrderResult<Vec<usize>> {
            Ok((0..frame.len().saturating_sub(1)).collect())
        }
    }

    /// Replaces the last record with a copy of the first.
    struct Duplicating;

    impl OrderingStrategy for Duplicating {
        fn name(&self) -> &'static str {
            "duplicating"
        }

        fn slot_order(&self, frame: &Frame, _config: &OrderingConfig) -> OrderResult<Vec<usize>> {
            Ok((0..frame.len()).collect())
        }

        fn order(&self, frame: Frame, _config: &OrderingConfig) -> OrderResult<Frame> {
            let mut records = frame.records().to_vec();
            if let Some(first) = records.first().cloned() {
                if let Some(last) = records.last_mut() {
                    *last = first;
                }
            }
            Ok(records.into_iter().collect())
        }
    }

    #[test]
    fn broken_strategies_violate_shape() {
        let dataset = random_dataset(2, 4, 4.0, 9);

        let err = Dispatcher::new(Truncating, OrderingConfig::default())
            .run(dataset.clone(), &mut NoopObserver)
            .unwrap_err();
        assert_eq!(err.frame(), Some(FrameIndex(0)));
        assert!(matches!(err.root_cause(), OrderError::ShapeInvariant { strategy: "truncating", .. }));

        let err = Dispatcher::new(Duplicating, OrderingConfig::default())
            .run(dataset, &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(err.root_cause(), OrderError::ShapeInvariant { strategy: "duplicating", .. }));
    }

    #[test]
    fn order_frame_checks_one_frame() {
        let dispatcher = Dispatcher::new(HilbertStrategy, OrderingConfig::default());
        let frame = frame_at(&[(0, 3.0, 3.0), (1, 0.0, 0.0)]);
        let out = dispatcher.order_frame(FrameIndex(0), frame).unwrap();
        assert_eq!(out.ids().map(|id| id.0).collect::<Vec<_>>(), [1, 0]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn dedicated_pool_matches_global_pool() {
        let dataset = random_dataset(16, 50, 64.0, 13);
        let mut config = OrderingConfig::with_curve_order(CurveOrder::new(6).unwrap());
        let global = Dispatcher::new(StrategyKind::QuadTree, config.clone())
            .run(dataset.clone(), &mut NoopObserver)
            .unwrap();
        config.num_threads = Some(3);
        let pooled = Dispatcher::new(StrategyKind::QuadTree, config)
            .run(dataset, &mut NoopObserver)
            .unwrap();
        assert_eq!(global, pooled);
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use super::helpers::frame_at;
    use crate::{OrderError, OrderingConfig};
    use rug_core::{Dataset, Frame};
    use rug_curve::{CurveError, CurveOrder};

    #[test]
    fn defaults() {
        let config = OrderingConfig::default();
        assert_eq!(config.curve_order, CurveOrder::DEFAULT);
        assert_eq!(config.curve_order.get(), 2);
        assert_eq!(config.num_threads, None);
    }

    #[test]
    fn fitted_covers_the_largest_coordinate() {
        let dataset = Dataset::new(
            "d",
            vec![frame_at(&[(0, 3.0, 1000.5)]), frame_at(&[(0, 12.0, 40.0)])],
        )
        .unwrap();
        assert_eq!(OrderingConfig::fitted(&dataset).unwrap().curve_order.get(), 10);
    }

    #[test]
    fn fitted_empty_dataset_uses_default() {
        let dataset = Dataset::new("d", vec![Frame::new()]).unwrap();
        assert_eq!(OrderingConfig::fitted(&dataset).unwrap(), OrderingConfig::default());
    }

    #[test]
    fn fitted_rejects_negative_coordinates() {
        let dataset = Dataset::new("d", vec![frame_at(&[(0, 3.0, -3.0)])]).unwrap();
        let err = OrderingConfig::fitted(&dataset).unwrap_err();
        assert!(matches!(err, OrderError::Curve(CurveError::Uncoverable(v)) if v == -3.0));
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod session {
    use std::sync::Arc;

    use super::helpers::{frame_at, random_dataset, Recorder};
    use crate::{
        HilbertStrategy, OrderError, OrderingConfig, RugSession, StrategyKind,
    };
    use rug_core::{Dataset, FrameIndex};
    use rug_curve::CurveOrder;

    fn session() -> RugSession {
        let mut session = RugSession::new();
        session.add_dataset(random_dataset(3, 20, 4.0, 17));
        session.add_dataset(Dataset::new("alpha", vec![frame_at(&[(0, 1.0, 1.0)])]).unwrap());
        session
    }

    #[test]
    fn names_are_sorted() {
        let session = session();
        assert_eq!(session.dataset_names().collect::<Vec<_>>(), ["alpha", "random"]);
        assert_eq!(session.dataset("alpha").unwrap().agent_count(), 1);
        assert!(session.dataset("beta").is_none());
    }

    #[test]
    fn orderings_are_cached_per_strategy_and_config() {
        let mut session = session();
        let mut rec = Recorder::default();
        let config = OrderingConfig::default();

        let first = session.order_with("random", HilbertStrategy, &config, &mut rec).unwrap();
        let again = session.order_with("random", StrategyKind::Hilbert, &config, &mut rec).unwrap();
        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(rec.started.len(), 1);

        let finer = OrderingConfig::with_curve_order(CurveOrder::new(3).unwrap());
        let redone = session.order_with("random", HilbertStrategy, &finer, &mut rec).unwrap();
        assert!(!Arc::ptr_eq(&first, &redone));
        assert_eq!(rec.started.len(), 2);

        session.order_with("random", StrategyKind::RTree, &config, &mut rec).unwrap();
        assert_eq!(session.ordered_by("random"), ["Hilbert curve", "R-Tree"]);
        assert!(session.ordered("random", "R-Tree").is_some());
        assert!(session.ordered("alpha", "R-Tree").is_none());
    }

    #[test]
    fn replacing_a_dataset_drops_its_orderings() {
        let mut session = session();
        session
            .order_with("alpha", StrategyKind::ZOrder, &OrderingConfig::default(), &mut Recorder::default())
            .unwrap();
        let old = session
            .add_dataset(Dataset::new("alpha", vec![frame_at(&[(4, 2.0, 2.0)])]).unwrap())
            .unwrap();
        assert_eq!(old.agent_count(), 1);
        assert!(session.ordered_by("alpha").is_empty());
    }

    #[test]
    fn unknown_dataset() {
        let mut session = session();
        let err = session
            .order_with("beta", HilbertStrategy, &OrderingConfig::default(), &mut Recorder::default())
            .unwrap_err();
        assert!(matches!(err, OrderError::UnknownDataset(ref name) if name == "beta"));
    }

    #[test]
    fn inserted_ordering_must_match_shape() {
        let mut session = session();
        let bad = Dataset::new("alpha", vec![frame_at(&[(0, 1.0, 1.0), (1, 2.0, 2.0)])]).unwrap();
        let err = session.insert_ordered("external", bad).unwrap_err();
        assert!(matches!(err, OrderError::ShapeInvariant { strategy: "external", .. }));

        let good = Dataset::new("alpha", vec![frame_at(&[(0, 1.0, 1.0)])]).unwrap();
        session.insert_ordered("external", good).unwrap();
        assert!(session.ordered("alpha", "external").is_some());
    }

    #[test]
    fn inserted_ordering_must_hold_the_same_agents() {
        let mut session = session();
        let pair = || frame_at(&[(0, 1.0, 1.0), (1, 2.0, 2.0)]);
        session.add_dataset(Dataset::new("pair", vec![pair(), pair()]).unwrap());

        let foreign = Dataset::new(
            "pair",
            vec![frame_at(&[(1, 2.0, 2.0), (0, 1.0, 1.0)]), frame_at(&[(7, 1.0, 1.0), (8, 2.0, 2.0)])],
        )
        .unwrap();
        let err = session.insert_ordered("external", foreign).unwrap_err();
        assert_eq!(err.frame(), Some(FrameIndex(1)));
        assert!(matches!(err.root_cause(), OrderError::ShapeInvariant { strategy: "external", .. }));
        assert!(session.ordered("pair", "external").is_none());

        let swapped = Dataset::new(
            "pair",
            vec![frame_at(&[(1, 2.0, 2.0), (0, 1.0, 1.0)]), pair()],
        )
        .unwrap();
        session.insert_ordered("external", swapped).unwrap();
        assert!(session.ordered("pair", "external").is_some());
    }

    #[test]
    fn inserted_ordering_is_never_a_cache_hit() {
        let mut session = session();
        let good = Dataset::new("alpha", vec![frame_at(&[(0, 1.0, 1.0)])]).unwrap();
        session.insert_ordered(HilbertStrategy::NAME, good).unwrap();
        let mut rec = Recorder::default();
        session.order_with("alpha", HilbertStrategy, &OrderingConfig::default(), &mut rec).unwrap();
        assert_eq!(rec.started.len(), 1);
    }
}
