use crate::*;

use alloc::string::String;
use alloc::vec::Vec;
use windower::{VisibleRange, WindowError, WindowOptions};

#[derive(Clone, Debug, PartialEq, Eq)]
struct Row {
    index: usize,
    label: String,
    top: u64,
}

/// A host whose children are kept in document order.
#[derive(Debug, Default)]
struct VecHost {
    scroll_offset: u64,
    viewport_size: u32,
    children: Vec<Row>,
    track: u64,
    inserts: usize,
    removes: usize,
}

impl VecHost {
    fn new(viewport_size: u32) -> Self {
        Self {
            viewport_size,
            ..Self::default()
        }
    }

    fn indexes(&self) -> Vec<usize> {
        self.children.iter().map(|r| r.index).collect()
    }
}

impl GeometryProvider for VecHost {
    fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    fn viewport_size(&self) -> u32 {
        self.viewport_size
    }
}

impl HostContainer for VecHost {
    type Handle = Row;

    fn insert_before(&mut self, element: &Row, anchor: Option<&Row>) {
        self.inserts += 1;
        let pos = match anchor {
            Some(a) => self
                .children
                .iter()
                .position(|c| c.index == a.index)
                .expect("anchor is a child"),
            None => self.children.len(),
        };
        self.children.insert(pos, element.clone());
    }

    fn remove(&mut self, element: &Row) {
        self.removes += 1;
        self.children.retain(|c| c.index != element.index);
    }

    fn set_track_size(&mut self, size: u64) {
        self.track = size;
    }
}

fn make_row(index: usize, label: &String) -> Row {
    Row {
        index,
        label: label.clone(),
        top: index as u64 * 50,
    }
}

type RowFn = fn(usize, &String) -> Row;
type TestEngine = WindowEngine<VecHost, FrameQueue, Vec<String>, RowFn>;

fn labels(count: usize) -> Vec<String> {
    (0..count).map(|i| std::format!("Virtual item {}", i + 1)).collect()
}

fn engine(total_items: usize, viewport_size: u32) -> TestEngine {
    WindowEngine::new(
        WindowOptions::new(total_items, 50).with_overscan(2),
        VecHost::new(viewport_size),
        FrameQueue::new(),
        labels(total_items),
        make_row as RowFn,
    )
    .unwrap()
}

/// Fires every frame due now and returns the passes that ran.
fn run_frame<C, D, F>(e: &mut WindowEngine<C, FrameQueue, D, F>) -> Vec<PassReport>
where
    C: HostContainer,
    D: DataSource,
    F: RowFactory<D::Item, Handle = C::Handle>,
{
    let tokens = e.scheduler_mut().take_frame();
    tokens
        .into_iter()
        .filter_map(|t| e.on_frame(t).unwrap())
        .collect()
}

fn scroll_to(e: &mut TestEngine, offset: u64) {
    e.host_mut().scroll_offset = offset;
    e.on_scroll_or_resize();
}

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        start + (self.next_u64() % (end_exclusive - start))
    }
}

#[test]
fn mount_materializes_the_initial_window_in_order() {
    let mut e = engine(10_000, 500);
    let report = e.mount().unwrap();

    assert!(report.is_applied());
    assert_eq!(report.range, VisibleRange::inclusive(0, 14));
    assert_eq!(report.added, 15);
    assert_eq!(e.host().track, 500_000);
    assert_eq!(e.host().indexes(), (0..=14).collect::<Vec<_>>());
    assert_eq!(
        e.host().children[3],
        Row {
            index: 3,
            label: "Virtual item 4".into(),
            top: 150,
        }
    );
}

#[test]
fn scrolled_frame_evicts_rows_above_and_adds_rows_below() {
    let mut e = engine(10_000, 500);
    e.mount().unwrap();

    scroll_to(&mut e, 1000);
    let reports = run_frame(&mut e);

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].range, VisibleRange::inclusive(18, 32));
    assert_eq!(reports[0].evicted, 15);
    assert_eq!(reports[0].added, 15);
    assert_eq!(e.host().indexes(), (18..=32).collect::<Vec<_>>());
    assert!(e.materialized().indexes().eq(18..=32));
}

#[test]
fn burst_of_scroll_events_runs_a_single_pass_with_the_latest_geometry() {
    let mut e = engine(10_000, 500);
    e.mount().unwrap();

    for step in 1..=50u64 {
        scroll_to(&mut e, step * 20);
    }
    assert!(e.is_pending());
    assert_eq!(e.scheduler_mut().len(), 1);

    let reports = run_frame(&mut e);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].geometry.scroll_offset, 1000);
    assert_eq!(reports[0].range, VisibleRange::inclusive(18, 32));
    assert!(!e.is_pending());

    // Nothing left for later frames.
    assert!(run_frame(&mut e).is_empty());
}

#[test]
fn geometry_is_read_when_the_frame_fires() {
    let mut e = engine(10_000, 500);
    e.mount().unwrap();

    scroll_to(&mut e, 200);
    // Moved again without a notification before the frame fired.
    e.host_mut().scroll_offset = 1000;

    let reports = run_frame(&mut e);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].range, VisibleRange::inclusive(18, 32));
}

#[test]
fn empty_list_materializes_nothing() {
    let mut e = engine(0, 500);
    let report = e.mount().unwrap();

    assert!(report.is_applied());
    assert!(report.range.is_empty());
    assert_eq!(report.added, 0);
    assert!(e.host().children.is_empty());
    assert_eq!(e.host().track, 0);
}

#[test]
fn repeated_pass_with_unchanged_geometry_is_a_noop() {
    let mut e = engine(10_000, 500);
    e.mount().unwrap();
    let inserts = e.host().inserts;

    e.on_scroll_or_resize();
    let reports = run_frame(&mut e);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].evicted, 0);
    assert_eq!(reports[0].added, 0);
    assert_eq!(e.host().inserts, inserts);
    assert_eq!(e.host().removes, 0);
}

#[test]
fn random_scrolling_keeps_children_ordered_and_covering_the_range() {
    for seed in [3u64, 17, 99, 4242] {
        let mut rng = Lcg(seed);
        let mut e = engine(5_000, 480);
        e.mount().unwrap();

        for _ in 0..60 {
            let offset = rng.gen_range_u64(0, 5_000 * 50 + 1_000);
            scroll_to(&mut e, offset);
            if rng.next_u64() % 3 == 0 {
                e.host_mut().viewport_size = rng.gen_range_u64(1, 2_000) as u32;
                e.on_scroll_or_resize();
            }
            let reports = run_frame(&mut e);
            assert_eq!(reports.len(), 1);

            let children = e.host().indexes();
            assert!(
                children.windows(2).all(|w| w[0] < w[1]),
                "children out of order: {children:?}"
            );
            let expected: Vec<usize> = e.range().indexes().collect();
            assert_eq!(children, expected);
            assert!(e.materialized().indexes().eq(expected.iter().copied()));
        }
    }
}

#[test]
fn unavailable_viewport_skips_until_geometry_is_valid() {
    let mut e = engine(10_000, 0);
    let report = e.mount().unwrap();

    assert_eq!(report.outcome, PassOutcome::GeometryUnavailable);
    assert!(e.host().children.is_empty());

    e.host_mut().viewport_size = 500;
    e.on_scroll_or_resize();
    let reports = run_frame(&mut e);
    assert_eq!(reports.len(), 1);
    assert!(reports[0].is_applied());
    assert_eq!(e.host().indexes(), (0..=14).collect::<Vec<_>>());

    // Detaching keeps the current rows until the viewport comes back.
    e.host_mut().viewport_size = 0;
    e.on_scroll_or_resize();
    let reports = run_frame(&mut e);
    assert_eq!(reports[0].outcome, PassOutcome::GeometryUnavailable);
    assert_eq!(reports[0].range, VisibleRange::inclusive(0, 14));
    assert_eq!(e.host().children.len(), 15);
}

#[test]
fn cancelled_frame_tokens_are_ignored() {
    let mut e = engine(10_000, 500);
    e.mount().unwrap();

    e.on_scroll_or_resize();
    let first = *e.scheduler_mut().take_frame().first().unwrap();
    e.on_scroll_or_resize();

    // The first token was superseded before it fired.
    scroll_to(&mut e, 1000);
    assert_eq!(e.on_frame(first).unwrap(), None);
    assert_eq!(e.host().indexes(), (0..=14).collect::<Vec<_>>());

    let reports = run_frame(&mut e);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].range, VisibleRange::inclusive(18, 32));
}

struct NotifyingFactory {
    notifier: Option<ScrollNotifier>,
    trigger: usize,
    created: usize,
}

impl RowFactory<String> for NotifyingFactory {
    type Handle = Row;

    fn create_element(&mut self, index: usize, item: &String) -> Row {
        self.created += 1;
        if index == self.trigger {
            if let Some(n) = &self.notifier {
                n.notify();
            }
        }
        make_row(index, item)
    }
}

#[test]
fn notifications_during_a_pass_are_queued_for_the_next_frame() {
    let mut e = WindowEngine::new(
        WindowOptions::new(1_000, 50),
        VecHost::new(500),
        FrameQueue::new(),
        labels(1_000),
        NotifyingFactory {
            notifier: None,
            trigger: 5,
            created: 0,
        },
    )
    .unwrap();
    let notifier = e.notifier();
    e.factory_mut().notifier = Some(notifier);

    let report = e.mount().unwrap();
    // The request did not run another pass inline.
    assert_eq!(e.factory_mut().created, report.added);
    assert!(e.is_pending());
    assert_eq!(e.scheduler_mut().len(), 1);

    let reports = run_frame(&mut e);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].added, 0);
    assert!(!e.is_pending());
}

#[test]
fn notifier_requests_outside_a_pass_are_polled() {
    let mut e = engine(100, 500);
    e.mount().unwrap();

    let n = e.notifier();
    assert!(!e.poll_notifier());
    n.notify();
    assert!(n.is_requested());
    assert!(e.poll_notifier());
    assert!(!n.is_requested());
    assert_eq!(run_frame(&mut e).len(), 1);
}

#[test]
fn missing_item_surfaces_index_out_of_range() {
    let mut e = WindowEngine::new(
        WindowOptions::new(20, 50),
        VecHost::new(500),
        FrameQueue::new(),
        labels(10),
        make_row as RowFn,
    )
    .unwrap();

    let err = e.mount().unwrap_err();
    assert_eq!(
        err,
        WindowError::IndexOutOfRange {
            index: 10,
            total_items: 20
        }
    );
    // Rows created before the failure stay consistent with the host.
    assert_eq!(e.host().indexes(), (0..10).collect::<Vec<_>>());
    assert!(e.materialized().indexes().eq(0..10));
}

#[test]
fn destroy_cancels_the_pending_frame_and_evicts_everything() {
    let mut e = engine(10_000, 500);
    e.mount().unwrap();
    scroll_to(&mut e, 1000);
    assert_eq!(e.scheduler_mut().len(), 1);

    e.destroy();
    assert!(e.is_destroyed());
    assert!(e.scheduler_mut().is_empty());
    assert!(e.host().children.is_empty());
    assert!(e.materialized().is_empty());
    assert_eq!(e.host().removes, 15);

    e.on_scroll_or_resize();
    assert!(e.scheduler_mut().is_empty());
    assert_eq!(e.reconcile_now().unwrap().outcome, PassOutcome::Destroyed);
    assert!(e.host().children.is_empty());
}

#[test]
fn zero_item_height_is_a_configuration_error() {
    let err = WindowEngine::new(
        WindowOptions::new(10, 0),
        VecHost::new(500),
        FrameQueue::new(),
        labels(10),
        make_row as RowFn,
    )
    .unwrap_err();
    assert_eq!(err, WindowError::InvalidItemHeight);
}

#[test]
fn closure_factories_and_fn_sources_work() {
    let mut e = WindowEngine::new(
        WindowOptions::new(100, 10).with_overscan(0),
        VecHost::new(30),
        FrameQueue::new(),
        from_fn(|i| (i < 100).then(|| std::format!("row {i}"))),
        |index: usize, label: &String| Row {
            index,
            label: label.clone(),
            top: index as u64 * 10,
        },
    )
    .unwrap();

    e.mount().unwrap();
    assert_eq!(e.host().indexes(), vec![0, 1, 2, 3]);
    assert_eq!(e.host().children[2].label, "row 2");
}

#[test]
fn coalescer_replaces_pending_frames() {
    let mut q = FrameQueue::new();
    let mut c = Coalescer::new();
    assert_eq!(c.state(), CoalescerState::Idle);

    let t1 = c.request(&mut q);
    let t2 = c.request(&mut q);
    assert_ne!(t1, t2);
    assert!(!q.is_scheduled(t1));
    assert!(q.is_scheduled(t2));
    assert_eq!(c.state(), CoalescerState::Pending(t2));

    assert!(!c.fire(t1));
    assert!(c.fire(t2));
    assert_eq!(c.state(), CoalescerState::Idle);
    // A token fires at most once.
    assert!(!c.fire(t2));

    let t3 = c.request(&mut q);
    c.cancel(&mut q);
    assert!(!q.is_scheduled(t3));
    assert!(!c.is_pending());
}
