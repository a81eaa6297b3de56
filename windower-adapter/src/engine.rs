use alloc::rc::Rc;
use core::cell::Cell;

use windower::{
    MaterializedSet, Materializer, ReconcilePlan, ViewportGeometry, VisibleRange, WindowError,
    WindowOptions, Windower,
};

use crate::{Coalescer, DataSource, FrameScheduler, FrameToken, HostContainer, RowFactory};

/// Lets collaborators request a pass without calling into the engine.
///
/// The row factory, data source or host container may run while a pass is in progress; a
/// request made then is queued for the next frame, never run inline. Requests made outside a
/// pass are picked up by the next call to [`WindowEngine::on_scroll_or_resize`],
/// [`WindowEngine::on_frame`] or [`WindowEngine::poll_notifier`].
#[derive(Clone, Debug, Default)]
pub struct ScrollNotifier {
    requested: Rc<Cell<bool>>,
}

impl ScrollNotifier {
    pub fn notify(&self) {
        self.requested.set(true);
    }

    pub fn is_requested(&self) -> bool {
        self.requested.get()
    }

    fn take(&self) -> bool {
        self.requested.replace(false)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PassOutcome {
    Applied,
    /// The viewport reported a zero size; nothing was changed.
    GeometryUnavailable,
    /// The engine was destroyed.
    Destroyed,
}

/// What one reconciliation pass did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassReport {
    pub outcome: PassOutcome,
    pub geometry: ViewportGeometry,
    /// The range now materialized (the previous one when the pass was skipped).
    pub range: VisibleRange,
    pub evicted: usize,
    pub added: usize,
}

impl PassReport {
    fn skipped(outcome: PassOutcome, geometry: ViewportGeometry, range: VisibleRange) -> Self {
        Self {
            outcome,
            geometry,
            range,
            evicted: 0,
            added: 0,
        }
    }

    pub fn is_applied(&self) -> bool {
        self.outcome == PassOutcome::Applied
    }
}

/// Drives a [`Windower`] against a host container.
///
/// The engine owns every collaborator and all windowing state; there is one engine per
/// viewport. Adapters drive it by calling:
/// - `mount` once, after the host is laid out
/// - `on_scroll_or_resize` for every scroll or resize notification
/// - `on_frame(token)` for every frame token their scheduler fires
/// - `destroy` when the viewport goes away
pub struct WindowEngine<C, S, D, F>
where
    C: HostContainer,
{
    windower: Windower,
    materialized: MaterializedSet<C::Handle>,
    plan: ReconcilePlan,
    range: VisibleRange,
    coalescer: Coalescer,
    notifier: ScrollNotifier,
    destroyed: bool,

    host: C,
    scheduler: S,
    source: D,
    factory: F,
}

impl<C, S, D, F> WindowEngine<C, S, D, F>
where
    C: HostContainer,
    S: FrameScheduler,
    D: DataSource,
    F: RowFactory<D::Item, Handle = C::Handle>,
{
    /// Creates an engine. Nothing is materialized until [`Self::mount`] or the first frame.
    ///
    /// Returns [`WindowError::InvalidItemHeight`] for a zero item height.
    pub fn new(
        options: WindowOptions,
        host: C,
        scheduler: S,
        source: D,
        factory: F,
    ) -> Result<Self, WindowError> {
        let windower = Windower::new(options)?;
        vdebug!(
            total_items = options.total_items,
            item_height = options.item_height,
            overscan = options.overscan,
            "WindowEngine::new"
        );
        Ok(Self {
            windower,
            materialized: MaterializedSet::new(),
            plan: ReconcilePlan::default(),
            range: VisibleRange::EMPTY,
            coalescer: Coalescer::new(),
            notifier: ScrollNotifier::default(),
            destroyed: false,
            host,
            scheduler,
            source,
            factory,
        })
    }

    pub fn windower(&self) -> &Windower {
        &self.windower
    }

    pub fn materialized(&self) -> &MaterializedSet<C::Handle> {
        &self.materialized
    }

    /// The range of the last applied pass.
    pub fn range(&self) -> VisibleRange {
        self.range
    }

    pub fn host(&self) -> &C {
        &self.host
    }

    /// Mutable access to the host, e.g. to move its scroll position before notifying.
    pub fn host_mut(&mut self) -> &mut C {
        &mut self.host
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    pub fn notifier(&self) -> ScrollNotifier {
        self.notifier.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.coalescer.is_pending()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Publishes the track size to the host and runs the first pass immediately.
    pub fn mount(&mut self) -> Result<PassReport, WindowError> {
        let track = self.windower.total_size();
        vdebug!(track, "WindowEngine::mount");
        self.host.set_track_size(track);
        self.reconcile_now()
    }

    /// Schedules a pass for the next frame, replacing any pass already scheduled.
    pub fn on_scroll_or_resize(&mut self) {
        if self.destroyed {
            vtrace!("on_scroll_or_resize: engine destroyed");
            return;
        }
        self.notifier.take();
        self.coalescer.request(&mut self.scheduler);
    }

    /// Turns a pending [`ScrollNotifier`] request into a scheduled frame.
    ///
    /// Returns `true` if a request was pending.
    pub fn poll_notifier(&mut self) -> bool {
        if self.destroyed || !self.notifier.take() {
            return false;
        }
        self.coalescer.request(&mut self.scheduler);
        true
    }

    /// Handles a fired frame token.
    ///
    /// Runs one pass if `token` is the pending frame; stale or cancelled tokens return
    /// `Ok(None)`.
    pub fn on_frame(&mut self, token: FrameToken) -> Result<Option<PassReport>, WindowError> {
        if !self.coalescer.fire(token) {
            self.poll_notifier();
            return Ok(None);
        }
        self.reconcile_now().map(Some)
    }

    /// Runs one full pass now: geometry → range → evictions → ordered insertions.
    ///
    /// A zero-size viewport skips the pass. Requests made through the [`ScrollNotifier`]
    /// during the pass schedule a new frame once it finishes.
    pub fn reconcile_now(&mut self) -> Result<PassReport, WindowError> {
        let geometry = self.host.geometry();
        if self.destroyed {
            return Ok(PassReport::skipped(PassOutcome::Destroyed, geometry, self.range));
        }
        if !geometry.is_available() {
            vwarn!(
                scroll_offset = geometry.scroll_offset,
                "reconcile: viewport unavailable, skipping pass"
            );
            return Ok(PassReport::skipped(
                PassOutcome::GeometryUnavailable,
                geometry,
                self.range,
            ));
        }

        self.windower.set_geometry(geometry);
        let range = self.windower.range();
        let result = self.apply_range(range);
        self.poll_notifier();
        let (evicted, added) = result?;

        vtrace!(
            scroll_offset = geometry.scroll_offset,
            viewport_size = geometry.viewport_size,
            start = range.start_index,
            end = range.end_index,
            evicted,
            added,
            "reconcile pass"
        );
        Ok(PassReport {
            outcome: PassOutcome::Applied,
            geometry,
            range,
            evicted,
            added,
        })
    }

    /// Cancels the pending frame and evicts every materialized element.
    ///
    /// Later notifications and frames are ignored.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.coalescer.cancel(&mut self.scheduler);
        self.notifier.take();
        // Evict-only plans never reach the row factory and cannot fail.
        let _ = self.apply_range(VisibleRange::EMPTY);
        self.destroyed = true;
        vdebug!("WindowEngine::destroy");
    }

    fn apply_range(&mut self, range: VisibleRange) -> Result<(usize, usize), WindowError> {
        self.plan.rebuild(&self.materialized, range);
        self.range = range;

        let mut target = PassTarget {
            host: &mut self.host,
            source: &self.source,
            factory: &mut self.factory,
            total_items: self.windower.total_items(),
        };
        self.materialized.apply(&self.plan, &mut target)?;
        Ok((self.plan.to_evict.len(), self.plan.to_add.len()))
    }
}

impl<C, S, D, F> core::fmt::Debug for WindowEngine<C, S, D, F>
where
    C: HostContainer,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowEngine")
            .field("windower", &self.windower)
            .field("range", &self.range)
            .field("materialized", &self.materialized.len())
            .field("coalescer", &self.coalescer)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

struct PassTarget<'a, C, D, F> {
    host: &'a mut C,
    source: &'a D,
    factory: &'a mut F,
    total_items: usize,
}

impl<C, D, F> Materializer<C::Handle> for PassTarget<'_, C, D, F>
where
    C: HostContainer,
    D: DataSource,
    F: RowFactory<D::Item, Handle = C::Handle>,
{
    type Error = WindowError;

    fn evict(&mut self, _index: usize, handle: C::Handle) {
        self.host.remove(&handle);
    }

    fn create(
        &mut self,
        index: usize,
        anchor: Option<&C::Handle>,
    ) -> Result<C::Handle, WindowError> {
        let total_items = self.total_items;
        let item = if index < total_items {
            self.source.get_item(index)
        } else {
            None
        };
        let Some(item) = item else {
            vwarn!(index, total_items, "create: index out of range");
            return Err(WindowError::IndexOutOfRange { index, total_items });
        };

        let handle = self.factory.create_element(index, &item);
        self.host.insert_before(&handle, anchor);
        Ok(handle)
    }
}
