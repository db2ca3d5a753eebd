// Copyright 2025 the Recycle List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The list controller that ties windowing, recycling, and scheduling together.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Vec2};

use crate::{
    ApplyStats, ConfigError, ContentExtent, ItemRenderer, Layout, ListConfig, PointerId,
    RefreshFlags, RefreshScheduler, SchedulerState, Slot, SlotHost, SlotPool, TapResult,
    TapState, VisibleWindow, assign_slots, compute_window, content_extent,
};

type TapHandler<T> = Box<dyn FnMut(usize, &T)>;

/// A windowed list over records of type `T`, rendered through host `S`.
///
/// The controller owns the host, the slot pool, and the dataset. The host
/// drives it with three calls:
///
/// - [`load_dataset`](Self::load_dataset) whenever the data is replaced,
/// - [`notify_offset_changed`](Self::notify_offset_changed) from its scroll
///   callback, which is O(1),
/// - [`tick`](Self::tick) from its event loop, which does the actual work at
///   most once per refresh interval.
///
/// ```
/// use kurbo::{Point, Size, Vec2};
/// use recycle_list::{
///     Geometry, ItemRenderer, LayoutMode, ListConfig, RecycleList, SlotHost,
/// };
///
/// #[derive(Default)]
/// struct Label(String);
///
/// impl ItemRenderer<u32> for Label {
///     fn bind(&mut self, record: &u32) {
///         self.0 = format!("row {record}");
///     }
/// }
///
/// struct Host;
///
/// impl SlotHost for Host {
///     type Handle = Label;
///     fn create(&mut self) -> Label {
///         Label::default()
///     }
///     fn set_position(&mut self, _: &mut Label, _: Point) {}
///     fn set_attached(&mut self, _: &mut Label, _: bool) {}
/// }
///
/// let config = ListConfig::new(
///     LayoutMode::Vertical,
///     Geometry::new(Size::new(320.0, 40.0)),
///     Size::new(320.0, 200.0),
/// );
/// let mut list = RecycleList::new(config, Host).unwrap();
///
/// list.load_dataset((0..10_000).collect::<Vec<u32>>(), 0);
/// list.notify_offset_changed(Vec2::new(0.0, 4_000.0));
/// list.tick(100);
///
/// assert_eq!(list.current_window().start, 100);
/// assert_eq!(list.live_handles(), 6);
/// ```
pub struct RecycleList<T, S: SlotHost> {
    layout: Layout,
    host: S,
    pool: SlotPool<S::Handle>,
    dataset: Vec<T>,
    offset: Vec2,
    window: VisibleWindow,
    extent: ContentExtent,
    scheduler: RefreshScheduler,
    taps: TapState,
    tap_handler: Option<TapHandler<T>>,
}

impl<T, S: SlotHost> fmt::Debug for RecycleList<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecycleList")
            .field("layout", &self.layout)
            .field("dataset_len", &self.dataset.len())
            .field("active_slots", &self.pool.active_len())
            .field("idle_slots", &self.pool.idle_len())
            .field("offset", &self.offset)
            .field("window", &self.window)
            .field("extent", &self.extent)
            .field("scheduler", &self.scheduler)
            .field("taps", &self.taps)
            .finish_non_exhaustive()
    }
}

impl<T, S> RecycleList<T, S>
where
    S: SlotHost,
    S::Handle: ItemRenderer<T>,
{
    /// Validates `config` and creates an empty, stopped list.
    ///
    /// Configuration problems are reported here, once; nothing after
    /// construction can fail.
    pub fn new(config: ListConfig, host: S) -> Result<Self, ConfigError> {
        let layout = config
            .layout()
            .inspect_err(|err| tracing::warn!(%err, "rejected list configuration"))?;
        Ok(Self {
            layout,
            host,
            pool: SlotPool::new(),
            dataset: Vec::new(),
            offset: Vec2::ZERO,
            window: VisibleWindow::EMPTY,
            extent: ContentExtent::default(),
            scheduler: RefreshScheduler::new(config.refresh_interval_ms),
            taps: TapState::with_thresholds(config.tap_move_threshold, config.tap_time_threshold),
            tap_handler: None,
        })
    }

    /// Replaces the dataset and schedules a full rebind.
    ///
    /// Cancels the pending tick, resizes the active slot set to
    /// `min(capacity, len)`, recomputes the content extent, and restarts the
    /// refresh cadence from `now`. Active presses are dropped because their
    /// slots are about to show different records.
    pub fn load_dataset(&mut self, records: impl Into<Vec<T>>, now: u64) {
        self.scheduler.cancel();
        self.taps.clear();
        self.dataset = records.into();

        let len = self.dataset.len();
        let active = self.layout.capacity().min(len);
        self.pool.ensure(&mut self.host, active);
        self.extent = content_extent(&self.layout, len);

        self.scheduler.force();
        self.scheduler.start(now);
        tracing::debug!(
            len,
            active,
            live = self.pool.live_handles(),
            width = ?self.extent.width,
            height = ?self.extent.height,
            "dataset loaded"
        );
    }

    /// Records the content node's new scroll offset.
    ///
    /// This only marks the list dirty; the window is recomputed on the next tick.
    pub fn notify_offset_changed(&mut self, offset: Vec2) {
        self.offset = offset;
        self.scheduler.mark_dirty();
    }

    /// Advances the refresh clock to `now`, applying pending work if a tick is due.
    ///
    /// Returns the write counts of the refresh, or `None` if nothing ran.
    pub fn tick(&mut self, now: u64) -> Option<ApplyStats> {
        let refresh = self.scheduler.poll(now)?;
        let stats = self.apply(refresh.forced);
        self.scheduler.complete();
        tracing::trace!(
            now,
            forced = refresh.forced,
            start = self.window.start,
            end = self.window.end,
            rebound = stats.rebound,
            "refresh tick"
        );
        Some(stats)
    }

    /// Applies pending work immediately, outside the refresh cadence.
    pub fn refresh_now(&mut self) -> ApplyStats {
        let forced = self.scheduler.flags().contains(RefreshFlags::FORCED);
        let stats = self.apply(forced);
        self.scheduler.complete();
        stats
    }

    fn apply(&mut self, forced: bool) -> ApplyStats {
        self.window = compute_window(&self.layout, self.offset, self.dataset.len());
        assign_slots(
            &self.layout,
            self.window,
            self.pool.active_mut(),
            &self.dataset,
            &mut self.host,
            forced,
        )
    }

    /// Tears the list down: stops ticking, drops the dataset, and destroys all slots.
    ///
    /// The list can be reused by loading a new dataset.
    pub fn dispose(&mut self) {
        self.scheduler.cancel();
        self.scheduler.complete();
        self.taps.clear();
        self.dataset = Vec::new();
        self.pool.release_all(&mut self.host);
        self.window = VisibleWindow::EMPTY;
        self.extent = ContentExtent::default();
        tracing::debug!("list disposed");
    }

    /// Sets the callback invoked with the data index and record of each tap.
    pub fn set_tap_handler(&mut self, handler: impl FnMut(usize, &T) + 'static) {
        self.tap_handler = Some(Box::new(handler));
    }

    /// Removes the tap callback.
    pub fn clear_tap_handler(&mut self) {
        self.tap_handler = None;
    }

    /// Starts tracking a press on the active slot `slot`.
    ///
    /// Returns `false` if the slot does not exist, shows no record, or its
    /// renderer is not clickable.
    pub fn pointer_down(
        &mut self,
        pointer: Option<PointerId>,
        slot: usize,
        position: Point,
        timestamp: u64,
    ) -> bool {
        let Some(pressed) = self.pool.active().get(slot) else {
            return false;
        };
        let Some(index) = pressed.index() else {
            return false;
        };
        if !pressed.handle().is_clickable() {
            return false;
        }
        self.taps.on_down(pointer, slot, index, position, timestamp);
        true
    }

    /// Tracks pointer movement; returns the pressed index once it becomes a drag.
    pub fn pointer_move(&mut self, pointer: Option<PointerId>, position: Point) -> Option<usize> {
        self.taps.on_move(pointer, position)
    }

    /// Resolves a release over `slot` and invokes the tap handler on a tap.
    pub fn pointer_up(
        &mut self,
        pointer: Option<PointerId>,
        slot: usize,
        position: Point,
        timestamp: u64,
    ) -> TapResult {
        let current = self.pool.active().get(slot).and_then(Slot::index);
        let result = self.taps.on_up(pointer, slot, current, position, timestamp);
        if let TapResult::Tap(index) = result
            && let (Some(handler), Some(record)) = (self.tap_handler.as_mut(), self.dataset.get(index))
        {
            handler(index, record);
        }
        result
    }

    /// Cancels the press of `pointer`, for example when the host starts a scroll gesture.
    pub fn pointer_cancel(&mut self, pointer: Option<PointerId>) -> bool {
        self.taps.cancel(pointer)
    }
}

impl<T, S: SlotHost> RecycleList<T, S> {
    /// The validated layout.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Maximum number of simultaneously active slots.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.layout.capacity()
    }

    /// The loaded records.
    #[must_use]
    pub fn dataset(&self) -> &[T] {
        &self.dataset
    }

    /// The last reported scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> Vec2 {
        self.offset
    }

    /// The window applied by the most recent refresh.
    #[must_use]
    pub const fn current_window(&self) -> VisibleWindow {
        self.window
    }

    /// The content extent computed by the most recent load.
    #[must_use]
    pub const fn content_extent(&self) -> ContentExtent {
        self.extent
    }

    /// The active slots, in physical order.
    #[must_use]
    pub fn slots(&self) -> &[Slot<S::Handle>] {
        self.pool.active()
    }

    /// The physical slot showing data `index`, if it is inside the current window.
    #[must_use]
    pub fn slot_for_index(&self, index: usize) -> Option<usize> {
        let active = self.pool.active_len();
        if active == 0 || !self.window.contains(index) {
            return None;
        }
        Some(index % active)
    }

    /// Number of host handles alive (active plus idle).
    #[must_use]
    pub fn live_handles(&self) -> usize {
        self.pool.live_handles()
    }

    /// Number of handles ever created through the host.
    #[must_use]
    pub const fn created_handles(&self) -> usize {
        self.pool.created()
    }

    /// Current refresh scheduler state.
    #[must_use]
    pub fn scheduler_state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    /// The host.
    #[must_use]
    pub const fn host(&self) -> &S {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut S {
        &mut self.host
    }
}
