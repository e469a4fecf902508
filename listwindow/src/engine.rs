use alloc::vec::Vec;

use crate::error::EngineError;
use crate::heights::HeightIndex;
use crate::key::slot_key_for;
use crate::options::ListWindowOptions;
use crate::scheduler::UpdateScheduler;
use crate::types::{EngineEvent, RenderSlot, UpdateReason, Window, WindowUpdate};
use crate::window;

/// The virtual-scrolling engine: one instance per scrollable list.
///
/// Owns the height index exclusively; the host talks to it only through the
/// entry points below and receives read-only snapshots on the update
/// channel. Everything runs on the host's event thread, and the only
/// time-dependent behavior is the scroll debounce, driven by the host clock
/// through [`ListWindow::tick`].
///
/// Event channels:
/// - `reset`/`append` recompute and emit immediately (structural changes
///   must land before the next paint) and supersede any pending debounce.
/// - `on_scroll` only stores the offset and arms the debounce; the window
///   is recomputed by the first `tick` after the burst goes quiet.
/// - `on_height_measured` corrects the index in place and arms the same
///   debounce, unless the delta is within the jitter threshold.
pub struct ListWindow<P> {
    heights: HeightIndex<P>,
    scheduler: UpdateScheduler,
    options: ListWindowOptions<P>,
    scroll_offset: u64,
    window: Window,
    detached: bool,
}

impl<P> ListWindow<P> {
    pub fn new(options: ListWindowOptions<P>) -> Self {
        if options.estimated_height == 0 {
            lwwarn!("estimated height configured as 0; estimates are clamped");
        }
        Self {
            heights: HeightIndex::new(),
            scheduler: UpdateScheduler::new(),
            options,
            scroll_offset: 0,
            window: Window::empty(),
            detached: false,
        }
    }

    /// Replaces the whole data set. Every item is re-estimated; emits
    /// immediately.
    pub fn reset<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = P>,
    {
        if self.detached {
            return;
        }
        let estimate = self.options.estimate.clone();
        let base = self.options.estimated_height;
        self.heights.reset(items, move |payload| match &estimate {
            Some(f) => f(payload),
            None => base,
        });
        self.scroll_offset = self.clamped_offset(self.scroll_offset);
        self.scheduler.cancel();
        self.recompute_and_emit(UpdateReason::Reset);
    }

    /// Appends items at the end. Existing offsets are untouched; emits
    /// immediately unless the batch was empty.
    pub fn append<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = P>,
    {
        if self.detached {
            return;
        }
        let estimate = self.options.estimate.clone();
        let base = self.options.estimated_height;
        let added = self.heights.append(items, move |payload| match &estimate {
            Some(f) => f(payload),
            None => base,
        });
        if added == 0 {
            return;
        }
        self.scheduler.cancel();
        self.recompute_and_emit(UpdateReason::Append);
    }

    /// Records the latest scroll offset and arms the debounce. The offset
    /// is clamped to the scrollable range; no recompute happens here.
    pub fn on_scroll(&mut self, offset: u64, now_ms: u64) {
        if self.detached {
            return;
        }
        self.scroll_offset = self.clamped_offset(offset);
        self.scheduler
            .schedule(now_ms, self.options.debounce_interval_ms);
    }

    /// Advances the host clock. Fires the pending recompute once the
    /// debounce interval has elapsed; returns whether an update was emitted.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.detached || !self.scheduler.poll(now_ms) {
            return false;
        }
        self.recompute_and_emit(UpdateReason::Scroll);
        true
    }

    /// Applies a host-measured real height for one rendered item.
    ///
    /// Returns the delta against the previously effective height. Deltas
    /// beyond the jitter threshold arm the debounced recompute; smaller ones
    /// are absorbed silently. A stale index is ignored and reported back.
    pub fn on_height_measured(
        &mut self,
        index: usize,
        height: u32,
        now_ms: u64,
    ) -> Result<i64, EngineError> {
        if self.detached {
            return Ok(0);
        }
        let delta = match self.heights.correct(index, height) {
            Ok(delta) => delta,
            Err(err) => {
                lwwarn!("ignoring measurement for stale index: {err}");
                return Err(err);
            }
        };
        self.scheduler.note_correction(
            delta,
            now_ms,
            self.options.debounce_interval_ms,
            self.options.jitter_threshold,
        );
        Ok(delta)
    }

    /// Swaps in a new configuration.
    ///
    /// Geometry changes (viewport, overscan) settle through the debounced
    /// channel like a scroll burst. A new estimate base or fn applies only
    /// to future insertions; existing estimates are fixed at insertion time.
    pub fn configure(&mut self, options: ListWindowOptions<P>, now_ms: u64) {
        if self.detached {
            return;
        }
        if options.estimated_height == 0 {
            lwwarn!("estimated height configured as 0; estimates are clamped");
        }
        let geometry_changed = options.viewport_height != self.options.viewport_height
            || options.overscan != self.options.overscan;
        self.options = options;
        if geometry_changed {
            self.scroll_offset = self.clamped_offset(self.scroll_offset);
            self.scheduler
                .schedule(now_ms, self.options.debounce_interval_ms);
        }
    }

    /// Jumps to an item: resolves its offset, recomputes immediately, and
    /// returns the offset the host should apply to its native scroll
    /// position.
    pub fn scroll_to_index(&mut self, index: usize) -> Result<u64, EngineError> {
        if self.detached {
            return Ok(self.scroll_offset);
        }
        let len = self.heights.len();
        if index >= len {
            let err = EngineError::StaleIndex { index, len };
            lwwarn!("scroll_to_index ignored: {err}");
            return Err(err);
        }
        Ok(self.jump_to(self.heights.offset_of(index)))
    }

    /// Jumps to a raw offset (session restore, anchor re-application).
    /// Clamps, recomputes immediately, returns the applied offset.
    pub fn scroll_to_offset(&mut self, offset: u64) -> u64 {
        if self.detached {
            return self.scroll_offset;
        }
        self.jump_to(offset)
    }

    /// Cancels pending work and drops the update callback. Every later call
    /// is an inert no-op, so a stray host timer firing after detach cannot
    /// reach a dead engine.
    pub fn teardown(&mut self) {
        self.scheduler.cancel();
        self.options.on_update = None;
        self.detached = true;
        lwdebug!("engine detached");
    }

    /// The window as of the last recompute.
    pub fn window(&self) -> Window {
        self.window
    }

    /// The exact visible range for the current offset, computed on demand
    /// without overscan.
    pub fn visible_window(&self) -> Window {
        window::visible_window(&self.heights, self.scroll_offset, self.options.viewport_height)
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn total_height(&self) -> u64 {
        self.heights.total_height()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    /// Largest scroll offset that still fills the viewport. Offsets handed
    /// to [`ListWindow::on_scroll`] and the jump methods clamp to this.
    pub fn max_scroll_offset(&self) -> u64 {
        window::max_scroll_offset(&self.heights, self.options.viewport_height)
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Whether a debounced recompute is armed but not yet fired.
    pub fn update_pending(&self) -> bool {
        self.scheduler.is_armed()
    }

    /// Deadline of the pending recompute, for hosts that align their next
    /// wakeup with it.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.scheduler.deadline_ms()
    }

    pub fn options(&self) -> &ListWindowOptions<P> {
        &self.options
    }

    pub fn item(&self, index: usize) -> Option<&P> {
        self.heights.payload(index)
    }

    /// Effective height of `index`: measured when available, estimated
    /// otherwise.
    pub fn height_of(&self, index: usize) -> Option<u32> {
        self.heights.height_of(index)
    }

    /// Offset of the top of `index`; indices past the end return the total.
    pub fn offset_of(&self, index: usize) -> u64 {
        self.heights.offset_of(index)
    }

    /// Index of the item covering `offset`.
    pub fn locate(&self, offset: u64) -> usize {
        self.heights.locate(offset)
    }

    /// Identity token of the item at `index`, when an identity fn is
    /// configured.
    pub fn token_of(&self, index: usize) -> Option<u64> {
        let identity = self.options.identity.as_ref()?;
        self.heights.payload(index).map(|p| identity(p))
    }

    /// Finds the first item whose identity token matches. Linear scan; used
    /// by re-anchoring workflows after a reset.
    pub fn find_token(&self, token: u64) -> Option<usize> {
        let identity = self.options.identity.as_ref()?;
        self.heights
            .records()
            .iter()
            .position(|r| identity(&r.payload) == token)
    }

    /// Visits the slots of the current window in order, without allocating.
    pub fn for_each_slot<'a>(&'a self, mut f: impl FnMut(RenderSlot<'a, P>)) {
        if self.window.is_empty() {
            return;
        }
        let identity = self.options.identity.as_ref();
        let mut top = self.window.offset_y;
        for (index, record) in self
            .heights
            .records()
            .iter()
            .enumerate()
            .take(self.window.end_index + 1)
            .skip(self.window.start_index)
        {
            let height = record.height();
            f(RenderSlot {
                key: slot_key_for(index, identity, &record.payload),
                index,
                top,
                height,
                measured: record.measured.is_some(),
                payload: &record.payload,
            });
            top = top.saturating_add(height as u64);
        }
    }

    fn clamped_offset(&self, offset: u64) -> u64 {
        offset.min(window::max_scroll_offset(
            &self.heights,
            self.options.viewport_height,
        ))
    }

    fn jump_to(&mut self, offset: u64) -> u64 {
        self.scroll_offset = self.clamped_offset(offset);
        self.scheduler.cancel();
        self.recompute_and_emit(UpdateReason::Jump);
        self.scroll_offset
    }

    fn recompute_and_emit(&mut self, reason: UpdateReason) {
        self.window = window::compute_window(
            &self.heights,
            self.scroll_offset,
            self.options.viewport_height,
            self.options.overscan,
        );
        debug_assert!(self.window.is_empty() || self.window.end_index < self.heights.len());
        self.emit(reason);
    }

    fn emit(&self, reason: UpdateReason) {
        let Some(callback) = self.options.on_update.clone() else {
            return;
        };
        let mut slots: Vec<RenderSlot<'_, P>> = Vec::with_capacity(self.window.len());
        self.for_each_slot(|slot| slots.push(slot));
        let update = WindowUpdate {
            window: self.window,
            total_height: self.heights.total_height(),
            reason,
            slots: &slots,
        };
        if let Err(err) = callback(EngineEvent::Window(&update)) {
            lwwarn!("render callback failed: {err}");
            let failure = EngineError::RenderFailed(err);
            let _ = callback(EngineEvent::RenderFailed(&failure));
        }
    }
}

impl<P> core::fmt::Debug for ListWindow<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListWindow")
            .field("len", &self.heights.len())
            .field("total_height", &self.heights.total_height())
            .field("scroll_offset", &self.scroll_offset)
            .field("window", &self.window)
            .field("detached", &self.detached)
            .finish_non_exhaustive()
    }
}
