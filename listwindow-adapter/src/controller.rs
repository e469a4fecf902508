use listwindow::{EngineError, ListWindow, ListWindowOptions};

use crate::{Easing, Glide, ScrollAnchor, apply_anchor, capture_first_visible_anchor};

/// A framework-neutral wrapper that adds glide scrolling and anchor
/// workflows on top of a [`ListWindow`].
///
/// It holds no UI objects. Hosts drive it by calling:
/// - [`Controller::on_scroll`] when the native container reports an offset
/// - [`Controller::tick`] each frame or timer callback
///
/// While a glide is active, `tick` returns the offset the host should apply
/// to its native scroll position; window updates keep flowing through the
/// engine's own `on_update` callback.
pub struct Controller<P> {
    engine: ListWindow<P>,
    glide: Option<Glide>,
}

impl<P> Controller<P> {
    pub fn new(options: ListWindowOptions<P>) -> Self {
        Self {
            engine: ListWindow::new(options),
            glide: None,
        }
    }

    pub fn from_engine(engine: ListWindow<P>) -> Self {
        Self {
            engine,
            glide: None,
        }
    }

    pub fn engine(&self) -> &ListWindow<P> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ListWindow<P> {
        &mut self.engine
    }

    pub fn into_engine(self) -> ListWindow<P> {
        self.engine
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    pub fn cancel_glide(&mut self) {
        self.glide = None;
    }

    /// Call when the host viewport is resized. The new geometry settles
    /// through the engine's debounced channel.
    pub fn set_viewport_height(&mut self, viewport_height: u32, now_ms: u64) {
        let options = self
            .engine
            .options()
            .clone()
            .with_viewport_height(viewport_height);
        self.engine.configure(options, now_ms);
    }

    /// Call when the host reports a scroll offset change (wheel, drag,
    /// scrollbar). A host scroll interrupts any active glide.
    pub fn on_scroll(&mut self, offset: u64, now_ms: u64) {
        self.cancel_glide();
        self.engine.on_scroll(offset, now_ms);
    }

    /// Advances the controller one frame.
    ///
    /// Samples the active glide into the engine's scroll path, then lets the
    /// engine fire any recompute that has come due. Returns the offset the
    /// host should apply while a glide is running, `None` otherwise. The
    /// frame a glide completes, it jumps to the exact target and recomputes
    /// immediately.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let Some(glide) = self.glide else {
            self.engine.tick(now_ms);
            return None;
        };

        if glide.is_done(now_ms) {
            self.glide = None;
            return Some(self.engine.scroll_to_offset(glide.to));
        }
        self.engine.on_scroll(glide.sample(now_ms), now_ms);
        self.engine.tick(now_ms);
        Some(self.engine.scroll_offset())
    }

    /// Starts a glide toward the top of an item.
    ///
    /// Returns the clamped target offset, or the stale index when `index`
    /// is out of range.
    pub fn glide_to_index(
        &mut self,
        index: usize,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Result<u64, EngineError> {
        let len = self.engine.len();
        if index >= len {
            return Err(EngineError::StaleIndex { index, len });
        }
        Ok(self.glide_to_offset(self.engine.offset_of(index), now_ms, duration_ms, easing))
    }

    /// Starts a glide toward an offset. Returns the clamped target.
    pub fn glide_to_offset(
        &mut self,
        offset: u64,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> u64 {
        let to = offset.min(self.engine.max_scroll_offset());
        let from = self.engine.scroll_offset();
        self.glide = Some(Glide::new(from, to, now_ms, duration_ms, easing));
        to
    }

    /// Jumps to an item immediately, interrupting any glide.
    pub fn scroll_to_index(&mut self, index: usize) -> Result<u64, EngineError> {
        self.cancel_glide();
        self.engine.scroll_to_index(index)
    }

    /// Jumps to an offset immediately, interrupting any glide.
    pub fn scroll_to_offset(&mut self, offset: u64) -> u64 {
        self.cancel_glide();
        self.engine.scroll_to_offset(offset)
    }

    pub fn capture_first_visible_anchor(&self) -> Option<ScrollAnchor> {
        capture_first_visible_anchor(&self.engine)
    }

    /// Re-applies a captured anchor, interrupting any glide.
    pub fn apply_anchor(&mut self, anchor: &ScrollAnchor) -> bool {
        self.cancel_glide();
        apply_anchor(&mut self.engine, anchor)
    }
}

impl<P> core::fmt::Debug for Controller<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("engine", &self.engine)
            .field("glide", &self.glide)
            .finish()
    }
}
