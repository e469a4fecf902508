use crate::error::EngineError;
use crate::key::SlotKey;

/// The materialized index range plus the offset of its first item.
///
/// `end_index` is inclusive. Inclusive bounds cannot encode zero length, so
/// the empty window is the sentinel with `end_index < start_index`; check
/// [`Window::is_empty`] before indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_index: usize,
    pub end_index: usize, // inclusive
    /// Offset of `start_index` from the top of the logical list.
    pub offset_y: u64,
}

impl Window {
    pub const fn empty() -> Self {
        Self {
            start_index: 1,
            end_index: 0,
            offset_y: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end_index < self.start_index
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end_index - self.start_index + 1
        }
    }

    /// Contained indices, in order. Empty for the sentinel window.
    pub fn indices(&self) -> core::ops::RangeInclusive<usize> {
        self.start_index..=self.end_index
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::empty()
    }
}

/// Why an update was emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpdateReason {
    /// Full data reset.
    Reset,
    /// Items appended at the end.
    Append,
    /// Programmatic jump (scroll-to-index or scroll-to-offset).
    Jump,
    /// Debounced settle after scroll, geometry, or height-correction events.
    Scroll,
}

/// One renderable slot within the current window.
#[derive(Debug)]
pub struct RenderSlot<'a, P> {
    pub key: SlotKey,
    /// Position in the logical (unvirtualized) sequence.
    pub index: usize,
    /// Top offset in the logical list.
    pub top: u64,
    /// Effective height: measured when available, estimated otherwise.
    pub height: u32,
    pub measured: bool,
    pub payload: &'a P,
}

impl<P> RenderSlot<'_, P> {
    pub fn bottom(&self) -> u64 {
        self.top.saturating_add(self.height as u64)
    }
}

impl<P> Clone for RenderSlot<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for RenderSlot<'_, P> {}

/// Snapshot bundle emitted to the host after a recompute.
///
/// Everything in here is borrowed from the engine for the duration of the
/// callback; hosts that need to keep it copy the plain parts out.
#[derive(Debug)]
pub struct WindowUpdate<'a, P> {
    pub window: Window,
    pub total_height: u64,
    pub reason: UpdateReason,
    /// Slots for `window.start_index..=window.end_index`, in order.
    pub slots: &'a [RenderSlot<'a, P>],
}

/// Event delivered on the host update channel.
#[derive(Debug)]
pub enum EngineEvent<'a, P> {
    /// A recompute completed; the host should render this window.
    Window(&'a WindowUpdate<'a, P>),
    /// A previous callback for this engine failed. Delivered once per
    /// failure; the callback's own result is ignored for this event.
    RenderFailed(&'a EngineError),
}
