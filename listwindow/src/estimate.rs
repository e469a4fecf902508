use alloc::sync::Arc;

use crate::heights::MIN_ITEM_HEIGHT;
use crate::options::EstimateFn;

/// Payload fields an estimation rule reads.
///
/// Implement this on your item type to use [`HeightEstimate::into_fn`];
/// hosts with richer layout knowledge can skip the trait and supply their
/// own estimate fn directly.
pub trait EstimateInput {
    /// Length of the primary text, in characters.
    fn text_len(&self) -> usize;

    /// Whether the item renders an extra badge row.
    fn has_badge(&self) -> bool {
        false
    }
}

/// Tunable estimation rule for item heights.
///
/// Estimates are a starting point, corrected later by real measurements, so
/// the rule only has to be in the right neighborhood: a base height, extra
/// height for every started run of `chars_per_step` characters beyond
/// `text_threshold`, and a fixed increment for a badge row. All fields are
/// host tuning, not engine behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeightEstimate {
    /// Height of a minimal item.
    pub base: u32,
    /// Text length at which extra height starts accruing.
    pub text_threshold: usize,
    /// Characters per extra height step beyond the threshold.
    pub chars_per_step: usize,
    /// Height added per started step.
    pub step_extra: u32,
    /// Height added when the badge row is present.
    pub badge_extra: u32,
}

impl HeightEstimate {
    pub const fn new(base: u32) -> Self {
        Self {
            base,
            text_threshold: 20,
            chars_per_step: 10,
            step_extra: 20,
            badge_extra: 24,
        }
    }

    pub const fn with_text_threshold(mut self, text_threshold: usize) -> Self {
        self.text_threshold = text_threshold;
        self
    }

    pub const fn with_chars_per_step(mut self, chars_per_step: usize) -> Self {
        self.chars_per_step = chars_per_step;
        self
    }

    pub const fn with_step_extra(mut self, step_extra: u32) -> Self {
        self.step_extra = step_extra;
        self
    }

    pub const fn with_badge_extra(mut self, badge_extra: u32) -> Self {
        self.badge_extra = badge_extra;
        self
    }

    /// Applies the rule. Never returns zero.
    pub fn estimate(&self, text_len: usize, has_badge: bool) -> u32 {
        let mut height = self.base;
        if text_len > self.text_threshold && self.chars_per_step > 0 {
            let over = text_len - self.text_threshold;
            let steps = over.div_ceil(self.chars_per_step);
            let steps = u32::try_from(steps).unwrap_or(u32::MAX);
            height = height.saturating_add(steps.saturating_mul(self.step_extra));
        }
        if has_badge {
            height = height.saturating_add(self.badge_extra);
        }
        height.max(MIN_ITEM_HEIGHT)
    }

    /// Wraps the rule into an estimate fn for payloads implementing
    /// [`EstimateInput`].
    pub fn into_fn<P: EstimateInput>(self) -> EstimateFn<P> {
        Arc::new(move |payload: &P| self.estimate(payload.text_len(), payload.has_badge()))
    }
}

impl Default for HeightEstimate {
    fn default() -> Self {
        Self::new(100)
    }
}
