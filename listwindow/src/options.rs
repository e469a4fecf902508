use alloc::sync::Arc;

use crate::error::RenderError;
use crate::key::IdentityFn;
use crate::types::EngineEvent;

/// Estimates an item's height from its payload, in layout units.
///
/// Must be a pure function of the payload: it is evaluated exactly once per
/// item, at insertion, and the result never changes afterwards (real
/// measurements land through `on_height_measured` instead).
pub type EstimateFn<P> = Arc<dyn Fn(&P) -> u32 + Send + Sync>;

/// The update channel to the host.
///
/// Fired whenever a recompute completes, debounced or immediate. Returning
/// `Err` reports a host-side render failure; the engine catches it, keeps
/// its scheduling state consistent, and delivers it back once as
/// [`EngineEvent::RenderFailed`].
pub type OnUpdateCallback<P> =
    Arc<dyn Fn(EngineEvent<'_, P>) -> Result<(), RenderError> + Send + Sync>;

pub const DEFAULT_ESTIMATED_HEIGHT: u32 = 100;
pub const DEFAULT_OVERSCAN: usize = 3;
/// Roughly one frame at 60 Hz.
pub const DEFAULT_DEBOUNCE_INTERVAL_MS: u64 = 16;
/// Corrections at or below this absolute delta are treated as measurement
/// jitter and do not trigger a recompute.
pub const DEFAULT_JITTER_THRESHOLD: u32 = 10;

/// Configuration for [`crate::ListWindow`].
///
/// Cheap to clone: behavioral fields are stored in `Arc`s so hosts can
/// tweak a plain field and call `ListWindow::configure` without
/// reallocating closures.
pub struct ListWindowOptions<P> {
    /// Viewport height in layout units. 0 is a legal transient state before
    /// the host has measured its container; the window then holds a single
    /// item plus overscan.
    pub viewport_height: u32,
    /// Extra items materialized beyond the visible range on each side.
    pub overscan: usize,
    /// Flat estimate applied when no `estimate` fn is configured.
    pub estimated_height: u32,
    /// Payload-driven estimate; overrides `estimated_height` when set.
    pub estimate: Option<EstimateFn<P>>,
    /// Stable per-item identity for recycle keys. Without it, keys fall
    /// back to the logical index alone.
    pub identity: Option<IdentityFn<P>>,
    /// Quiescence interval for the scroll debounce.
    pub debounce_interval_ms: u64,
    /// Height-correction deltas at or below this absolute value are
    /// absorbed without scheduling a recompute.
    pub jitter_threshold: u32,
    /// Update channel to the host.
    pub on_update: Option<OnUpdateCallback<P>>,
}

impl<P> ListWindowOptions<P> {
    pub fn new() -> Self {
        Self {
            viewport_height: 0,
            overscan: DEFAULT_OVERSCAN,
            estimated_height: DEFAULT_ESTIMATED_HEIGHT,
            estimate: None,
            identity: None,
            debounce_interval_ms: DEFAULT_DEBOUNCE_INTERVAL_MS,
            jitter_threshold: DEFAULT_JITTER_THRESHOLD,
            on_update: None,
        }
    }

    pub fn with_viewport_height(mut self, viewport_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_estimated_height(mut self, estimated_height: u32) -> Self {
        self.estimated_height = estimated_height;
        self
    }

    pub fn with_estimate(
        mut self,
        estimate: Option<impl Fn(&P) -> u32 + Send + Sync + 'static>,
    ) -> Self {
        self.estimate = estimate.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_identity(
        mut self,
        identity: Option<impl Fn(&P) -> u64 + Send + Sync + 'static>,
    ) -> Self {
        self.identity = identity.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_debounce_interval_ms(mut self, debounce_interval_ms: u64) -> Self {
        self.debounce_interval_ms = debounce_interval_ms;
        self
    }

    pub fn with_jitter_threshold(mut self, jitter_threshold: u32) -> Self {
        self.jitter_threshold = jitter_threshold;
        self
    }

    pub fn with_on_update(
        mut self,
        on_update: Option<
            impl Fn(EngineEvent<'_, P>) -> Result<(), RenderError> + Send + Sync + 'static,
        >,
    ) -> Self {
        self.on_update = on_update.map(|f| Arc::new(f) as _);
        self
    }
}

impl<P> Default for ListWindowOptions<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for ListWindowOptions<P> {
    fn clone(&self) -> Self {
        Self {
            viewport_height: self.viewport_height,
            overscan: self.overscan,
            estimated_height: self.estimated_height,
            estimate: self.estimate.clone(),
            identity: self.identity.clone(),
            debounce_interval_ms: self.debounce_interval_ms,
            jitter_threshold: self.jitter_threshold,
            on_update: self.on_update.clone(),
        }
    }
}

impl<P> core::fmt::Debug for ListWindowOptions<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListWindowOptions")
            .field("viewport_height", &self.viewport_height)
            .field("overscan", &self.overscan)
            .field("estimated_height", &self.estimated_height)
            .field("debounce_interval_ms", &self.debounce_interval_ms)
            .field("jitter_threshold", &self.jitter_threshold)
            .finish_non_exhaustive()
    }
}
