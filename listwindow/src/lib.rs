//! A headless virtual-scrolling window engine for long lists with uneven
//! item heights.
//!
//! For host workflow helpers (glide animation, scroll anchoring), see the
//! `listwindow-adapter` crate.
//!
//! Given a scroll offset and a viewport, the engine decides exactly which
//! contiguous index range must be materialized, and keeps that decision
//! cheap to maintain as data is appended, as item heights are corrected
//! post-render, and as the user scrolls:
//! - cumulative heights live in a Fenwick tree, so a correction is a point
//!   update instead of a rewrite of every offset after it
//! - offset → index lookup is a binary descent, not a linear rescan
//! - scroll bursts are debounced (trailing edge) on a host-driven clock
//! - rendered slots carry stable recycle keys so the host's view layer can
//!   reuse nodes instead of remounting them
//!
//! The engine is UI-agnostic: it does not fetch data, render, or own
//! timers. A host layer is expected to provide:
//! - viewport height and scroll offsets
//! - wall time (`now_ms`) for the debounce
//! - measured item heights, as rendering produces them
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod error;
mod estimate;
mod fenwick;
mod heights;
mod key;
mod options;
mod scheduler;
mod types;
mod window;


pub use engine::ListWindow;
pub use error::{EngineError, RenderError};
pub use estimate::{EstimateInput, HeightEstimate};
pub use heights::{HeightIndex, MIN_ITEM_HEIGHT};
pub use key::{IdentityFn, SlotKey};
pub use options::{
    DEFAULT_DEBOUNCE_INTERVAL_MS, DEFAULT_ESTIMATED_HEIGHT, DEFAULT_JITTER_THRESHOLD,
    DEFAULT_OVERSCAN, EstimateFn, ListWindowOptions, OnUpdateCallback,
};
pub use scheduler::UpdateScheduler;
pub use types::{EngineEvent, RenderSlot, UpdateReason, Window, WindowUpdate};
pub use window::{compute_window, max_scroll_offset, visible_window};
