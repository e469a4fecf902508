//! Host-side helpers for the `listwindow` engine.
//!
//! The `listwindow` crate is UI-agnostic and stops at window math plus
//! update scheduling. This crate adds the small, framework-neutral workflows
//! hosts end up writing around it:
//!
//! - Glide scrolling (eased scroll-to animations driven by the host clock)
//! - Scroll anchoring (keep an item pinned in place across prepends/resets)
//!
//! No UI toolkit bindings live here.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod anchor;
mod controller;
mod glide;

#[cfg(test)]
mod tests;

pub use anchor::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};
pub use controller::Controller;
pub use glide::{Easing, Glide};
