//! A headless windowing engine for very large, fixed-row-height lists.
//!
//! For the event-driven driver (host container, frame scheduling, scroll coalescing), see the
//! `windower-adapter` crate.
//!
//! This crate focuses on the core algorithms needed to keep only the rows near the viewport
//! materialized: the overscanned range for a scroll position, reconciliation of that range
//! against the current index → element mapping, and ordered insertion so materialized elements
//! always sit in ascending index order.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport size and scroll offset
//! - an opaque element handle per materialized row
//! - a container that can insert an element before another one, and remove it
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod materialized;
mod options;
mod planner;
mod range;
mod reconcile;
mod state;
mod types;
mod windower;


pub use error::WindowError;
pub use materialized::{MaterializedSet, Materializer};
pub use options::WindowOptions;
pub use planner::{find_insertion_anchor, first_greater};
pub use range::compute_range;
pub use reconcile::{ReconcilePlan, reconcile};
pub use state::ViewportGeometry;
pub use types::{Align, VisibleRange, WindowItem};
pub use windower::Windower;
