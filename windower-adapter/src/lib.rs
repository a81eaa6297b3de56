//! Event-driven driver for the `windower` crate.
//!
//! The `windower` crate is UI-agnostic and focuses on the core math and state. This crate wires
//! it to a live viewport:
//!
//! - Collaborator traits: host container + geometry, row factory, data source, frame scheduler
//! - Scroll/resize coalescing (at most one reconciliation pass per frame)
//! - [`WindowEngine`], which owns the materialized rows of one viewport
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod coalescer;
mod engine;
mod host;
mod scheduler;

#[cfg(test)]
mod tests;

pub use coalescer::{Coalescer, CoalescerState};
pub use engine::{PassOutcome, PassReport, ScrollNotifier, WindowEngine};
pub use host::{DataSource, FromFn, GeometryProvider, HostContainer, RowFactory, from_fn};
pub use scheduler::{FrameQueue, FrameScheduler, FrameToken};
