//! frieze: editing core for zoomable historical timelines.
//!
//! Events, periods and artist spans are placed on a horizontal year axis.
//! The crate owns the year/pixel mapping, the item store, the pan/drag/resize
//! state machine and the projection of items into backend-agnostic draw
//! primitives. Forms, file loading and widget wiring stay with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::TimelineEditor;
pub use core::TimelineConfig;
pub use error::{TimelineError, TimelineResult};
