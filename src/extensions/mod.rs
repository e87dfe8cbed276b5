//! Optional hook points for host applications.

pub mod plugins;

pub use plugins::{PluginContext, PluginEvent, TimelinePlugin};
