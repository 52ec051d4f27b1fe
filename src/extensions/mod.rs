//! Observer hooks for host integrations.
//!
//! Plugins only observe; they never mutate engine state directly.

pub mod plugins;

pub use plugins::{GraphEvent, GraphPlugin, PluginContext};
