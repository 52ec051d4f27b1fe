//! line-graph: path construction and range mapping for smooth line graphs.
//!
//! The crate turns timestamped samples plus a display window into cubic
//! Bezier paths, answers "curve height at pixel x" for interactive read-outs,
//! and crossfades between path versions when data changes. Drawing, gesture
//! recognition and animation timing stay with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{GraphEngine, GraphEngineConfig};
pub use error::{GraphError, GraphResult};
