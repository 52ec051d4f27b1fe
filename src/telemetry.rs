//! Opt-in tracing setup for hosts embedding `line-graph-rs`.
//!
//! The library only emits `tracing` events. Hosts that already install a
//! subscriber need nothing from this module.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "line_graph=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`] with explicit fallback directives, e.g.
/// `"line_graph=trace"` while debugging transitions.
#[must_use]
pub fn init_tracing_with_filter(fallback_directives: &str) -> bool {
    install_subscriber(fallback_directives)
}

#[cfg(feature = "telemetry")]
fn install_subscriber(fallback_directives: &str) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_directives));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(not(feature = "telemetry"))]
fn install_subscriber(_fallback_directives: &str) -> bool {
    false
}
