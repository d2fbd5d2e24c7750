//! Opt-in tracing bootstrap for host applications.
//!
//! The adapter never installs a global subscriber on its own. Hosts either
//! call [`init_default_tracing`] once at startup or wire their own
//! `tracing` subscriber and filters.

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`.
///
/// Returns `false` when the `telemetry` feature is disabled or when another
/// global subscriber was already registered by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
