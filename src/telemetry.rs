//! Opt-in log output for hosts that do not install their own subscriber.

/// Filter used when `RUST_LOG` is unset: chart events at `info`, everything
/// else at `warn`.
pub const DEFAULT_LOG_FILTER: &str = "warn,timeline_chart=info";

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to [`DEFAULT_LOG_FILTER`].
///
/// Returns `true` only for the call that installed the subscriber. Always
/// `false` without the `telemetry` feature.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
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
