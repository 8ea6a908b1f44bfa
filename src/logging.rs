use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` wins over `level` when set.
///
/// actix's request logger emits through the `log` facade; the subscriber's
/// log bridge picks those records up too.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("seat_planner={level},actix_web={level},actix_server=warn"))
    });

    // Already initialised (e.g. in tests) is fine
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
