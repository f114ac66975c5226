// src/infra/logger.rs — Structured logging with tracing

use tracing_subscriber::EnvFilter;

/// Initialize logging. `RUST_LOG` overrides `default_level` when set.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
