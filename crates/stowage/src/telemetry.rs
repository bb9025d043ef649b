//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,stowage=debug";

/// Initialize console logging with the default filter.
///
/// `RUST_LOG` overrides the filter when set.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_console_telemetry() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_console_telemetry_with(DEFAULT_FILTER)
}

/// Initialize console logging, falling back to `default_filter` when
/// `RUST_LOG` is unset.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_console_telemetry_with(
    default_filter: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()?;

    tracing::debug!("Telemetry initialized");
    Ok(())
}
