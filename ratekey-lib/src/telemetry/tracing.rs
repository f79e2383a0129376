use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

use crate::config::LoggingConfig;
use crate::error::{RateKeyError, Result};

/// Install a global fmt subscriber for the library's log events.
///
/// `RUST_LOG` takes precedence over the configured level. Hosts that already
/// run their own subscriber should not call this; it fails if one is set.
pub fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(logging.show_target);

    let subscriber = Registry::default().with(env_filter).with(fmt_layer);

    tracing::subscriber::set_global_default(subscriber).map_err(|e| {
        RateKeyError::Telemetry(format!("Failed to set global tracing subscriber: {e}"))
    })?;

    Ok(())
}
