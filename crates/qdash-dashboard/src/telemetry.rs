//! Logging setup.
//!
//! Installs the global `tracing` subscriber: an `EnvFilter` plus a console or
//! JSON fmt layer. `RUST_LOG` wins over the configured level when set.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::config::{LogFormat, LoggingConfig};

/// Filter directives for a configured level: our crates and request traces
/// at `level`, everything else at `warn`.
pub fn default_directives(level: &str) -> String {
    format!(
        "warn,qdash_dashboard={level},qdash_sched={level},qdash_hal={level},\
         qdash_adapter_sim={level},tower_http={level}"
    )
}

/// Build the filter, preferring `RUST_LOG` over the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(&config.level)))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing with the given configuration.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TryInitError> {
    let fmt_layer = match config.format {
        LogFormat::Console => fmt::layer().with_target(true).boxed(),
        LogFormat::Json => fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!(format = ?config.format, level = %config.level, "Tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            let directives = default_directives(level);
            assert!(directives.contains(&format!("qdash_sched={level}")));
            assert!(directives.contains(&format!("qdash_hal={level}")));
            assert!(directives.contains(&format!(",qdash_adapter_sim={level}")));
            assert!(EnvFilter::try_new(&directives).is_ok());
        }
    }
}
