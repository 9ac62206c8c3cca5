//! Logging infrastructure

use tracing_subscriber::EnvFilter;

use super::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// Installs the global subscriber. `RUST_LOG` wins over the configured level.
    pub fn init(config: &LoggingConfig) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.level));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}
