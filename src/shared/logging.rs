//! Logging utilities module
//!
//! This module provides centralized logging setup for hosts embedding the
//! library and for the test suite.

use tracing::warn;

/// Logging utilities for the library
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified level filter
    pub fn initialize(level: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber).map_err(|e| {
            crate::shared::error::AppError::Internal(format!("Failed to initialize logging: {}", e))
        })?;

        Ok(())
    }

    /// Log a rejected filter-list configuration entry
    pub fn log_invalid_range(entry: &str, reason: &str) {
        warn!(
            entry = %entry,
            reason = %reason,
            "Invalid range specifier in filter list"
        );
    }
}
