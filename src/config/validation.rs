//! Configuration validation module
//!
//! Semantic checks beyond what the derive-level validation can express:
//! every configured range specifier must be parseable, so a bad filter list
//! fails at load time instead of on the first validation call.

use crate::config::AppConfig;
use crate::domain::ip::matcher;
use crate::shared::error::AppError;
use crate::shared::logging::LoggingUtils;

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> crate::Result<()> {
        Self::validate_filter_entries("allow_list", &config.ip_filter.allow_list)?;
        Self::validate_filter_entries("deny_list", &config.ip_filter.deny_list)?;
        Ok(())
    }

    /// Pre-parse every range specifier in a configured list.
    ///
    /// Probing with a fixed candidate exercises the same classification the
    /// matcher applies at validation time, covering partial prefixes as
    /// well as exact and CIDR forms.
    fn validate_filter_entries(list_name: &str, entries: &[String]) -> crate::Result<()> {
        for entry in entries {
            if let Err(e) = matcher::matches_text("127.0.0.1", entry) {
                LoggingUtils::log_invalid_range(entry, &e.message);
                return Err(AppError::Config(format!(
                    "Invalid {} entry '{}': {}",
                    list_name, entry, e.message
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IpFilterConfig;

    fn config_with_allow_list(entries: &[&str]) -> AppConfig {
        AppConfig {
            ip_filter: IpFilterConfig {
                allow_list: entries.iter().map(|s| s.to_string()).collect(),
                deny_list: Vec::new(),
            },
            ..AppConfig::default()
        }
    }

    #[test]
    fn accepts_well_formed_entries() {
        let config = config_with_allow_list(&["127.0.0.1", "192.168.0.0/16", "10.0.", "2001:db8::/32"]);
        assert!(ConfigValidator::validate_config(&config).is_ok());
    }

    #[test]
    fn rejects_unparseable_entries_at_load_time() {
        let config = config_with_allow_list(&["192.168.1.1", "not-a-range"]);
        let err = ConfigValidator::validate_config(&config).unwrap_err();
        match err {
            AppError::Config(message) => {
                assert!(message.contains("not-a-range"));
                assert!(message.contains("allow_list"));
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_out_of_range_prefix_lengths() {
        let config = config_with_allow_list(&["192.168.0.0/40"]);
        assert!(ConfigValidator::validate_config(&config).is_err());
    }
}
