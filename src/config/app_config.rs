//! Application configuration structures
//!
//! Filter lists and logging settings, loaded from a file and the
//! environment and validated before use.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::ip::IpFilterList;
use crate::shared::error::AppError;

/// IP filter configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IpFilterConfig {
    /// Ranges the allow-list checks membership against
    #[serde(default)]
    pub allow_list: Vec<String>,

    /// Ranges the deny-list checks absence from
    #[serde(default)]
    pub deny_list: Vec<String>,
}

impl IpFilterConfig {
    pub fn allow_list(&self) -> IpFilterList {
        self.allow_list.clone().into()
    }

    pub fn deny_list(&self) -> IpFilterList {
        self.deny_list.clone().into()
    }
}

impl Default for IpFilterConfig {
    fn default() -> Self {
        Self {
            allow_list: Vec::new(),
            deny_list: Vec::new(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level filter
    #[validate(length(min = 1))]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Top-level library configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    #[serde(default)]
    #[validate(nested)]
    pub ip_filter: IpFilterConfig,

    #[serde(default)]
    #[validate(nested)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `validation.toml` (if present) and
    /// `VALIDATION_*` environment variables, then validate it.
    pub fn load() -> crate::Result<Self> {
        Self::load_from("validation")
    }

    /// Load configuration from the named file stem plus the environment.
    pub fn load_from(name: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(config::Environment::with_prefix("VALIDATION").separator("__"))
            .build()?;

        let app_config: AppConfig = settings.try_deserialize()?;
        app_config.ensure_valid()?;

        Ok(app_config)
    }

    /// Run both derive-level and semantic validation.
    pub fn ensure_valid(&self) -> crate::Result<()> {
        self.validate()
            .map_err(|e| AppError::Config(format!("Invalid configuration: {}", e)))?;
        super::validation::ConfigValidator::validate_config(self)
    }
}
