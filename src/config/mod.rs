//! Configuration management module

pub mod app_config;
pub mod validation;

pub use app_config::{AppConfig, IpFilterConfig, LoggingConfig};
pub use validation::ConfigValidator;
