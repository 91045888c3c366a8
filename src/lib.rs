//! Validation operations library
//!
//! A catalog of named single-value validators (email, URL, IP filtering,
//! regex, size, boolean, numeric, temporal and null/blank/empty checks) for
//! message-processing pipelines, plus an all/any aggregation layer that runs
//! nested validation steps without short-circuiting and summarizes their
//! failures into one composite result.
//!
//! The IP filtering subsystem classifies textual addresses (IPv4, IPv6 or
//! invalid), matches them against exact, CIDR and partial-prefix range
//! specifiers, and evaluates allow/deny-list membership.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod shared;

pub use catalog::{RuleParams, ValidatorCatalog};
pub use config::AppConfig;
pub use domain::aggregator::{run_all, run_any, ValidationStep};
pub use domain::ip::{matches_text, AddressKind, ClassifiedAddress, IpFilterList, RangeMatcher};
pub use domain::validators::{is_in_allow_list, is_not_in_deny_list, ListPolarity};
pub use shared::error::{AppError, AppResult, ValidationError, ValidationErrorKind, ValidationResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
