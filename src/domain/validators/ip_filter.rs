//! IP filter validation
//!
//! Wraps classification and filter-list matching into a single pass/fail
//! validation with an allow-list or deny-list polarity.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::domain::ip::{ClassifiedAddress, IpFilterList};
use crate::domain::messages;
use crate::shared::error::{ValidationError, ValidationErrorKind, ValidationResult};

/// Shape of upstream remote-address strings (`host/ip:port`); the embedded
/// address portion is extracted before classification.
static REMOTE_ADDRESS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^/]*)/(.*):(.*)").expect("remote address pattern is valid"));

/// Expected membership of the candidate in the configured list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPolarity {
    /// The address must be found in the list
    Allow,
    /// The address must not be found in the list
    Deny,
}

impl ListPolarity {
    fn expected_membership(&self) -> bool {
        matches!(self, ListPolarity::Allow)
    }
}

/// Validate `ip` against `list` under the given polarity.
///
/// An unclassifiable address is an `InvalidIp` failure regardless of the
/// list contents; a membership/polarity mismatch is a `RejectedIp` failure.
pub fn validate(ip: &str, list: &IpFilterList, polarity: ListPolarity) -> ValidationResult {
    let actual_ip = normalize_remote_address(ip);
    let address = ClassifiedAddress::classify(actual_ip);
    trace!(ip = %actual_ip, "verifying ip");

    if !address.is_valid() {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidIp,
            messages::invalid_ip(ip),
        ));
    }

    if list.any_match(&address)? != polarity.expected_membership() {
        return Err(ValidationError::new(
            ValidationErrorKind::RejectedIp,
            messages::rejected_ip(ip),
        ));
    }

    trace!(ip = %actual_ip, "ip accepted");
    Ok(())
}

/// Allow-list check: the address must be present in `list`.
pub fn is_in_allow_list(ip: &str, list: &IpFilterList) -> ValidationResult {
    validate(ip, list, ListPolarity::Allow)
}

/// Deny-list check: the address must be absent from `list`.
pub fn is_not_in_deny_list(ip: &str, list: &IpFilterList) -> ValidationResult {
    validate(ip, list, ListPolarity::Deny)
}

/// Standalone validity check for a textual IP address.
pub fn is_ip(ip: &str) -> ValidationResult {
    if ClassifiedAddress::classify(ip).is_valid() {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::InvalidIp,
            messages::invalid_ip(ip),
        ))
    }
}

fn normalize_remote_address(ip: &str) -> &str {
    match REMOTE_ADDRESS_PATTERN.captures(ip) {
        Some(captures) => captures.get(2).map(|m| m.as_str()).unwrap_or(ip),
        None => ip,
    }
}
