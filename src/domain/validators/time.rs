//! Temporal validation
//!
//! Pattern-based parsing of textual dates and times, plus elapsed-period
//! checks against a reference instant.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::domain::messages;
use crate::shared::error::{ValidationError, ValidationErrorKind, ValidationResult};

/// Validates that `value` parses under the strftime-style `pattern`.
///
/// The pattern is tried as a datetime, then a date, then a time-of-day.
/// `locale` is carried into the failure message only; parsing itself is
/// locale-independent.
pub fn validate_time(value: &str, locale: &str, pattern: &str) -> ValidationResult {
    let parses = NaiveDateTime::parse_from_str(value, pattern).is_ok()
        || NaiveDate::parse_from_str(value, pattern).is_ok()
        || NaiveTime::parse_from_str(value, pattern).is_ok();

    if parses {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::InvalidTime,
            messages::invalid_time(value, locale, pattern),
        ))
    }
}

/// Validates that at least `period` has passed since `since`.
pub fn is_elapsed(since: DateTime<Utc>, period: Duration) -> ValidationResult {
    if Utc::now() - since >= period {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::NotElapsedTime,
            messages::period_not_elapsed(),
        ))
    }
}

/// Validates that `period` has not yet passed since `since`.
pub fn is_not_elapsed(since: DateTime<Utc>, period: Duration) -> ValidationResult {
    if Utc::now() - since < period {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::ElapsedTime,
            messages::period_elapsed(),
        ))
    }
}
