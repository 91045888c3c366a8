//! Error handling module
//!
//! This module provides the validation error taxonomy and the
//! application-level error type used across the library.

use thiserror::Error;

/// Closed set of validation failure categories.
///
/// Every validator produces exactly one of these kinds when it fails. The
/// aggregator is the only producer of [`ValidationErrorKind::Multiple`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    InvalidIp,
    RejectedIp,
    InvalidEmail,
    InvalidUrl,
    Mismatch,
    InvalidSize,
    InvalidBoolean,
    InvalidNumber,
    InvalidTime,
    NullValue,
    NotNullValue,
    BlankString,
    NotBlankString,
    EmptyCollection,
    NotEmptyCollection,
    ElapsedTime,
    NotElapsedTime,
    Multiple,
}

impl ValidationErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationErrorKind::InvalidIp => "INVALID_IP",
            ValidationErrorKind::RejectedIp => "REJECTED_IP",
            ValidationErrorKind::InvalidEmail => "INVALID_EMAIL",
            ValidationErrorKind::InvalidUrl => "INVALID_URL",
            ValidationErrorKind::Mismatch => "MISMATCH",
            ValidationErrorKind::InvalidSize => "INVALID_SIZE",
            ValidationErrorKind::InvalidBoolean => "INVALID_BOOLEAN",
            ValidationErrorKind::InvalidNumber => "INVALID_NUMBER",
            ValidationErrorKind::InvalidTime => "INVALID_TIME",
            ValidationErrorKind::NullValue => "NULL",
            ValidationErrorKind::NotNullValue => "NOT_NULL",
            ValidationErrorKind::BlankString => "BLANK_STRING",
            ValidationErrorKind::NotBlankString => "NOT_BLANK_STRING",
            ValidationErrorKind::EmptyCollection => "EMPTY_COLLECTION",
            ValidationErrorKind::NotEmptyCollection => "NOT_EMPTY_COLLECTION",
            ValidationErrorKind::ElapsedTime => "ELAPSED_TIME",
            ValidationErrorKind::NotElapsedTime => "NOT_ELAPSED_TIME",
            ValidationErrorKind::Multiple => "MULTIPLE",
        }
    }
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed validation failure with a fully resolved message.
///
/// For composite failures (`kind == Multiple`) the per-step failures are kept
/// in `causes` in step-declaration order, and `message` is every cause's
/// message joined by newline.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: String,
    pub causes: Vec<ValidationError>,
}

impl ValidationError {
    /// Create a validation error with the given kind and message
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            causes: Vec::new(),
        }
    }

    /// Build a composite failure from the collected per-step failures.
    ///
    /// The message joins each failure's message with a newline, preserving
    /// the order in which the failures were collected.
    pub fn multiple(causes: Vec<ValidationError>) -> Self {
        let message = causes
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            kind: ValidationErrorKind::Multiple,
            message,
            causes,
        }
    }

    pub fn is_multiple(&self) -> bool {
        self.kind == ValidationErrorKind::Multiple
    }
}

/// Result of a single validation: success carries no payload
pub type ValidationResult = Result<(), ValidationError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// A typed validation failure (the only variant the aggregator recovers)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown validation rule: {0}")]
    UnknownRule(String),

    #[error("Internal error: {0}")]
    Internal(String),

    /// An unexpected fault raised inside an aggregator step; never folded
    /// into a composite result
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl AppError {
    /// Whether this error belongs to the validation taxonomy
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiple_joins_messages_in_order() {
        let composite = ValidationError::multiple(vec![
            ValidationError::new(ValidationErrorKind::InvalidUrl, "first"),
            ValidationError::new(ValidationErrorKind::InvalidEmail, "second"),
        ]);

        assert_eq!(composite.kind, ValidationErrorKind::Multiple);
        assert_eq!(composite.message, "first\nsecond");
        assert_eq!(composite.causes.len(), 2);
        assert_eq!(composite.causes[0].kind, ValidationErrorKind::InvalidUrl);
    }

    #[test]
    fn multiple_of_nothing_has_empty_message() {
        let composite = ValidationError::multiple(vec![]);
        assert!(composite.message.is_empty());
        assert!(composite.causes.is_empty());
    }

    #[test]
    fn validation_errors_compare_by_value() {
        let a = ValidationError::new(
            ValidationErrorKind::InvalidIp,
            "x is not a valid IP address or range",
        );
        let b = ValidationError::new(
            ValidationErrorKind::InvalidIp,
            "x is not a valid IP address or range",
        );
        assert_eq!(a, b);
    }

    #[test]
    fn app_error_classifies_validation() {
        let validation: AppError =
            ValidationError::new(ValidationErrorKind::Mismatch, "no match").into();
        assert!(validation.is_validation());
        assert!(!AppError::Internal("boom".to_string()).is_validation());
    }
}
