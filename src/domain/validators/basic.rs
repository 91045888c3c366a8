//! Single-value validators
//!
//! Thin checks delegating to standard parsing routines: boolean equality,
//! email and URL syntax, regex matching, size bounds, null, blank and
//! empty-collection checks.

use std::collections::{BTreeMap, HashMap};

use regex::RegexBuilder;
use validator::ValidateEmail;

use crate::domain::messages;
use crate::shared::error::{AppError, ValidationError, ValidationErrorKind, ValidationResult};

/// Validates that `value` is `true`.
pub fn is_true(value: bool) -> ValidationResult {
    expect_boolean(value, true)
}

/// Validates that `value` is `false`.
pub fn is_false(value: bool) -> ValidationResult {
    expect_boolean(value, false)
}

fn expect_boolean(value: bool, expected: bool) -> ValidationResult {
    if value == expected {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::InvalidBoolean,
            messages::failed_boolean(value, expected),
        ))
    }
}

/// Validates that `email` is a syntactically valid email address.
pub fn is_email(email: &str) -> ValidationResult {
    if email.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::InvalidEmail,
            messages::invalid_email(email),
        ))
    }
}

/// Validates that `url` parses as an absolute URL.
pub fn is_url(url: &str) -> ValidationResult {
    if url::Url::parse(url).is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::InvalidUrl,
            messages::invalid_url(url),
        ))
    }
}

/// Validates that `value` matches `regex`.
///
/// A malformed pattern is a non-validation error: it is a caller mistake,
/// not a property of the value under test.
pub fn matches_regex(value: &str, regex: &str, case_sensitive: bool) -> Result<(), AppError> {
    let compiled = RegexBuilder::new(regex)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|e| AppError::Internal(format!("Invalid regex pattern '{}': {}", regex, e)))?;

    if compiled.is_match(value) {
        Ok(())
    } else {
        Err(AppError::Validation(ValidationError::new(
            ValidationErrorKind::Mismatch,
            messages::regex_mismatch(value, regex),
        )))
    }
}

/// Types with a countable size, for [`validate_size`]
pub trait HasSize {
    fn size(&self) -> usize;
}

impl HasSize for str {
    fn size(&self) -> usize {
        self.len()
    }
}

impl HasSize for String {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> HasSize for [T] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> HasSize for Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> HasSize for HashMap<K, V> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> HasSize for BTreeMap<K, V> {
    fn size(&self) -> usize {
        self.len()
    }
}

/// Validates that the size of `value` lies within inclusive bounds.
///
/// `max` of `None` allows any size above `min`.
pub fn validate_size<T: HasSize + ?Sized>(value: &T, min: usize, max: Option<usize>) -> ValidationResult {
    let actual = value.size();

    if actual < min {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidSize,
            messages::lower_than_min_size(min, actual),
        ));
    }

    if let Some(max) = max {
        if actual > max {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidSize,
                messages::greater_than_max_size(max, actual),
            ));
        }
    }

    Ok(())
}

/// Validates that `value` is absent.
pub fn is_null<T>(value: Option<&T>) -> ValidationResult {
    if value.is_none() {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::NotNullValue,
            messages::was_expecting_null(),
        ))
    }
}

/// Validates that `value` is present.
pub fn is_not_null<T>(value: Option<&T>) -> ValidationResult {
    if value.is_some() {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::NullValue,
            messages::was_expecting_not_null(),
        ))
    }
}

/// Validates that `value` is blank (absent or whitespace-only).
pub fn is_blank(value: Option<&str>) -> ValidationResult {
    match value {
        None => Ok(()),
        Some(text) if text.trim().is_empty() => Ok(()),
        Some(_) => Err(ValidationError::new(
            ValidationErrorKind::NotBlankString,
            messages::string_is_not_blank(),
        )),
    }
}

/// Validates that `value` contains at least one non-whitespace character.
pub fn is_not_blank(value: Option<&str>) -> ValidationResult {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::new(
            ValidationErrorKind::BlankString,
            messages::string_is_blank(),
        )),
    }
}

/// Validates that `values` is empty.
pub fn is_empty_collection<T>(values: &[T]) -> ValidationResult {
    if values.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::NotEmptyCollection,
            messages::collection_is_not_empty(),
        ))
    }
}

/// Validates that `values` holds at least one element.
pub fn is_not_empty_collection<T>(values: &[T]) -> ValidationResult {
    if values.is_empty() {
        Err(ValidationError::new(
            ValidationErrorKind::EmptyCollection,
            messages::collection_is_empty(),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_checks() {
        assert!(is_true(true).is_ok());
        assert!(is_false(false).is_ok());
        assert_eq!(is_true(false).unwrap_err().kind, ValidationErrorKind::InvalidBoolean);
        assert_eq!(is_false(true).unwrap_err().kind, ValidationErrorKind::InvalidBoolean);
    }

    #[test]
    fn email_syntax() {
        assert!(is_email("flipper@mulesoft.com").is_ok());
        let err = is_email("@mulesoft.com").unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidEmail);
        assert!(err.message.contains("@mulesoft.com"));
    }

    #[test]
    fn url_syntax() {
        assert!(is_url("http://localhost:8080/path?query=1").is_ok());
        assert!(is_url("https://example.org").is_ok());
        assert_eq!(is_url("here").unwrap_err().kind, ValidationErrorKind::InvalidUrl);
    }

    #[test]
    fn regex_matching_respects_case_flag() {
        assert!(matches_regex("HELLO", "[a-z]+", false).is_ok());
        let err = matches_regex("HELLO", "[a-z]+", true).unwrap_err();
        match err {
            AppError::Validation(e) => assert_eq!(e.kind, ValidationErrorKind::Mismatch),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_regex_is_not_a_validation_failure() {
        let err = matches_regex("abc", "[unclosed", true).unwrap_err();
        assert!(!err.is_validation());
    }

    #[test]
    fn size_bounds_are_inclusive() {
        assert!(validate_size("ab", 2, Some(2)).is_ok());
        assert!(validate_size(&vec![1, 2, 3], 0, None).is_ok());
        assert_eq!(
            validate_size("a", 2, None).unwrap_err().kind,
            ValidationErrorKind::InvalidSize
        );
        assert_eq!(
            validate_size("abc", 0, Some(2)).unwrap_err().kind,
            ValidationErrorKind::InvalidSize
        );
    }

    #[test]
    fn null_checks() {
        let present = Some(&1);
        let absent: Option<&i32> = None;
        assert!(is_null(absent).is_ok());
        assert!(is_not_null(present).is_ok());
        assert_eq!(is_null(present).unwrap_err().kind, ValidationErrorKind::NotNullValue);
        assert_eq!(is_not_null(absent).unwrap_err().kind, ValidationErrorKind::NullValue);
    }

    #[test]
    fn blank_checks_treat_whitespace_as_blank() {
        assert!(is_blank(None).is_ok());
        assert!(is_blank(Some("   ")).is_ok());
        assert!(is_not_blank(Some("value")).is_ok());
        assert_eq!(
            is_blank(Some("value")).unwrap_err().kind,
            ValidationErrorKind::NotBlankString
        );
        assert_eq!(
            is_not_blank(Some("  ")).unwrap_err().kind,
            ValidationErrorKind::BlankString
        );
        assert_eq!(is_not_blank(None).unwrap_err().kind, ValidationErrorKind::BlankString);
    }

    #[test]
    fn collection_emptiness() {
        let empty: Vec<i32> = vec![];
        assert!(is_empty_collection(&empty).is_ok());
        assert!(is_not_empty_collection(&[1]).is_ok());
        assert_eq!(
            is_empty_collection(&[1]).unwrap_err().kind,
            ValidationErrorKind::NotEmptyCollection
        );
        assert_eq!(
            is_not_empty_collection(&empty).unwrap_err().kind,
            ValidationErrorKind::EmptyCollection
        );
    }
}
