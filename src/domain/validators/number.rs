//! Numeric validation
//!
//! Locale-aware parsing of textual numbers into a target numeric type, with
//! optional inclusive bounds.

use crate::domain::messages;
use crate::shared::error::{ValidationError, ValidationErrorKind, ValidationResult};

/// Target numeric type for [`validate_number`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberType {
    Integer,
    Long,
    Short,
    Double,
    Float,
}

impl NumberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberType::Integer => "Integer",
            NumberType::Long => "Long",
            NumberType::Short => "Short",
            NumberType::Double => "Double",
            NumberType::Float => "Float",
        }
    }

    /// Parse normalized text into this type, widened to f64 for comparison.
    fn parse(&self, text: &str) -> Option<f64> {
        match self {
            NumberType::Integer => text.parse::<i32>().ok().map(|n| n as f64),
            NumberType::Long => text.parse::<i64>().ok().map(|n| n as f64),
            NumberType::Short => text.parse::<i16>().ok().map(|n| n as f64),
            NumberType::Double => text.parse::<f64>().ok(),
            NumberType::Float => text.parse::<f32>().ok().map(|n| n as f64),
        }
    }
}

impl std::str::FromStr for NumberType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INTEGER" => Ok(NumberType::Integer),
            "LONG" => Ok(NumberType::Long),
            "SHORT" => Ok(NumberType::Short),
            "DOUBLE" => Ok(NumberType::Double),
            "FLOAT" => Ok(NumberType::Float),
            other => Err(format!("unknown number type: {}", other)),
        }
    }
}

/// Decimal and grouping separators of the caller's locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl NumberLocale {
    pub fn en_us() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }

    pub fn de() -> Self {
        Self {
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }

    /// Resolve a locale tag like "en_US"; unknown tags fall back to en_US.
    pub fn from_tag(tag: &str) -> Self {
        let language = tag.split(['_', '-']).next().unwrap_or(tag);
        match language.to_ascii_lowercase().as_str() {
            "de" | "es" | "fr" | "it" | "pt" => Self::de(),
            _ => Self::en_us(),
        }
    }

    /// Strip grouping separators and canonicalize the decimal separator.
    fn normalize(&self, value: &str) -> String {
        value
            .chars()
            .filter(|c| *c != self.grouping_separator)
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect()
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::en_us()
    }
}

/// Validates that `value` parses as `number_type` under `locale` and lies
/// within the optional inclusive bounds.
pub fn validate_number(
    value: &str,
    number_type: NumberType,
    locale: &NumberLocale,
    min: Option<f64>,
    max: Option<f64>,
) -> ValidationResult {
    let normalized = locale.normalize(value.trim());

    let parsed = match number_type.parse(&normalized) {
        Some(parsed) => parsed,
        None => {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidNumber,
                messages::invalid_number_type(value, number_type.as_str()),
            ))
        }
    };

    if let Some(min) = min {
        if parsed < min {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidNumber,
                messages::lower_than(value, min),
            ));
        }
    }

    if let Some(max) = max {
        if parsed > max {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidNumber,
                messages::greater_than(value, max),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        let locale = NumberLocale::en_us();
        assert!(validate_number("12", NumberType::Integer, &locale, None, None).is_ok());
        assert!(validate_number("-7", NumberType::Long, &locale, None, None).is_ok());
    }

    #[test]
    fn rejects_non_numeric_text() {
        let locale = NumberLocale::en_us();
        let err = validate_number("12w", NumberType::Integer, &locale, None, None).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidNumber);
        assert!(err.message.contains("12w"));
    }

    #[test]
    fn integer_types_reject_decimals() {
        let locale = NumberLocale::en_us();
        assert!(validate_number("1.5", NumberType::Integer, &locale, None, None).is_err());
        assert!(validate_number("1.5", NumberType::Double, &locale, None, None).is_ok());
    }

    #[test]
    fn short_overflow_is_invalid() {
        let locale = NumberLocale::en_us();
        assert!(validate_number("32767", NumberType::Short, &locale, None, None).is_ok());
        assert!(validate_number("32768", NumberType::Short, &locale, None, None).is_err());
    }

    #[test]
    fn grouping_and_decimal_separators_follow_locale() {
        assert!(validate_number("1,234.5", NumberType::Double, &NumberLocale::en_us(), None, None).is_ok());
        assert!(validate_number("1.234,5", NumberType::Double, &NumberLocale::de(), None, None).is_ok());
        // en_US text under a de locale canonicalizes to nonsense
        assert!(validate_number("1,234.5", NumberType::Integer, &NumberLocale::de(), None, None).is_err());
    }

    #[test]
    fn bounds_are_inclusive() {
        let locale = NumberLocale::en_us();
        assert!(validate_number("5", NumberType::Integer, &locale, Some(5.0), Some(5.0)).is_ok());
        assert_eq!(
            validate_number("4", NumberType::Integer, &locale, Some(5.0), None)
                .unwrap_err()
                .kind,
            ValidationErrorKind::InvalidNumber
        );
        assert_eq!(
            validate_number("6", NumberType::Integer, &locale, None, Some(5.0))
                .unwrap_err()
                .kind,
            ValidationErrorKind::InvalidNumber
        );
    }

    #[test]
    fn locale_tag_resolution_falls_back_to_en_us() {
        assert_eq!(NumberLocale::from_tag("de_DE"), NumberLocale::de());
        assert_eq!(NumberLocale::from_tag("en_US"), NumberLocale::en_us());
        assert_eq!(NumberLocale::from_tag("zz"), NumberLocale::en_us());
    }
}
