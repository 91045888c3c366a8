//! Failure message catalog
//!
//! Every message produced here is fully resolved: all values are
//! interpolated before the message leaves this module, so callers never see
//! placeholder syntax.

pub fn invalid_ip(ip: &str) -> String {
    format!("{} is not a valid IP address or range", ip)
}

pub fn invalid_range(range: &str) -> String {
    format!("'{}' is not a valid IP address or range", range)
}

pub fn rejected_ip(ip: &str) -> String {
    format!("{} is not allowed", ip)
}

pub fn invalid_email(email: &str) -> String {
    format!("{} is not a valid email address", email)
}

pub fn invalid_url(url: &str) -> String {
    format!("{} is not a valid url", url)
}

pub fn regex_mismatch(value: &str, regex: &str) -> String {
    format!("'{}' does not match the pattern '{}'", value, regex)
}

pub fn failed_boolean(value: bool, expected: bool) -> String {
    format!("The expression evaluated to {} but {} was expected", value, expected)
}

pub fn lower_than_min_size(min: usize, actual: usize) -> String {
    format!("The size was expected to be at least {} but it was {}", min, actual)
}

pub fn greater_than_max_size(max: usize, actual: usize) -> String {
    format!("The size was expected to be at most {} but it was {}", max, actual)
}

pub fn was_expecting_null() -> String {
    "The value was expected to be null but it was not".to_string()
}

pub fn was_expecting_not_null() -> String {
    "The value is null".to_string()
}

pub fn string_is_blank() -> String {
    "The string is blank".to_string()
}

pub fn string_is_not_blank() -> String {
    "The string is not blank".to_string()
}

pub fn collection_is_empty() -> String {
    "The collection is empty".to_string()
}

pub fn collection_is_not_empty() -> String {
    "The collection is not empty".to_string()
}

pub fn invalid_number_type(value: &str, number_type: &str) -> String {
    format!("'{}' cannot be parsed as a {}", value, number_type)
}

pub fn lower_than(value: &str, min: f64) -> String {
    format!("'{}' is lower than {}", value, min)
}

pub fn greater_than(value: &str, max: f64) -> String {
    format!("'{}' is greater than {}", value, max)
}

pub fn invalid_time(time: &str, locale: &str, pattern: &str) -> String {
    format!(
        "'{}' is not a valid time for locale '{}' and pattern '{}'",
        time, locale, pattern
    )
}

pub fn period_elapsed() -> String {
    "The given period has already elapsed".to_string()
}

pub fn period_not_elapsed() -> String {
    "The given period has not yet elapsed".to_string()
}
