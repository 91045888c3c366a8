//! Named validator catalog
//!
//! A strategy table keyed by rule name, for pipeline authors that address
//! validators by configuration rather than by function. Values cross this
//! boundary as `serde_json::Value`; construction-time configuration becomes
//! a plain per-call [`RuleParams`] struct.

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::ip::IpFilterList;
use crate::domain::validators::{basic, ip_filter, number, time, NumberLocale, NumberType};
use crate::shared::error::{AppError, AppResult};

/// Per-call rule parameters.
///
/// Only the fields a rule consumes are inspected; the rest are ignored.
#[derive(Debug, Clone)]
pub struct RuleParams {
    /// Pattern for `matches-regex`
    pub regex: Option<String>,
    pub case_sensitive: bool,
    /// Lower bound for `is-number` / `validate-size`
    pub min: Option<f64>,
    /// Upper bound for `is-number` / `validate-size`
    pub max: Option<f64>,
    /// Target type for `is-number`
    pub number_type: Option<NumberType>,
    /// Locale tag for `is-number` / `is-time`
    pub locale: Option<String>,
    /// Time pattern for `is-time`
    pub pattern: Option<String>,
    /// Configured list for the IP filter rules
    pub filter_list: Option<IpFilterList>,
}

impl Default for RuleParams {
    fn default() -> Self {
        Self {
            regex: None,
            case_sensitive: true,
            min: None,
            max: None,
            number_type: None,
            locale: None,
            pattern: None,
            filter_list: None,
        }
    }
}

type RuleFn = fn(&Value, &RuleParams) -> AppResult<()>;

/// Catalog of named validation rules
pub struct ValidatorCatalog {
    rules: HashMap<&'static str, RuleFn>,
}

impl ValidatorCatalog {
    pub fn new() -> Self {
        let mut rules: HashMap<&'static str, RuleFn> = HashMap::new();

        rules.insert("is-true", rule_is_true);
        rules.insert("is-false", rule_is_false);
        rules.insert("is-email", rule_is_email);
        rules.insert("is-url", rule_is_url);
        rules.insert("is-ip", rule_is_ip);
        rules.insert("matches-regex", rule_matches_regex);
        rules.insert("is-null", rule_is_null);
        rules.insert("is-not-null", rule_is_not_null);
        rules.insert("is-blank", rule_is_blank);
        rules.insert("is-not-blank", rule_is_not_blank);
        rules.insert("is-empty-collection", rule_is_empty_collection);
        rules.insert("is-not-empty-collection", rule_is_not_empty_collection);
        rules.insert("validate-size", rule_validate_size);
        rules.insert("is-number", rule_is_number);
        rules.insert("is-time", rule_is_time);
        rules.insert("is-allowed-ip", rule_is_allowed_ip);
        rules.insert("is-not-denied-ip", rule_is_not_denied_ip);

        Self { rules }
    }

    /// Names of every registered rule, sorted
    pub fn rule_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.rules.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, rule: &str) -> bool {
        self.rules.contains_key(rule)
    }

    /// Apply the named rule to `value`.
    ///
    /// Unknown rule names and value/parameter type mismatches are
    /// non-validation errors; validation failures come back as
    /// `AppError::Validation`.
    pub fn apply(&self, rule: &str, value: &Value, params: &RuleParams) -> AppResult<()> {
        let rule_fn = self
            .rules
            .get(rule)
            .ok_or_else(|| AppError::UnknownRule(rule.to_string()))?;
        rule_fn(value, params)
    }
}

impl Default for ValidatorCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn expect_bool(value: &Value) -> AppResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| AppError::Internal(format!("expected a boolean value, got {}", value)))
}

fn expect_str(value: &Value) -> AppResult<&str> {
    value
        .as_str()
        .ok_or_else(|| AppError::Internal(format!("expected a string value, got {}", value)))
}

fn expect_array(value: &Value) -> AppResult<&Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| AppError::Internal(format!("expected an array value, got {}", value)))
}

fn expect_param<T: Clone>(param: &Option<T>, name: &str) -> AppResult<T> {
    param
        .clone()
        .ok_or_else(|| AppError::Internal(format!("missing required rule parameter: {}", name)))
}

fn rule_is_true(value: &Value, _params: &RuleParams) -> AppResult<()> {
    basic::is_true(expect_bool(value)?).map_err(AppError::from)
}

fn rule_is_false(value: &Value, _params: &RuleParams) -> AppResult<()> {
    basic::is_false(expect_bool(value)?).map_err(AppError::from)
}

fn rule_is_email(value: &Value, _params: &RuleParams) -> AppResult<()> {
    basic::is_email(expect_str(value)?).map_err(AppError::from)
}

fn rule_is_url(value: &Value, _params: &RuleParams) -> AppResult<()> {
    basic::is_url(expect_str(value)?).map_err(AppError::from)
}

fn rule_is_ip(value: &Value, _params: &RuleParams) -> AppResult<()> {
    ip_filter::is_ip(expect_str(value)?).map_err(AppError::from)
}

fn rule_matches_regex(value: &Value, params: &RuleParams) -> AppResult<()> {
    let regex = expect_param(&params.regex, "regex")?;
    basic::matches_regex(expect_str(value)?, &regex, params.case_sensitive)
}

fn rule_is_null(value: &Value, _params: &RuleParams) -> AppResult<()> {
    basic::is_null(nullable(value)).map_err(AppError::from)
}

fn rule_is_not_null(value: &Value, _params: &RuleParams) -> AppResult<()> {
    basic::is_not_null(nullable(value)).map_err(AppError::from)
}

fn rule_is_blank(value: &Value, _params: &RuleParams) -> AppResult<()> {
    basic::is_blank(nullable_str(value)?).map_err(AppError::from)
}

fn rule_is_not_blank(value: &Value, _params: &RuleParams) -> AppResult<()> {
    basic::is_not_blank(nullable_str(value)?).map_err(AppError::from)
}

fn rule_is_empty_collection(value: &Value, _params: &RuleParams) -> AppResult<()> {
    basic::is_empty_collection(expect_array(value)?).map_err(AppError::from)
}

fn rule_is_not_empty_collection(value: &Value, _params: &RuleParams) -> AppResult<()> {
    basic::is_not_empty_collection(expect_array(value)?).map_err(AppError::from)
}

fn rule_validate_size(value: &Value, params: &RuleParams) -> AppResult<()> {
    let size = json_size(value)
        .ok_or_else(|| AppError::Internal(format!("cannot compute the size of {}", value)))?;
    let min = params.min.unwrap_or(0.0) as usize;
    let max = params.max.map(|m| m as usize);
    // The bounds apply to the computed size, so a slice stand-in suffices
    basic::validate_size(&vec![(); size], min, max).map_err(AppError::from)
}

fn rule_is_number(value: &Value, params: &RuleParams) -> AppResult<()> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => return Err(AppError::Internal(format!("expected a numeric value, got {}", other))),
    };
    let number_type = expect_param(&params.number_type, "number_type")?;
    let locale = params
        .locale
        .as_deref()
        .map(NumberLocale::from_tag)
        .unwrap_or_default();

    number::validate_number(&text, number_type, &locale, params.min, params.max).map_err(AppError::from)
}

fn rule_is_time(value: &Value, params: &RuleParams) -> AppResult<()> {
    let pattern = expect_param(&params.pattern, "pattern")?;
    let locale = params.locale.as_deref().unwrap_or("en_US");
    time::validate_time(expect_str(value)?, locale, &pattern).map_err(AppError::from)
}

fn rule_is_allowed_ip(value: &Value, params: &RuleParams) -> AppResult<()> {
    let list = expect_param(&params.filter_list, "filter_list")?;
    ip_filter::is_in_allow_list(expect_str(value)?, &list).map_err(AppError::from)
}

fn rule_is_not_denied_ip(value: &Value, params: &RuleParams) -> AppResult<()> {
    let list = expect_param(&params.filter_list, "filter_list")?;
    ip_filter::is_not_in_deny_list(expect_str(value)?, &list).map_err(AppError::from)
}

fn nullable(value: &Value) -> Option<&Value> {
    if value.is_null() {
        None
    } else {
        Some(value)
    }
}

fn nullable_str(value: &Value) -> AppResult<Option<&str>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.as_str())),
        other => Err(AppError::Internal(format!("expected a string value, got {}", other))),
    }
}

fn json_size(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.len()),
        Value::Array(items) => Some(items.len()),
        Value::Object(map) => Some(map.len()),
        _ => None,
    }
}
