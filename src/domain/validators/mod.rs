//! Out-of-the-box validators

pub mod basic;
pub mod ip_filter;
pub mod number;
pub mod time;

pub use basic::{
    is_blank, is_email, is_empty_collection, is_false, is_not_blank, is_not_empty_collection,
    is_not_null, is_null, is_true, is_url, matches_regex, validate_size, HasSize,
};
pub use ip_filter::{is_in_allow_list, is_ip, is_not_in_deny_list, ListPolarity};
pub use number::{validate_number, NumberLocale, NumberType};
pub use time::{is_elapsed, is_not_elapsed, validate_time};
