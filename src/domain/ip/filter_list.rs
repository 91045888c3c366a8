//! Filter list configuration data
//!
//! An ordered collection of textual range specifiers. Constructed once from
//! configuration, read-only thereafter, safe for concurrent reads.

use serde::{Deserialize, Serialize};

use crate::domain::ip::classifier::ClassifiedAddress;
use crate::domain::ip::matcher;
use crate::shared::error::ValidationError;

/// List of range specifiers for filter configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IpFilterList {
    ranges: Vec<String>,
}

impl IpFilterList {
    pub fn new(ranges: Vec<String>) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &[String] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Whether `candidate` matches any configured entry.
    ///
    /// Entries are evaluated in order, accepting on the first structural
    /// match; an empty list matches nothing. A malformed entry surfaces as
    /// an `InvalidIp` error rather than a silent non-match.
    pub fn any_match(&self, candidate: &ClassifiedAddress) -> Result<bool, ValidationError> {
        for range in &self.ranges {
            if matcher::matches(candidate, range)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl From<Vec<String>> for IpFilterList {
    fn from(ranges: Vec<String>) -> Self {
        Self::new(ranges)
    }
}

impl FromIterator<String> for IpFilterList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[&str]) -> IpFilterList {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn accepts_on_first_match() {
        let list = list(&["10.0.0.0/8", "192.168.1.1"]);
        let candidate = ClassifiedAddress::classify("10.20.30.40");
        assert!(list.any_match(&candidate).unwrap());
    }

    #[test]
    fn exhausted_list_is_a_non_match() {
        let list = list(&["10.0.0.0/8", "192.168.1.1"]);
        let candidate = ClassifiedAddress::classify("172.16.0.1");
        assert!(!list.any_match(&candidate).unwrap());
    }

    #[test]
    fn empty_list_matches_nothing() {
        let list = IpFilterList::default();
        let candidate = ClassifiedAddress::classify("127.0.0.1");
        assert!(!list.any_match(&candidate).unwrap());
    }

    #[test]
    fn malformed_entry_is_an_error() {
        let list = list(&["definitely-not-a-range"]);
        let candidate = ClassifiedAddress::classify("127.0.0.1");
        assert!(list.any_match(&candidate).is_err());
    }

    #[test]
    fn mixed_entry_forms_are_supported() {
        let list = list(&["192.168.", "10.0.0.0/8", "127.0.0.1"]);
        for ip in ["192.168.7.7", "10.1.2.3", "127.0.0.1"] {
            let candidate = ClassifiedAddress::classify(ip);
            assert!(list.any_match(&candidate).unwrap(), "{}", ip);
        }
    }
}
