//! Textual IP address classification
//!
//! Pattern-based classification of raw text into IPv4, IPv6 or invalid.
//! Classification is pure and total: any input yields a classification, and
//! validity is a property of the resulting kind.

use once_cell::sync::Lazy;
use regex::Regex;

/// Strict dotted-quad: exactly four octets, each 0-255, anchored.
static IPV4_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(25[0-5]|2[0-4]\d|[0-1]?\d?\d)(\.(25[0-5]|2[0-4]\d|[0-1]?\d?\d)){3}$")
        .expect("IPv4 pattern is valid")
});

/// Standard IPv6: eight full 16-bit hex groups.
static IPV6_STD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}$").expect("IPv6 pattern is valid"));

/// Compressed IPv6: a single `::` collapsing one or more zero groups.
static IPV6_COMPRESSED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((?:[0-9A-Fa-f]{1,4}(?::[0-9A-Fa-f]{1,4})*)?)::((?:[0-9A-Fa-f]{1,4}(?::[0-9A-Fa-f]{1,4})*)?)$")
        .expect("compressed IPv6 pattern is valid")
});

/// Address family discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    V4,
    V6,
    Invalid,
}

/// A textual address tagged with its classification.
///
/// Immutable once constructed; equality is value equality of text and kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedAddress {
    text: String,
    kind: AddressKind,
}

impl ClassifiedAddress {
    /// Classify raw text into an address.
    ///
    /// Never fails: unrecognized input produces an `Invalid` address, which
    /// matches nothing.
    pub fn classify(text: &str) -> Self {
        let kind = if is_ipv4(text) {
            AddressKind::V4
        } else if is_ipv6(text) {
            AddressKind::V6
        } else {
            AddressKind::Invalid
        };

        Self {
            text: text.to_string(),
            kind,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    pub fn is_valid(&self) -> bool {
        self.kind != AddressKind::Invalid
    }
}

fn is_ipv4(input: &str) -> bool {
    IPV4_PATTERN.is_match(input)
}

fn is_ipv6(input: &str) -> bool {
    is_ipv6_std(input) || is_ipv6_compressed(input)
}

fn is_ipv6_std(input: &str) -> bool {
    // A trailing %scope suffix is stripped before matching
    let ip = match input.find('%') {
        Some(idx) if idx > 0 => &input[..idx],
        _ => input,
    };
    IPV6_STD_PATTERN.is_match(ip)
}

fn is_ipv6_compressed(input: &str) -> bool {
    IPV6_COMPRESSED_PATTERN.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_dotted_quads_as_ipv4() {
        for text in ["192.168.0.0", "0.0.0.0", "255.255.255.255", "127.0.0.1"] {
            assert_eq!(ClassifiedAddress::classify(text).kind(), AddressKind::V4, "{}", text);
        }
    }

    #[test]
    fn rejects_malformed_ipv4() {
        for text in ["1.1.256.0", "12.1.2.", "1.2.3", "400.24.1.1900", "a.b.c.d", ""] {
            let address = ClassifiedAddress::classify(text);
            assert_eq!(address.kind(), AddressKind::Invalid, "{}", text);
            assert!(!address.is_valid());
        }
    }

    #[test]
    fn classifies_standard_ipv6() {
        for text in [
            "2001:0db8:0000:0000:0000:0000:0000:0001",
            "2001:db8:0:0:0:0:0:0",
            "fe80:0:0:0:202:b3ff:fe1e:8329",
        ] {
            assert_eq!(ClassifiedAddress::classify(text).kind(), AddressKind::V6, "{}", text);
        }
    }

    #[test]
    fn classifies_compressed_ipv6() {
        for text in ["FE80::0202:B3FF:FE1E:8329", "::1", "2001:db8::", "::"] {
            assert_eq!(ClassifiedAddress::classify(text).kind(), AddressKind::V6, "{}", text);
        }
    }

    #[test]
    fn strips_scope_suffix_before_matching() {
        let address = ClassifiedAddress::classify("fe80:0:0:0:202:b3ff:fe1e:8329%eth0");
        assert_eq!(address.kind(), AddressKind::V6);
        // The original text is preserved, scope included
        assert!(address.text().ends_with("%eth0"));
    }

    #[test]
    fn rejects_malformed_ipv6() {
        for text in ["2001:db8:::1", "fe80:1", "12345::1", "1:2:3:4:5:6:7:8:9"] {
            assert_eq!(
                ClassifiedAddress::classify(text).kind(),
                AddressKind::Invalid,
                "{}",
                text
            );
        }
    }

    #[test]
    fn classification_is_deterministic() {
        let a = ClassifiedAddress::classify("192.168.1.1");
        let b = ClassifiedAddress::classify("192.168.1.1");
        assert_eq!(a, b);
    }
}
