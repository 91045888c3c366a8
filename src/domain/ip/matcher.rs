//! Address range matching
//!
//! Decides set membership of a classified address against a textual range
//! specifier: a partial dotted-decimal prefix, an exact address, or a
//! CIDR-style `address/prefix` pair.

use std::net::IpAddr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::ip::classifier::ClassifiedAddress;
use crate::domain::messages;
use crate::shared::error::{ValidationError, ValidationErrorKind};

/// One to three dot-separated groups of 1-3 digits, optionally
/// dot-terminated. A full four-group address never matches this shape.
static PARTIAL_IPV4_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}(\.\d{1,3}){0,2}\.?$").expect("partial prefix pattern is valid"));

/// Test whether `candidate` belongs to the range denoted by `range`.
///
/// Rule order: a partial-prefix shaped specifier is a textual prefix test;
/// anything else is parsed as an exact address or CIDR pair. An unparseable
/// specifier is an `InvalidIp` error, not a silent non-match.
pub fn matches(candidate: &ClassifiedAddress, range: &str) -> Result<bool, ValidationError> {
    if PARTIAL_IPV4_PATTERN.is_match(range) {
        return Ok(matches_partial_prefix(candidate.text(), range));
    }

    let matcher = RangeMatcher::parse(range)?;
    Ok(matcher.matches(candidate))
}

/// Text-based form of [`matches`]: the candidate is classified first.
pub fn matches_text(candidate: &str, range: &str) -> Result<bool, ValidationError> {
    matches(&ClassifiedAddress::classify(candidate), range)
}

/// Partial prefixes are matched by substring containment of the
/// dot-terminated literal, not anchored at the start of the candidate. A
/// prefix like "1.2." can therefore match "11.2.3.4". Kept for
/// compatibility with existing filter configurations.
fn matches_partial_prefix(candidate: &str, prefix: &str) -> bool {
    let mut prefix = prefix.to_string();
    if !prefix.ends_with('.') {
        prefix.push('.');
    }
    candidate.contains(&prefix)
}

/// A parsed range specifier: an address with an optional prefix length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeMatcher {
    address: IpAddr,
    prefix_bits: Option<u32>,
}

impl RangeMatcher {
    /// Parse `spec` as `address` or `address/prefix`.
    pub fn parse(spec: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::new(ValidationErrorKind::InvalidIp, messages::invalid_range(spec));

        let (address_text, prefix_bits) = match spec.split_once('/') {
            Some((address, prefix)) => {
                let bits = prefix.trim().parse::<u32>().map_err(|_| invalid())?;
                (address.trim(), Some(bits))
            }
            None => (spec, None),
        };

        let address = parse_address(address_text).ok_or_else(invalid)?;

        if let Some(bits) = prefix_bits {
            let width = 8 * address_width(&address) as u32;
            if bits > width {
                return Err(invalid());
            }
        }

        Ok(Self { address, prefix_bits })
    }

    /// Whether `candidate` is a member of this range.
    ///
    /// Family mismatch is always a non-match, as is a candidate whose text
    /// cannot be reduced to address bytes.
    pub fn matches(&self, candidate: &ClassifiedAddress) -> bool {
        let remote = match parse_address(candidate.text()) {
            Some(address) => address,
            None => return false,
        };

        if !same_family(&remote, &self.address) {
            return false;
        }

        match self.prefix_bits {
            None => remote == self.address,
            Some(bits) => masked_eq(&address_bytes(&remote), &address_bytes(&self.address), bits),
        }
    }
}

/// Compare two byte strings under an N-bit prefix mask.
///
/// Only the bytes covered by the mask are inspected; a non-multiple-of-8
/// prefix sets the top `odd_bits` of the final covered byte.
fn masked_eq(remote: &[u8], required: &[u8], bits: u32) -> bool {
    let odd_bits = bits % 8;
    let mask_len = (bits / 8 + if odd_bits == 0 { 0 } else { 1 }) as usize;

    for i in 0..mask_len {
        let mask = if odd_bits != 0 && i == mask_len - 1 {
            ((((1u16 << odd_bits) - 1) << (8 - odd_bits)) & 0xFF) as u8
        } else {
            0xFF
        };

        if remote[i] & mask != required[i] & mask {
            return false;
        }
    }

    true
}

fn parse_address(text: &str) -> Option<IpAddr> {
    // A %scope suffix is dropped before parsing
    let text = match text.find('%') {
        Some(idx) if idx > 0 => &text[..idx],
        _ => text,
    };
    text.parse::<IpAddr>().ok()
}

fn same_family(a: &IpAddr, b: &IpAddr) -> bool {
    matches!((a, b), (IpAddr::V4(_), IpAddr::V4(_)) | (IpAddr::V6(_), IpAddr::V6(_)))
}

fn address_width(address: &IpAddr) -> usize {
    match address {
        IpAddr::V4(_) => 4,
        IpAddr::V6(_) => 16,
    }
}

fn address_bytes(address: &IpAddr) -> Vec<u8> {
    match address {
        IpAddr::V4(v4) => v4.octets().to_vec(),
        IpAddr::V6(v6) => v6.octets().to_vec(),
    }
}
