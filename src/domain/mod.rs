//! Domain logic: address classification, range matching, validators and
//! aggregation

pub mod aggregator;
pub mod ip;
pub mod messages;
pub mod validators;
