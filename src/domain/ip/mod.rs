//! IP address classification and range matching

pub mod classifier;
pub mod filter_list;
pub mod matcher;

pub use classifier::{AddressKind, ClassifiedAddress};
pub use filter_list::IpFilterList;
pub use matcher::{matches_text, RangeMatcher};
