//! Error types produced while parsing flag values.

mod address;
mod types;

pub use address::AddressIssue;
pub use types::{FlagError, FlagResult};
