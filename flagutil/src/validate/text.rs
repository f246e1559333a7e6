//! Pass-through validator for plain strings.

use super::Validator;
use crate::FlagResult;

/// Accepts every substring unchanged, including empty ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassThrough;

impl Validator for PassThrough {
    type Element = String;

    fn validate(raw: &str) -> FlagResult<String> {
        Ok(raw.to_owned())
    }
}
