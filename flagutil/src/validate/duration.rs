//! Duration validator backed by `humantime`.

use super::Validator;
use crate::{FlagError, FlagResult};

/// Accepts a magnitude followed by a unit suffix such as `10ms`, `10s`,
/// `10m`, `10h` or compound forms like `1h30m`.
///
/// A bare `0` is also accepted. Elements render in `humantime` form, which
/// parses back to the same duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationSyntax;

impl Validator for DurationSyntax {
    type Element = humantime::Duration;

    fn validate(raw: &str) -> FlagResult<humantime::Duration> {
        if raw == "0" {
            return Ok(std::time::Duration::ZERO.into());
        }
        raw.parse::<humantime::Duration>()
            .map_err(|err| FlagError::InvalidDuration {
                input: raw.to_owned(),
                detail: err.to_string(),
            })
    }
}
