//! The contract shared by every flag value.

use std::fmt;

use crate::FlagResult;

/// A value that can be populated from flag text and rendered back to it.
///
/// Flag engines call [`FlagValue::set`] with the raw argument and use
/// [`fmt::Display`] to show defaults or echo the parsed value. Instances are
/// exclusively owned by their declaration site; `&mut self` keeps concurrent
/// `set` calls on one value out of safe code.
pub trait FlagValue: fmt::Display {
    /// Parses `raw` into the value.
    ///
    /// # Errors
    ///
    /// Returns the [`FlagError`](crate::FlagError) of the first element that
    /// fails validation.
    fn set(&mut self, raw: &str) -> FlagResult<()>;
}
