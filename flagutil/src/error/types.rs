//! Primary error enum for flag value parsing.

use thiserror::Error;

use super::AddressIssue;

/// Convenience alias for results carrying a [`FlagError`].
pub type FlagResult<T> = Result<T, FlagError>;

/// Errors that can occur while setting a flag value.
///
/// Each variant carries the exact text that failed validation. For list
/// values this is the offending element, never the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FlagError {
    /// The input is not a valid `host:port` pair.
    #[error("address {input}: {detail}")]
    InvalidAddress {
        /// Text that failed to split.
        input: String,
        /// Which part of the address was malformed.
        detail: AddressIssue,
    },

    /// The input is not a valid URL reference.
    #[error("parse \"{input}\": {detail}")]
    InvalidUrl {
        /// Text handed to the URL parser.
        input: String,
        /// Message from the URL parser.
        detail: String,
    },

    /// The input is not a recognised duration.
    #[error("invalid duration \"{input}\": {detail}")]
    InvalidDuration {
        /// Text handed to the duration parser.
        input: String,
        /// Message from the duration parser.
        detail: String,
    },
}

impl FlagError {
    /// Returns the text that failed validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagutil::{AddressIssue, FlagError};
    /// let err = FlagError::InvalidAddress {
    ///     input: "foo".into(),
    ///     detail: AddressIssue::MissingPort,
    /// };
    /// assert_eq!(err.input(), "foo");
    /// ```
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidAddress { input, .. }
            | Self::InvalidUrl { input, .. }
            | Self::InvalidDuration { input, .. } => input,
        }
    }
}
