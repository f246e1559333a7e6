//! Reasons a `host:port` string can fail to split.

use thiserror::Error;

/// Why an address failed validation.
///
/// The messages follow the wording of Go's `net.SplitHostPort`, so
/// diagnostics read the same as those of tools built on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AddressIssue {
    /// No port separator, or an empty port.
    #[error("missing port in address")]
    MissingPort,
    /// A colon remains inside an unbracketed host.
    #[error("too many colons in address")]
    TooManyColons,
    /// A bracketed IPv6 literal is never closed.
    #[error("missing ']' in address")]
    MissingBracket,
    /// A stray opening bracket.
    #[error("unexpected '[' in address")]
    UnexpectedOpenBracket,
    /// A stray closing bracket.
    #[error("unexpected ']' in address")]
    UnexpectedCloseBracket,
    /// The host part is empty.
    #[error("missing host in address")]
    MissingHost,
    /// The port is neither a number in range nor a service name.
    #[error("invalid port in address")]
    InvalidPort,
}
