//! Network address validator.
//!
//! Splitting follows the grammar of Go's `net.SplitHostPort`: the port is
//! everything after the last colon, unless the host is a bracketed IPv6
//! literal, in which case the port must follow the closing bracket. On top
//! of that grammar the host must be non-empty and the port must be either a
//! number in `0..=65535` or a service name.

use std::fmt;

use super::Validator;
use crate::{AddressIssue, FlagError, FlagResult};

/// Accepts `host:port` pairs such as `localhost:4000`, `[::1]:80` or
/// `db.internal:postgres`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressSyntax;

/// A validated `host:port` pair.
///
/// Renders exactly as it was given, brackets included.
///
/// # Examples
///
/// ```
/// use flagutil::{AddressSyntax, Validator};
/// let addr = AddressSyntax::validate("[::1]:8080").expect("valid address");
/// assert_eq!(addr.host(), "::1");
/// assert_eq!(addr.port(), "8080");
/// assert_eq!(addr.to_string(), "[::1]:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostPort {
    raw: String,
    host: String,
    port: String,
}

impl HostPort {
    /// Host part, without IPv6 brackets.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port part: a number or a service name.
    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }

    /// The address exactly as it was supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for HostPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for HostPort {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl PartialEq<str> for HostPort {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for HostPort {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}

impl From<HostPort> for String {
    fn from(addr: HostPort) -> Self {
        addr.raw
    }
}

/// Splits a bracketed address; `after_open` is everything after the leading `[`.
fn split_bracketed(after_open: &str) -> Result<(&str, &str), AddressIssue> {
    let (host, tail) = after_open
        .split_once(']')
        .ok_or(AddressIssue::MissingBracket)?;
    let port = match tail.strip_prefix(':') {
        None => return Err(AddressIssue::MissingPort),
        Some(port) if port.contains(':') => return Err(AddressIssue::TooManyColons),
        Some(port) => port,
    };
    if after_open.contains('[') {
        return Err(AddressIssue::UnexpectedOpenBracket);
    }
    if tail.contains(']') {
        return Err(AddressIssue::UnexpectedCloseBracket);
    }
    Ok((host, port))
}

fn split_plain(input: &str) -> Result<(&str, &str), AddressIssue> {
    let (host, port) = input.rsplit_once(':').ok_or(AddressIssue::MissingPort)?;
    if host.contains(':') {
        return Err(AddressIssue::TooManyColons);
    }
    if input.contains('[') {
        return Err(AddressIssue::UnexpectedOpenBracket);
    }
    if input.contains(']') {
        return Err(AddressIssue::UnexpectedCloseBracket);
    }
    Ok((host, port))
}

fn is_valid_port(port: &str) -> bool {
    if port.bytes().all(|b| b.is_ascii_digit()) {
        return port.parse::<u16>().is_ok();
    }
    port.bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_'))
}

/// Splits `input` into host and port, rejecting empty or malformed parts.
fn split_host_port(input: &str) -> Result<(&str, &str), AddressIssue> {
    if !input.contains(':') {
        return Err(AddressIssue::MissingPort);
    }
    let (host, port) = input
        .strip_prefix('[')
        .map_or_else(|| split_plain(input), split_bracketed)?;
    if host.is_empty() {
        return Err(AddressIssue::MissingHost);
    }
    if port.is_empty() {
        return Err(AddressIssue::MissingPort);
    }
    if !is_valid_port(port) {
        return Err(AddressIssue::InvalidPort);
    }
    Ok((host, port))
}

impl Validator for AddressSyntax {
    type Element = HostPort;

    fn validate(raw: &str) -> FlagResult<HostPort> {
        let (host, port) = split_host_port(raw).map_err(|detail| FlagError::InvalidAddress {
            input: raw.to_owned(),
            detail,
        })?;
        Ok(HostPort {
            raw: raw.to_owned(),
            host: host.to_owned(),
            port: port.to_owned(),
        })
    }
}
