//! URL validator and the element it produces.

use std::fmt;

use url::ParseError;

use super::Validator;
use crate::{FlagError, FlagResult};

/// Stand-in base used only to check the syntax of relative references.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// Accepts absolute URLs and relative references.
///
/// Absolute input is parsed with [`url::Url::parse`]. Input without a scheme
/// (`foobar`, `/api/v1`, `//cdn.example.com/x`, or the empty string) is a
/// relative reference and is checked by resolving it against a placeholder
/// base. Input whose scheme is empty, such as `://foobar`, is rejected with
/// `missing protocol scheme`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlSyntax;

/// A validated URL reference that remembers the text it was parsed from.
///
/// The URL parser normalises its input (for example by appending `/` to an
/// empty path), so rendering goes through the original text to keep
/// `set` followed by `to_string` lossless. Absolute references also carry
/// the structured [`url::Url`]; relative ones can be turned into one with
/// [`ParsedUrl::resolve`].
///
/// # Examples
///
/// ```
/// use flagutil::{FlagValue, Url};
/// let mut url = Url::new();
/// url.set("https://google.com").expect("valid URL");
/// let parsed = url.get().expect("set succeeded");
/// assert_eq!(parsed.scheme(), Some("https"));
/// assert_eq!(parsed.host_str(), Some("google.com"));
/// assert_eq!(url.to_string(), "https://google.com");
///
/// url.set("/api/v1").expect("relative reference");
/// let relative = url.get().expect("set succeeded");
/// assert!(!relative.is_absolute());
/// let base = url::Url::parse("https://example.com/root/").expect("base");
/// let joined = relative.resolve(&base).expect("resolves");
/// assert_eq!(joined.as_str(), "https://example.com/api/v1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    absolute: Option<url::Url>,
    raw: String,
}

impl ParsedUrl {
    /// Returns the structured URL when the reference is absolute.
    #[must_use]
    pub const fn as_url(&self) -> Option<&url::Url> {
        self.absolute.as_ref()
    }

    /// Whether the reference carries its own scheme.
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        self.absolute.is_some()
    }

    /// Returns the scheme of an absolute reference.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.absolute.as_ref().map(url::Url::scheme)
    }

    /// Returns the host of an absolute reference, if it has one.
    #[must_use]
    pub fn host_str(&self) -> Option<&str> {
        self.absolute.as_ref().and_then(url::Url::host_str)
    }

    /// Returns the text the reference was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Resolves the reference against `base`.
    ///
    /// Absolute references resolve to themselves.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::InvalidUrl`] when the reference cannot be joined
    /// onto `base`, for example when `base` cannot be a base URL.
    pub fn resolve(&self, base: &url::Url) -> FlagResult<url::Url> {
        if let Some(absolute) = &self.absolute {
            return Ok(absolute.clone());
        }
        base.join(&self.raw).map_err(|err| invalid(&self.raw, describe(err)))
    }

    /// Consumes the wrapper, returning the structured URL of an absolute
    /// reference.
    #[must_use]
    pub fn into_url(self) -> Option<url::Url> {
        self.absolute
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for ParsedUrl {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

fn invalid(raw: &str, detail: String) -> FlagError {
    FlagError::InvalidUrl {
        input: raw.to_owned(),
        detail,
    }
}

fn describe(err: ParseError) -> String {
    match err {
        ParseError::RelativeUrlWithoutBase => "missing protocol scheme".to_owned(),
        other => other.to_string(),
    }
}

/// A scheme-less reference must not look like `segment:rest`, or it would
/// read as a scheme once resolved.
fn first_segment_has_colon(raw: &str) -> bool {
    if raw.starts_with('/') {
        return false;
    }
    let segment = raw.split_once('/').map_or(raw, |(head, _)| head);
    segment.contains(':')
}

fn validate_relative(raw: &str) -> FlagResult<()> {
    if first_segment_has_colon(raw) {
        return Err(invalid(
            raw,
            "first path segment in URL cannot contain colon".to_owned(),
        ));
    }
    url::Url::parse(RELATIVE_BASE)
        .and_then(|base| base.join(raw))
        .map(drop)
        .map_err(|err| invalid(raw, describe(err)))
}

impl Validator for UrlSyntax {
    type Element = ParsedUrl;

    fn validate(raw: &str) -> FlagResult<ParsedUrl> {
        if raw.starts_with(':') {
            return Err(invalid(raw, describe(ParseError::RelativeUrlWithoutBase)));
        }
        let absolute = match url::Url::parse(raw) {
            Ok(url) => Some(url),
            Err(ParseError::RelativeUrlWithoutBase) => {
                validate_relative(raw)?;
                None
            }
            Err(err) => return Err(invalid(raw, describe(err))),
        };
        Ok(ParsedUrl {
            absolute,
            raw: raw.to_owned(),
        })
    }
}
