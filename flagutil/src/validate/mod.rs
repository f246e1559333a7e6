//! Element validators for flag values.
//!
//! A [`Validator`] turns one raw substring into a typed element or rejects
//! it with a [`FlagError`](crate::FlagError). Validators are zero-sized
//! markers; [`List`](crate::List) and [`Scalar`](crate::Scalar) are generic
//! over them.

mod address;
mod duration;
mod text;
mod url;

pub use self::url::{ParsedUrl, UrlSyntax};
pub use address::{AddressSyntax, HostPort};
pub use duration::DurationSyntax;
pub use text::PassThrough;

use std::fmt;

use crate::FlagResult;

/// Converts one raw substring into a validated element.
///
/// Implement this for your own marker type to plug a new element kind into
/// [`List`](crate::List) and [`Scalar`](crate::Scalar).
///
/// # Examples
///
/// ```
/// use flagutil::{FlagResult, FlagValue, List, Validator};
///
/// struct Upper;
///
/// impl Validator for Upper {
///     type Element = String;
///
///     fn validate(raw: &str) -> FlagResult<String> {
///         Ok(raw.to_uppercase())
///     }
/// }
///
/// let mut names = List::<Upper>::new();
/// names.set("ada,grace").expect("pass-through never fails");
/// assert_eq!(names.to_string(), "ADA,GRACE");
/// ```
pub trait Validator {
    /// Element produced by a successful validation. Its [`fmt::Display`]
    /// rendering is used when the containing value is turned back into a
    /// string.
    type Element: Clone + fmt::Debug + fmt::Display + PartialEq + Send + Sync + 'static;

    /// Validates `raw` and converts it into an element.
    ///
    /// # Errors
    ///
    /// Returns a [`FlagError`](crate::FlagError) describing why `raw` was
    /// rejected. The error must name `raw` itself.
    fn validate(raw: &str) -> FlagResult<Self::Element>;
}
