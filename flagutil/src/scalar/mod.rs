//! Single validated values.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::validate::{DurationSyntax, Validator};
use crate::{FlagError, FlagResult, FlagValue};

/// A single validated value.
///
/// Uses the same validators as [`List`](crate::List) but treats the whole
/// input as one element: nothing is split. A successful
/// [`FlagValue::set`] replaces the held value; a failed one keeps it.
///
/// # Examples
///
/// ```
/// use flagutil::{FlagValue, NetworkAddress};
/// let mut addr = NetworkAddress::new();
/// assert!(!addr.is_valid());
/// addr.set("a:4000").expect("valid address");
/// assert!(addr.is_valid());
/// assert_eq!(addr.to_string(), "a:4000");
/// ```
pub struct Scalar<V: Validator> {
    value: Option<V::Element>,
    _validator: PhantomData<fn() -> V>,
}

impl<V: Validator> Scalar<V> {
    /// Creates an unset value.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: None,
            _validator: PhantomData,
        }
    }

    /// Returns `true` once a call to `set` has succeeded.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the held element, if any.
    #[must_use]
    pub const fn get(&self) -> Option<&V::Element> {
        self.value.as_ref()
    }

    /// Consumes the value, returning the held element.
    #[must_use]
    pub fn into_inner(self) -> Option<V::Element> {
        self.value
    }
}

impl Scalar<DurationSyntax> {
    /// Returns the held duration as a standard library duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use flagutil::Duration as DurationFlag;
    /// let timeout: DurationFlag = "10s".parse().expect("valid duration");
    /// assert_eq!(timeout.as_duration(), Some(Duration::from_secs(10)));
    /// ```
    #[must_use]
    pub fn as_duration(&self) -> Option<std::time::Duration> {
        self.value.map(Into::into)
    }
}

impl<V: Validator> FlagValue for Scalar<V> {
    fn set(&mut self, raw: &str) -> FlagResult<()> {
        let element = V::validate(raw).inspect_err(|err| {
            tracing::debug!(
                input = raw,
                error = %err,
                kept_previous = self.value.is_some(),
                "rejected flag value"
            );
        })?;
        self.value = Some(element);
        Ok(())
    }
}

impl<V: Validator> fmt::Display for Scalar<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value
            .as_ref()
            .map_or(Ok(()), |value| write!(f, "{value}"))
    }
}

impl<V: Validator> FromStr for Scalar<V> {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut value = Self::new();
        value.set(s)?;
        Ok(value)
    }
}

impl<V: Validator> Default for Scalar<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Validator> Clone for Scalar<V> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _validator: PhantomData,
        }
    }
}

impl<V: Validator> fmt::Debug for Scalar<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Scalar").field(&self.value).finish()
    }
}

impl<V: Validator> PartialEq for Scalar<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
