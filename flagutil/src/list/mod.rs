//! Delimited list values.

use std::fmt::{self, Write as _};
use std::marker::PhantomData;
use std::ops::Deref;
use std::str::FromStr;

use crate::validate::{DurationSyntax, Validator};
use crate::{FlagError, FlagResult, FlagValue};

/// Delimiter used unless [`List::with_delimiter`] says otherwise.
pub const DEFAULT_DELIMITER: char = ',';

/// An ordered list of validated elements parsed from delimited text.
///
/// [`FlagValue::set`] splits its input on the delimiter and validates every
/// substring with `V`, including empty ones, so `"a,,b"` hands `""` to the
/// validator. Each call appends to the list.
///
/// When an element fails validation, `set` returns that element's error and
/// leaves every element accepted before it in the list. Callers that need
/// all-or-nothing behaviour should parse into a fresh list (for example with
/// [`str::parse`]) and swap it in on success.
///
/// # Examples
///
/// ```
/// use flagutil::{FlagValue, NetworkAddresses};
/// let mut addrs = NetworkAddresses::new();
/// addrs.set("localhost:4000,localhost:5000").expect("valid addresses");
/// assert_eq!(addrs[0], "localhost:4000");
/// assert_eq!(addrs.to_string(), "localhost:4000,localhost:5000");
/// ```
pub struct List<V: Validator> {
    items: Vec<V::Element>,
    delimiter: char,
    _validator: PhantomData<fn() -> V>,
}

impl<V: Validator> List<V> {
    /// Creates an empty list split on commas.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_delimiter(DEFAULT_DELIMITER)
    }

    /// Creates an empty list split on `delimiter`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagutil::{FlagValue, Strings};
    /// let mut paths = Strings::with_delimiter(':');
    /// paths.set("/usr/bin:/bin").expect("pass-through never fails");
    /// assert_eq!(paths.len(), 2);
    /// ```
    #[must_use]
    pub const fn with_delimiter(delimiter: char) -> Self {
        Self {
            items: Vec::new(),
            delimiter,
            _validator: PhantomData,
        }
    }

    /// Delimiter used for splitting and joining.
    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Appends an element that has already been validated.
    pub fn push(&mut self, element: V::Element) {
        self.items.push(element);
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[V::Element] {
        &self.items
    }

    /// Renders every element on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagutil::NetworkAddresses;
    /// let addrs: NetworkAddresses = "a:4000,b:5000".parse().expect("valid addresses");
    /// assert_eq!(addrs.to_strings(), ["a:4000", "b:5000"]);
    /// ```
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.items.iter().map(ToString::to_string).collect()
    }

    /// Consumes the list, returning its elements.
    #[must_use]
    pub fn into_vec(self) -> Vec<V::Element> {
        self.items
    }
}

impl List<DurationSyntax> {
    /// Returns the elements as standard library durations.
    #[must_use]
    pub fn to_durations(&self) -> Vec<std::time::Duration> {
        self.items.iter().copied().map(Into::into).collect()
    }
}

impl<V: Validator> FlagValue for List<V> {
    fn set(&mut self, raw: &str) -> FlagResult<()> {
        let before = self.items.len();
        for part in raw.split(self.delimiter) {
            let element = V::validate(part).inspect_err(|err| {
                tracing::debug!(
                    input = raw,
                    error = %err,
                    kept = self.items.len().saturating_sub(before),
                    "rejected delimited flag value"
                );
            })?;
            self.items.push(element);
        }
        tracing::trace!(
            input = raw,
            appended = self.items.len().saturating_sub(before),
            "parsed delimited flag value"
        );
        Ok(())
    }
}

impl<V: Validator> fmt::Display for List<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_char(self.delimiter)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl<V: Validator> FromStr for List<V> {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut list = Self::new();
        list.set(s)?;
        Ok(list)
    }
}

impl<V: Validator> Default for List<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Validator> Clone for List<V> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            delimiter: self.delimiter,
            _validator: PhantomData,
        }
    }
}

impl<V: Validator> fmt::Debug for List<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("items", &self.items)
            .field("delimiter", &self.delimiter)
            .finish()
    }
}

impl<V: Validator> PartialEq for List<V> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<V: Validator> Deref for List<V> {
    type Target = [V::Element];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<V: Validator> FromIterator<V::Element> for List<V> {
    fn from_iter<I: IntoIterator<Item = V::Element>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            delimiter: DEFAULT_DELIMITER,
            _validator: PhantomData,
        }
    }
}

impl<V: Validator> Extend<V::Element> for List<V> {
    fn extend<I: IntoIterator<Item = V::Element>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<V: Validator> IntoIterator for List<V> {
    type Item = V::Element;
    type IntoIter = std::vec::IntoIter<V::Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, V: Validator> IntoIterator for &'a List<V> {
    type Item = &'a V::Element;
    type IntoIter = std::slice::Iter<'a, V::Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests;
