//! Environment variable lookups with fallbacks.

use crate::{FlagResult, FlagValue};

/// Returns the value of `name`, or `default` when the variable is unset,
/// empty or not valid Unicode.
///
/// # Examples
///
/// ```
/// use flagutil::env_or_default;
/// let addr = env_or_default("FLAGUTIL_DOC_UNSET_VARIABLE", "localhost:4000");
/// assert_eq!(addr, "localhost:4000");
/// ```
#[must_use]
pub fn env_or_default(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            tracing::debug!(name, "environment variable unset or empty; using default");
            default.to_owned()
        }
    }
}

/// Resolves `name` like [`env_or_default`] and parses the result into `T`.
///
/// The default goes through the same validation as the variable's value.
///
/// # Errors
///
/// Returns the [`FlagError`](crate::FlagError) raised by `T`'s validator.
///
/// # Examples
///
/// ```
/// use flagutil::{env_or_parse, NetworkAddresses};
/// let addrs: NetworkAddresses =
///     env_or_parse("FLAGUTIL_DOC_UNSET_VARIABLE", "a:4000,b:5000").expect("valid default");
/// assert_eq!(addrs.len(), 2);
/// ```
pub fn env_or_parse<T>(name: &str, default: &str) -> FlagResult<T>
where
    T: FlagValue + Default,
{
    let raw = env_or_default(name, default);
    let mut value = T::default();
    value.set(&raw)?;
    Ok(value)
}
