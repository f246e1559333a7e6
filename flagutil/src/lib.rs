//! Validated flag values for command-line parsers.
//!
//! This crate provides adapters that let a flag parser accept
//! comma-separated lists, network addresses, URLs and durations. Every
//! adapter implements [`FlagValue`]: parse from a string with
//! [`FlagValue::set`], render back with [`std::fmt::Display`].
//!
//! [`List`] splits its input on a delimiter and validates each element;
//! [`Scalar`] validates its whole input as one element. Both are generic
//! over a [`Validator`], and the aliases below cover the common cases. The
//! adapters plug into `clap` through [`FlagValueParser`] and into serde-based
//! configuration layers through their `Serialize`/`Deserialize` impls.
//!
//! ```
//! use flagutil::{FlagValue, NetworkAddresses};
//!
//! let mut addrs = NetworkAddresses::new();
//! addrs.set("localhost:4000,localhost:5000").expect("valid addresses");
//! assert_eq!(addrs.to_string(), "localhost:4000,localhost:5000");
//! ```

mod env;
mod error;
mod list;
mod parser;
mod scalar;
mod serialization;
pub mod validate;
mod value;

pub use env::{env_or_default, env_or_parse};
pub use error::{AddressIssue, FlagError, FlagResult};
pub use list::{DEFAULT_DELIMITER, List};
pub use parser::FlagValueParser;
pub use scalar::Scalar;
pub use validate::{
    AddressSyntax, DurationSyntax, HostPort, ParsedUrl, PassThrough, UrlSyntax, Validator,
};
pub use value::FlagValue;

/// Comma-separated strings, accepted as-is.
pub type Strings = List<PassThrough>;

/// Comma-separated `host:port` pairs.
pub type NetworkAddresses = List<AddressSyntax>;

/// Addresses a server listens on; the same type as [`NetworkAddresses`].
pub type ListenAddresses = NetworkAddresses;

/// Comma-separated URL references, absolute or relative.
pub type Urls = List<UrlSyntax>;

/// Comma-separated durations such as `10s,1m`.
pub type Durations = List<DurationSyntax>;

/// A single `host:port` pair.
pub type NetworkAddress = Scalar<AddressSyntax>;

/// A single URL reference, absolute or relative.
pub type Url = Scalar<UrlSyntax>;

/// A single duration such as `250ms`.
pub type Duration = Scalar<DurationSyntax>;
