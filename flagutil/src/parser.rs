//! Integration with `clap`'s value parsers.
//!
//! Every [`List`] and [`Scalar`] implements [`ValueParserFactory`], so the
//! clap derive picks them up without extra attributes:
//!
//! ```
//! use clap::Parser;
//! use flagutil::{NetworkAddresses, Url};
//!
//! #[derive(Parser)]
//! struct Cli {
//!     #[arg(short = 'H', long)]
//!     listen: NetworkAddresses,
//!     #[arg(long)]
//!     upstream: Option<Url>,
//! }
//!
//! let cli = Cli::try_parse_from(["prog", "-H", "localhost:4000,localhost:5000"])
//!     .expect("valid arguments");
//! assert_eq!(cli.listen.len(), 2);
//! assert!(cli.upstream.is_none());
//! ```

use std::ffi::OsStr;

use clap::builder::{TypedValueParser, ValueParserFactory};
use clap::error::ErrorKind;
use clap::{Arg, Command};

use crate::validate::Validator;
use crate::{FlagValue, List, Scalar};

/// A clap value parser that fills a copy of a seed value.
///
/// The seed carries construction-time options such as a custom list
/// delimiter. Each argument occurrence starts from a fresh clone, so values
/// never leak between occurrences.
#[derive(Debug, Clone)]
pub struct FlagValueParser<T> {
    seed: T,
}

impl<T> FlagValueParser<T> {
    /// Creates a parser that clones `seed` before every `set`.
    #[must_use]
    pub const fn new(seed: T) -> Self {
        Self { seed }
    }
}

impl<T> TypedValueParser for FlagValueParser<T>
where
    T: FlagValue + Clone + Send + Sync + 'static,
{
    type Value = T;

    fn parse_ref(
        &self,
        cmd: &Command,
        arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let Some(raw) = value.to_str() else {
            return Err(clap::Error::new(ErrorKind::InvalidUtf8).with_cmd(cmd));
        };
        let mut parsed = self.seed.clone();
        parsed.set(raw).map_err(|err| {
            let arg_name = arg.map_or_else(|| "...".to_owned(), ToString::to_string);
            clap::Error::raw(
                ErrorKind::ValueValidation,
                format!("invalid value '{raw}' for '{arg_name}': {err}\n"),
            )
            .with_cmd(cmd)
        })?;
        Ok(parsed)
    }
}

impl<V: Validator> List<V> {
    /// Builds a clap value parser that splits on `delimiter`.
    ///
    /// # Examples
    ///
    /// ```
    /// use clap::Parser;
    /// use flagutil::Strings;
    ///
    /// #[derive(Parser)]
    /// struct Cli {
    ///     #[arg(long, value_parser = Strings::value_parser_with_delimiter(';'))]
    ///     tags: Strings,
    /// }
    ///
    /// let cli = Cli::try_parse_from(["prog", "--tags", "a,b;c"]).expect("valid arguments");
    /// assert_eq!(cli.tags.as_slice(), ["a,b", "c"]);
    /// ```
    #[must_use]
    pub const fn value_parser_with_delimiter(delimiter: char) -> FlagValueParser<Self> {
        FlagValueParser::new(Self::with_delimiter(delimiter))
    }
}

impl<V: Validator> ValueParserFactory for List<V> {
    type Parser = FlagValueParser<Self>;

    fn value_parser() -> Self::Parser {
        FlagValueParser::new(Self::new())
    }
}

impl<V: Validator> ValueParserFactory for Scalar<V> {
    type Parser = FlagValueParser<Self>;

    fn value_parser() -> Self::Parser {
        FlagValueParser::new(Self::new())
    }
}
