//! Error types for the date translator and the file helpers.
//!
//! Only [`Error::Parse`] is a failure of this crate's own making: the input did
//! not match the translated pattern. Everything else is either a programmer
//! error caught up front ([`Error::InvalidPattern`], [`Error::InvalidZone`]) or
//! the underlying platform/library error passed through unchanged.
//!
//! ## Examples
//!
//! ```rust
//! use xutils::{date_parse, Error};
//!
//! let result = date_parse("not-a-date", "Y-m-d");
//! assert!(matches!(result, Err(Error::Parse { .. })));
//!
//! if let Err(err) = result {
//!     eprintln!("{}", err);
//! }
//! ```

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The input string does not match the format.
    #[error("cannot parse {input:?} as {format:?}: {msg}")]
    Parse {
        input: String,
        format: String,
        msg: String,
    },

    /// The translated pattern contains native syntax chrono does not understand.
    #[error("invalid date format {format:?} (translated to {native:?})")]
    InvalidPattern { format: String, native: String },

    /// A time zone name that is neither `local`, `utc` nor a numeric offset.
    #[error("invalid time zone: {0:?}")]
    InvalidZone(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("{} is a directory", .0.display())]
    IsADirectory(PathBuf),
}

impl Error {
    /// Creates a parse error for `input` against the PHP-style `format`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xutils::Error;
    ///
    /// let err = Error::parse("2024-13-01", "Y-m-d", "input is out of range");
    /// assert!(err.is_parse());
    /// assert!(err.to_string().contains("out of range"));
    /// ```
    pub fn parse<M: fmt::Display>(input: &str, format: &str, msg: M) -> Self {
        Error::Parse {
            input: input.to_string(),
            format: format.to_string(),
            msg: msg.to_string(),
        }
    }

    pub fn invalid_pattern(format: &str, native: &str) -> Self {
        Error::InvalidPattern {
            format: format.to_string(),
            native: native.to_string(),
        }
    }

    pub fn invalid_zone(zone: &str) -> Self {
        Error::InvalidZone(zone.to_string())
    }

    /// Returns `true` for [`Error::Parse`].
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
