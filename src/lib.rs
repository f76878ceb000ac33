//! # xutils
//!
//! Everyday helpers with one piece of real logic at the centre: formatting and
//! parsing dates with PHP-style format tokens on top of chrono.
//!
//! ## Date formats
//!
//! Write formats the way PHP's `date()` does: `"Y-m-d H:i:s"`, `"D, d M Y"`,
//! `"YmdHis"`. They are translated once into chrono's `strftime` dialect and
//! chrono does the work. See [`datetime`] for the token table and the rules for
//! literal text.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use xutils::{date, date_parse_in, translate};
//!
//! assert_eq!(translate("Y-m-d H:i:s"), "%Y-%m-%d %H:%M:%S");
//!
//! let t = Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap();
//! assert_eq!(date(&t, "Y-m-d"), "2024-01-15");
//! assert_eq!(date(&t, "D, j M Y g:i a"), "Mon, 15 Jan 2024 8:30 am");
//!
//! let parsed = date_parse_in("2024-01-15 08:30:00", "Y-m-d H:i:s", &Utc).unwrap();
//! assert_eq!(parsed, t);
//! ```
//!
//! ## Everything else
//!
//! - [`array`] and [`map`]: column extraction, dedup, diff, cartesian
//!   product, keying and flipping
//! - [`strings`]: `uniqid`, UUIDs, substrings, number conversions, byte sizes
//! - [`fs`]: temp dirs and files, copy/move, recursive listing, cleanup
//! - [`archive`]: zip a directory, unzip, walk the entries of an archive
//!
//! ## Errors
//!
//! Parsing a date that does not match its format is the only failure this crate
//! produces itself ([`Error::Parse`]). Filesystem and zip helpers return the
//! underlying error unchanged.

pub mod archive;
pub mod array;
pub mod datetime;
pub mod error;
pub mod fs;
pub mod map;
pub mod options;
pub mod strings;

pub use datetime::{translate, DateFormat};
pub use error::{Error, Result};
pub use options::{DateOptions, Zone};

use chrono::{DateTime, Local, TimeZone};
use std::fmt;

/// Formats `t` with a PHP-style format.
///
/// # Examples
///
/// ```rust
/// use chrono::{FixedOffset, TimeZone};
/// use xutils::date;
///
/// let tz = FixedOffset::east_opt(8 * 3600).unwrap();
/// let t = tz.with_ymd_and_hms(2024, 7, 1, 21, 5, 9).unwrap();
/// assert_eq!(date(&t, "Y-m-d H:i:s P"), "2024-07-01 21:05:09 +08:00");
/// assert_eq!(date(&t, "l, F jS"), "Monday, July jS");
/// ```
#[must_use]
pub fn date<Tz>(t: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    DateFormat::new(format).format(t)
}

/// Parses `input` in the process's local time zone.
///
/// # Errors
///
/// Returns [`Error::Parse`] when `input` does not match `format`.
pub fn date_parse(input: &str, format: &str) -> Result<DateTime<Local>> {
    DateFormat::new(format).parse(input)
}

/// Parses `input` in the time zone `tz`.
///
/// # Examples
///
/// ```rust
/// use chrono::{FixedOffset, Utc};
/// use xutils::date_parse_in;
///
/// let tz = FixedOffset::east_opt(3600).unwrap();
/// let t = date_parse_in("15.01.2024 10:00", "d.m.Y H:i", &tz).unwrap();
/// assert_eq!(t.with_timezone(&Utc).to_rfc3339(), "2024-01-15T09:00:00+00:00");
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] when `input` does not match `format`.
pub fn date_parse_in<Tz: TimeZone>(input: &str, format: &str, tz: &Tz) -> Result<DateTime<Tz>> {
    DateFormat::new(format).parse_in(input, tz)
}

/// Formats Unix seconds as local time.
///
/// Returns `None` only when `ts` lies outside the range chrono can represent.
#[must_use]
pub fn unix_date(ts: i64, format: &str) -> Option<String> {
    unix_date_in(ts, format, &Local)
}

/// Formats Unix seconds in the time zone `tz`.
///
/// # Examples
///
/// ```rust
/// use chrono::Utc;
/// use xutils::unix_date_in;
///
/// assert_eq!(unix_date_in(0, "Y-m-d H:i:s", &Utc).as_deref(), Some("1970-01-01 00:00:00"));
/// assert_eq!(unix_date_in(i64::MAX, "Y", &Utc), None);
/// ```
#[must_use]
pub fn unix_date_in<Tz>(ts: i64, format: &str, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let t = DateTime::from_timestamp(ts, 0)?.with_timezone(tz);
    Some(date(&t, format))
}

/// Parses `input` in local time and returns Unix seconds.
///
/// # Errors
///
/// Returns [`Error::Parse`] when `input` does not match `format`.
pub fn date_unix(input: &str, format: &str) -> Result<i64> {
    date_parse(input, format).map(|t| t.timestamp())
}

/// Lossy form of [`date_unix`]: returns `0` when `input` cannot be parsed.
///
/// A parse failure is indistinguishable from the epoch itself. Use
/// [`date_unix`] whenever the caller needs to tell them apart.
///
/// # Examples
///
/// ```rust
/// use xutils::date_unix_lossy;
///
/// assert_eq!(date_unix_lossy("1970-01-02 00:00:00 +0000", "Y-m-d H:i:s O"), 86400);
/// assert_eq!(date_unix_lossy("not-a-date", "Y-m-d"), 0);
/// ```
#[must_use]
pub fn date_unix_lossy(input: &str, format: &str) -> i64 {
    match date_unix(input, format) {
        Ok(ts) => ts,
        Err(err) => {
            log::debug!("date_unix_lossy: {}", err);
            0
        }
    }
}
