//! Configuration for date parsing.
//!
//! - [`Zone`]: which time zone a wall-clock input is read in
//! - [`DateOptions`]: the zone plus the defaults used for fields the format omits
//!
//! ## Examples
//!
//! ```rust
//! use xutils::{DateFormat, DateOptions, Zone};
//!
//! let format = DateFormat::new("Y-m-d H:i");
//!
//! // Read the input as UTC instead of the process's local zone
//! let options = DateOptions::utc();
//! let t = format.parse_with("2024-01-15 08:30", &options).unwrap();
//! assert_eq!(t.to_rfc3339(), "2024-01-15T08:30:00+00:00");
//!
//! // A fixed offset, spelled the way `P` prints it
//! let options = DateOptions::new().with_zone("+08:00".parse::<Zone>().unwrap());
//! let t = format.parse_with("2024-01-15 08:30", &options).unwrap();
//! assert_eq!(t.timestamp(), 1705278600);
//! ```

use crate::error::{Error, Result};
use chrono::FixedOffset;
use std::fmt;
use std::str::FromStr;

/// Time zone used when the input carries no offset of its own.
///
/// - **Local**: the process's local zone (honours `TZ`), the default
/// - **Utc**: Coordinated Universal Time
/// - **Fixed**: a constant offset from UTC
///
/// `Zone` parses from `"local"`, `"utc"` / `"z"` (case-insensitive) and from
/// numeric offsets such as `"+08:00"`, `"-0530"` or `"+09"`.
///
/// # Examples
///
/// ```rust
/// use xutils::Zone;
///
/// assert_eq!("UTC".parse::<Zone>().unwrap(), Zone::Utc);
/// assert_eq!("local".parse::<Zone>().unwrap(), Zone::Local);
/// assert_eq!("+05:30".parse::<Zone>().unwrap().to_string(), "+05:30");
/// assert!("Mars/Olympus".parse::<Zone>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Zone {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl Zone {
    /// Builds a fixed zone from an offset in seconds east of UTC.
    ///
    /// Returns `None` when the offset is a day or more.
    #[must_use]
    pub fn east(seconds: i32) -> Option<Self> {
        FixedOffset::east_opt(seconds).map(Zone::Fixed)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => f.write_str("local"),
            Zone::Utc => f.write_str("utc"),
            Zone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Zone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Zone::Utc);
        }
        parse_offset(trimmed)
            .map(Zone::Fixed)
            .ok_or_else(|| Error::invalid_zone(s))
    }
}

/// `±HH`, `±HHMM` or `±HH:MM`.
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    // chrono requires minutes
    if rest.len() == 2 && rest.bytes().all(|b| b.is_ascii_digit()) {
        let hours: i32 = rest.parse().ok()?;
        return FixedOffset::east_opt(sign * hours * 3600);
    }
    // chrono stops after the minutes and ignores what follows
    let shaped = match rest.len() {
        4 => true,
        5 => rest.as_bytes()[2] == b':',
        _ => false,
    };
    if !shaped {
        return None;
    }
    s.parse::<FixedOffset>().ok()
}

/// Options for [`DateFormat::parse_with`](crate::DateFormat::parse_with).
///
/// # Examples
///
/// ```rust
/// use xutils::{DateOptions, Zone};
///
/// // Local zone, missing year read as year 0
/// let options = DateOptions::new();
/// assert_eq!(options.zone, Zone::Local);
/// assert_eq!(options.default_year, 0);
///
/// let options = DateOptions::utc().with_default_year(1970);
/// assert_eq!(options.zone, Zone::Utc);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateOptions {
    pub zone: Zone,
    /// Year assumed when the format has no year token.
    pub default_year: i32,
}

impl Default for DateOptions {
    fn default() -> Self {
        DateOptions {
            zone: Zone::default(),
            default_year: 0,
        }
    }
}

impl DateOptions {
    /// Creates default options (local zone, default year 0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that read inputs as UTC.
    #[must_use]
    pub fn utc() -> Self {
        DateOptions {
            zone: Zone::Utc,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    /// Sets the year used when the format has no `Y` or `y`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xutils::{DateFormat, DateOptions};
    ///
    /// let options = DateOptions::utc().with_default_year(2000);
    /// let t = DateFormat::new("m-d").parse_with("02-29", &options).unwrap();
    /// assert_eq!(t.to_rfc3339(), "2000-02-29T00:00:00+00:00");
    /// ```
    #[must_use]
    pub fn with_default_year(mut self, year: i32) -> Self {
        self.default_year = year;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_names() {
        assert_eq!("Local".parse::<Zone>().unwrap(), Zone::Local);
        assert_eq!(" utc ".parse::<Zone>().unwrap(), Zone::Utc);
        assert_eq!("Z".parse::<Zone>().unwrap(), Zone::Utc);
    }

    #[test]
    fn test_zone_offsets() {
        assert_eq!("+08:00".parse::<Zone>().unwrap(), Zone::east(8 * 3600).unwrap());
        assert_eq!("-0530".parse::<Zone>().unwrap(), Zone::east(-(5 * 3600 + 1800)).unwrap());
        assert_eq!("+09".parse::<Zone>().unwrap(), Zone::east(9 * 3600).unwrap());
    }

    #[test]
    fn test_zone_rejects_garbage() {
        for bad in [
            "",
            "+",
            "+8",
            "+08:60",
            "0800",
            "+08::00",
            "Asia/Shanghai",
            "+2400",
            "+0:800",
            "+080:0",
            "+:0800",
            "+08:00x",
            "+08 00",
        ] {
            assert!(bad.parse::<Zone>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_zone_display() {
        assert_eq!(Zone::Local.to_string(), "local");
        assert_eq!(Zone::Utc.to_string(), "utc");
        assert_eq!(Zone::east(-3600).unwrap().to_string(), "-01:00");
    }

    #[test]
    fn test_options_builder() {
        let options = DateOptions::new()
            .with_zone(Zone::Utc)
            .with_default_year(1999);
        assert_eq!(options.zone, Zone::Utc);
        assert_eq!(options.default_year, 1999);
    }
}
