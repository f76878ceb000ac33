//! PHP-style date format tokens on top of chrono.
//!
//! A format such as `"Y-m-d H:i:s"` is translated once into chrono's
//! `strftime` dialect (`"%Y-%m-%d %H:%M:%S"`) and chrono does the actual
//! formatting and parsing.
//!
//! # Tokens
//!
//! | Token | Meaning | chrono |
//! |-------|---------|--------|
//! | `Y` | 4-digit year | `%Y` |
//! | `y` | 2-digit year | `%y` |
//! | `m` | month, zero-padded | `%m` |
//! | `n` | month | `%-m` |
//! | `M` | month name, short | `%b` |
//! | `F` | month name | `%B` |
//! | `d` | day, zero-padded | `%d` |
//! | `j` | day | `%-d` |
//! | `D` | weekday, short | `%a` |
//! | `l` | weekday | `%A` |
//! | `g` | 12-hour | `%-I` |
//! | `G` | 24-hour | `%-H` |
//! | `h` | 12-hour, zero-padded | `%I` |
//! | `H` | 24-hour, zero-padded | `%H` |
//! | `a` | `am` / `pm` | `%P` |
//! | `A` | `AM` / `PM` | `%p` |
//! | `i` | minutes | `%M` |
//! | `s` | seconds | `%S` |
//! | `T` | zone abbreviation[^zone] | `%Z` |
//! | `P` | offset `+08:00` | `%:z` |
//! | `O` | offset `+0800` | `%z` |
//! | `r` | RFC 2822 | `%a, %d %b %Y %H:%M:%S %z` |
//!
//! [^zone]: chrono only knows a name for `Utc`. With `Local` and fixed offsets
//! `T` prints the offset instead (`+08:00`).
//!
//! # Literal text
//!
//! The input is scanned once, left to right, and fragments are never scanned
//! again. On top of that:
//!
//! - A run of letters is translated only when every letter in it is a token,
//!   so `"YmdHis"` is six tokens while `"Year"` and `"Month"` stay literal.
//! - `\` makes the next character literal: `"Y-m-d\TH:i:sP"`.
//! - `%` introduces native chrono syntax, which is copied through untouched.
//!
//! ```rust
//! use xutils::translate;
//!
//! assert_eq!(translate("Y-m-d H:i:s"), "%Y-%m-%d %H:%M:%S");
//! assert_eq!(translate("Year: Y, Month: m"), "Year: %Y, Month: %m");
//! assert_eq!(translate("Y-m-d\\TH:i:sP"), "%Y-%m-%dT%H:%M:%S%:z");
//! assert_eq!(translate("Y %j"), "%Y %j");
//! ```

use crate::error::{Error, Result};
use crate::options::{DateOptions, Zone};
use chrono::format::{self, Item, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, LocalResult, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// Token to chrono fragment, in lookup order.
pub static TOKENS: [(char, &str); 22] = [
    // year
    ('Y', "%Y"),
    ('y', "%y"),
    // month
    ('m', "%m"),
    ('n', "%-m"),
    ('M', "%b"),
    ('F', "%B"),
    // day
    ('d', "%d"),
    ('j', "%-d"),
    // week
    ('D', "%a"),
    ('l', "%A"),
    // time
    ('g', "%-I"),
    ('G', "%-H"),
    ('h', "%I"),
    ('H', "%H"),
    ('a', "%P"),
    ('A', "%p"),
    ('i', "%M"),
    ('s', "%S"),
    // zone
    // a name only for Utc, the offset otherwise
    ('T', "%Z"),
    ('P', "%:z"),
    ('O', "%z"),
    // RFC 2822
    ('r', "%a, %d %b %Y %H:%M:%S %z"),
];

/// Returns the chrono fragment for a single token character.
///
/// # Examples
///
/// ```rust
/// use xutils::datetime::native_fragment;
///
/// assert_eq!(native_fragment('H'), Some("%H"));
/// assert_eq!(native_fragment('h'), Some("%I"));
/// assert_eq!(native_fragment('x'), None);
/// ```
#[must_use]
pub fn native_fragment(token: char) -> Option<&'static str> {
    TOKENS
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, fragment)| *fragment)
}

/// chrono flag, width and precision characters that may sit between `%` and
/// the specifier.
fn is_native_modifier(c: char) -> bool {
    matches!(c, '-' | '_' | '.' | ':' | '#' | '0'..='9')
}

/// Translates a PHP-style format into a chrono `strftime` pattern.
///
/// Single pass over `format`; emitted fragments are never rescanned, so
/// `"r"` yields exactly its composite pattern even though that pattern is
/// full of letters.
#[must_use]
pub fn translate(format: &str) -> String {
    let mut out = String::with_capacity(format.len() * 2);
    let mut chars = format.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, '%')) => out.push_str("%%"),
                Some((_, escaped)) => out.push(escaped),
                None => out.push('\\'),
            },
            '%' => {
                out.push('%');
                while let Some(&(_, m)) = chars.peek() {
                    if !is_native_modifier(m) {
                        break;
                    }
                    out.push(m);
                    chars.next();
                }
                match chars.next() {
                    Some((_, spec)) => out.push(spec),
                    // a lone trailing '%' is a literal percent sign
                    None => out.push('%'),
                }
            }
            c if c.is_alphabetic() => {
                let mut end = start + c.len_utf8();
                while let Some(&(i, next)) = chars.peek() {
                    if !next.is_alphabetic() {
                        break;
                    }
                    end = i + next.len_utf8();
                    chars.next();
                }
                let word = &format[start..end];
                let fragments: Option<Vec<&str>> = word.chars().map(native_fragment).collect();
                match fragments {
                    Some(fragments) => fragments.iter().for_each(|f| out.push_str(f)),
                    None => out.push_str(word),
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// A translated date format, ready to format and parse.
///
/// Translation happens once in [`DateFormat::new`]; keep the value around when
/// the same format is used repeatedly.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use xutils::DateFormat;
///
/// let format = DateFormat::new("D, d M Y H:i:s O");
/// let t = Utc.with_ymd_and_hms(2024, 1, 5, 15, 4, 5).unwrap();
/// assert_eq!(format.format(&t), "Fri, 05 Jan 2024 15:04:05 +0000");
///
/// let back = format.parse_in("Fri, 05 Jan 2024 15:04:05 +0000", &Utc).unwrap();
/// assert_eq!(back, t);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DateFormat {
    source: String,
    native: String,
}

impl DateFormat {
    #[must_use]
    pub fn new(format: &str) -> Self {
        DateFormat {
            source: format.to_string(),
            native: translate(format),
        }
    }

    /// Like [`DateFormat::new`], but rejects native syntax chrono cannot use.
    ///
    /// Token-only formats always succeed; only `%` sequences mixed in by the
    /// caller can make a pattern invalid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] when the translated pattern contains an
    /// unknown chrono specifier.
    pub fn try_new(format: &str) -> Result<Self> {
        let compiled = Self::new(format);
        if StrftimeItems::new(&compiled.native).any(|item| matches!(item, Item::Error)) {
            return Err(Error::invalid_pattern(format, &compiled.native));
        }
        Ok(compiled)
    }

    /// The PHP-style format this was built from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The translated chrono pattern.
    #[must_use]
    pub fn native(&self) -> &str {
        &self.native
    }

    /// Formats `t` with this pattern.
    ///
    /// Never fails. If the pattern carries invalid native syntax the problem is
    /// logged and whatever was rendered before it is returned.
    pub fn format<Tz>(&self, t: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut out = String::with_capacity(self.native.len() + 16);
        if write!(out, "{}", t.format(&self.native)).is_err() {
            log::warn!(
                "date format {:?} translated to invalid pattern {:?}",
                self.source,
                self.native
            );
        }
        out
    }

    /// Parses `input` as a wall-clock time in the process's local zone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when `input` does not match the format.
    pub fn parse(&self, input: &str) -> Result<DateTime<Local>> {
        self.parse_in(input, &Local)
    }

    /// Parses `input` and returns it in `tz`.
    ///
    /// When the input has an offset (`P`, `O`, `r`) that offset decides the
    /// instant and the result is converted to `tz`. Otherwise the wall-clock
    /// time is read in `tz`: an ambiguous time (DST fall-back) resolves to the
    /// earlier instant and a skipped one (DST spring-forward) is an error.
    ///
    /// Fields missing from the format default to January 1st of year 0 at
    /// midnight; see [`DateFormat::parse_with`] to choose another year.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when `input` does not match the format, a field
    /// is out of range, or the local time does not exist in `tz`.
    pub fn parse_in<Tz: TimeZone>(&self, input: &str, tz: &Tz) -> Result<DateTime<Tz>> {
        self.parse_resolved(input, tz, DateOptions::default().default_year)
    }

    /// Parses `input` with explicit [`DateOptions`].
    ///
    /// # Errors
    ///
    /// Same as [`DateFormat::parse_in`].
    pub fn parse_with(&self, input: &str, options: &DateOptions) -> Result<DateTime<FixedOffset>> {
        let year = options.default_year;
        match options.zone {
            Zone::Local => self
                .parse_resolved(input, &Local, year)
                .map(|t| t.fixed_offset()),
            Zone::Utc => self
                .parse_resolved(input, &Utc, year)
                .map(|t| t.fixed_offset()),
            Zone::Fixed(offset) => self.parse_resolved(input, &offset, year),
        }
    }

    fn parse_resolved<Tz: TimeZone>(
        &self,
        input: &str,
        tz: &Tz,
        default_year: i32,
    ) -> Result<DateTime<Tz>> {
        let fail = |msg: &dyn fmt::Display| Error::parse(input, &self.source, msg);

        let mut parsed = Parsed::new();
        format::parse(&mut parsed, input, StrftimeItems::new(&self.native))
            .map_err(|e| fail(&e))?;
        let mut parsed = without_weekday(&parsed).map_err(|e| fail(&e))?;
        fill_missing_fields(&mut parsed, default_year).map_err(|e| fail(&e))?;

        if parsed.offset().is_some() {
            let t = parsed.to_datetime().map_err(|e| fail(&e))?;
            return Ok(t.with_timezone(tz));
        }

        let naive = parsed
            .to_naive_datetime_with_offset(0)
            .map_err(|e| fail(&e))?;
        match tz.from_local_datetime(&naive) {
            LocalResult::Single(t) => Ok(t),
            LocalResult::Ambiguous(earliest, _) => Ok(earliest),
            LocalResult::None => Err(fail(&format_args!(
                "{} does not exist in the requested time zone",
                naive
            ))),
        }
    }
}

/// Copies `parsed` minus a weekday name, which only has to be well formed. It is
/// kept for week-numbered dates, where it selects the day.
fn without_weekday(parsed: &Parsed) -> format::ParseResult<Parsed> {
    let week_based = parsed.isoweek().is_some()
        || parsed.week_from_mon().is_some()
        || parsed.week_from_sun().is_some();
    if week_based || parsed.weekday().is_none() {
        return Ok(parsed.clone());
    }

    type Setter = fn(&mut Parsed, i64) -> format::ParseResult<()>;

    let mut out = Parsed::new();
    let years: [(Option<i32>, Setter); 6] = [
        (parsed.year(), Parsed::set_year),
        (parsed.year_div_100(), Parsed::set_year_div_100),
        (parsed.year_mod_100(), Parsed::set_year_mod_100),
        (parsed.isoyear(), Parsed::set_isoyear),
        (parsed.isoyear_div_100(), Parsed::set_isoyear_div_100),
        (parsed.isoyear_mod_100(), Parsed::set_isoyear_mod_100),
    ];
    for (value, set) in years {
        if let Some(value) = value {
            set(&mut out, i64::from(value))?;
        }
    }
    let fields: [(Option<u32>, Setter); 6] = [
        (parsed.month(), Parsed::set_month),
        (parsed.ordinal(), Parsed::set_ordinal),
        (parsed.day(), Parsed::set_day),
        (parsed.minute(), Parsed::set_minute),
        (parsed.second(), Parsed::set_second),
        (parsed.nanosecond(), Parsed::set_nanosecond),
    ];
    for (value, set) in fields {
        if let Some(value) = value {
            set(&mut out, i64::from(value))?;
        }
    }
    if let Some(pm) = parsed.hour_div_12() {
        out.set_ampm(pm == 1)?;
    }
    if let Some(hour) = parsed.hour_mod_12() {
        out.set_hour12(if hour == 0 { 12 } else { i64::from(hour) })?;
    }
    if let Some(offset) = parsed.offset() {
        out.set_offset(i64::from(offset))?;
    }
    if let Some(timestamp) = parsed.timestamp() {
        out.set_timestamp(timestamp)?;
    }
    Ok(out)
}

/// Fills the fields a format may leave out: year `default_year`, January 1st,
/// 00:00:00. A bare 12-hour value keeps its face value (`12` is noon); a bare
/// AM/PM is 12 o'clock.
fn fill_missing_fields(parsed: &mut Parsed, default_year: i32) -> format::ParseResult<()> {
    if parsed.timestamp().is_some() {
        return Ok(());
    }

    let has_year = parsed.year().is_some()
        || parsed.year_div_100().is_some()
        || parsed.year_mod_100().is_some()
        || parsed.isoyear().is_some()
        || parsed.isoyear_mod_100().is_some();
    if !has_year {
        parsed.set_year(i64::from(default_year))?;
    }

    let has_week_date = parsed.ordinal().is_some()
        || parsed.isoweek().is_some()
        || parsed.week_from_mon().is_some()
        || parsed.week_from_sun().is_some();
    if !has_week_date {
        if parsed.month().is_none() {
            parsed.set_month(1)?;
        }
        if parsed.day().is_none() {
            parsed.set_day(1)?;
        }
    }

    match (parsed.hour_div_12(), parsed.hour_mod_12()) {
        (None, None) => parsed.set_hour(0)?,
        (None, Some(0)) => parsed.set_ampm(true)?,
        (None, Some(_)) => parsed.set_ampm(false)?,
        (Some(_), None) => parsed.set_hour12(12)?,
        (Some(_), Some(_)) => {}
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0)?;
    }
    Ok(())
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for DateFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DateFormat::try_new(s)
    }
}

impl From<&str> for DateFormat {
    fn from(format: &str) -> Self {
        DateFormat::new(format)
    }
}

impl Serialize for DateFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for DateFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        DateFormat::try_new(&source).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_every_token_alone() {
        for (token, fragment) in TOKENS.iter() {
            assert_eq!(translate(&token.to_string()), *fragment, "token {}", token);
        }
    }

    #[test]
    fn test_tokens_are_unique() {
        for (i, (a, _)) in TOKENS.iter().enumerate() {
            assert!(TOKENS[i + 1..].iter().all(|(b, _)| a != b), "duplicate {}", a);
        }
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(translate("h"), "%I");
        assert_eq!(translate("H"), "%H");
        assert_eq!(translate("a"), "%P");
        assert_eq!(translate("A"), "%p");
    }

    #[test]
    fn test_no_rescan_of_fragments() {
        // the RFC 2822 fragment contains Y, a, d, b, H, M, S, z
        assert_eq!(translate("r"), "%a, %d %b %Y %H:%M:%S %z");
        assert_eq!(translate("Mr"), "%b%a, %d %b %Y %H:%M:%S %z");
    }

    #[test]
    fn test_compact_token_runs() {
        assert_eq!(translate("YmdHis"), "%Y%m%d%H%M%S");
        assert_eq!(translate("njy"), "%-m%-d%y");
    }

    #[test]
    fn test_literal_words() {
        assert_eq!(translate("Year: Y, Month: m"), "Year: %Y, Month: %m");
        assert_eq!(translate("Y at G"), "%Y at %-H");
        assert_eq!(translate("Année Y"), "Année %Y");
    }

    #[test]
    fn test_literal_punctuation_and_digits() {
        assert_eq!(translate("2024/01/15 -- 12:30 []"), "2024/01/15 -- 12:30 []");
        assert_eq!(translate("(x) note"), "(x) note");
        assert_eq!(translate(""), "");
    }

    #[test]
    fn test_backslash_escape() {
        assert_eq!(translate("\\Y"), "Y");
        assert_eq!(translate("Y\\-m"), "%Y-%m");
        assert_eq!(translate("\\a\\t G"), "at %-H");
        assert_eq!(translate("100\\%"), "100%%");
        assert_eq!(translate("Y\\"), "%Y\\");
    }

    #[test]
    fn test_native_passthrough() {
        assert_eq!(translate("%Y-m"), "%Y-%m");
        assert_eq!(translate("%-d/%:z"), "%-d/%:z");
        assert_eq!(translate("s.%3f"), "%S.%3f");
        assert_eq!(translate("%%d"), "%%%d");
        assert_eq!(translate("100%"), "100%%");
    }

    #[test]
    fn test_try_new_rejects_bad_native() {
        assert!(DateFormat::try_new("Y-m-d").is_ok());
        assert!(DateFormat::try_new("100%").is_ok());
        let err = DateFormat::try_new("Y %Q").unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }

    #[test]
    fn test_format_bad_native_does_not_panic() {
        let format = DateFormat::new("Y %Q");
        let _ = format.format(&utc(2024, 1, 15, 0, 0, 0));
    }

    #[test]
    fn test_format_tokens() {
        let t = utc(2024, 1, 5, 15, 4, 5);
        let cases = [
            ("Y-m-d", "2024-01-05"),
            ("y n j", "24 1 5"),
            ("M F", "Jan January"),
            ("D l", "Fri Friday"),
            ("g G h H", "3 15 03 15"),
            ("a A", "pm PM"),
            ("i:s", "04:05"),
            ("T", "UTC"),
            ("P O", "+00:00 +0000"),
            ("r", "Fri, 05 Jan 2024 15:04:05 +0000"),
        ];
        for (format, expected) in cases {
            assert_eq!(DateFormat::new(format).format(&t), expected, "format {}", format);
        }
    }

    #[test]
    fn test_format_fixed_offset() {
        let offset = FixedOffset::east_opt(8 * 3600).unwrap();
        let t = offset.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap();
        assert_eq!(DateFormat::new("Y-m-d H:i P").format(&t), "2024-07-01 09:00 +08:00");
        assert_eq!(DateFormat::new("O").format(&t), "+0800");
    }

    #[test]
    fn test_parse_full_datetime() {
        let format = DateFormat::new("Y-m-d H:i:s");
        let t = format.parse_in("2024-01-15 08:30:45", &Utc).unwrap();
        assert_eq!(t, utc(2024, 1, 15, 8, 30, 45));
    }

    #[test]
    fn test_parse_date_only_defaults_to_midnight() {
        let t = DateFormat::new("d/m/Y").parse_in("15/01/2024", &Utc).unwrap();
        assert_eq!(t, utc(2024, 1, 15, 0, 0, 0));
    }

    #[test]
    fn test_parse_time_only_defaults_to_year_zero() {
        let t = DateFormat::new("g:i A").parse_in("3:04 PM", &Utc).unwrap();
        assert_eq!(t.date_naive(), NaiveDate::from_ymd_opt(0, 1, 1).unwrap());
        assert_eq!((t.hour(), t.minute(), t.second()), (15, 4, 0));
    }

    #[test]
    fn test_parse_twelve_hour_without_meridiem() {
        let t = DateFormat::new("Y-m-d h:i").parse_in("2024-01-15 03:20", &Utc).unwrap();
        assert_eq!(t.hour(), 3);
        let t = DateFormat::new("Y-m-d h:i").parse_in("2024-01-15 12:20", &Utc).unwrap();
        assert_eq!(t.hour(), 12);
        let t = DateFormat::new("g:i").parse_in("12:05", &Utc).unwrap();
        assert_eq!((t.hour(), t.minute()), (12, 5));
    }

    #[test]
    fn test_parse_meridiem_without_hour() {
        let t = DateFormat::new("Y-m-d A").parse_in("2024-01-15 PM", &Utc).unwrap();
        assert_eq!(t.hour(), 12);
    }

    #[test]
    fn test_parse_honours_input_offset() {
        let format = DateFormat::new("Y-m-d\\TH:i:sP");
        let t = format.parse_in("2024-01-15T08:30:00+08:00", &Utc).unwrap();
        assert_eq!(t, utc(2024, 1, 15, 0, 30, 0));
    }

    #[test]
    fn test_parse_in_fixed_zone() {
        let zone = FixedOffset::west_opt(5 * 3600).unwrap();
        let t = DateFormat::new("Y-m-d H:i").parse_in("2024-01-15 08:30", &zone).unwrap();
        assert_eq!(t.with_timezone(&Utc), utc(2024, 1, 15, 13, 30, 0));
    }

    #[test]
    fn test_parse_two_digit_year() {
        let format = DateFormat::new("y-m-d");
        assert_eq!(format.parse_in("24-01-15", &Utc).unwrap(), utc(2024, 1, 15, 0, 0, 0));
        assert_eq!(format.parse_in("99-01-15", &Utc).unwrap(), utc(1999, 1, 15, 0, 0, 0));
    }

    #[test]
    fn test_parse_month_names() {
        let t = DateFormat::new("j F Y").parse_in("5 January 2024", &Utc).unwrap();
        assert_eq!(t, utc(2024, 1, 5, 0, 0, 0));
        let t = DateFormat::new("d M Y").parse_in("05 Jan 2024", &Utc).unwrap();
        assert_eq!(t, utc(2024, 1, 5, 0, 0, 0));
    }

    #[test]
    fn test_parse_errors() {
        let format = DateFormat::new("Y-m-d");
        for input in ["not-a-date", "2024-13-01", "2024-02-30", "2024-01", "2024-01-15 extra"] {
            let err = format.parse_in(input, &Utc).unwrap_err();
            assert!(err.is_parse(), "{:?} gave {:?}", input, err);
        }
    }

    #[test]
    fn test_parse_ignores_wrong_weekday_name() {
        let format = DateFormat::new("D, d M Y");
        let expected = utc(2024, 1, 5, 0, 0, 0);
        assert_eq!(format.parse_in("Fri, 05 Jan 2024", &Utc).unwrap(), expected);
        assert_eq!(format.parse_in("Mon, 05 Jan 2024", &Utc).unwrap(), expected);

        let t = DateFormat::new("r")
            .parse_in("Sun, 05 Jan 2024 15:04:05 +0000", &Utc)
            .unwrap();
        assert_eq!(t, utc(2024, 1, 5, 15, 4, 5));

        let t = DateFormat::new("l, j F Y g:i A")
            .parse_in("Tuesday, 5 January 2024 3:04 PM", &Utc)
            .unwrap();
        assert_eq!(t, utc(2024, 1, 5, 15, 4, 0));
    }

    #[test]
    fn test_zone_token_falls_back_to_offset() {
        let format = DateFormat::new("H:i T");
        assert_eq!(format.format(&utc(2024, 1, 5, 15, 4, 5)), "15:04 UTC");
        let tz = FixedOffset::east_opt(8 * 3600).unwrap();
        let t = tz.with_ymd_and_hms(2024, 1, 5, 15, 4, 5).unwrap();
        assert_eq!(format.format(&t), "15:04 +08:00");
    }

    #[test]
    fn test_parse_rejects_malformed_weekday_name() {
        let format = DateFormat::new("D, d M Y");
        assert!(format.parse_in("Xyz, 05 Jan 2024", &Utc).unwrap_err().is_parse());
    }

    #[test]
    fn test_parse_with_options() {
        let options = DateOptions::new().with_zone(Zone::east(3600).unwrap());
        let t = DateFormat::new("Y-m-d H:i").parse_with("2024-01-15 10:00", &options).unwrap();
        assert_eq!(t.to_rfc3339(), "2024-01-15T10:00:00+01:00");

        let options = DateOptions::utc().with_default_year(2023);
        let t = DateFormat::new("m/d").parse_with("03/04", &options).unwrap();
        assert_eq!(t.to_rfc3339(), "2023-03-04T00:00:00+00:00");
    }

    #[test]
    fn test_display_and_from_str() {
        let format: DateFormat = "Y-m-d".parse().unwrap();
        assert_eq!(format.to_string(), "Y-m-d");
        assert_eq!(format.native(), "%Y-%m-%d");
        assert_eq!(format.as_str(), "Y-m-d");
        assert!("%Q".parse::<DateFormat>().is_err());
    }
}
