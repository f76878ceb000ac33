//! String and number conversions.

use chrono::Utc;
use uuid::Uuid;

/// A prefixed id built from the current time, in the spirit of PHP's `uniqid`.
///
/// Eight hex digits of Unix seconds followed by five hex digits of the
/// microseconds within that second. Ids are ordered by creation time but not
/// guaranteed unique across processes; use [`uuid`] for that.
///
/// # Examples
///
/// ```rust
/// use xutils::strings::uniqid;
///
/// let id = uniqid("job-");
/// assert!(id.starts_with("job-"));
/// assert_eq!(id.len(), "job-".len() + 13);
/// ```
#[must_use]
pub fn uniqid(prefix: &str) -> String {
    let now = Utc::now();
    format!(
        "{}{:08x}{:05x}",
        prefix,
        now.timestamp(),
        now.timestamp_subsec_micros()
    )
}

/// A random (v4) UUID in hyphenated lowercase form.
#[must_use]
pub fn uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Takes `length` characters of `s` starting at character `start`, appending
/// `padding` when the cut drops characters.
///
/// A `start` past the end wraps around modulo the character count. When
/// `start + length` reaches the last character the rest of the string is
/// returned as is, without padding.
///
/// # Examples
///
/// ```rust
/// use xutils::strings::substr;
///
/// let s = "你好，世界";
/// assert_eq!(substr(s, 0, 2, ""), "你好");
/// assert_eq!(substr(s, 0, 2, "..."), "你好...");
/// assert_eq!(substr(s, 0, 10, "..."), "你好，世界");
/// ```
#[must_use]
pub fn substr(s: &str, start: usize, length: usize, padding: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let start = if start > chars.len() {
        start % chars.len()
    } else {
        start
    };
    if start.saturating_add(length) > chars.len() - 1 {
        return chars[start..].iter().collect();
    }
    let mut out: String = chars[start..start + length].iter().collect();
    out.push_str(padding);
    out
}

/// Parses a base-10 `i64`, returning 0 when `s` is not a number.
#[must_use]
pub fn str_to_i64(s: &str) -> i64 {
    s.parse().unwrap_or(0)
}

/// Parses a base-10 `i32`, returning 0 when `s` is not a number.
#[must_use]
pub fn str_to_int(s: &str) -> i32 {
    s.parse().unwrap_or(0)
}

/// Shortest scientific notation with a signed two-digit exponent, e.g.
/// `1.2345E+02`.
///
/// # Examples
///
/// ```rust
/// use xutils::strings::float_to_str;
///
/// assert_eq!(float_to_str(123.45), "1.2345E+02");
/// assert_eq!(float_to_str(0.000001), "1E-06");
/// assert_eq!(float_to_str(f64::INFINITY), "+Inf");
/// ```
#[must_use]
pub fn float_to_str(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    let s = format!("{:E}", f);
    match s.split_once('E') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}E{}{:0>2}", mantissa, sign, digits)
        }
        None => s,
    }
}

/// Human readable byte count with two decimals: `1536` is `"1.50 KB"`.
///
/// # Examples
///
/// ```rust
/// use xutils::strings::format_size;
///
/// assert_eq!(format_size(512), "512.00 Byte");
/// assert_eq!(format_size(1536), "1.50 KB");
/// assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5.00 GB");
/// ```
#[must_use]
pub fn format_size(size: u64) -> String {
    const UNITS: [&str; 6] = ["Byte", "KB", "MB", "GB", "TB", "PB"];
    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}
