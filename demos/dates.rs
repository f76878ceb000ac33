//! PHP-style date formatting and parsing.
//!
//! Run with: cargo run --example dates

use chrono::{FixedOffset, TimeZone, Utc};
use std::error::Error;
use xutils::{date, date_parse_in, translate, unix_date_in, DateFormat, DateOptions, Zone};

fn main() -> Result<(), Box<dyn Error>> {
    let t = Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap();

    // Token translation
    for format in ["Y-m-d H:i:s", "D, d M Y", "l jS \\of F", "r"] {
        println!("{:<16} -> {}", format, translate(format));
    }
    println!();

    // Formatting
    println!("{}", date(&t, "Y-m-d H:i:s"));
    println!("{}", date(&t, "D, j M Y g:i a"));
    let tokyo = FixedOffset::east_opt(9 * 3600).ok_or("bad offset")?;
    println!("{}\n", date(&t.with_timezone(&tokyo), "Y-m-d H:i:s P"));

    // Parsing
    let parsed = date_parse_in("15/01/2024 08:30", "d/m/Y H:i", &Utc)?;
    assert_eq!(parsed, t);
    println!("parsed: {}", parsed.to_rfc3339());

    // A compiled format with explicit options
    let zone: Zone = "+05:30".parse()?;
    let options = DateOptions::new().with_zone(zone);
    let stamp = DateFormat::try_new("YmdHis")?;
    let local = stamp.parse_with("20240115140000", &options)?;
    println!("{} in {} is {}", stamp, options.zone, local.with_timezone(&Utc));

    // Unix timestamps
    if let Some(text) = unix_date_in(t.timestamp(), "Y-m-d H:i:s O", &Utc) {
        println!("unix {} -> {}", t.timestamp(), text);
    }

    // Bad input is an error, not a zero
    if let Err(err) = date_parse_in("yesterday", "Y-m-d", &Utc) {
        println!("error: {}", err);
    }

    Ok(())
}
