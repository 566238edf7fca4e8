//! Log line formatting
//!
//! Lines look like `2013-01-20 19:27:29 - CRITICAL --> [Drive] Diskspace under 2MB.`
//! The `[feature]` segment is left out when no feature is given.

use std::fmt::{self, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone, Utc};

use super::severity::label_for_rank;
use crate::error::{Error, Result};

/// Default timestamp pattern: `YYYY-MM-DD H:MM:SS`, 24-hour, unpadded hour
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %-H:%M:%S";

/// Line terminator used by the host platform
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Reject strftime patterns chrono cannot render
pub fn validate_date_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(Error::InvalidDateFormat(format.to_string()));
    }
    if let Some(sample) = Utc.timestamp_opt(0, 0).single() {
        write_timestamp(&mut String::new(), &sample, format)?;
    }
    Ok(())
}

fn write_timestamp<Tz>(out: &mut String, timestamp: &DateTime<Tz>, date_format: &str) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    write!(out, "{}", timestamp.format(date_format))
        .map_err(|_| Error::InvalidDateFormat(date_format.to_string()))
}

/// Build the line header: `<timestamp> - <LABEL> --> [<feature>]`
pub fn line_header<Tz>(
    timestamp: &DateTime<Tz>,
    date_format: &str,
    rank: u8,
    feature: &str,
) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut header = String::new();
    write_timestamp(&mut header, timestamp, date_format)?;
    header.push_str(" - ");
    header.push_str(label_for_rank(rank));
    header.push_str(" -->");
    if !feature.is_empty() {
        header.push_str(" [");
        header.push_str(feature);
        header.push(']');
    }
    Ok(header)
}

/// Build a complete line, terminator included
pub fn format_line<Tz>(
    timestamp: &DateTime<Tz>,
    date_format: &str,
    rank: u8,
    feature: &str,
    text: &str,
) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut line = line_header(timestamp, date_format, rank, feature)?;
    line.push(' ');
    line.push_str(text);
    line.push_str(LINE_ENDING);
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at(h: u32, m: u32, s: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2013, 1, 20, h, m, s)
            .single()
            .unwrap()
    }

    #[test]
    fn test_format_line_with_feature() {
        let line = format_line(
            &at(19, 27, 29),
            DEFAULT_DATE_FORMAT,
            2,
            "Drive",
            "Diskspace under 2MB.",
        )
        .unwrap();
        assert_eq!(
            line,
            format!("2013-01-20 19:27:29 - CRITICAL --> [Drive] Diskspace under 2MB.{LINE_ENDING}")
        );
    }

    #[test]
    fn test_format_line_without_feature_has_no_brackets() {
        let line = format_line(&at(19, 27, 29), DEFAULT_DATE_FORMAT, 3, "", "y").unwrap();
        assert_eq!(line, format!("2013-01-20 19:27:29 - ERROR --> y{LINE_ENDING}"));
        assert!(!line.contains("[]"));
    }

    #[test]
    fn test_default_format_hour_is_unpadded() {
        let line = format_line(&at(7, 5, 9), DEFAULT_DATE_FORMAT, 7, "F", "x").unwrap();
        assert!(line.starts_with("2013-01-20 7:05:09 - DEBUG --> [F] x"));
    }

    #[test]
    fn test_unknown_rank_gets_log_label() {
        let header = line_header(&at(12, 0, 0), DEFAULT_DATE_FORMAT, 12, "Core").unwrap();
        assert_eq!(header, "2013-01-20 12:00:00 - LOG --> [Core]");
    }

    #[test]
    fn test_format_line_is_deterministic() {
        let ts = at(23, 59, 59);
        let a = format_line(&ts, DEFAULT_DATE_FORMAT, 5, "User", "User Login failed.").unwrap();
        let b = format_line(&ts, DEFAULT_DATE_FORMAT, 5, "User", "User Login failed.").unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_custom_date_format() {
        let header = line_header(&at(8, 30, 0), "%d/%m/%Y %H:%M", 6, "").unwrap();
        assert_eq!(header, "20/01/2013 08:30 - INFORMATION -->");
    }

    #[test]
    fn test_offset_specifiers_render() {
        let header = line_header(&at(8, 30, 0), "%H:%M %z|%:z", 6, "").unwrap();
        assert_eq!(header, "08:30 +0100|+01:00 - INFORMATION -->");
    }

    #[test]
    fn test_validate_date_format() {
        assert!(validate_date_format(DEFAULT_DATE_FORMAT).is_ok());
        assert!(validate_date_format("%d.%m.%Y").is_ok());
        assert!(validate_date_format("%Y-%m-%d %H:%M:%S %z").is_ok());
        assert!(validate_date_format("%Z").is_ok());
        assert!(matches!(
            validate_date_format("%Q"),
            Err(Error::InvalidDateFormat(_))
        ));
    }
}
