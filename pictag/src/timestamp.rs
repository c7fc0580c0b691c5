//! Date and time reconciliation
//!
//! Exif carries the capture date in three tags without time zone. IPTC splits
//! it into a date and a time with offset. The first candidate that parses
//! wins.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use pictag_common::datetime::DateTime;
use pictag_common::exif::SectionTag;
use pictag_common::field;
use pictag_iptc::{Dataset, Iptc};

use crate::TagTable;

/// Layout of Exif date values, `d` stands for a digit
const EXIF_LAYOUT: &str = "dddd:dd:dd dd:dd:dd";
const IPTC_DATE_LAYOUT: &str = "dddddddd";
/// `s` stands for the sign of the offset
const IPTC_TIME_LAYOUT: &str = "ddddddsdddd";

fn exif_candidates() -> [SectionTag<'static>; 3] {
    [
        field::DateTime.into(),
        field::DateTimeOriginal.into(),
        field::DateTimeDigitized.into(),
    ]
}

/// Capture time from the tag table, falling back to IPTC
pub fn reconcile(table: &TagTable, iptc: Option<&Iptc>) -> Option<DateTime> {
    for key in exif_candidates() {
        let Some(value) = table.get(key) else {
            continue;
        };

        match parse_exif_datetime(value) {
            Some(datetime) => return Some(DateTime::Naive(datetime)),
            None => tracing::debug!("Skipping unparsable date '{value}' in {key}"),
        }
    }

    let iptc = iptc?;
    let date = iptc.get_str(Dataset::DateCreated)?;
    let time = iptc.get_str(Dataset::TimeCreated)?;

    let datetime = datetime_from_iptc(&date, &time);
    if datetime.is_none() {
        tracing::debug!("Skipping unparsable IPTC date '{date}' and time '{time}'");
    }

    datetime.map(DateTime::Utc)
}

/// Parse a `YYYY:MM:DD HH:MM:SS` Exif value
///
/// Surrounding whitespace and NUL padding are ignored.
///
/// ```
/// # use pictag::timestamp::parse_exif_datetime;
/// let datetime = parse_exif_datetime("2012:09:16 14:08:04\0").unwrap();
/// assert_eq!(datetime.to_string(), "2012-09-16 14:08:04");
///
/// assert_eq!(parse_exif_datetime("2012-09-16 14:08:04"), None);
/// assert_eq!(parse_exif_datetime("2012:9:16 14:08:04"), None);
/// assert_eq!(parse_exif_datetime("2012:13:16 14:08:04"), None);
/// assert_eq!(parse_exif_datetime("    :  :     :  :  "), None);
/// ```
pub fn parse_exif_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = trim_padding(value);

    if !matches_layout(value, EXIF_LAYOUT) {
        return None;
    }

    NaiveDate::from_ymd_opt(
        number(value, 0, 4)?,
        number(value, 5, 2)?,
        number(value, 8, 2)?,
    )?
    .and_hms_opt(
        number(value, 11, 2)?,
        number(value, 14, 2)?,
        number(value, 17, 2)?,
    )
}

/// Combine IPTC `DateCreated` and `TimeCreated` values
///
/// The date has the form `YYYYMMDD` and the time `HHMMSS±HHMM`. The offset is
/// added to the time of day, which is taken as UTC.
///
/// ```
/// # use pictag::timestamp::datetime_from_iptc;
/// let datetime = datetime_from_iptc("20230115", "153000-0500").unwrap();
/// assert_eq!(datetime.to_rfc3339(), "2023-01-15T10:30:00+00:00");
///
/// assert_eq!(datetime_from_iptc("00000000", "153000-0500"), None);
/// assert_eq!(datetime_from_iptc("20230115", "1530"), None);
/// ```
pub fn datetime_from_iptc(date: &str, time: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    let date = trim_padding(date);
    let time = trim_padding(time);

    if !matches_layout(date, IPTC_DATE_LAYOUT) || date == "00000000" {
        return None;
    }

    if !matches_layout(time, IPTC_TIME_LAYOUT) {
        return None;
    }

    let naive = NaiveDate::from_ymd_opt(
        number(date, 0, 4)?,
        number(date, 4, 2)?,
        number(date, 6, 2)?,
    )?
    .and_hms_opt(
        number(time, 0, 2)?,
        number(time, 2, 2)?,
        number(time, 4, 2)?,
    )?;

    let sign: i64 = match time.as_bytes().get(6)? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let hours: i64 = number(time, 7, 2)?;
    let minutes: i64 = number(time, 9, 2)?;

    let diff = hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_mul(sign)?;

    naive
        .and_utc()
        .checked_add_signed(TimeDelta::try_seconds(diff)?)
}

fn trim_padding(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\0')
}

fn matches_layout(value: &str, layout: &str) -> bool {
    value.len() == layout.len()
        && value.bytes().zip(layout.bytes()).all(|(c, l)| match l {
            b'd' => c.is_ascii_digit(),
            b's' => c == b'+' || c == b'-',
            l => c == l,
        })
}

fn number<T: std::str::FromStr>(value: &str, start: usize, len: usize) -> Option<T> {
    let end = start.checked_add(len)?;
    value.get(start..end)?.parse().ok()
}
