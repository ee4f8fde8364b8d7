//! Value parsers for DATE and DATE-TIME properties (RFC 5545 §3.3.4, §3.3.5).

use calfeed_core::EventDateTime;
use chrono::{NaiveDate, NaiveDateTime};

use super::error::{ParseError, ParseResult};
use crate::ical::core::Token;

/// Normalizes a DTSTART/DTEND token into an [`EventDateTime`].
///
/// With `VALUE=DATE` the raw value must start with `YYYYMMDD`; otherwise it
/// must start with `YYYYMMDD"T"HHMMSS` with an optional trailing `Z`. A `Z`
/// marks the components as a UTC instant; without it they stay floating
/// wall-clock time. A TZID parameter is recorded verbatim but never applied
/// to the instant.
///
/// ## Errors
/// Returns a `MalformedDateTime` error when the value matches neither
/// pattern or its components are out of range.
pub fn parse_event_datetime(token: &Token, line: usize) -> ParseResult<EventDateTime> {
    let timezone_id = token.tzid().map(ToOwned::to_owned);
    let raw = token.value.as_str();

    if token
        .value_type()
        .is_some_and(|v| v.eq_ignore_ascii_case("DATE"))
    {
        let date = parse_date_prefix(raw)
            .ok_or_else(|| ParseError::malformed_datetime(line, raw))?;
        return Ok(EventDateTime::date_only(date, timezone_id));
    }

    let (timestamp, is_utc) = parse_datetime_prefix(raw)
        .ok_or_else(|| ParseError::malformed_datetime(line, raw))?;

    if is_utc {
        Ok(EventDateTime::utc(timestamp, timezone_id))
    } else {
        Ok(EventDateTime::floating(timestamp, timezone_id))
    }
}

/// Parses a leading `YYYYMMDD` date, tolerating trailing bytes.
fn parse_date_prefix(raw: &str) -> Option<NaiveDate> {
    let digits = raw.get(..8).filter(|s| s.bytes().all(|b| b.is_ascii_digit()))?;

    let year = digits[0..4].parse::<i32>().ok()?;
    let month = digits[4..6].parse::<u32>().ok()?;
    let day = digits[6..8].parse::<u32>().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses a leading `YYYYMMDD"T"HHMMSS[Z]` date-time, tolerating trailing
/// bytes after the optional `Z`.
///
/// Returns the wall-clock components and whether the value carried the UTC
/// designator.
fn parse_datetime_prefix(raw: &str) -> Option<(NaiveDateTime, bool)> {
    let date = parse_date_prefix(raw)?;

    if raw.as_bytes().get(8) != Some(&b'T') {
        return None;
    }

    let digits = raw
        .get(9..15)
        .filter(|s| s.bytes().all(|b| b.is_ascii_digit()))?;

    let hour = digits[0..2].parse::<u32>().ok()?;
    let minute = digits[2..4].parse::<u32>().ok()?;
    let second = digits[4..6].parse::<u32>().ok()?;

    let timestamp = date.and_hms_opt(hour, minute, second)?;
    let is_utc = raw.as_bytes().get(15) == Some(&b'Z');

    Some((timestamp, is_utc))
}
