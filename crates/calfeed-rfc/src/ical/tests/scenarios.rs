//! Feed parsing scenarios covering the full pipeline.

use calfeed_core::{Event, TimeForm};
use chrono::{NaiveDate, NaiveDateTime};

use super::fixtures::{FOLDED_SUMMARY, FULL_EVENT, TWO_EVENTS, single_property};
use crate::ical::parse::{ParseErrorKind, parse_calendar};

fn single_event(line: &str) -> Event {
    let calendar = parse_calendar("test", &single_property(line)).expect("fixture should parse");
    assert_eq!(calendar.events.len(), 1);
    calendar.events.into_iter().next().expect("one event")
}

fn ymd_hms(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

#[test_log::test]
fn full_event_populates_every_field() {
    let calendar = parse_calendar("work", FULL_EVENT).unwrap();
    assert_eq!(calendar.name, "work");
    assert_eq!(calendar.events.len(), 1);

    let event = &calendar.events[0];
    assert_eq!(event.uid.as_deref(), Some("full-event@example.com"));
    assert_eq!(event.summary.as_deref(), Some("Quarterly planning"));
    assert_eq!(event.description.as_deref(), Some("Agenda follows"));
    assert_eq!(event.url.as_deref(), Some("https://example.com/planning"));
    assert_eq!(event.location.as_deref(), Some("Room 4"));
    assert_eq!(
        event.start.as_ref().map(|dt| dt.timestamp),
        Some(ymd_hms(2024, 5, 6, 14, 13, 12))
    );
    assert_eq!(
        event.end.as_ref().map(|dt| dt.timestamp),
        Some(ymd_hms(2024, 5, 6, 15, 13, 12))
    );
}

#[test_log::test]
fn field_population_is_order_independent() {
    let forward = parse_calendar("test", FULL_EVENT).unwrap();

    let reversed = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Test//Test//EN\r\n\
BEGIN:VEVENT\r\n\
DTEND:20240506T151312\r\n\
DTSTART:20240506T141312\r\n\
LOCATION:Room 4\r\n\
URL:https://example.com/planning\r\n\
DESCRIPTION:Agenda follows\r\n\
SUMMARY:Quarterly planning\r\n\
UID:full-event@example.com\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";
    let backward = parse_calendar("test", reversed).unwrap();

    assert_eq!(forward.events, backward.events);
}

#[test_log::test]
fn parsing_is_idempotent() {
    let first = parse_calendar("test", TWO_EVENTS).unwrap();
    let second = parse_calendar("test", TWO_EVENTS).unwrap();
    assert_eq!(first, second);
}

#[test_log::test]
fn folded_summary_matches_unfolded_form() {
    let folded = parse_calendar("test", FOLDED_SUMMARY).unwrap();
    assert_eq!(folded.events[0].summary.as_deref(), Some("abcdef"));

    let unfolded = single_event("SUMMARY:abcdef");
    assert_eq!(folded.events[0].summary, unfolded.summary);
}

#[test_log::test]
fn duplicate_uid_keeps_the_later_value() {
    let input = "\
BEGIN:VCALENDAR\r\n\
BEGIN:VEVENT\r\n\
UID:a\r\n\
SUMMARY:unchanged\r\n\
UID:b\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";
    let calendar = parse_calendar("test", input).unwrap();
    assert_eq!(calendar.events[0].uid.as_deref(), Some("b"));
    assert_eq!(calendar.events[0].summary.as_deref(), Some("unchanged"));
}

#[test_log::test]
fn dtstart_floating() {
    let event = single_event("DTSTART:20240506T141312");
    let dt = event.start.unwrap();
    assert_eq!(dt.timezone_id, None);
    assert!(!dt.only_date);
    assert_eq!(dt.form, TimeForm::Floating);
    assert_eq!(dt.timestamp, ymd_hms(2024, 5, 6, 14, 13, 12));
}

#[test_log::test]
fn dtstart_with_tzid_stays_floating() {
    let event = single_event("DTSTART;TZID=Asia:20240506T141312");
    let dt = event.start.unwrap();
    assert_eq!(dt.timezone_id.as_deref(), Some("Asia"));
    assert!(!dt.only_date);
    assert_eq!(dt.form, TimeForm::Floating);
    assert_eq!(dt.timestamp, ymd_hms(2024, 5, 6, 14, 13, 12));
}

#[test_log::test]
fn dtstart_date_only() {
    let event = single_event("DTSTART;TZID=Asia;VALUE=DATE:20240506");
    let dt = event.start.unwrap();
    assert_eq!(dt.timezone_id.as_deref(), Some("Asia"));
    assert!(dt.only_date);
    assert_eq!(dt.timestamp, ymd_hms(2024, 5, 6, 0, 0, 0));
}

#[test_log::test]
fn dtstart_utc() {
    let event = single_event("DTSTART:20240506T141312Z");
    let dt = event.start.unwrap();
    assert_eq!(dt.timezone_id, None);
    assert!(!dt.only_date);
    assert_eq!(dt.form, TimeForm::Utc);
    assert_eq!(
        dt.to_utc().unwrap().to_rfc3339(),
        "2024-05-06T14:13:12+00:00"
    );
}

#[test_log::test]
fn dtend_is_normalized_like_dtstart() {
    let event = single_event("DTEND:20240506T141312Z");
    let dt = event.end.unwrap();
    assert_eq!(dt.form, TimeForm::Utc);
    assert!(event.start.is_none());
}

#[test_log::test]
fn rejects_text_without_envelope() {
    let err = parse_calendar("test", "SUMMARY:no calendar here").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidEnvelope);
}

#[test_log::test]
fn rejects_malformed_dtstart() {
    let err = parse_calendar("test", &single_property("DTSTART:not-a-date")).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MalformedDateTime);
}

#[test_log::test]
fn description_newline_escapes_are_decoded() {
    let event = single_event("DESCRIPTION:Line 1\\nLine 2");
    assert_eq!(event.description.as_deref(), Some("Line 1\nLine 2"));
}

#[test_log::test]
fn ignored_calendar_name_comes_from_caller() {
    let calendar = parse_calendar("my-feed", TWO_EVENTS).unwrap();
    assert_eq!(calendar.name, "my-feed");
    assert_eq!(calendar.uids(), vec!["one@example.com", "two@example.com"]);
}
