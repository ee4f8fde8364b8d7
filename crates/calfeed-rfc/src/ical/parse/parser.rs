//! Calendar state machine and the public parse entry point.

use calfeed_core::{Calendar, Event};

use super::error::{ParseError, ParseResult};
use super::lexer::{split_lines, tokenize};
use super::values::parse_event_datetime;
use crate::ical::core::Token;

const VCALENDAR_BEGIN: &str = "BEGIN:VCALENDAR";
const VCALENDAR_END: &str = "END:VCALENDAR";
const VEVENT: &str = "VEVENT";

/// Parses ICS feed text into a [`Calendar`].
///
/// The calendar name is supplied by the caller; the feed text never
/// contributes to it. Tokens outside a VEVENT block (VCALENDAR-level
/// properties, unknown components) are ignored, as are unknown properties
/// inside one. Duplicate properties within a block are last-write-wins. A
/// VEVENT block still open at end of input is dropped without error.
///
/// ## Errors
/// Returns `InvalidEnvelope` when the trimmed input is not bounded by
/// `BEGIN:VCALENDAR`/`END:VCALENDAR`, and `MalformedDateTime` when a
/// DTSTART/DTEND value does not match the DATE or DATE-TIME pattern.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_calendar(name: &str, input: &str) -> ParseResult<Calendar> {
    let trimmed = input.trim();
    if !trimmed.starts_with(VCALENDAR_BEGIN) || !trimmed.ends_with(VCALENDAR_END) {
        tracing::warn!("Input is not a VCALENDAR block");
        return Err(ParseError::invalid_envelope());
    }

    let lines = split_lines(trimmed);
    tracing::debug!(count = lines.len(), "Split content lines");

    let mut calendar = Calendar::new(name);
    let mut open_event: Option<Event> = None;

    for (line_num, line) in lines {
        let token = tokenize(&line);

        match (token.key.as_str(), token.value.as_str()) {
            ("BEGIN", VEVENT) if open_event.is_none() => {
                open_event = Some(Event::default());
            }
            ("END", VEVENT) if open_event.is_some() => {
                if let Some(event) = open_event.take() {
                    tracing::trace!(uid = event.uid.as_deref(), "Assembled event");
                    calendar.events.push(event);
                }
            }
            _ => {
                if let Some(event) = open_event.as_mut() {
                    apply_token(event, &token, line_num)?;
                }
            }
        }
    }

    if open_event.is_some() {
        tracing::warn!("Dropping unterminated VEVENT block at end of input");
    }

    tracing::debug!(events = calendar.events.len(), "Feed parsed");
    Ok(calendar)
}

/// Applies one token to the event under assembly.
///
/// Dispatch is a match over the closed set of recognized property keys;
/// unknown keys fall through untouched so unsupported iCalendar properties
/// never break a feed.
fn apply_token(event: &mut Event, token: &Token, line_num: usize) -> ParseResult<()> {
    match token.key.as_str() {
        "UID" => event.uid = Some(token.value.clone()),
        "SUMMARY" => event.summary = Some(token.value.clone()),
        "DESCRIPTION" => event.description = Some(token.value.clone()),
        "URL" => event.url = Some(token.value.clone()),
        "LOCATION" => event.location = Some(token.value.clone()),
        "DTSTART" => event.start = Some(parse_event_datetime(token, line_num)?),
        "DTEND" => event.end = Some(parse_event_datetime(token, line_num)?),
        _ => {}
    }
    Ok(())
}
