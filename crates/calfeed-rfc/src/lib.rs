//! RFC 5545 (iCalendar) parsing for the calfeed ecosystem.
//!
//! This crate turns raw ICS feed text into the `calfeed-core` calendar
//! model. It deliberately covers only the slice of RFC 5545 the feed sync
//! needs: the VCALENDAR envelope, VEVENT components, and the seven event
//! properties the sync layer consumes. Everything else in a feed is
//! tolerated and ignored.
//!
//! ```
//! use calfeed_rfc::{RfcResult, parse_calendar};
//!
//! fn snapshot(raw: &str) -> RfcResult<usize> {
//!     let calendar = parse_calendar("team", raw)?;
//!     Ok(calendar.events.len())
//! }
//!
//! let raw = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:a\r\nEND:VEVENT\r\nEND:VCALENDAR";
//! assert_eq!(snapshot(raw).unwrap(), 1);
//! ```

pub mod error;
pub mod ical;

pub use error::{RfcError, RfcResult};
pub use ical::parse::parse_calendar;
