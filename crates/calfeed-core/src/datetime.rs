//! Date/time representation for feed events.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// How the wall-clock components of an [`EventDateTime`] relate to absolute time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeForm {
    /// The source value carried a trailing `Z`; the components denote a UTC instant.
    Utc,
    /// No offset information; the components denote naive local wall-clock time.
    Floating,
}

/// A DTSTART/DTEND value as it appeared in the feed.
///
/// A `TZID` parameter is recorded verbatim but never resolved against a
/// timezone database: a value without a trailing `Z` stays [`TimeForm::Floating`]
/// even when `timezone_id` is present. Downstream comparisons rely on this
/// behavior, so it is part of the contract rather than a gap to close.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDateTime {
    /// Wall-clock components (midnight for date-only values).
    pub timestamp: NaiveDateTime,
    /// Whether `timestamp` denotes a UTC instant or floating local time.
    pub form: TimeForm,
    /// Raw `TZID` parameter value, if any.
    pub timezone_id: Option<String>,
    /// True when the source value carried no time-of-day component.
    pub only_date: bool,
}

impl EventDateTime {
    /// Creates a floating date-time.
    #[must_use]
    pub fn floating(timestamp: NaiveDateTime, timezone_id: Option<String>) -> Self {
        Self {
            timestamp,
            form: TimeForm::Floating,
            timezone_id,
            only_date: false,
        }
    }

    /// Creates a UTC date-time.
    #[must_use]
    pub fn utc(timestamp: NaiveDateTime, timezone_id: Option<String>) -> Self {
        Self {
            timestamp,
            form: TimeForm::Utc,
            timezone_id,
            only_date: false,
        }
    }

    /// Creates a date-only value, pinned to midnight.
    #[must_use]
    pub fn date_only(date: NaiveDate, timezone_id: Option<String>) -> Self {
        Self {
            timestamp: date.and_time(NaiveTime::MIN),
            form: TimeForm::Floating,
            timezone_id,
            only_date: true,
        }
    }

    /// Returns whether this value denotes a UTC instant.
    #[must_use]
    pub fn is_utc(&self) -> bool {
        self.form == TimeForm::Utc
    }

    /// Returns the absolute instant for UTC-form values.
    ///
    /// Floating values have no defined instant and return `None`.
    #[must_use]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self.form {
            TimeForm::Utc => Some(Utc.from_utc_datetime(&self.timestamp)),
            TimeForm::Floating => None,
        }
    }
}
