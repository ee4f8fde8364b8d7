//! Calendar and event model.

use serde::{Deserialize, Serialize};

use crate::datetime::EventDateTime;

/// A single VEVENT as assembled from the feed.
///
/// Every field is optional; the feed is free to omit any property and the
/// parser never invents values. Fields hold the raw (escape-decoded) source
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Event {
    pub uid: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub location: Option<String>,
    pub start: Option<EventDateTime>,
    pub end: Option<EventDateTime>,
}

/// A parsed calendar snapshot.
///
/// Owns its events exclusively; `events` preserves source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    /// Caller-supplied name; not taken from the feed text.
    pub name: String,
    pub events: Vec<Event>,
}

impl Calendar {
    /// Creates an empty calendar with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: Vec::new(),
        }
    }

    /// Returns the UIDs of all events that carry one, in source order.
    #[must_use]
    pub fn uids(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| e.uid.as_deref())
            .collect()
    }

    /// Returns the event with the given UID, if present.
    #[must_use]
    pub fn get_event(&self, uid: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.uid.as_deref() == Some(uid))
    }
}
