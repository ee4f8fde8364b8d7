//! Shared calendar model types for the calfeed ecosystem.
//!
//! These types are produced by the `calfeed-rfc` parser and consumed by the
//! sync tooling. They carry no parsing logic of their own and keep their
//! dependency footprint minimal.

pub mod calendar;
pub mod datetime;

pub use calendar::{Calendar, Event};
pub use datetime::{EventDateTime, TimeForm};
