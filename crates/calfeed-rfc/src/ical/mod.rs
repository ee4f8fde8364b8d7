//! iCalendar handling (RFC 5545).
//!
//! `core` holds the content-line representation, `parse` the lexer, value
//! parsers, and the calendar state machine.

pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;
