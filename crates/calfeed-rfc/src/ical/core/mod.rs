//! Content-line representation for iCalendar text (RFC 5545 §3.1).

mod parameter;
mod token;

pub use parameter::Parameter;
pub use token::Token;
