//! Feed text parsing: lexer, value parsers, and the calendar state machine.

mod error;
mod lexer;
mod parser;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{split_lines, tokenize};
pub use parser::parse_calendar;
pub use values::parse_event_datetime;
