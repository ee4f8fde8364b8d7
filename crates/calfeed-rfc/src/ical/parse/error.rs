//! Feed parse error types.

use std::fmt;

/// Result type for feed parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that aborted a feed parse.
///
/// Both kinds are fatal for the whole parse: downstream consumers need a
/// consistent full snapshot, so there is no partial-calendar recovery.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Line number where the error occurred (1-based).
    pub line: usize,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// Creates an invalid envelope error.
    #[must_use]
    pub fn invalid_envelope() -> Self {
        Self::new(
            ParseErrorKind::InvalidEnvelope,
            1,
            "input is not bounded by BEGIN:VCALENDAR/END:VCALENDAR",
        )
    }

    /// Creates a malformed date-time error for a raw property value.
    #[must_use]
    pub fn malformed_datetime(line: usize, raw: &str) -> Self {
        Self::new(
            ParseErrorKind::MalformedDateTime,
            line,
            format!("not a DATE or DATE-TIME value: {raw:?}"),
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is not a well-formed VCALENDAR block.
    InvalidEnvelope,
    /// A DTSTART/DTEND value violates the DATE or DATE-TIME pattern.
    MalformedDateTime,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnvelope => write!(f, "invalid calendar envelope"),
            Self::MalformedDateTime => write!(f, "malformed date/time"),
        }
    }
}
