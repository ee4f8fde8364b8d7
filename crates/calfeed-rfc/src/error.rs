use thiserror::Error;

/// Feed parsing errors.
#[derive(Error, Debug)]
pub enum RfcError {
    #[error(transparent)]
    ParseError(#[from] crate::ical::parse::ParseError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
