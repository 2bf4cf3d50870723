//! Errors raised while resolving, validating, and printing a month.

use std::io;

/// Broad category of a [`CaleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong number of arguments or an unknown option.
    Usage,
    /// A year/month token is not a 32-bit signed integer.
    Parse,
    /// Year, month or day outside the supported range.
    Validation,
    /// Writing the calendar failed.
    Output,
}

#[derive(thiserror::Error, Debug)]
pub enum CaleError {
    #[error("Usage: cale <year> <month> or cale.")]
    Usage,

    #[error("Parse integer overflow error: {token}")]
    IntegerOverflow { token: String },

    #[error("Parse integer invalid character error: {token}")]
    InvalidInteger { token: String },

    #[error("The year cannot be less than 1900: {year}")]
    YearTooEarly { year: i32 },

    #[error("The month must be between 1 and 12: {month}")]
    MonthOutOfRange { month: i32 },

    #[error("Day {day} is out of range for {year}-{month:02}")]
    DayOutOfRange { year: i32, month: i32, day: u32 },

    #[error("Failed to write calendar: {0}")]
    Io(#[from] io::Error),
}

impl CaleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CaleError::Usage => ErrorKind::Usage,
            CaleError::IntegerOverflow { .. } | CaleError::InvalidInteger { .. } => {
                ErrorKind::Parse
            }
            CaleError::YearTooEarly { .. }
            | CaleError::MonthOutOfRange { .. }
            | CaleError::DayOutOfRange { .. } => ErrorKind::Validation,
            CaleError::Io(_) => ErrorKind::Output,
        }
    }
}
