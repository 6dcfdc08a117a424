//! Crate error type.

use std::fmt;

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// An error raised outside the scheduling core itself: bad parameters,
/// invalid input sets, unreadable or malformed input text.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleError {
    /// Error category.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of [`ScheduleError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A tuning parameter is out of range (e.g., a zero time quantum).
    InvalidParameter,
    /// The process set failed validation.
    InvalidInput,
    /// An input line could not be parsed.
    Parse {
        /// 1-based line number.
        line: usize,
    },
    /// Reading input failed.
    Io,
}

impl ScheduleError {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidParameter, message)
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InvalidParameter => write!(f, "invalid parameter: {}", self.message),
            ErrorKind::InvalidInput => write!(f, "invalid input: {}", self.message),
            ErrorKind::Parse { line } => write!(f, "line {line}: {}", self.message),
            ErrorKind::Io => write!(f, "i/o error: {}", self.message),
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<std::io::Error> for ScheduleError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, err.to_string())
    }
}
