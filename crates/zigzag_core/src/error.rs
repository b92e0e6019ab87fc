//! Error types for tablet generation and output.

use std::error::Error;
use std::fmt::{Display, Formatter};

use zigzag_time::TimeError;

/// Errors from the generator or the JSON writer.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ZigzagError {
    /// Date parsing or stepping failed.
    Time(TimeError),
    /// A numeric parameter is outside its accepted range.
    InvalidParameter(&'static str),
    /// Records could not be encoded as JSON.
    Serialization(String),
    /// The output destination could not be written.
    Io(String),
}

impl Display for ZigzagError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            Self::Serialization(msg) => write!(f, "serialization error: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl Error for ZigzagError {}

impl From<TimeError> for ZigzagError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<std::io::Error> for ZigzagError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ZigzagError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            Self::Io(e.to_string())
        } else {
            Self::Serialization(e.to_string())
        }
    }
}
