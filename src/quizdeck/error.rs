use std::path::PathBuf;
use thiserror::Error;

/// A failure to turn an input line into a command value.
///
/// The `Display` strings below are the user-facing message contract; the UI
/// echoes them verbatim, so tests assert on `to_string()`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command")]
    UnknownCommand,

    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: &'static str },

    #[error("Index is not a non-zero unsigned integer: {0}")]
    InvalidIndex(String),

    #[error("The specified file does not exist: {0}")]
    FileNotFound(PathBuf),
}

impl ParseError {
    pub fn invalid_format(usage: &'static str) -> Self {
        ParseError::InvalidFormat { usage }
    }
}

#[derive(Error, Debug)]
pub enum QuizdeckError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Execution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuizdeckError>;
