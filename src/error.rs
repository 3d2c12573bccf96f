use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("matching '{pattern}' timed out after {}ms", limit.as_millis())]
    MatchTimeout { pattern: String, limit: Duration },

    #[error("matching '{pattern}' failed: {message}")]
    MatchExecution { pattern: String, message: String },
}

/// The bare failure tag, for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MatchTimeout,
    MatchExecutionError,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MatchTimeout { .. } => ErrorKind::MatchTimeout,
            Error::MatchExecution { .. } => ErrorKind::MatchExecutionError,
        }
    }

    pub fn pattern(&self) -> &str {
        match self {
            Error::MatchTimeout { pattern, .. } | Error::MatchExecution { pattern, .. } => pattern,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
