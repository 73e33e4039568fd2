//! Error types for the smoke-test driver
//!
//! Each variant's message is exactly the line printed for a failed test
//! case, so reporting an error is just `writeln!(out, "{err}")`.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the smoke-test driver
#[derive(Error, Debug)]
pub enum Error {
    /// Network-level failure or non-success HTTP status
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("JSON decode error: {0}")]
    JsonDecode(#[from] serde_json::Error),

    /// Anything else that went wrong while sending or printing a case
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Coarse failure category, used for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Request,
    JsonDecode,
    Unexpected,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Request(_) => ErrorKind::Request,
            Error::JsonDecode(_) => ErrorKind::JsonDecode,
            Error::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Unexpected(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_decode_error_message_has_prefix() {
        let err: Error = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::JsonDecode);
        assert!(err.to_string().starts_with("JSON decode error: "));
    }

    #[test]
    fn io_errors_are_unexpected() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert_eq!(err.to_string(), "Unexpected error: pipe closed");
    }
}
