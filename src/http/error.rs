use std::fmt;

use thiserror::Error;

/// What could be recovered from the body of a non-success response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDetail {
    Message(String),
    Absent,
    Unparseable,
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorDetail::Message(message) => write!(f, " Details: {message}"),
            ErrorDetail::Absent => Ok(()),
            ErrorDetail::Unparseable => f.write_str(" (Could not parse error details from backend)"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("HTTP error! Status: {status}.{detail}")]
    Http { status: u16, detail: ErrorDetail },

    #[error("{0}")]
    Network(String),

    #[error("the backend sent a malformed response ({0})")]
    MalformedResponse(String),
}

impl FetchError {
    /// The string shown in place of the result.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Http { .. } | FetchError::Network(_) => format!(
                "Failed to analyze playlist: {self}. Please ensure the playlist is public."
            ),
            FetchError::MalformedResponse(_) => format!("Failed to analyze playlist: {self}."),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}
