//! Error type for backend requests.

use derive_more::{Display, Error};

/// Failure talking to the game backend, with caller location tracking.
///
/// Network failures, non-success responses, and malformed bodies all
/// surface through this one type so callers can treat them uniformly.
#[derive(Debug, Clone, Display, Error)]
#[display("API error: {} at {}:{}", message, file, line)]
pub struct ApiError {
    /// Human-readable description.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl ApiError {
    /// Creates a new API error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("Request failed: {}", err))
    }
}

impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Malformed response body: {}", err))
    }
}
