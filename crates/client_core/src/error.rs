//! Failure taxonomy for the widget's two asynchronous operations.

use thiserror::Error;

/// Prefix of every alert raised by a failed submission.
pub const SHORTEN_ALERT_PREFIX: &str = "Failed to shorten URL";
pub const COPY_FAILED_ALERT: &str = "Failed to copy the link.";
pub const EMPTY_URL_ALERT: &str = "Please enter a URL to shorten.";

#[derive(Debug, Error)]
pub enum ShortenError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("{0}")]
    Network(String),
    /// The service answered with a non-2xx status.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("unexpected response from server: {0}")]
    MalformedResponse(String),
    #[error("{0}")]
    Validation(String),
}

impl ShortenError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Api { .. } => "api",
            Self::MalformedResponse(_) => "malformed_response",
            Self::Validation(_) => "validation",
        }
    }

    /// Text shown to the user for this failure.
    pub fn alert_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            other => format!("{SHORTEN_ALERT_PREFIX}: {other}"),
        }
    }
}

impl From<reqwest::Error> for ShortenError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}
