//! Error types for the API client.

/// Message shown to shoppers when a request cannot be completed.
const USER_MESSAGE: &str = "Data could not be retrieved. Please try again later.";

/// Errors that can occur when fetching listing or detail data.
///
/// Each variant keeps enough detail for callers to tell a missing product
/// apart from a transient outage.
#[derive(thiserror::Error, Debug)]
pub enum DataFetchError {
    /// The request target could not be parsed as an absolute URL.
    #[error("Invalid request URL: {url}")]
    InvalidUrl { url: String },
    /// The request never produced a response (connect failure, timeout, broken body).
    #[error("Request failed: {cause}")]
    Transport { cause: String, timed_out: bool },
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    Http { status: u16, body: String },
    /// The response body was not the expected JSON document.
    #[error("Failed to decode response: {cause}")]
    Decode { cause: String },
}

impl DataFetchError {
    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the API answered `404 Not Found`.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// True for failures that may succeed if the same request is sent again.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::Http { status, .. } => matches!(*status, 408 | 429 | 500..=599),
            Self::InvalidUrl { .. } | Self::Decode { .. } => false,
        }
    }

    /// Uniform, human-readable message suitable for end users.
    pub fn user_message(&self) -> &'static str {
        USER_MESSAGE
    }
}
