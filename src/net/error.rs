//! Request error type shared by all API calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why an API call failed.
///
/// `Server` carries text the backend attached to the failure; everything
/// else is surfaced to the user through a generic per-form fallback.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the request and provided a message.
    #[error("{0}")]
    Server(String),
    /// The backend rejected the request without a usable body.
    #[error("request failed with status {0}")]
    Http(u16),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Networking is only available in the browser.
    #[error("not available outside the browser")]
    Unsupported,
}

impl ApiError {
    /// Text to show the user: the server's own message when there is one,
    /// otherwise the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Server(message) => message.clone(),
            Self::Http(_) | Self::Network(_) | Self::Unsupported => fallback.to_owned(),
        }
    }
}
