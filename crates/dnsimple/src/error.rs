use thiserror::Error;

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure: connection, TLS, timeout or an interrupted body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API error: HTTP {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Api {
        status: u16,
        /// `message` field of the error body, when the body carried one.
        message: Option<String>,
        body: String,
    },

    #[error("failed to encode request body: {0}")]
    Encode(serde_json::Error),

    #[error("failed to decode response body: {0}")]
    Decode(serde_json::Error),

    #[error("invalid base URL: {0}")]
    Url(String),
}

impl Error {
    /// HTTP status of an [`Error::Api`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
