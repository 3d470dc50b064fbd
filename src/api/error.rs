use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connection refused, timeout, DNS).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend rejected our token (or we never had one).
    ///
    /// The UI treats this as "drop back to the login screen" wherever it
    /// surfaces.
    #[error("not signed in or session expired")]
    Unauthorized,

    /// Any other non-success status, with whatever body the backend sent.
    #[error("API error: {status} - {body}")]
    Status { status: u16, body: String },

    /// The response arrived but was not the JSON we expected.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// True when the caller should re-authenticate rather than retry.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
