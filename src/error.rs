use thiserror::Error;

/// Every failure a dispatch can end in. Transport errors never escape as
/// `reqwest::Error`; they are normalized here at the dispatcher boundary.
#[derive(Error, Debug)]
pub enum SraError {
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode response from `{path}`: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl SraError {
    /// HTTP status carried by the error, or `0` when the failure never
    /// produced one (transport and decode errors).
    pub fn code(&self) -> u16 {
        match self {
            SraError::Api { status, .. } => *status,
            _ => 0,
        }
    }
}

/// Result type for the some-random-api crate
pub type Result<T> = std::result::Result<T, SraError>;
