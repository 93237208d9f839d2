// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Backend error: {status}")]
    BackendStatus { status: u16 },

    #[error("Request timeout - generation took too long")]
    Timeout,

    #[error("Cannot connect to Colab backend. Make sure it is running.")]
    Unreachable,

    #[error("Backend response missing 'image' field: {0}")]
    MissingImage(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RelayError {
    /// Classifies a transport-level `reqwest::Error` into the relay's
    /// error taxonomy so handlers can map timeouts to 504 and connection
    /// failures to 503.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RelayError::Timeout
        } else if err.is_connect() {
            RelayError::Unreachable
        } else {
            RelayError::Request(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
