//! SDK Error Types

use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Probe Error
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProbeError {
    /// True when nothing was listening (or reachable) at the target address
    pub fn is_connection(&self) -> bool {
        matches!(self, ProbeError::Connection(_))
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            ProbeError::Connection(e.to_string())
        } else if e.is_timeout() {
            ProbeError::Timeout(e.to_string())
        } else if e.is_builder() {
            ProbeError::InvalidRequest(e.to_string())
        } else {
            ProbeError::Transport(e.to_string())
        }
    }
}

impl From<url::ParseError> for ProbeError {
    fn from(e: url::ParseError) -> Self {
        ProbeError::InvalidUrl(e.to_string())
    }
}
