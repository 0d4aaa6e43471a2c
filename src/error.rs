use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by [`crate::HistoricalClient`] operations.
///
/// Every failure propagates directly to the caller: there is no retry,
/// no fallback, and no status-code-specific branching inside the client.
#[derive(Error, Debug)]
pub enum Error {
    /// Network-level failure: unreachable host, reset connection, elapsed
    /// timeout, or a body that fails to decode into the declared shape.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),

    /// Any non-success HTTP status, carrying the status and the raw body.
    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

impl Error {
    /// Whether this failure was caused by the request timeout elapsing.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }

    /// The HTTP status of a non-success response, if that is what failed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
