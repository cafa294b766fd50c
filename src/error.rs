//! Error types for the basketball-reference scraper

use thiserror::Error;


pub type Result<T> = std::result::Result<T, BbrError>;

#[derive(Error, Debug)]
pub enum BbrError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected page shape: {message}")]
    ParseShape { message: String },

    #[error("Stats table has no `{column}` column")]
    MissingColumn { column: String },

    /// The Season column is joined to the rows by position, so the counts must agree.
    #[error("Found {labels} season labels for {rows} table rows")]
    SeasonLabelMismatch { labels: usize, rows: usize },

    #[error("Invalid CSS selector `{css}`: {message}")]
    Selector { css: String, message: String },

    #[error("Invalid index letter: {letter} (expected a-z, excluding x)")]
    InvalidLetter { letter: String },

    #[error("Invalid player locator: {locator}")]
    InvalidLocator { locator: String },
}

impl BbrError {
    pub(crate) fn shape(message: impl Into<String>) -> Self {
        BbrError::ParseShape {
            message: message.into(),
        }
    }

    /// Whether a failed fetch is worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            BbrError::Http(err) => err.is_timeout() || err.is_connect() || err.is_request(),
            BbrError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
