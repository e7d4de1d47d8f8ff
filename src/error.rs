// src/error.rs
use thiserror::Error;

/// One city's retrieval went wrong.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {code} from {url}")]
    Status { code: u16, url: String },

    #[error("{0}")]
    Other(String),
}

/// Writing a comparison to disk or clipboard text.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("nothing to export")]
    Empty,
}

/// Top-level failure of one comparison run.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("could not build HTTP client: {0}")]
    Client(#[from] FetchError),

    #[error("could not start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
