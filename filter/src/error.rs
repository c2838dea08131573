//! Error types for rendering filters and parsing filter parameters.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid ordering: {0}")]
    InvalidOrdering(String),
}

pub type Result<T> = std::result::Result<T, Error>;
