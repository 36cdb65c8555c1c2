use thiserror::Error;

/// Errors surfaced by the fetch, cache and config layers.
///
/// Duration formatting never fails and has no variant here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("YouTube API error: status {status}")]
    Api { status: u16 },

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
