use std::io;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// Failure of a single ticket lookup. Handled by the line resolver, which
/// falls back to the input line.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("failed to call Jira: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Jira responded with {0}")]
    Status(StatusCode),
    #[error("failed to read Jira response: {0}")]
    Body(#[source] reqwest::Error),
    #[error("failed to parse Jira response: {0}")]
    Decode(#[from] serde_json::Error),
}
