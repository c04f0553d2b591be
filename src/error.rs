//! Error types for loading schemas and configuration

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl SearchError {
    /// Short stable code reported in `--json` error output
    pub fn error_code(&self) -> &'static str {
        match self {
            SearchError::Io(_) => "io_error",
            SearchError::Json(_) => "json_error",
            SearchError::InvalidSchema(_) => "invalid_schema",
            SearchError::InvalidConfig(_) => "invalid_config",
        }
    }
}
