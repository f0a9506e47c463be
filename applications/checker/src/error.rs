/// Checker error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CheckerError>;

#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Scan failed: {0}")]
    Scan(#[from] hires_metadata::ScanError),

    #[error("Search failed for {path}: {source}")]
    Search {
        path: String,
        #[source]
        source: hires_catalog::CatalogError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for CheckerError {
    fn from(err: config::ConfigError) -> Self {
        CheckerError::Config(err.to_string())
    }
}
