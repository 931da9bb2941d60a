//! Error types for tag-graph
//!
//! Path queries are total and never produce these. Errors come from building
//! a graph, loading snapshots and configuration, and installing logging.

use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::tag::TagError;

/// Result type alias for tag-graph operations
pub type Result<T> = std::result::Result<T, TagGraphError>;

/// Main error type for tag-graph
#[derive(Error, Debug)]
pub enum TagGraphError {
    #[error("Tag error: {0}")]
    Tag(#[from] TagError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TagGraphError {
    /// Check if the error was caused by malformed input rather than the environment
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            TagGraphError::Tag(_)
                | TagGraphError::Config(ConfigError::Invalid(_) | ConfigError::Json(_))
                | TagGraphError::Logging(LoggingError::InvalidFilter(_))
        )
    }
}
