//! Tag module error types

use thiserror::Error;

/// Result type for tag graph construction
pub type Result<T> = std::result::Result<T, TagError>;

/// Errors raised while building or loading a tag graph.
///
/// Path queries never fail; only construction does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("Tag not found: {name}")]
    TagNotFound { name: String },

    #[error("Tag already exists: {name}")]
    TagAlreadyExists { name: String },

    #[error("Invalid tag name: {reason}")]
    InvalidTagName { reason: String },

    #[error("Edge already exists: {parent} -> {child}")]
    EdgeAlreadyExists { parent: String, child: String },

    #[error("Invalid graph snapshot: {0}")]
    InvalidSnapshot(String),
}

impl TagError {
    /// Name of the tag the error refers to, if any
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            TagError::TagNotFound { name } | TagError::TagAlreadyExists { name } => Some(name),
            TagError::EdgeAlreadyExists { child, .. } => Some(child),
            TagError::InvalidTagName { .. } | TagError::InvalidSnapshot(_) => None,
        }
    }
}
