//! Error types for skein
//!
//! Invalid edges (self-loops, duplicates) are not errors; they are boolean
//! refusals on the connect path. Errors are reserved for start labels that
//! name no vertex and for ingestion transport failures.

use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum SkeinError {
    #[error("vertex not found: {label}")]
    VertexNotFound { label: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SkeinError {
    /// Create an error for a label that names no vertex
    pub fn vertex_not_found(label: impl Into<String>) -> Self {
        SkeinError::VertexNotFound {
            label: label.into(),
        }
    }
}

/// Result type alias for skein operations
pub type Result<T> = std::result::Result<T, SkeinError>;
