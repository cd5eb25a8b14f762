//! Error types for Files Manager.

use thiserror::Error;

/// Common error type for Files Manager.
///
/// The variants up to `NoContentForFolder` are part of the validated contract
/// of the file service. `Storage` wraps everything the backing stores report
/// that the contract does not cover.
#[derive(Error, Debug)]
pub enum FilesError {
    /// No token, or a token that does not resolve to a user.
    #[error("unauthenticated")]
    Unauthenticated,

    /// A required input field was absent or empty.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// An input field was present but not acceptable.
    #[error("invalid field: {0}")]
    InvalidField(&'static str),

    /// The referenced parent does not exist.
    #[error("parent not found")]
    ParentNotFound,

    /// The referenced parent exists but is not a folder.
    #[error("parent is not a folder")]
    ParentNotFolder,

    /// The file does not exist, is not visible to the caller, or its bytes
    /// are gone from disk.
    #[error("not found")]
    NotFound,

    /// Content was requested for a folder.
    #[error("a folder has no content")]
    NoContentForFolder,

    /// Record store or filesystem failure.
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl FilesError {
    /// Whether this error is an unexpected backend fault rather than a
    /// contract outcome.
    pub fn is_fault(&self) -> bool {
        matches!(self, FilesError::Storage(_) | FilesError::Config(_))
    }
}

impl From<sqlx::Error> for FilesError {
    fn from(e: sqlx::Error) -> Self {
        FilesError::Storage(e.to_string())
    }
}

impl From<std::io::Error> for FilesError {
    fn from(e: std::io::Error) -> Self {
        FilesError::Storage(e.to_string())
    }
}

/// Result type alias for Files Manager operations.
pub type Result<T> = std::result::Result<T, FilesError>;
