//! API handlers for the Files Manager HTTP interface.

pub mod file;
pub mod status;

pub use file::*;
pub use status::*;

use std::sync::Arc;

use crate::file::FileService;
use crate::Database;

/// Shared database handle.
pub type SharedDatabase = Arc<Database>;

/// Application state shared by all handlers.
pub struct AppState {
    /// Database used for status and stats.
    pub db: SharedDatabase,
    /// File operations.
    pub files: FileService,
}

impl AppState {
    /// Create a new application state.
    pub fn new(files: FileService) -> Self {
        Self {
            db: files.database().clone(),
            files,
        }
    }
}
