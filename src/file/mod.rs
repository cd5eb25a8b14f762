//! File management module for Files Manager.
//!
//! This module provides:
//! - File and folder records with per-owner visibility
//! - Blob storage for file bytes on local disk
//! - The post-processing job queue for images
//! - The service that ties them together with access control

mod metadata;
mod queue;
mod repository;
mod service;
mod storage;

pub use metadata::{File, FileId, FileKind, FileView, NewFile, ParentRef, ROOT};
pub use queue::{JobQueue, ThumbnailJob};
pub use repository::FileRepository;
pub use service::{CreateFile, FileContent, FileService, ListQuery};
pub use storage::BlobStore;

/// Number of entries per listing page.
pub const PAGE_SIZE: i64 = 20;

/// MIME type used when the name has no recognized extension.
pub const DEFAULT_MIME_TYPE: &str = "text/plain";

/// Derive a MIME type from a file name's extension.
pub fn mime_type_for(name: &str) -> String {
    mime_guess::from_path(name)
        .first_raw()
        .unwrap_or(DEFAULT_MIME_TYPE)
        .to_string()
}
