//! Files Manager
//!
//! A per-user file store with folders, documents and images. Entries are
//! private to their owner until published, content is kept on local disk and
//! image uploads are queued for post-processing.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod file;
pub mod logging;
pub mod web;

pub use auth::{IdentityResolver, SessionResolver, UserId};
pub use config::Config;
pub use db::{Database, SessionRepository};
pub use error::{FilesError, Result};
pub use file::{
    BlobStore, CreateFile, FileContent, FileId, FileKind, FileService, FileView, JobQueue,
    ListQuery, ParentRef, ThumbnailJob,
};
pub use web::WebServer;
