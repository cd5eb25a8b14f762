//! Blob storage for Files Manager.
//!
//! File bytes are stored under a root directory, sharded by the first two
//! characters of a random UUID:
//!
//! ```text
//! {root}/
//! ├── ab/
//! │   └── ab12cd34-5678-90ab-cdef-123456789012
//! └── cd/
//!     └── cd90ab12-3456-7890-abcd-ef1234567890
//! ```
//!
//! Writes go to a `.part` file that is renamed into place, so a blob path
//! never points at partially written bytes. Blobs are written before the
//! record that references them; a crash or failed insert in between leaves
//! an unreferenced blob behind. That is accepted: a record never points at
//! missing bytes written by this process, but the disk may hold orphans.
//
// TODO: add a reconciliation sweep that removes blobs older than a grace
// period which no files.blob_path references.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

use crate::{FilesError, Result};

/// Local filesystem blob store.
#[derive(Debug, Clone)]
pub struct BlobStore {
    /// Root directory. Created on first write.
    root: PathBuf,
}

impl BlobStore {
    /// Create a store rooted at `root`. Nothing is touched on disk yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `content` to a fresh location and return its path.
    pub async fn write(&self, content: &[u8]) -> Result<PathBuf> {
        let stored_name = Uuid::new_v4().to_string();
        let path = self.path_for(&stored_name);

        // Creates the root as well on first use
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let partial = path.with_extension("part");
        if let Err(e) = fs::write(&partial, content).await {
            let _ = fs::remove_file(&partial).await;
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&partial, &path).await {
            let _ = fs::remove_file(&partial).await;
            return Err(e.into());
        }

        Ok(path)
    }

    /// Check whether a blob exists at `path`.
    pub async fn exists(&self, path: &Path) -> Result<bool> {
        Ok(fs::try_exists(path).await?)
    }

    /// Read the blob at `path`.
    ///
    /// A missing blob is reported as [`FilesError::NotFound`].
    pub async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        match fs::read(path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(FilesError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove the blob at `path`.
    ///
    /// Returns `true` if it was removed, `false` if it didn't exist.
    pub async fn remove(&self, path: &Path) -> Result<bool> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Full path for a stored name: `{root}/{shard}/{stored_name}`.
    fn path_for(&self, stored_name: &str) -> PathBuf {
        self.root.join(Self::shard(stored_name)).join(stored_name)
    }

    /// First 2 characters of the stored name.
    fn shard(stored_name: &str) -> &str {
        if stored_name.len() >= 2 {
            &stored_name[..2]
        } else {
            stored_name
        }
    }
}
