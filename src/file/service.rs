//! File service for Files Manager.
//!
//! This module provides the file operations exposed to callers:
//! - Create folders, documents and images with parent checks
//! - Show and list the caller's own entries
//! - Publish and unpublish
//! - Content retrieval gated by visibility
//!
//! Every operation takes the caller's session token as presented. Entries
//! owned by someone else are reported as [`FilesError::NotFound`], never as a
//! permission error, so callers cannot probe for other users' files.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;

use crate::auth::{IdentityResolver, UserId};
use crate::{Database, FilesError, Result};

use super::metadata::{FileId, FileKind, FileView, NewFile, ParentRef};
use super::queue::{JobQueue, ThumbnailJob};
use super::repository::FileRepository;
use super::storage::BlobStore;
use super::{mime_type_for, PAGE_SIZE};

/// Request data for creating a file entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFile {
    /// Display name.
    pub name: Option<String>,
    /// `folder`, `document` or `image`.
    #[serde(alias = "type")]
    pub kind: Option<String>,
    /// Parent folder; root when absent.
    pub parent_id: Option<ParentRef>,
    /// Initial visibility; private when absent.
    pub is_public: Option<bool>,
    /// Base64 encoded content. Required unless `kind` is `folder`.
    pub data: Option<String>,
}

impl CreateFile {
    /// Create a request with a name and kind.
    pub fn new(name: impl Into<String>, kind: FileKind) -> Self {
        Self {
            name: Some(name.into()),
            kind: Some(kind.as_str().to_string()),
            ..Default::default()
        }
    }

    /// Set the parent folder.
    pub fn with_parent(mut self, parent_id: ParentRef) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Set the initial visibility.
    pub fn with_public(mut self, is_public: bool) -> Self {
        self.is_public = Some(is_public);
        self
    }

    /// Set the raw content; it is base64 encoded here.
    pub fn with_content(mut self, content: &[u8]) -> Self {
        self.data = Some(BASE64.encode(content));
        self
    }
}

/// Listing filter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Only direct children of this parent.
    pub parent_id: Option<ParentRef>,
    /// Zero-based page number.
    pub page: Option<u32>,
}

impl ListQuery {
    /// Children of `parent_id`.
    pub fn children_of(parent_id: ParentRef) -> Self {
        Self {
            parent_id: Some(parent_id),
            page: None,
        }
    }

    /// Set the page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

/// Bytes of a file together with their MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// File service orchestrating identity, records, blobs and the job queue.
pub struct FileService {
    db: Arc<Database>,
    blobs: BlobStore,
    jobs: JobQueue,
    identity: Arc<dyn IdentityResolver>,
}

impl FileService {
    /// Create a new FileService.
    pub fn new(
        db: Arc<Database>,
        blobs: BlobStore,
        jobs: JobQueue,
        identity: Arc<dyn IdentityResolver>,
    ) -> Self {
        Self {
            db,
            blobs,
            jobs,
            identity,
        }
    }

    /// Get the database this service writes to.
    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }

    /// Resolve `token` to a user or fail with `Unauthenticated`.
    ///
    /// Every operation except [`FileService::content`] starts with this.
    pub async fn authenticate(&self, token: Option<&str>) -> Result<UserId> {
        let token = token.ok_or(FilesError::Unauthenticated)?;
        self.identity
            .resolve(token)
            .await?
            .ok_or(FilesError::Unauthenticated)
    }

    /// Create a folder, document or image.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// identity, name, kind, data, parent. For documents and images the
    /// bytes are on disk before the record is inserted. Images are queued
    /// for post-processing once the record exists.
    pub async fn create(&self, token: Option<&str>, request: CreateFile) -> Result<FileView> {
        let owner = self.authenticate(token).await?;

        let name = request
            .name
            .filter(|n| !n.is_empty())
            .ok_or(FilesError::MissingField("name"))?;

        let kind: FileKind = request
            .kind
            .as_deref()
            .ok_or(FilesError::InvalidField("kind"))?
            .parse()?;

        let data = if kind.has_content() {
            Some(
                request
                    .data
                    .filter(|d| !d.is_empty())
                    .ok_or(FilesError::MissingField("data"))?,
            )
        } else {
            None
        };

        let parent_id = request.parent_id.unwrap_or_default();
        self.check_parent(&parent_id).await?;

        let repo = FileRepository::new(self.db.pool());
        let is_public = request.is_public.unwrap_or(false);

        let Some(data) = data else {
            let folder = repo
                .insert(
                    &NewFile::folder(owner, name)
                        .with_parent(parent_id)
                        .with_public(is_public),
                )
                .await?;
            tracing::info!(file_id = %folder.id, owner_id = %owner, "Folder created");
            return Ok(folder.view());
        };

        let content = BASE64
            .decode(data.as_bytes())
            .map_err(|_| FilesError::InvalidField("data"))?;

        let blob_path = self.blobs.write(&content).await.map_err(|e| {
            tracing::error!("Failed to write blob: {}", e);
            e
        })?;

        let new_file = NewFile::stored(owner, name, kind, blob_path.clone())
            .with_parent(parent_id)
            .with_public(is_public);

        let file = match repo.insert(&new_file).await {
            Ok(file) => file,
            Err(e) => {
                tracing::error!("Failed to insert file record: {}", e);
                if let Err(cleanup) = self.blobs.remove(&blob_path).await {
                    tracing::warn!(
                        path = %blob_path.display(),
                        "Failed to remove unreferenced blob: {}",
                        cleanup
                    );
                }
                return Err(e);
            }
        };

        tracing::info!(
            file_id = %file.id,
            owner_id = %owner,
            kind = kind.as_str(),
            size = content.len(),
            "File created"
        );

        if kind == FileKind::Image {
            self.jobs.enqueue(ThumbnailJob {
                owner_id: owner,
                file_id: file.id.clone(),
            });
        }

        Ok(file.view())
    }

    /// A non-root parent must exist and be a folder.
    async fn check_parent(&self, parent_id: &ParentRef) -> Result<()> {
        let ParentRef::Folder(id) = parent_id else {
            return Ok(());
        };

        let parent = FileRepository::new(self.db.pool())
            .find_by_id(id)
            .await?
            .ok_or(FilesError::ParentNotFound)?;

        if parent.kind != FileKind::Folder {
            return Err(FilesError::ParentNotFolder);
        }
        Ok(())
    }

    /// Get one of the caller's own entries.
    pub async fn show(&self, token: Option<&str>, id: &FileId) -> Result<FileView> {
        let owner = self.authenticate(token).await?;

        let file = FileRepository::new(self.db.pool())
            .find_owned(id, owner)
            .await?
            .ok_or(FilesError::NotFound)?;

        Ok(file.view())
    }

    /// List the caller's entries, one page of [`PAGE_SIZE`] at a time.
    pub async fn list(&self, token: Option<&str>, query: &ListQuery) -> Result<Vec<FileView>> {
        let owner = self.authenticate(token).await?;

        let skip = i64::from(query.page.unwrap_or(0)) * PAGE_SIZE;
        let files = FileRepository::new(self.db.pool())
            .list(owner, query.parent_id.as_ref(), skip, PAGE_SIZE)
            .await?;

        Ok(files.iter().map(|f| f.view()).collect())
    }

    /// Set the visibility of one of the caller's entries.
    ///
    /// The flag is written unconditionally, so repeating a call is harmless.
    pub async fn set_visibility(
        &self,
        token: Option<&str>,
        id: &FileId,
        is_public: bool,
    ) -> Result<FileView> {
        let owner = self.authenticate(token).await?;

        let file = FileRepository::new(self.db.pool())
            .update_visibility(id, owner, is_public)
            .await?
            .ok_or(FilesError::NotFound)?;

        tracing::debug!(file_id = %file.id, is_public, "Visibility updated");
        Ok(file.view())
    }

    /// Make an entry public.
    pub async fn publish(&self, token: Option<&str>, id: &FileId) -> Result<FileView> {
        self.set_visibility(token, id, true).await
    }

    /// Make an entry private.
    pub async fn unpublish(&self, token: Option<&str>, id: &FileId) -> Result<FileView> {
        self.set_visibility(token, id, false).await
    }

    /// Get the bytes of a file.
    ///
    /// Public files are readable without a token. Private files are only
    /// readable by their owner; everyone else gets `NotFound`.
    pub async fn content(&self, token: Option<&str>, id: &FileId) -> Result<FileContent> {
        let file = FileRepository::new(self.db.pool())
            .find_by_id(id)
            .await?
            .ok_or(FilesError::NotFound)?;

        if !file.is_public {
            let caller = match token {
                Some(token) => self.identity.resolve(token).await?,
                None => None,
            };
            if caller.map_or(true, |user| !file.is_owned_by(user)) {
                return Err(FilesError::NotFound);
            }
        }

        if file.kind == FileKind::Folder {
            return Err(FilesError::NoContentForFolder);
        }

        let blob_path = file.blob_path.as_deref().ok_or(FilesError::NotFound)?;
        if !self.blobs.exists(blob_path).await? {
            tracing::warn!(file_id = %file.id, "Blob missing from storage");
            return Err(FilesError::NotFound);
        }
        let bytes = self.blobs.read(blob_path).await?;

        Ok(FileContent {
            bytes,
            mime_type: mime_type_for(&file.name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SessionResolver;
    use crate::db::SessionRepository;
    use tempfile::TempDir;
    use tokio::sync::mpsc;

    struct Fixture {
        _temp_dir: TempDir,
        service: FileService,
        jobs: mpsc::Receiver<ThumbnailJob>,
        blob_root: std::path::PathBuf,
    }

    impl Fixture {
        async fn new() -> Self {
            let temp_dir = TempDir::new().unwrap();
            let blob_root = temp_dir.path().join("files");
            let db = Arc::new(Database::open_in_memory().await.unwrap());
            let (queue, jobs) = JobQueue::channel(16);
            let service = FileService::new(
                db.clone(),
                BlobStore::new(&blob_root),
                queue,
                Arc::new(SessionResolver::new(db)),
            );
            Self {
                _temp_dir: temp_dir,
                service,
                jobs,
                blob_root,
            }
        }

        async fn login(&self, user: i64) -> String {
            SessionRepository::new(self.service.database().pool())
                .create(UserId::new(user), 3600)
                .await
                .unwrap()
        }

        async fn record_count(&self) -> i64 {
            FileRepository::new(self.service.database().pool())
                .count()
                .await
                .unwrap()
        }
    }

    #[tokio::test]
    async fn test_create_folder() {
        let fx = Fixture::new().await;
        let token = fx.login(1).await;

        let folder = fx
            .service
            .create(Some(&token), CreateFile::new("Photos", FileKind::Folder))
            .await
            .unwrap();

        assert_eq!(folder.name, "Photos");
        assert_eq!(folder.kind, FileKind::Folder);
        assert_eq!(folder.owner_id, UserId::new(1));
        assert!(!folder.is_public);
        assert!(folder.parent_id.is_root());
        // No blob for folders; root not even created
        assert!(!fx.blob_root.exists());
    }

    #[tokio::test]
    async fn test_create_requires_identity() {
        let fx = Fixture::new().await;

        let no_token = fx
            .service
            .create(None, CreateFile::new("x", FileKind::Folder))
            .await;
        assert!(matches!(no_token, Err(FilesError::Unauthenticated)));

        let bad_token = fx
            .service
            .create(Some("bogus"), CreateFile::new("x", FileKind::Folder))
            .await;
        assert!(matches!(bad_token, Err(FilesError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_create_validation_order() {
        let fx = Fixture::new().await;
        let token = fx.login(1).await;

        // Everything wrong: name reported first
        let request = CreateFile {
            name: Some(String::new()),
            kind: Some("video".to_string()),
            parent_id: Some(ParentRef::parse("missing")),
            is_public: None,
            data: None,
        };
        let result = fx.service.create(Some(&token), request).await;
        assert!(matches!(result, Err(FilesError::MissingField("name"))));

        // Then kind
        let request = CreateFile {
            name: Some("x".to_string()),
            kind: None,
            parent_id: Some(ParentRef::parse("missing")),
            ..Default::default()
        };
        let result = fx.service.create(Some(&token), request).await;
        assert!(matches!(result, Err(FilesError::InvalidField("kind"))));

        // Then data
        let request = CreateFile::new("a.txt", FileKind::Document)
            .with_parent(ParentRef::parse("missing"));
        let result = fx.service.create(Some(&token), request).await;
        assert!(matches!(result, Err(FilesError::MissingField("data"))));

        // Then parent
        let request = CreateFile::new("a.txt", FileKind::Document)
            .with_parent(ParentRef::parse("missing"))
            .with_content(b"hi");
        let result = fx.service.create(Some(&token), request).await;
        assert!(matches!(result, Err(FilesError::ParentNotFound)));

        assert_eq!(fx.record_count().await, 0);
        assert!(!fx.blob_root.exists());
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_kind() {
        let fx = Fixture::new().await;
        let token = fx.login(1).await;

        let request = CreateFile {
            name: Some("x".to_string()),
            kind: Some("file".to_string()),
            ..Default::default()
        };
        let result = fx.service.create(Some(&token), request).await;
        assert!(matches!(result, Err(FilesError::InvalidField("kind"))));
    }

    #[tokio::test]
    async fn test_create_empty_data_is_missing() {
        let fx = Fixture::new().await;
        let token = fx.login(1).await;

        let mut request = CreateFile::new("a.png", FileKind::Image);
        request.data = Some(String::new());

        let result = fx.service.create(Some(&token), request).await;
        assert!(matches!(result, Err(FilesError::MissingField("data"))));
        assert!(!fx.blob_root.exists());
    }

    #[tokio::test]
    async fn test_create_invalid_base64() {
        let fx = Fixture::new().await;
        let token = fx.login(1).await;

        let mut request = CreateFile::new("a.txt", FileKind::Document);
        request.data = Some("not base64!!".to_string());

        let result = fx.service.create(Some(&token), request).await;
        assert!(matches!(result, Err(FilesError::InvalidField("data"))));
        assert_eq!(fx.record_count().await, 0);
        assert!(!fx.blob_root.exists());
    }

    #[tokio::test]
    async fn test_create_under_non_folder_parent() {
        let fx = Fixture::new().await;
        let token = fx.login(1).await;

        let doc = fx
            .service
            .create(
                Some(&token),
                CreateFile::new("a.txt", FileKind::Document).with_content(b"text"),
            )
            .await
            .unwrap();

        let result = fx
            .service
            .create(
                Some(&token),
                CreateFile::new("child", FileKind::Folder).with_parent(ParentRef::Folder(doc.id)),
            )
            .await;

        assert!(matches!(result, Err(FilesError::ParentNotFolder)));
        assert_eq!(fx.record_count().await, 1);
    }

    #[tokio::test]
    async fn test_create_folder_data_is_ignored() {
        let fx = Fixture::new().await;
        let token = fx.login(1).await;

        let folder = fx
            .service
            .create(
                Some(&token),
                CreateFile::new("Docs", FileKind::Folder).with_content(b"ignored"),
            )
            .await
            .unwrap();

        assert_eq!(folder.kind, FileKind::Folder);
        assert!(!fx.blob_root.exists());
    }

    #[tokio::test]
    async fn test_create_image_enqueues_job() {
        let mut fx = Fixture::new().await;
        let token = fx.login(4).await;

        let image = fx
            .service
            .create(
                Some(&token),
                CreateFile::new("a.png", FileKind::Image).with_content(&[0x89, b'P', b'N', b'G']),
            )
            .await
            .unwrap();

        let job = fx.jobs.try_recv().unwrap();
        assert_eq!(
            job,
            ThumbnailJob {
                owner_id: UserId::new(4),
                file_id: image.id,
            }
        );
    }

    #[tokio::test]
    async fn test_create_document_enqueues_nothing() {
        let mut fx = Fixture::new().await;
        let token = fx.login(1).await;

        fx.service
            .create(
                Some(&token),
                CreateFile::new("a.txt", FileKind::Document).with_content(b"text"),
            )
            .await
            .unwrap();

        assert!(fx.jobs.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_create_succeeds_when_queue_closed() {
        let fx = Fixture::new().await;
        let token = fx.login(1).await;
        let Fixture {
            _temp_dir,
            service,
            jobs,
            ..
        } = fx;
        drop(jobs);

        let image = service
            .create(
                Some(&token),
                CreateFile::new("a.png", FileKind::Image).with_content(b"png"),
            )
            .await;

        assert!(image.is_ok());
    }

    #[tokio::test]
    async fn test_create_blob_write_failure_leaves_no_record() {
        let temp_dir = TempDir::new().unwrap();
        let blocked = temp_dir.path().join("blocked");
        std::fs::write(&blocked, b"file, not a directory").unwrap();

        let db = Arc::new(Database::open_in_memory().await.unwrap());
        let (queue, _jobs) = JobQueue::channel(4);
        let service = FileService::new(
            db.clone(),
            BlobStore::new(&blocked),
            queue,
            Arc::new(SessionResolver::new(db.clone())),
        );
        let token = SessionRepository::new(db.pool())
            .create(UserId::new(1), 60)
            .await
            .unwrap();

        let result = service
            .create(
                Some(&token),
                CreateFile::new("a.txt", FileKind::Document).with_content(b"text"),
            )
            .await;

        assert!(matches!(result, Err(FilesError::Storage(_))));
        assert_eq!(FileRepository::new(db.pool()).count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_show_is_owner_scoped() {
        let fx = Fixture::new().await;
        let alice = fx.login(1).await;
        let bob = fx.login(2).await;

        let folder = fx
            .service
            .create(
                Some(&alice),
                CreateFile::new("Shared", FileKind::Folder).with_public(true),
            )
            .await
            .unwrap();

        let shown = fx.service.show(Some(&alice), &folder.id).await.unwrap();
        assert_eq!(shown, folder);

        // Public does not matter for show
        let other = fx.service.show(Some(&bob), &folder.id).await;
        assert!(matches!(other, Err(FilesError::NotFound)));

        let anonymous = fx.service.show(None, &folder.id).await;
        assert!(matches!(anonymous, Err(FilesError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_list_pages_of_twenty() {
        let fx = Fixture::new().await;
        let token = fx.login(1).await;

        for i in 0..25 {
            fx.service
                .create(
                    Some(&token),
                    CreateFile::new(format!("f{i:02}"), FileKind::Folder),
                )
                .await
                .unwrap();
        }

        let first = fx
            .service
            .list(Some(&token), &ListQuery::default())
            .await
            .unwrap();
        assert_eq!(first.len(), 20);
        assert_eq!(first[0].name, "f00");

        let second = fx
            .service
            .list(
                Some(&token),
                &ListQuery {
                    page: Some(1),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(second.len(), 5);
        assert_eq!(second[0].name, "f20");

        let beyond = fx
            .service
            .list(
                Some(&token),
                &ListQuery {
                    page: Some(7),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(beyond.is_empty());
    }

    #[tokio::test]
    async fn test_list_requires_identity() {
        let fx = Fixture::new().await;

        let result = fx.service.list(None, &ListQuery::default()).await;
        assert!(matches!(result, Err(FilesError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_list_unknown_parent_is_empty() {
        let fx = Fixture::new().await;
        let token = fx.login(1).await;

        let files = fx
            .service
            .list(
                Some(&token),
                &ListQuery::children_of(ParentRef::parse("nope")),
            )
            .await
            .unwrap();
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn test_set_visibility_idempotent() {
        let fx = Fixture::new().await;
        let token = fx.login(1).await;

        let doc = fx
            .service
            .create(
                Some(&token),
                CreateFile::new("a.txt", FileKind::Document).with_content(b"text"),
            )
            .await
            .unwrap();

        let once = fx.service.publish(Some(&token), &doc.id).await.unwrap();
        let twice = fx.service.publish(Some(&token), &doc.id).await.unwrap();
        assert!(once.is_public);
        assert_eq!(once, twice);

        let private = fx.service.unpublish(Some(&token), &doc.id).await.unwrap();
        assert!(!private.is_public);
        let still_private = fx.service.unpublish(Some(&token), &doc.id).await.unwrap();
        assert_eq!(private, still_private);
    }

    #[tokio::test]
    async fn test_set_visibility_other_owner_not_found() {
        let fx = Fixture::new().await;
        let alice = fx.login(1).await;
        let bob = fx.login(2).await;

        let doc = fx
            .service
            .create(
                Some(&alice),
                CreateFile::new("a.txt", FileKind::Document).with_content(b"text"),
            )
            .await
            .unwrap();

        let result = fx.service.publish(Some(&bob), &doc.id).await;
        assert!(matches!(result, Err(FilesError::NotFound)));

        let missing = fx
            .service
            .publish(Some(&alice), &FileId::from("missing"))
            .await;
        assert!(matches!(missing, Err(FilesError::NotFound)));

        let anonymous = fx.service.unpublish(None, &doc.id).await;
        assert!(matches!(anonymous, Err(FilesError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_content_private_file_gating() {
        let fx = Fixture::new().await;
        let alice = fx.login(1).await;
        let bob = fx.login(2).await;

        let doc = fx
            .service
            .create(
                Some(&alice),
                CreateFile::new("notes.txt", FileKind::Document).with_content(b"secret"),
            )
            .await
            .unwrap();

        let owner = fx.service.content(Some(&alice), &doc.id).await.unwrap();
        assert_eq!(owner.bytes, b"secret");
        assert_eq!(owner.mime_type, "text/plain");

        for token in [Some(bob.as_str()), Some("bogus"), None] {
            let result = fx.service.content(token, &doc.id).await;
            assert!(matches!(result, Err(FilesError::NotFound)));
        }

        fx.service.publish(Some(&alice), &doc.id).await.unwrap();

        for token in [Some(bob.as_str()), Some("bogus"), None] {
            let content = fx.service.content(token, &doc.id).await.unwrap();
            assert_eq!(content.bytes, b"secret");
        }
    }

    #[tokio::test]
    async fn test_content_of_folder() {
        let fx = Fixture::new().await;
        let token = fx.login(1).await;

        let folder = fx
            .service
            .create(Some(&token), CreateFile::new("Docs", FileKind::Folder))
            .await
            .unwrap();

        let result = fx.service.content(Some(&token), &folder.id).await;
        assert!(matches!(result, Err(FilesError::NoContentForFolder)));
    }

    #[tokio::test]
    async fn test_content_private_folder_hidden_from_others() {
        let fx = Fixture::new().await;
        let alice = fx.login(1).await;

        let folder = fx
            .service
            .create(Some(&alice), CreateFile::new("Docs", FileKind::Folder))
            .await
            .unwrap();

        // Visibility is checked before kind
        let result = fx.service.content(None, &folder.id).await;
        assert!(matches!(result, Err(FilesError::NotFound)));
    }

    #[tokio::test]
    async fn test_content_missing_blob() {
        let fx = Fixture::new().await;
        let token = fx.login(1).await;

        let doc = fx
            .service
            .create(
                Some(&token),
                CreateFile::new("a.txt", FileKind::Document).with_content(b"text"),
            )
            .await
            .unwrap();

        std::fs::remove_dir_all(&fx.blob_root).unwrap();

        let result = fx.service.content(Some(&token), &doc.id).await;
        assert!(matches!(result, Err(FilesError::NotFound)));
    }

    #[tokio::test]
    async fn test_content_unknown_id() {
        let fx = Fixture::new().await;

        let result = fx.service.content(None, &FileId::from("nope")).await;
        assert!(matches!(result, Err(FilesError::NotFound)));
    }
}
