//! File record repository.
//!
//! Lookups come in two shapes that must not be mixed up:
//! - [`FileRepository::find_owned`] only sees the caller's own entries.
//! - [`FileRepository::find_by_id`] sees every entry, for callers that apply
//!   their own visibility rules afterwards.

use sqlx::QueryBuilder;

use super::metadata::{File, FileId, NewFile, ParentRef};
use crate::auth::UserId;
use crate::db::DbPool;
use crate::Result;

const FILE_COLUMNS: &str = "id, owner_id, name, kind, parent_id, is_public, blob_path";

/// Repository for file records.
pub struct FileRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> FileRepository<'a> {
    /// Create a new FileRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new record. The ID is assigned here.
    pub async fn insert(&self, new_file: &NewFile) -> Result<File> {
        let id = FileId::generate();
        let blob_path = new_file
            .blob_path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned());

        let sql = format!(
            "INSERT INTO files (id, owner_id, name, kind, parent_id, is_public, blob_path)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {FILE_COLUMNS}"
        );

        let file = sqlx::query_as::<_, File>(&sql)
            .bind(id.as_str())
            .bind(new_file.owner_id.get())
            .bind(&new_file.name)
            .bind(new_file.kind.as_str())
            .bind(new_file.parent_id.as_column())
            .bind(new_file.is_public)
            .bind(blob_path)
            .fetch_one(self.pool)
            .await?;

        Ok(file)
    }

    /// Get a record by ID regardless of owner.
    pub async fn find_by_id(&self, id: &FileId) -> Result<Option<File>> {
        let sql = format!("SELECT {FILE_COLUMNS} FROM files WHERE id = $1");

        let file = sqlx::query_as::<_, File>(&sql)
            .bind(id.as_str())
            .fetch_optional(self.pool)
            .await?;

        Ok(file)
    }

    /// Get a record by ID only if `owner` owns it.
    pub async fn find_owned(&self, id: &FileId, owner: UserId) -> Result<Option<File>> {
        let sql = format!("SELECT {FILE_COLUMNS} FROM files WHERE id = $1 AND owner_id = $2");

        let file = sqlx::query_as::<_, File>(&sql)
            .bind(id.as_str())
            .bind(owner.get())
            .fetch_optional(self.pool)
            .await?;

        Ok(file)
    }

    /// List an owner's records in insertion order.
    ///
    /// With `parent` set, only direct children of that parent are returned.
    pub async fn list(
        &self,
        owner: UserId,
        parent: Option<&ParentRef>,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<File>> {
        let mut query: QueryBuilder<sqlx::Sqlite> =
            QueryBuilder::new(format!("SELECT {FILE_COLUMNS} FROM files WHERE owner_id = "));
        query.push_bind(owner.get());

        match parent {
            Some(ParentRef::Root) => {
                query.push(" AND parent_id IS NULL");
            }
            Some(ParentRef::Folder(id)) => {
                query.push(" AND parent_id = ");
                query.push_bind(id.as_str());
            }
            None => {}
        }

        query.push(" ORDER BY seq LIMIT ");
        query.push_bind(limit);
        query.push(" OFFSET ");
        query.push_bind(skip);

        let files = query.build_query_as::<File>().fetch_all(self.pool).await?;

        Ok(files)
    }

    /// Set the visibility flag of an owned record in one statement.
    ///
    /// Returns `None` if the record does not exist or belongs to someone else.
    pub async fn update_visibility(
        &self,
        id: &FileId,
        owner: UserId,
        is_public: bool,
    ) -> Result<Option<File>> {
        let sql = format!(
            "UPDATE files SET is_public = $1
             WHERE id = $2 AND owner_id = $3
             RETURNING {FILE_COLUMNS}"
        );

        let file = sqlx::query_as::<_, File>(&sql)
            .bind(is_public)
            .bind(id.as_str())
            .bind(owner.get())
            .fetch_optional(self.pool)
            .await?;

        Ok(file)
    }

    /// Count all records.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM files")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
