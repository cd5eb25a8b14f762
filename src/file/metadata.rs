//! File record types for Files Manager.

use std::path::PathBuf;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use crate::auth::UserId;
use crate::FilesError;

/// Wire spelling of the root parent.
pub const ROOT: &str = "root";

/// Opaque file identifier.
///
/// Identifiers compare as exact strings. No normalization is applied, so an
/// identifier only matches when it is presented in the form it was issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FileId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FileId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of a file entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Container with no bytes of its own.
    Folder,
    /// Opaque uploaded document.
    Document,
    /// Uploaded image; queued for post-processing after creation.
    Image,
}

impl FileKind {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Folder => "folder",
            FileKind::Document => "document",
            FileKind::Image => "image",
        }
    }

    /// Whether entries of this kind carry a blob.
    pub fn has_content(&self) -> bool {
        !matches!(self, FileKind::Folder)
    }
}

impl FromStr for FileKind {
    type Err = FilesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "folder" => Ok(FileKind::Folder),
            "document" => Ok(FileKind::Document),
            "image" => Ok(FileKind::Image),
            _ => Err(FilesError::InvalidField("kind")),
        }
    }
}

/// Parent reference of a file entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParentRef {
    /// Top level; no parent folder.
    #[default]
    Root,
    /// Child of the folder with this ID.
    Folder(FileId),
}

impl ParentRef {
    /// Parse the wire form: `"root"` or a file ID.
    pub fn parse(s: &str) -> Self {
        if s == ROOT {
            ParentRef::Root
        } else {
            ParentRef::Folder(FileId::from(s))
        }
    }

    /// Build from the nullable `parent_id` column.
    pub fn from_column(value: Option<String>) -> Self {
        match value {
            Some(id) => ParentRef::Folder(FileId::from(id)),
            None => ParentRef::Root,
        }
    }

    /// Value for the nullable `parent_id` column.
    pub fn as_column(&self) -> Option<&str> {
        match self {
            ParentRef::Root => None,
            ParentRef::Folder(id) => Some(id.as_str()),
        }
    }

    /// Check if this is the root.
    pub fn is_root(&self) -> bool {
        matches!(self, ParentRef::Root)
    }
}

impl std::fmt::Display for ParentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParentRef::Root => f.write_str(ROOT),
            ParentRef::Folder(id) => f.write_str(id.as_str()),
        }
    }
}

impl Serialize for ParentRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepts a string, or an integer read as its decimal string.
struct ParentRefVisitor;

impl<'de> Visitor<'de> for ParentRefVisitor {
    type Value = ParentRef;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a file ID or \"root\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ParentRef::parse(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ParentRef::parse(&v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ParentRef::parse(&v.to_string()))
    }
}

impl<'de> Deserialize<'de> for ParentRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ParentRefVisitor)
    }
}

/// A stored file entry.
#[derive(Debug, Clone)]
pub struct File {
    /// Unique file ID.
    pub id: FileId,
    /// User who created the entry.
    pub owner_id: UserId,
    /// Display name.
    pub name: String,
    /// Entry kind.
    pub kind: FileKind,
    /// Parent folder, or root.
    pub parent_id: ParentRef,
    /// Whether content is readable by anyone.
    pub is_public: bool,
    /// Location of the bytes on disk. `None` for folders.
    pub blob_path: Option<PathBuf>,
}

impl File {
    /// The caller-facing view of this entry.
    pub fn view(&self) -> FileView {
        FileView {
            id: self.id.clone(),
            owner_id: self.owner_id,
            name: self.name.clone(),
            kind: self.kind,
            is_public: self.is_public,
            parent_id: self.parent_id.clone(),
        }
    }

    /// Whether `user` owns this entry.
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner_id == user
    }
}

impl<'r> FromRow<'r, SqliteRow> for File {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let kind: String = row.try_get("kind")?;
        let kind = kind
            .parse::<FileKind>()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        let blob_path: Option<String> = row.try_get("blob_path")?;

        Ok(Self {
            id: FileId::from(row.try_get::<String, _>("id")?),
            owner_id: UserId::new(row.try_get("owner_id")?),
            name: row.try_get("name")?,
            kind,
            parent_id: ParentRef::from_column(row.try_get("parent_id")?),
            is_public: row.try_get("is_public")?,
            blob_path: blob_path.map(PathBuf::from),
        })
    }
}

/// Fields of a file entry that may be returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileView {
    pub id: FileId,
    pub owner_id: UserId,
    pub name: String,
    pub kind: FileKind,
    pub is_public: bool,
    pub parent_id: ParentRef,
}

/// Data for inserting a new file entry.
#[derive(Debug, Clone)]
pub struct NewFile {
    /// Owner of the entry.
    pub owner_id: UserId,
    /// Display name.
    pub name: String,
    /// Entry kind.
    pub kind: FileKind,
    /// Parent folder, or root.
    pub parent_id: ParentRef,
    /// Initial visibility.
    pub is_public: bool,
    /// Location of the already written bytes.
    pub blob_path: Option<PathBuf>,
}

impl NewFile {
    /// A folder entry.
    pub fn folder(owner_id: UserId, name: impl Into<String>) -> Self {
        Self {
            owner_id,
            name: name.into(),
            kind: FileKind::Folder,
            parent_id: ParentRef::Root,
            is_public: false,
            blob_path: None,
        }
    }

    /// A document or image entry whose bytes are already stored at `blob_path`.
    pub fn stored(
        owner_id: UserId,
        name: impl Into<String>,
        kind: FileKind,
        blob_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            owner_id,
            name: name.into(),
            kind,
            parent_id: ParentRef::Root,
            is_public: false,
            blob_path: Some(blob_path.into()),
        }
    }

    /// Set the parent.
    pub fn with_parent(mut self, parent_id: ParentRef) -> Self {
        self.parent_id = parent_id;
        self
    }

    /// Set the initial visibility.
    pub fn with_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_conversion() {
        assert_eq!("folder".parse::<FileKind>().unwrap(), FileKind::Folder);
        assert_eq!("document".parse::<FileKind>().unwrap(), FileKind::Document);
        assert_eq!("image".parse::<FileKind>().unwrap(), FileKind::Image);
        assert!(matches!(
            "Folder".parse::<FileKind>(),
            Err(FilesError::InvalidField("kind"))
        ));
        assert!("file".parse::<FileKind>().is_err());

        assert_eq!(FileKind::Image.as_str(), "image");
        assert!(!FileKind::Folder.has_content());
        assert!(FileKind::Document.has_content());
    }

    #[test]
    fn test_parent_ref_parse() {
        assert_eq!(ParentRef::parse("root"), ParentRef::Root);
        assert_eq!(
            ParentRef::parse("abc"),
            ParentRef::Folder(FileId::from("abc"))
        );
        // No coercion of alternative root spellings
        assert_eq!(ParentRef::parse("0"), ParentRef::Folder(FileId::from("0")));
    }

    #[test]
    fn test_parent_ref_column() {
        assert_eq!(ParentRef::from_column(None), ParentRef::Root);
        assert_eq!(ParentRef::Root.as_column(), None);

        let folder = ParentRef::from_column(Some("f1".to_string()));
        assert_eq!(folder.as_column(), Some("f1"));
        assert!(!folder.is_root());
    }

    #[test]
    fn test_parent_ref_serde() {
        assert_eq!(serde_json::to_string(&ParentRef::Root).unwrap(), "\"root\"");
        assert_eq!(
            serde_json::to_string(&ParentRef::Folder(FileId::from("f9"))).unwrap(),
            "\"f9\""
        );

        let parsed: ParentRef = serde_json::from_str("\"root\"").unwrap();
        assert!(parsed.is_root());

        // Numbers are IDs, never the root
        let numeric: ParentRef = serde_json::from_str("0").unwrap();
        assert_eq!(numeric, ParentRef::Folder(FileId::from("0")));

        assert!(serde_json::from_str::<ParentRef>("true").is_err());
    }

    #[test]
    fn test_file_view_excludes_blob_path() {
        let file = File {
            id: FileId::from("f1"),
            owner_id: UserId::new(1),
            name: "a.png".to_string(),
            kind: FileKind::Image,
            parent_id: ParentRef::Root,
            is_public: false,
            blob_path: Some(PathBuf::from("/tmp/files_manager/ab/abcdef")),
        };

        let json = serde_json::to_value(file.view()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "f1",
                "ownerId": 1,
                "name": "a.png",
                "kind": "image",
                "isPublic": false,
                "parentId": "root"
            })
        );
    }

    #[test]
    fn test_new_file_builders() {
        let folder = NewFile::folder(UserId::new(1), "Photos").with_public(true);
        assert_eq!(folder.kind, FileKind::Folder);
        assert!(folder.blob_path.is_none());
        assert!(folder.is_public);

        let doc = NewFile::stored(UserId::new(1), "a.txt", FileKind::Document, "/x/y")
            .with_parent(ParentRef::Folder(FileId::from("p")));
        assert_eq!(doc.blob_path, Some(PathBuf::from("/x/y")));
        assert_eq!(doc.parent_id, ParentRef::Folder(FileId::from("p")));
    }

    #[test]
    fn test_file_id_generate_unique() {
        assert_ne!(FileId::generate(), FileId::generate());
    }
}
