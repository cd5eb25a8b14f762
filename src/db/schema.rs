//! Database schema and migrations for Files Manager.
//!
//! Migrations are applied sequentially when the database is first opened or
//! upgraded. The schema_version table tracks which have been applied.

/// Database migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: File records
    r#"
-- seq preserves insertion order for listings; id is the opaque public identifier
CREATE TABLE files (
    seq         INTEGER PRIMARY KEY AUTOINCREMENT,
    id          TEXT NOT NULL UNIQUE,
    owner_id    INTEGER NOT NULL,
    name        TEXT NOT NULL,
    kind        TEXT NOT NULL CHECK (kind IN ('folder', 'document', 'image')),
    parent_id   TEXT,                     -- NULL for root
    is_public   INTEGER NOT NULL DEFAULT 0,
    blob_path   TEXT,                     -- NULL for folders
    created_at  TEXT NOT NULL DEFAULT (datetime('now')),
    CHECK ((kind = 'folder') = (blob_path IS NULL))
);

CREATE INDEX idx_files_owner_parent ON files(owner_id, parent_id);
"#,
    // v2: Session tokens
    r#"
CREATE TABLE sessions (
    token       TEXT PRIMARY KEY,
    user_id     INTEGER NOT NULL,
    expires_at  TEXT NOT NULL,
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_sessions_expires_at ON sessions(expires_at);
"#,
];
