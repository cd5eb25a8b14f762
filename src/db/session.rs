//! Session token repository.
//!
//! A session token is an opaque string mapped to a user ID until it expires.
//! How tokens are handed out (login) is outside this crate; the repository
//! only stores and resolves them.

use chrono::{DateTime, Duration, Utc};

use super::DbPool;
use crate::auth::UserId;
use crate::Result;

const SQL_NOW: &str = "datetime('now')";

/// Upper bound on token lifetime (ten years).
const MAX_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

fn to_sql_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Repository for session token operations.
pub struct SessionRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> SessionRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Store a new random token for `user_id` valid for `ttl_secs` seconds.
    pub async fn create(&self, user_id: UserId, ttl_secs: u64) -> Result<String> {
        let ttl = Duration::seconds(ttl_secs.min(MAX_TTL_SECS) as i64);
        self.create_with_expiry(user_id, Utc::now() + ttl).await
    }

    /// Store a new random token for `user_id` expiring at `expires_at`.
    pub async fn create_with_expiry(
        &self,
        user_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> Result<String> {
        let token = uuid::Uuid::new_v4().to_string();

        sqlx::query("INSERT INTO sessions (token, user_id, expires_at) VALUES ($1, $2, $3)")
            .bind(&token)
            .bind(user_id.get())
            .bind(to_sql_timestamp(expires_at))
            .execute(self.pool)
            .await?;

        Ok(token)
    }

    /// Resolve a token to its user, ignoring expired tokens.
    pub async fn user_for_token(&self, token: &str) -> Result<Option<UserId>> {
        let sql = format!(
            "SELECT user_id FROM sessions WHERE token = $1 AND expires_at > {}",
            SQL_NOW
        );
        let user_id: Option<i64> = sqlx::query_scalar(&sql)
            .bind(token)
            .fetch_optional(self.pool)
            .await?;

        Ok(user_id.map(UserId::new))
    }

    /// Remove a token. Returns `true` if it existed.
    pub async fn revoke(&self, token: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete expired tokens.
    pub async fn cleanup_expired(&self) -> Result<u64> {
        let sql = format!("DELETE FROM sessions WHERE expires_at <= {}", SQL_NOW);
        let result = sqlx::query(&sql).execute(self.pool).await?;

        Ok(result.rows_affected())
    }
}
