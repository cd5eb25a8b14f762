//! Session-table backed identity resolver.

use std::sync::Arc;

use async_trait::async_trait;

use super::{IdentityResolver, UserId};
use crate::db::SessionRepository;
use crate::{Database, Result};

/// Resolves tokens against the `sessions` table.
#[derive(Debug, Clone)]
pub struct SessionResolver {
    db: Arc<Database>,
}

impl SessionResolver {
    /// Create a resolver over the given database.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IdentityResolver for SessionResolver {
    async fn resolve(&self, token: &str) -> Result<Option<UserId>> {
        if token.is_empty() {
            return Ok(None);
        }

        let user = SessionRepository::new(self.db.pool())
            .user_for_token(token)
            .await?;

        if user.is_none() {
            tracing::debug!("Session token did not resolve");
        }

        Ok(user)
    }
}
