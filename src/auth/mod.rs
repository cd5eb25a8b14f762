//! Identity resolution for Files Manager.
//!
//! Callers present an opaque session token; an [`IdentityResolver`] turns it
//! into a [`UserId`] or reports that it does not resolve. The file service
//! depends only on the trait.

mod resolver;

pub use resolver::SessionResolver;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Identifier of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw user ID.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw user ID.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps a session token to the user it belongs to.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Returns `Ok(None)` for unknown or expired tokens. `Err` is reserved
    /// for backend failures.
    async fn resolve(&self, token: &str) -> Result<Option<UserId>>;
}
