//! Extractors for the Web API.

mod auth;

pub use auth::{SessionToken, TOKEN_HEADER};
