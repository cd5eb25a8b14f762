//! HTTP interface for Files Manager.
//!
//! A thin axum layer over [`crate::file::FileService`]: handlers pull the
//! session token from the `X-Token` header and map service errors onto
//! status codes.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
