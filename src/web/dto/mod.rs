//! Data Transfer Objects for Web API.

mod response;

pub use response::*;
