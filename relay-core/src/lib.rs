//! relay-core: Shared infrastructure for the blog relay services.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;

pub use axum;
pub use serde_json;
pub use tracing;
