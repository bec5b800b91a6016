//! # RHAI API
//!
//! HTTP application layer - routes, server and main entry point.
//!
//! This crate contains:
//! - Axum route handlers (browser → backend bridge)
//! - Application context (dependency injection)
//! - Server setup, CORS and graceful shutdown
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Exposes the JSON endpoints used by the site pages

pub mod context;
pub mod errors;
pub mod extract;
pub mod routes;
pub mod server;
pub mod utils;

// Re-export for convenience
pub use context::*;
pub use errors::ApiError;
pub use routes::router;
pub use server::serve;
