//! # RHAI Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Configuration loading (environment and files)
//! - The shared HTTP client and error conversions
//! - The REST lead store
//! - The Telegram owner messenger
//! - The HTTP search alert sink
//!
//! ## Architecture
//! - Implements traits defined in `rhai-core`
//! - Depends on `rhai-domain` and `rhai-core`
//! - Contains all "impure" code (network I/O, environment, files)

pub mod config;
pub mod engagement;
pub mod errors;
pub mod http;
pub mod messaging;
pub mod store;

// Re-export commonly used items
pub use engagement::HttpAlertSink;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use messaging::TelegramMessenger;
pub use store::SupabaseLeadRepository;
