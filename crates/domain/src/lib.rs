//! # RHAI Domain
//!
//! Business domain types and models for the RHAI destination site.
//!
//! This crate contains:
//! - The fixed destination catalog and its aliases
//! - Lead, alert and payment records exchanged with the outside world
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (timings and thresholds)
//!
//! ## Architecture
//! - No dependencies on other RHAI crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::text::normalize;
