//! Shared HTTP client for outbound calls

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
