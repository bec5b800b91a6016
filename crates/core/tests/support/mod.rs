//! Shared test helpers for `rhai-core` integration tests.
//!
//! In-memory stand-ins for the engagement ports so notifier tests can
//! assert on what a page would have sent or shown.

pub mod engagement;
