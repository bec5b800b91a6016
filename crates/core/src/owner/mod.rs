//! Owner notifications over the messaging bot

pub mod ports;
pub mod service;

pub use service::{escape_markdown, payment_text, search_alert_text, typing_text, OwnerAlertService};
