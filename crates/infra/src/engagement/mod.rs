//! Engagement adapters

pub mod alert_sink;

pub use alert_sink::HttpAlertSink;
