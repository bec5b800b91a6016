//! Owner notification payloads

use serde::{Deserialize, Serialize};

/// "Someone is searching" alert, posted by the search page to the
/// owner-alert endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchAlert {
    /// Query text as typed (trimmed).
    pub q: String,
    /// Page URL the search happened on.
    pub url: String,
    /// Milliseconds since the Unix epoch.
    pub ts: Option<i64>,
}

impl SearchAlert {
    pub fn new(q: impl Into<String>, url: impl Into<String>, ts: i64) -> Self {
        Self { q: q.into(), url: url.into(), ts: Some(ts) }
    }
}

/// Typing notification enriched with caller details by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingNotice {
    pub query: Option<String>,
    pub ip: String,
    pub user_agent: String,
}

/// Result of handing a message to the owner messaging channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// Messaging is not configured; nothing was sent.
    Skipped { reason: String },
}
