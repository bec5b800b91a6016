//! Port interfaces for owner messaging

use async_trait::async_trait;
use rhai_domain::Result;

/// Text message for the site owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerMessage {
    pub text: String,
    /// Render with the bot's Markdown parse mode.
    pub markdown: bool,
}

impl OwnerMessage {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), markdown: false }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self { text: text.into(), markdown: true }
    }
}

/// Messaging channel that reaches the site owner
#[async_trait]
pub trait OwnerMessenger: Send + Sync {
    /// True when credentials for the channel are present
    fn is_configured(&self) -> bool;

    /// Deliver a message
    async fn send(&self, message: &OwnerMessage) -> Result<()>;
}
