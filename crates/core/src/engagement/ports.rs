//! Port interfaces for visitor engagement
//!
//! These traits define the boundaries between the notifier and whatever
//! hosts the page: the alert endpoint, the embedded chat widget and the
//! local prompt UI.

use async_trait::async_trait;
use rhai_domain::{Result, SearchAlert};
use serde_json::Value;

use super::FallbackBanner;

/// Outbound "someone is searching" notification.
#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn send_alert(&self, alert: SearchAlert) -> Result<()>;
}

/// Third-party chat widget embedded in the page.
///
/// The widget loads asynchronously and may not be ready at mount.
#[async_trait]
pub trait ChatWidget: Send + Sync {
    /// True once the widget has loaded and exposes its event API.
    fn is_ready(&self) -> bool;

    /// Emit a custom event to the widget.
    async fn emit(&self, event: &str, payload: Value) -> Result<()>;

    /// Open the chat window.
    async fn maximize(&self) -> Result<()>;
}

/// Local UI used when the chat widget can't be activated.
pub trait PromptPresenter: Send + Sync {
    fn show_fallback(&self, banner: FallbackBanner);
}
