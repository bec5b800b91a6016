//! Visitor engagement
//!
//! Two once-per-session side effects driven by a page's lifecycle: the
//! search alarm (debounced owner alert plus a chat widget nudge) and the
//! proactive help prompt shown after a dwell delay.

pub mod notifier;
pub mod ports;
pub mod session;
pub mod widget;

pub use notifier::EngagementNotifier;
use rhai_domain::constants::BOOKING_PATH;
pub use session::BrowsingSession;
pub use widget::{wait_until_ready, PollState, WidgetPoller};

/// Page the notifier is mounted on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// Short page name sent with the proactive prompt event ("home").
    pub page: String,
    /// Full URL sent with the search alert.
    pub url: String,
}

impl PageContext {
    pub fn new(page: impl Into<String>, url: impl Into<String>) -> Self {
        Self { page: page.into(), url: url.into() }
    }
}

/// Action offered by the fallback banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    OpenChat,
    /// Navigate to the booking page.
    BookAppointment { path: &'static str },
    Dismiss,
}

/// Dismissible banner shown when the chat widget can't be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackBanner {
    pub primary: PromptAction,
}

impl FallbackBanner {
    /// Widget is present but the activation call failed.
    pub const fn open_chat() -> Self {
        Self { primary: PromptAction::OpenChat }
    }

    /// Widget is unavailable; point at the booking page instead.
    pub const fn book_appointment() -> Self {
        Self { primary: PromptAction::BookAppointment { path: BOOKING_PATH } }
    }

    /// Actions in display order.
    pub const fn actions(&self) -> [PromptAction; 2] {
        [self.primary, PromptAction::Dismiss]
    }
}
