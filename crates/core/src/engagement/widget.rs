//! Chat widget readiness polling

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::ports::ChatWidget;

/// Readiness polling state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    /// Nothing observed yet.
    Idle,
    /// Widget not ready; this many re-checks are left.
    Polling { attempts_remaining: u32 },
    Ready,
    /// Gave up without seeing the widget ready.
    Exhausted,
}

impl PollState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Ready | Self::Exhausted)
    }
}

/// State machine for "check now, then re-check up to N times".
///
/// The first observation happens from `Idle`; a not-ready widget moves to
/// `Polling` with `max_retries` re-checks left. `Ready` and `Exhausted` are
/// terminal and ignore further observations.
#[derive(Debug, Clone)]
pub struct WidgetPoller {
    state: PollState,
    max_retries: u32,
}

impl WidgetPoller {
    pub fn new(max_retries: u32) -> Self {
        Self { state: PollState::Idle, max_retries }
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    /// Record one readiness check and return the new state.
    pub fn observe(&mut self, ready: bool) -> PollState {
        self.state = match self.state {
            state if state.is_terminal() => state,
            _ if ready => PollState::Ready,
            PollState::Idle if self.max_retries > 0 => {
                PollState::Polling { attempts_remaining: self.max_retries }
            }
            PollState::Polling { attempts_remaining } if attempts_remaining > 1 => {
                PollState::Polling { attempts_remaining: attempts_remaining - 1 }
            }
            _ => PollState::Exhausted,
        };
        self.state
    }
}

/// Poll `widget` until it is ready, retries run out, or `cancel` fires.
///
/// Returns true when the widget became ready.
pub async fn wait_until_ready(
    widget: &dyn ChatWidget,
    interval: Duration,
    max_retries: u32,
    cancel: &CancellationToken,
) -> bool {
    let mut poller = WidgetPoller::new(max_retries);
    loop {
        match poller.observe(widget.is_ready()) {
            PollState::Ready => return true,
            PollState::Polling { attempts_remaining } => {
                debug!(attempts_remaining, "Chat widget not ready; polling");
                tokio::select! {
                    _ = cancel.cancelled() => {
                        debug!("Chat widget polling cancelled");
                        return false;
                    }
                    _ = tokio::time::sleep(interval) => {}
                }
            }
            PollState::Idle | PollState::Exhausted => {
                debug!("Chat widget never became ready");
                return false;
            }
        }
    }
}
