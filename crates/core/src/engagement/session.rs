//! Browsing session flags

use std::sync::atomic::{AtomicBool, Ordering};

/// Per-session engagement state shared by every page of one browsing
/// session.
///
/// Both flags are write-once-true: they start false, flip to true at most
/// once and never go back. The `mark_*` methods use compare-and-set so only
/// one caller ever wins, even with several pages mounted concurrently.
#[derive(Debug, Default)]
pub struct BrowsingSession {
    alert_sent: AtomicBool,
    proactive_shown: AtomicBool,
}

impl BrowsingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alert_sent(&self) -> bool {
        self.alert_sent.load(Ordering::Acquire)
    }

    pub fn proactive_shown(&self) -> bool {
        self.proactive_shown.load(Ordering::Acquire)
    }

    /// Set `alert_sent`. Returns true only for the call that set it.
    pub fn mark_alert_sent(&self) -> bool {
        Self::claim(&self.alert_sent)
    }

    /// Set `proactive_shown`. Returns true only for the call that set it.
    pub fn mark_proactive_shown(&self) -> bool {
        Self::claim(&self.proactive_shown)
    }

    fn claim(flag: &AtomicBool) -> bool {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_ok()
    }
}
