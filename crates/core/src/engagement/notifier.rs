//! Engagement notifier - one instance per mounted page
//!
//! Owns the page's timers. Every timer runs as a Tokio task guarded by a
//! cancellation token that is a child of the page lifecycle token, so
//! unmounting (or dropping the notifier) cancels all of them at once.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use rhai_domain::constants::{EVENT_AUTO_PROMPT, EVENT_SEARCH_STARTED};
use rhai_domain::{EngagementConfig, Result, SearchAlert};
use serde_json::{json, Value};
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::ports::{AlertSink, ChatWidget, PromptPresenter};
use super::widget::wait_until_ready;
use super::{BrowsingSession, FallbackBanner, PageContext};

/// Slot holding the token of the single live timer for one concern.
type TimerSlot = Mutex<Option<CancellationToken>>;

/// Everything a timer task needs once it fires.
#[derive(Clone)]
struct NotifierContext {
    session: Arc<BrowsingSession>,
    page: PageContext,
    config: EngagementConfig,
    alerts: Arc<dyn AlertSink>,
    widget: Option<Arc<dyn ChatWidget>>,
    presenter: Arc<dyn PromptPresenter>,
}

/// Search alarm and proactive prompt for one page.
///
/// Typical lifecycle: build, [`mount`](Self::mount), feed every query change
/// to [`on_query_change`](Self::on_query_change), then
/// [`unmount`](Self::unmount) or drop. Session flags live in the shared
/// [`BrowsingSession`], so a remounted page never repeats a side effect.
pub struct EngagementNotifier {
    ctx: NotifierContext,
    lifecycle: CancellationToken,
    debounce: TimerSlot,
    proactive: TimerSlot,
}

impl EngagementNotifier {
    pub fn new(
        session: Arc<BrowsingSession>,
        page: PageContext,
        alerts: Arc<dyn AlertSink>,
        presenter: Arc<dyn PromptPresenter>,
    ) -> Self {
        Self {
            ctx: NotifierContext {
                session,
                page,
                config: EngagementConfig::default(),
                alerts,
                widget: None,
                presenter,
            },
            lifecycle: CancellationToken::new(),
            debounce: Mutex::new(None),
            proactive: Mutex::new(None),
        }
    }

    /// Attach the page's chat widget.
    pub fn with_widget(mut self, widget: Arc<dyn ChatWidget>) -> Self {
        self.ctx.widget = Some(widget);
        self
    }

    /// Override the default timings.
    pub fn with_config(mut self, config: EngagementConfig) -> Self {
        self.ctx.config = config;
        self
    }

    pub fn session(&self) -> &Arc<BrowsingSession> {
        &self.ctx.session
    }

    pub fn is_unmounted(&self) -> bool {
        self.lifecycle.is_cancelled()
    }

    /// Arm the proactive prompt timer.
    ///
    /// Does nothing when the prompt was already shown this session, when
    /// the page is already mounted, or after unmount.
    pub fn mount(&self) {
        if self.is_unmounted() {
            return;
        }
        if self.ctx.session.proactive_shown() {
            debug!(page = %self.ctx.page.page, "Proactive prompt already shown this session");
            return;
        }

        let mut slot = lock(&self.proactive);
        if slot.is_some() {
            return;
        }

        let token = self.lifecycle.child_token();
        *slot = Some(token.clone());
        spawn_timer(Self::proactive_prompt(self.ctx.clone(), token));
    }

    /// Handle a query change from the search box.
    ///
    /// Re-arms the debounce timer for queries with enough characters and
    /// cancels it for shorter ones. Once the session alert is sent nothing
    /// is armed anymore.
    pub fn on_query_change(&self, query: &str) {
        if self.is_unmounted() || self.ctx.session.alert_sent() {
            return;
        }

        let term = query.trim();
        let mut slot = lock(&self.debounce);
        if let Some(previous) = slot.take() {
            previous.cancel();
        }
        if term.chars().count() < self.ctx.config.min_query_chars {
            return;
        }

        let token = self.lifecycle.child_token();
        *slot = Some(token.clone());
        spawn_timer(Self::search_alarm(self.ctx.clone(), term.to_string(), token));
    }

    /// Cancel every pending timer of this page, including widget polling.
    pub fn unmount(&self) {
        if !self.lifecycle.is_cancelled() {
            debug!(page = %self.ctx.page.page, "Unmounting page; cancelling engagement timers");
            self.lifecycle.cancel();
        }
    }

    async fn search_alarm(ctx: NotifierContext, term: String, cancel: CancellationToken) {
        tokio::select! {
            _ = cancel.cancelled() => return,
            _ = tokio::time::sleep(ctx.config.debounce()) => {}
        }

        if !ctx.session.mark_alert_sent() {
            debug!("Search alert already sent this session");
            return;
        }

        let now = Utc::now().timestamp_millis();
        let alert = SearchAlert::new(term.as_str(), ctx.page.url.as_str(), now);
        let alerts = Arc::clone(&ctx.alerts);
        tokio::spawn(async move {
            if let Err(err) = alerts.send_alert(alert).await {
                debug!(error = %err, "Search alert failed; ignoring");
            }
        });
        info!(page = %ctx.page.page, "Search alert fired");

        let Some(widget) = ctx.widget.as_deref() else {
            return;
        };
        let ready = wait_until_ready(
            widget,
            ctx.config.widget_poll_interval(),
            ctx.config.widget_max_retries,
            &cancel,
        )
        .await;
        if ready {
            let event = json!({ "query": term });
            if let Err(err) = activate(widget, EVENT_SEARCH_STARTED, event).await {
                debug!(error = %err, "Chat widget search event failed; ignoring");
            }
        }
    }

    async fn proactive_prompt(ctx: NotifierContext, cancel: CancellationToken) {
        tokio::select! {
            _ = cancel.cancelled() => return,
            _ = tokio::time::sleep(ctx.config.proactive_delay()) => {}
        }

        if !ctx.session.mark_proactive_shown() {
            debug!("Proactive prompt already shown this session");
            return;
        }

        let page = ctx.page.page.as_str();
        match ctx.widget.as_deref().filter(|widget| widget.is_ready()) {
            Some(widget) => {
                match activate(widget, EVENT_AUTO_PROMPT, json!({ "page": page })).await {
                    Ok(()) => info!(page, "Proactive prompt opened chat widget"),
                    Err(err) => {
                        debug!(
                            error = %err,
                            page,
                            "Chat widget activation failed; showing fallback"
                        );
                        ctx.presenter.show_fallback(FallbackBanner::open_chat());
                    }
                }
            }
            None => {
                debug!(page, "Chat widget unavailable; showing fallback");
                ctx.presenter.show_fallback(FallbackBanner::book_appointment());
            }
        }
    }
}

/// Ensure timers are cancelled when the page handle goes away
impl Drop for EngagementNotifier {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Emit `event` and open the chat window.
async fn activate(widget: &dyn ChatWidget, event: &str, payload: Value) -> Result<()> {
    widget.emit(event, payload).await?;
    widget.maximize().await
}

fn lock(slot: &TimerSlot) -> std::sync::MutexGuard<'_, Option<CancellationToken>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

fn spawn_timer<F>(timer: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    match Handle::try_current() {
        Ok(handle) => {
            handle.spawn(timer);
        }
        Err(_) => warn!("No Tokio runtime available; engagement timer not armed"),
    }
}
