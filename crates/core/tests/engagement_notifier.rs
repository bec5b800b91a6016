//! Timer behavior of the engagement notifier, on a paused Tokio clock.

mod support;

use std::sync::Arc;
use std::time::Duration;

use rhai_core::{BrowsingSession, EngagementNotifier, FallbackBanner, PageContext};
use serde_json::json;
use support::engagement::{FakeChatWidget, RecordingAlertSink, RecordingPresenter};
use tokio::time::sleep;

const URL: &str = "https://rhai.example/";

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

struct Page {
    session: Arc<BrowsingSession>,
    alerts: Arc<RecordingAlertSink>,
    presenter: Arc<RecordingPresenter>,
}

impl Page {
    fn new() -> Self {
        Self::with_session(Arc::new(BrowsingSession::new()))
    }

    fn with_session(session: Arc<BrowsingSession>) -> Self {
        Self { session, alerts: RecordingAlertSink::new(), presenter: RecordingPresenter::new() }
    }

    fn notifier(&self) -> EngagementNotifier {
        EngagementNotifier::new(
            Arc::clone(&self.session),
            PageContext::new("home", URL),
            self.alerts.clone(),
            self.presenter.clone(),
        )
    }
}

// ---------------------------------------------------------------------------
// Search alarm
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn rapid_typing_sends_one_alert_with_last_value() {
    let page = Page::new();
    let notifier = page.notifier();

    notifier.on_query_change("c");
    notifier.on_query_change("ca");
    sleep(ms(300)).await;
    notifier.on_query_change("can");
    sleep(ms(300)).await;
    notifier.on_query_change("  canada ");

    sleep(ms(699)).await;
    assert!(page.alerts.alerts().is_empty());

    sleep(ms(2)).await;
    let alerts = page.alerts.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].q, "canada");
    assert_eq!(alerts[0].url, URL);
    assert!(alerts[0].ts.is_some());
    assert!(page.session.alert_sent());
}

#[tokio::test(start_paused = true)]
async fn short_query_cancels_pending_alert() {
    let page = Page::new();
    let notifier = page.notifier();

    notifier.on_query_change("usa");
    sleep(ms(500)).await;
    notifier.on_query_change(" u ");
    sleep(ms(2_000)).await;

    assert!(page.alerts.alerts().is_empty());
    assert!(!page.session.alert_sent());
}

#[tokio::test(start_paused = true)]
async fn only_first_search_in_session_alerts() {
    let page = Page::new();
    let notifier = page.notifier();

    notifier.on_query_change("europa");
    sleep(ms(800)).await;
    notifier.on_query_change("canada");
    sleep(ms(800)).await;
    drop(notifier);

    // Remount within the same session
    let remounted = page.notifier();
    remounted.on_query_change("otros");
    sleep(ms(800)).await;

    let alerts = page.alerts.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].q, "europa");
}

#[tokio::test(start_paused = true)]
async fn unmount_before_debounce_sends_nothing() {
    let page = Page::new();
    let notifier = page.notifier();

    notifier.on_query_change("canada");
    sleep(ms(400)).await;
    notifier.unmount();
    notifier.on_query_change("canada");
    sleep(ms(2_000)).await;

    assert!(notifier.is_unmounted());
    assert!(page.alerts.alerts().is_empty());
    assert!(!page.session.alert_sent());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_page_cancels_the_debounce() {
    let page = Page::new();
    let notifier = page.notifier();

    notifier.on_query_change("canada");
    sleep(ms(100)).await;
    drop(notifier);
    sleep(ms(2_000)).await;

    assert!(page.alerts.alerts().is_empty());
}

#[tokio::test(start_paused = true)]
async fn alert_failure_is_swallowed() {
    let page = Page { alerts: RecordingAlertSink::failing(), ..Page::new() };
    let widget = FakeChatWidget::ready();
    let notifier = page.notifier().with_widget(widget.clone());

    notifier.on_query_change("usa");
    sleep(ms(800)).await;

    assert_eq!(page.alerts.alerts().len(), 1);
    assert!(page.session.alert_sent());
    assert_eq!(widget.events(), vec![("search_started".to_string(), json!({ "query": "usa" }))]);
    assert_eq!(widget.maximized(), 1);
}

#[tokio::test(start_paused = true)]
async fn widget_that_loads_late_still_gets_the_event() {
    let page = Page::new();
    let widget = FakeChatWidget::loading();
    let notifier = page.notifier().with_widget(widget.clone());

    notifier.on_query_change("canada");
    sleep(ms(700 + 1_000)).await;
    assert!(widget.events().is_empty());

    widget.set_ready(true);
    sleep(ms(400)).await;

    assert_eq!(widget.events(), vec![("search_started".to_string(), json!({ "query": "canada" }))]);
    assert_eq!(widget.maximized(), 1);
}

#[tokio::test(start_paused = true)]
async fn widget_polling_gives_up_after_ten_retries() {
    let page = Page::new();
    let widget = FakeChatWidget::loading();
    let notifier = page.notifier().with_widget(widget.clone());

    notifier.on_query_change("canada");
    sleep(ms(700 + 10 * 400 + 100)).await;
    assert_eq!(widget.readiness_checks(), 11);

    widget.set_ready(true);
    sleep(ms(5_000)).await;

    assert_eq!(widget.readiness_checks(), 11);
    assert!(widget.events().is_empty());
    assert_eq!(page.alerts.alerts().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn unmount_stops_widget_polling() {
    let page = Page::new();
    let widget = FakeChatWidget::loading();
    let notifier = page.notifier().with_widget(widget.clone());

    notifier.on_query_change("europa");
    sleep(ms(700 + 500)).await;
    notifier.unmount();
    let checks = widget.readiness_checks();

    widget.set_ready(true);
    sleep(ms(5_000)).await;

    assert_eq!(widget.readiness_checks(), checks);
    assert!(widget.events().is_empty());
}

// ---------------------------------------------------------------------------
// Proactive prompt
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn proactive_prompt_opens_widget_after_delay() {
    let page = Page::new();
    let widget = FakeChatWidget::ready();
    let notifier = page.notifier().with_widget(widget.clone());

    notifier.mount();
    sleep(ms(14_999)).await;
    assert!(widget.events().is_empty());
    assert!(!page.session.proactive_shown());

    sleep(ms(2)).await;
    assert_eq!(widget.events(), vec![("auto_prompt".to_string(), json!({ "page": "home" }))]);
    assert_eq!(widget.maximized(), 1);
    assert!(page.session.proactive_shown());
    assert!(page.presenter.banners().is_empty());
}

#[tokio::test(start_paused = true)]
async fn proactive_prompt_falls_back_to_booking_without_widget() {
    let page = Page::new();
    let notifier = page.notifier();

    notifier.mount();
    sleep(ms(15_001)).await;

    assert_eq!(page.presenter.banners(), vec![FallbackBanner::book_appointment()]);
    assert!(page.session.proactive_shown());
}

#[tokio::test(start_paused = true)]
async fn proactive_prompt_falls_back_to_booking_when_widget_not_loaded() {
    let page = Page::new();
    let widget = FakeChatWidget::loading();
    let notifier = page.notifier().with_widget(widget.clone());

    notifier.mount();
    sleep(ms(15_001)).await;

    assert_eq!(page.presenter.banners(), vec![FallbackBanner::book_appointment()]);
    assert!(widget.events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn proactive_prompt_offers_chat_when_widget_call_fails() {
    let page = Page::new();
    let notifier = page.notifier().with_widget(FakeChatWidget::broken());

    notifier.mount();
    sleep(ms(15_001)).await;

    assert_eq!(page.presenter.banners(), vec![FallbackBanner::open_chat()]);
    assert!(page.session.proactive_shown());
}

#[tokio::test(start_paused = true)]
async fn proactive_prompt_fires_once_per_session() {
    let page = Page::new();
    let widget = FakeChatWidget::ready();

    let first = page.notifier().with_widget(widget.clone());
    first.mount();
    first.mount();
    sleep(ms(16_000)).await;
    drop(first);

    let second = page.notifier().with_widget(widget.clone());
    second.mount();
    sleep(ms(30_000)).await;

    assert_eq!(widget.events().len(), 1);
    assert_eq!(widget.maximized(), 1);
}

#[tokio::test(start_paused = true)]
async fn unmount_before_delay_cancels_proactive_prompt() {
    let page = Page::new();
    let widget = FakeChatWidget::ready();
    let notifier = page.notifier().with_widget(widget.clone());

    notifier.mount();
    sleep(ms(10_000)).await;
    notifier.unmount();
    sleep(ms(10_000)).await;

    assert!(widget.events().is_empty());
    assert!(page.presenter.banners().is_empty());
    assert!(!page.session.proactive_shown());

    // A fresh mount in the same session may still prompt later
    let remounted = page.notifier().with_widget(widget.clone());
    remounted.mount();
    sleep(ms(15_001)).await;
    assert_eq!(widget.events().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn search_and_prompt_are_independent() {
    let page = Page::new();
    let widget = FakeChatWidget::ready();
    let notifier = page.notifier().with_widget(widget.clone());

    notifier.mount();
    notifier.on_query_change("latam");
    sleep(ms(15_001)).await;

    let events: Vec<String> = widget.events().into_iter().map(|(name, _)| name).collect();
    assert_eq!(events, vec!["search_started", "auto_prompt"]);
    assert_eq!(page.alerts.alerts().len(), 1);
}
