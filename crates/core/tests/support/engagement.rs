use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rhai_core::{AlertSink, ChatWidget, FallbackBanner, PromptPresenter};
use rhai_domain::{Result as DomainResult, RhaiError, SearchAlert};
use serde_json::Value;

/// Records every alert; optionally fails each send.
#[derive(Default)]
pub struct RecordingAlertSink {
    alerts: Mutex<Vec<SearchAlert>>,
    fail: AtomicBool,
}

impl RecordingAlertSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        let sink = Self::default();
        sink.fail.store(true, Ordering::SeqCst);
        Arc::new(sink)
    }

    pub fn alerts(&self) -> Vec<SearchAlert> {
        self.alerts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AlertSink for RecordingAlertSink {
    async fn send_alert(&self, alert: SearchAlert) -> DomainResult<()> {
        self.alerts.lock().unwrap().push(alert);
        if self.fail.load(Ordering::SeqCst) {
            return Err(RhaiError::Network("alert endpoint unreachable".into()));
        }
        Ok(())
    }
}

/// Chat widget whose readiness can be flipped mid-test.
#[derive(Default)]
pub struct FakeChatWidget {
    ready: AtomicBool,
    fail: AtomicBool,
    readiness_checks: AtomicUsize,
    maximized: AtomicUsize,
    events: Mutex<Vec<(String, Value)>>,
}

impl FakeChatWidget {
    pub fn ready() -> Arc<Self> {
        let widget = Self::default();
        widget.ready.store(true, Ordering::SeqCst);
        Arc::new(widget)
    }

    pub fn loading() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Ready, but every call errors.
    pub fn broken() -> Arc<Self> {
        let widget = Self::default();
        widget.ready.store(true, Ordering::SeqCst);
        widget.fail.store(true, Ordering::SeqCst);
        Arc::new(widget)
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    pub fn readiness_checks(&self) -> usize {
        self.readiness_checks.load(Ordering::SeqCst)
    }

    pub fn maximized(&self) -> usize {
        self.maximized.load(Ordering::SeqCst)
    }

    pub fn events(&self) -> Vec<(String, Value)> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatWidget for FakeChatWidget {
    fn is_ready(&self) -> bool {
        self.readiness_checks.fetch_add(1, Ordering::SeqCst);
        self.ready.load(Ordering::SeqCst)
    }

    async fn emit(&self, event: &str, payload: Value) -> DomainResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(RhaiError::Upstream("widget API missing".into()));
        }
        self.events.lock().unwrap().push((event.to_string(), payload));
        Ok(())
    }

    async fn maximize(&self) -> DomainResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(RhaiError::Upstream("widget API missing".into()));
        }
        self.maximized.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Records banners shown by the proactive prompt.
#[derive(Default)]
pub struct RecordingPresenter {
    banners: Mutex<Vec<FallbackBanner>>,
}

impl RecordingPresenter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn banners(&self) -> Vec<FallbackBanner> {
        self.banners.lock().unwrap().clone()
    }
}

impl PromptPresenter for RecordingPresenter {
    fn show_fallback(&self, banner: FallbackBanner) {
        self.banners.lock().unwrap().push(banner);
    }
}
