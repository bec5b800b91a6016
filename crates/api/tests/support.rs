#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use rhai_api::context::AppContext;
use rhai_api::server::app;
use rhai_core::{LeadRepository, OwnerMessage, OwnerMessenger};
use rhai_domain::{Config, NewLead, Result, RhaiError};
use serde_json::Value;
use tower::ServiceExt;

/// In-memory lead store.
#[derive(Default)]
pub struct MemoryLeadRepository {
    pub leads: Mutex<Vec<NewLead>>,
    pub fail: bool,
}

#[async_trait]
impl LeadRepository for MemoryLeadRepository {
    async fn insert_lead(&self, lead: &NewLead) -> Result<String> {
        if self.fail {
            return Err(RhaiError::Storage("permission denied for table appointments".into()));
        }
        let mut leads = self.leads.lock().unwrap();
        leads.push(lead.clone());
        Ok(format!("lead-{}", leads.len()))
    }
}

/// Messenger that records what it was asked to send.
#[derive(Default)]
pub struct RecordingMessenger {
    pub configured: bool,
    pub fail: bool,
    pub sent: Mutex<Vec<OwnerMessage>>,
}

impl RecordingMessenger {
    pub fn configured() -> Self {
        Self { configured: true, ..Self::default() }
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent.lock().unwrap().iter().map(|message| message.text.clone()).collect()
    }
}

#[async_trait]
impl OwnerMessenger for RecordingMessenger {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn send(&self, message: &OwnerMessage) -> Result<()> {
        if self.fail {
            return Err(RhaiError::Upstream("Bad Request: chat not found".into()));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Router wired to in-memory ports.
pub struct TestApp {
    pub router: Router,
    pub leads: Arc<MemoryLeadRepository>,
    pub messenger: Arc<RecordingMessenger>,
}

impl TestApp {
    pub fn new(leads: MemoryLeadRepository, messenger: RecordingMessenger) -> Self {
        let leads = Arc::new(leads);
        let messenger = Arc::new(messenger);
        let config = Config::with_store("https://store.example", "service-role");
        let ctx = AppContext::with_ports(config, leads.clone(), messenger.clone());

        Self { router: app(Arc::new(ctx)), leads, messenger }
    }

    pub fn configured() -> Self {
        Self::new(MemoryLeadRepository::default(), RecordingMessenger::configured())
    }

    pub fn unconfigured() -> Self {
        Self::new(MemoryLeadRepository::default(), RecordingMessenger::default())
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        read_json(response).await
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.send(post_json(path, &body)).await
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.send(Request::get(path).body(Body::empty()).unwrap()).await
    }
}

pub fn post_json(path: &str, body: &Value) -> Request<Body> {
    Request::post(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, json)
}
