//! Telegram Bot API messenger
//!
//! Sends owner notifications with `sendMessage`. The bot token is part of
//! the request path, so URLs built here are never logged.

use async_trait::async_trait;
use reqwest::Method;
use rhai_core::{OwnerMessage, OwnerMessenger};
use rhai_domain::{MessagingConfig, Result, RhaiError};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::http::HttpClient;

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    disable_web_page_preview: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// [`OwnerMessenger`] backed by a Telegram bot
pub struct TelegramMessenger {
    http_client: HttpClient,
    api_base: String,
    bot_token: Option<String>,
    chat_id: Option<String>,
}

impl TelegramMessenger {
    pub fn new(config: &MessagingConfig, http_client: HttpClient) -> Self {
        let present = |v: &Option<String>| {
            v.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
        };
        Self {
            http_client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            bot_token: present(&config.bot_token),
            chat_id: present(&config.chat_id),
        }
    }
}

#[async_trait]
impl OwnerMessenger for TelegramMessenger {
    fn is_configured(&self) -> bool {
        self.bot_token.is_some() && self.chat_id.is_some()
    }

    async fn send(&self, message: &OwnerMessage) -> Result<()> {
        let (Some(token), Some(chat_id)) = (&self.bot_token, &self.chat_id) else {
            return Err(RhaiError::Config("Telegram bot token or chat id not set".into()));
        };

        let body = SendMessageRequest {
            chat_id,
            text: &message.text,
            parse_mode: message.markdown.then_some("Markdown"),
            disable_web_page_preview: message.markdown.then_some(true),
        };

        let url = format!("{}/bot{}/sendMessage", self.api_base, token);
        let response =
            self.http_client.send(self.http_client.request(Method::POST, url).json(&body)).await?;

        let status = response.status();
        let api: Option<ApiResponse> = response.json().await.ok();
        match api {
            Some(ApiResponse { ok: true, .. }) if status.is_success() => {
                debug!("Telegram message delivered");
                Ok(())
            }
            other => {
                let description =
                    other.and_then(|r| r.description).unwrap_or_else(|| "no description".into());
                error!(%status, %description, "Telegram rejected message");
                Err(RhaiError::Upstream(format!(
                    "Telegram sendMessage failed with HTTP {}: {description}",
                    status.as_u16()
                )))
            }
        }
    }
}
