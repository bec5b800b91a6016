//! Configuration management

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_APPOINTMENTS_TABLE, DEFAULT_BIND_ADDR, DEFAULT_MESSAGING_API_BASE, MIN_QUERY_CHARS,
    PROACTIVE_PROMPT_DELAY_MS, SEARCH_DEBOUNCE_MS, WIDGET_MAX_RETRIES, WIDGET_POLL_INTERVAL_MS,
};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub store: StoreConfig,
    #[serde(default)]
    pub messaging: MessagingConfig,
    #[serde(default)]
    pub engagement: EngagementConfig,
}

impl Config {
    /// Configuration with the given store credentials and defaults elsewhere.
    pub fn with_store(url: impl Into<String>, service_role_key: impl Into<String>) -> Self {
        Self {
            server: ServerConfig::default(),
            store: StoreConfig {
                url: url.into(),
                service_role_key: service_role_key.into(),
                table: default_table(),
            },
            messaging: MessagingConfig::default(),
            engagement: EngagementConfig::default(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: default_bind_addr() }
    }
}

/// REST lead store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub url: String,
    #[serde(skip_serializing)]
    pub service_role_key: String,
    #[serde(default = "default_table")]
    pub table: String,
}

/// Owner messaging bot configuration
///
/// Token and chat id are optional: endpoints decide what missing
/// configuration means for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagingConfig {
    #[serde(default, skip_serializing)]
    pub bot_token: Option<String>,
    #[serde(default)]
    pub chat_id: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

impl MessagingConfig {
    /// True when both the bot token and the chat id are present.
    pub fn is_configured(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.bot_token) && present(&self.chat_id)
    }
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self { bot_token: None, chat_id: None, api_base: default_api_base() }
    }
}

/// Search alarm and proactive prompt timings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementConfig {
    pub debounce_ms: u64,
    pub min_query_chars: usize,
    pub proactive_delay_ms: u64,
    pub widget_poll_interval_ms: u64,
    pub widget_max_retries: u32,
}

impl EngagementConfig {
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub const fn proactive_delay(&self) -> Duration {
        Duration::from_millis(self.proactive_delay_ms)
    }

    pub const fn widget_poll_interval(&self) -> Duration {
        Duration::from_millis(self.widget_poll_interval_ms)
    }
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            debounce_ms: SEARCH_DEBOUNCE_MS,
            min_query_chars: MIN_QUERY_CHARS,
            proactive_delay_ms: PROACTIVE_PROMPT_DELAY_MS,
            widget_poll_interval_ms: WIDGET_POLL_INTERVAL_MS,
            widget_max_retries: WIDGET_MAX_RETRIES,
        }
    }
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

fn default_table() -> String {
    DEFAULT_APPOINTMENTS_TABLE.to_string()
}

fn default_api_base() -> String {
    DEFAULT_MESSAGING_API_BASE.to_string()
}
