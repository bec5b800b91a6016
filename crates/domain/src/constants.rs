//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Search alarm
pub const SEARCH_DEBOUNCE_MS: u64 = 700;
pub const MIN_QUERY_CHARS: usize = 2;

// Proactive prompt
pub const PROACTIVE_PROMPT_DELAY_MS: u64 = 15_000;

// Chat widget readiness polling
pub const WIDGET_POLL_INTERVAL_MS: u64 = 400;
pub const WIDGET_MAX_RETRIES: u32 = 10;

// Chat widget events
pub const EVENT_SEARCH_STARTED: &str = "search_started";
pub const EVENT_AUTO_PROMPT: &str = "auto_prompt";

// Routes
pub const DESTINATION_PATH_PREFIX: &str = "/destino/";
pub const BOOKING_PATH: &str = "/agendar";

// Lead store
pub const DEFAULT_APPOINTMENTS_TABLE: &str = "appointments";

// Messaging bot
pub const DEFAULT_MESSAGING_API_BASE: &str = "https://api.telegram.org";

// Server
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
