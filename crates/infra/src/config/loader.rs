//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `SUPABASE_URL` (or `NEXT_PUBLIC_SUPABASE_URL`): lead store base URL
//! - `SUPABASE_SERVICE_ROLE` (or `SUPABASE_SERVICE_ROLE_KEY`): store key
//! - `RHAI_APPOINTMENTS_TABLE`: lead table (default `appointments`)
//! - `TELEGRAM_BOT_TOKEN`, `TELEGRAM_CHAT_ID`: owner messaging (optional)
//! - `TELEGRAM_API_BASE`: messaging API base URL
//! - `RHAI_BIND_ADDR`: server listen address (default `0.0.0.0:3000`)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./rhai.json` or `./rhai.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use rhai_domain::constants::{
    DEFAULT_APPOINTMENTS_TABLE, DEFAULT_BIND_ADDR, DEFAULT_MESSAGING_API_BASE,
};
use rhai_domain::{
    Config, EngagementConfig, MessagingConfig, Result, RhaiError, ServerConfig, StoreConfig,
};
use url::Url;

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `RhaiError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing or malformed
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// The store variables are required; everything else has a default.
///
/// # Errors
/// Returns `RhaiError::Config` if required variables are missing or have
/// invalid values.
pub fn load_from_env() -> Result<Config> {
    let url = env_var_any(&["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"])?;
    let service_role_key = env_var_any(&["SUPABASE_SERVICE_ROLE", "SUPABASE_SERVICE_ROLE_KEY"])?;
    let table = env_opt("RHAI_APPOINTMENTS_TABLE")
        .unwrap_or_else(|| DEFAULT_APPOINTMENTS_TABLE.to_string());

    let config = Config {
        server: ServerConfig {
            bind_addr: env_opt("RHAI_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        },
        store: StoreConfig { url, service_role_key, table },
        messaging: MessagingConfig {
            bot_token: env_opt("TELEGRAM_BOT_TOKEN"),
            chat_id: env_opt("TELEGRAM_CHAT_ID"),
            api_base: env_opt("TELEGRAM_API_BASE")
                .unwrap_or_else(|| DEFAULT_MESSAGING_API_BASE.to_string()),
        },
        engagement: EngagementConfig::default(),
    };

    validate(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `RhaiError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing or malformed
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(RhaiError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            RhaiError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| RhaiError::Config(format!("Failed to read config file: {}", e)))?;

    validate(parse_config(&contents, &config_path)?)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `RhaiError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| RhaiError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| RhaiError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(RhaiError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Reject values that would only fail later at request time.
fn validate(config: Config) -> Result<Config> {
    let urls = [
        ("store.url", &config.store.url),
        ("messaging.api_base", &config.messaging.api_base),
    ];
    for (name, value) in urls {
        Url::parse(value).map_err(|e| RhaiError::Config(format!("Invalid {name}: {e}")))?;
    }

    if config.store.service_role_key.trim().is_empty() {
        return Err(RhaiError::Config("store.service_role_key is empty".to_string()));
    }

    if config.store.table.trim().is_empty() {
        return Err(RhaiError::Config("store.table is empty".to_string()));
    }

    config
        .server
        .bind_addr
        .parse::<SocketAddr>()
        .map_err(|e| RhaiError::Config(format!("Invalid server.bind_addr: {e}")))?;

    Ok(config)
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./rhai.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("rhai.json"),
        dir.join("rhai.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// First non-blank value among `keys`
///
/// # Errors
/// Returns `RhaiError::Config` naming the primary key if none is set.
fn env_var_any(keys: &[&str]) -> Result<String> {
    keys.iter().find_map(|key| env_opt(key)).ok_or_else(|| {
        RhaiError::Config(format!("Missing required environment variable: {}", keys.join(" or ")))
    })
}

/// Optional environment variable; blank counts as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
