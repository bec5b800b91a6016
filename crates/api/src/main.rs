//! RHAI server - destination search, lead capture and owner alerts
//!
//! Main entry point for the HTTP server.

use std::process::ExitCode;

use rhai_api::utils::logging::{init_tracing, LogFormat};
use rhai_api::{serve, AppContext};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before anything reads the environment
    let dotenv = dotenvy::dotenv();

    init_tracing(LogFormat::from_env());
    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(err) => warn!(error = %err, "Could not load .env file"),
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, error_type = err.label(), "RHAI server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> rhai_domain::Result<()> {
    let config = rhai_infra::config::load()?;
    let ctx = AppContext::new(config)?;
    serve(ctx).await
}
