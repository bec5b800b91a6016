//! Server setup
//!
//! Binds the configured address, applies CORS and runs until Ctrl-C or
//! SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::Router;
use rhai_domain::{Result, RhaiError};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::context::AppContext;
use crate::routes::router;

const CORS_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// Router with the CORS layer applied.
pub fn app(ctx: Arc<AppContext>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(CORS_MAX_AGE);

    router(ctx).layer(cors)
}

/// Serve the API until a shutdown signal arrives.
///
/// # Errors
/// `RhaiError::Config` when the bind address can't be bound, `Internal` when
/// the server fails while running.
pub async fn serve(ctx: AppContext) -> Result<()> {
    let address = ctx.config.server.bind_addr.clone();
    let app = app(Arc::new(ctx));

    info!(%address, "Binding listener");
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|err| RhaiError::Config(format!("Cannot bind {address}: {err}")))?;
    info!(%address, "Server running");

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| RhaiError::Internal(format!("Server error: {err}")))?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(err) => {
                error!(error = %err, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
