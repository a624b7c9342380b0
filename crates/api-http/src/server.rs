//! HTTP Server
//!
//! Builds the axum router and runs it on a TCP listener with graceful shutdown.

use crate::handler::{self, AppState};
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// HTTP Server Configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::liveness))
        .route("/venues", get(handler::list_venues))
        .route("/menu_items/:venue_id", get(handler::list_menu_items))
        .route("/queue_overview/:venue_id", get(handler::queue_overview))
        .route("/queue_status/:user_id/:venue_id", get(handler::queue_status))
        .route("/leave_queue", post(handler::leave_queue))
        .route("/join_queue", post(handler::join_queue))
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// HTTP Server
pub struct HttpServer {
    config: HttpServerConfig,
    state: AppState,
}

/// Running server: bound address plus a shutdown trigger
///
/// Only [`ServerHandle::stop`] shuts the server down. Dropping the handle
/// without calling it detaches the server, which then runs until the
/// runtime exits.
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<std::io::Result<()>>,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Bind and start serving in a background task
    pub async fn start(self) -> Result<ServerHandle, String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| format!("Failed to read bound address: {}", e))?;

        info!(%local_addr, "Starting HTTP server");

        let app = build_router(self.state);
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    // A dropped sender is a detach, not a stop request
                    if shutdown_rx.await.is_err() {
                        std::future::pending::<()>().await;
                    }
                })
                .await
        });

        Ok(ServerHandle {
            local_addr,
            shutdown_tx: Some(shutdown_tx),
            task,
        })
    }
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting connections and let in-flight requests finish
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Wait for the serve task to exit
    pub async fn stopped(self) -> Result<(), String> {
        match self.task.await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(format!("HTTP server error: {}", e)),
            Err(e) => Err(format!("HTTP server task panicked: {}", e)),
        }
    }
}
