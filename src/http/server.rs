//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the relay handler on every path
//! - Wire up middleware (tracing span with request ID)
//! - Bind server to listener
//! - Stop accepting on shutdown signal

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::config::{validate_config, RelayConfig};
use crate::relay::{RelayHandler, SetupError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<RelayHandler>,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// The configuration is validated here as well, so callers that build a
    /// `RelayConfig` in code get the same checks as a loaded file.
    pub fn new(config: RelayConfig) -> Result<Self, SetupError> {
        validate_config(&config).map_err(SetupError::Invalid)?;
        let handler = Arc::new(RelayHandler::new(&config)?);

        if !handler.has_origin() {
            tracing::info!("No origin configured; custom-domain requests will fail");
        }

        let router = Self::build_router(AppState { handler });
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The request deadline lives in the handler's error boundary, and so does
    /// failure logging; the trace layer only opens the span.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(relay_entry))
            .route("/", any(relay_entry))
            .with_state(state)
            .layer(
                ServiceBuilder::new().layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|req: &Request<Body>| {
                            tracing::info_span!(
                                "request",
                                request_id = %Uuid::new_v4(),
                                method = %req.method(),
                                uri = %req.uri(),
                            )
                        })
                        .on_failure(()),
                ),
            )
    }

    /// The router, for in-process use without a listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            relay_path = %self.config.relay.path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Entry point bound to every path; delegates to the handler's error boundary.
async fn relay_entry(State(state): State<AppState>, request: Request<Body>) -> Response {
    state.handler.respond(request).await
}
