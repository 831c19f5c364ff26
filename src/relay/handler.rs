//! Edge relay handler.
//!
//! Maps one inbound request to exactly one response. The only side effect is
//! the single outbound round trip made in relay or pass-through mode.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;

use crate::config::{RelayConfig, RouteTableConfig};
use crate::relay::error::{RelayError, SetupError, TEXT_PLAIN};
use crate::relay::route::{deployment_host, target_param, Route};
use crate::relay::upstream::Upstream;

/// Stateless request handler shared by every connection.
#[derive(Clone)]
pub struct RelayHandler {
    table: RouteTableConfig,
    upstream: Upstream,
    deadline: Duration,
}

impl RelayHandler {
    /// Create a handler, building its outbound clients from config.
    pub fn new(config: &RelayConfig) -> Result<Self, SetupError> {
        Ok(Self {
            table: config.relay.clone(),
            upstream: Upstream::new(&config.origin, &config.timeouts)?,
            deadline: Duration::from_secs(config.timeouts.request_secs),
        })
    }

    /// Whether custom-domain requests have somewhere to go.
    pub fn has_origin(&self) -> bool {
        self.upstream.has_origin()
    }

    /// Error boundary: every failure from [`handle`](Self::handle), including
    /// running past the request deadline, is logged once and becomes a
    /// plain-text 500.
    pub async fn respond(&self, req: Request<Body>) -> Response {
        let result = match tokio::time::timeout(self.deadline, self.handle(req)).await {
            Ok(result) => result,
            Err(_) => Err(RelayError::Timeout {
                secs: self.deadline.as_secs(),
            }),
        };
        match result {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e.diagnostic(), "Uncaught error");
                e.into_response()
            }
        }
    }

    /// Route and execute one request.
    pub async fn handle(&self, req: Request<Body>) -> Result<Response, RelayError> {
        let host = deployment_host(&req);
        let route = Route::classify(req.uri().path(), host.as_deref(), &self.table);

        tracing::debug!(
            route = route.as_str(),
            method = %req.method(),
            path = %req.uri().path(),
            host = host.as_deref().unwrap_or("-"),
            "Routing request"
        );

        match route {
            Route::Relay => {
                let target = target_param(req.uri().query(), &self.table.target_param)
                    .ok_or_else(|| RelayError::MissingTarget(self.table.target_param.clone()))?;
                self.upstream.fetch(&target).await
            }
            Route::NoContent => Ok(Response::builder()
                .status(StatusCode::NO_CONTENT)
                .body(Body::empty())?),
            Route::NotFound => Ok(Response::builder()
                .status(StatusCode::NOT_FOUND)
                .header(header::CONTENT_TYPE, TEXT_PLAIN)
                .body(Body::from("Not Found"))?),
            Route::PassThrough => self.upstream.forward(req, host).await,
        }
    }
}
