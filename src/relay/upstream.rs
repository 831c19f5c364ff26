//! Outbound HTTP: relay fetches and origin pass-through.
//!
//! # Responsibilities
//! - Fetch an arbitrary caller-supplied URL (relay mode)
//! - Forward an inbound request unchanged to the configured origin
//! - Copy upstream status, headers and body back verbatim
//!
//! Neither path retries. Relay fetches follow redirects like a browser fetch
//! would; origin responses are returned exactly as received.

use std::time::Duration;

use axum::body::Body;
use axum::http::{uri::Scheme, Request, Response, Uri, Version};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::config::{OriginConfig, TimeoutConfig};
use crate::relay::error::{RelayError, SetupError};

/// Origin server endpoint, taken from config.
#[derive(Debug, Clone)]
struct Origin {
    address: String,
}

/// The two outbound clients the handler needs.
#[derive(Clone)]
pub struct Upstream {
    fetcher: reqwest::Client,
    origin_client: Client<HttpConnector, Body>,
    origin: Option<Origin>,
}

impl Upstream {
    /// Build both clients from config.
    ///
    /// The origin client only speaks plain HTTP; any other scheme is refused.
    pub fn new(origin: &OriginConfig, timeouts: &TimeoutConfig) -> Result<Self, SetupError> {
        if origin.scheme != "http" {
            return Err(SetupError::OriginScheme(origin.scheme.clone()));
        }

        let connect_timeout = Duration::from_secs(timeouts.connect_secs);

        let fetcher = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .no_proxy()
            .build()?;

        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(connect_timeout));
        let origin_client = Client::builder(TokioExecutor::new()).build(connector);

        let origin = origin.address.as_ref().map(|address| Origin {
            address: address.clone(),
        });

        Ok(Self {
            fetcher,
            origin_client,
            origin,
        })
    }

    /// Whether a pass-through target exists.
    pub fn has_origin(&self) -> bool {
        self.origin.is_some()
    }

    /// GET `target` and return the upstream response unmodified.
    ///
    /// Nothing from the inbound request is forwarded; the outbound request
    /// carries only the target URL.
    pub async fn fetch(&self, target: &str) -> Result<Response<Body>, RelayError> {
        let url = url::Url::parse(target).map_err(|source| RelayError::InvalidTarget {
            target: target.to_string(),
            source,
        })?;

        tracing::debug!(url = %url, "Relaying fetch");

        let upstream = self
            .fetcher
            .get(url)
            .send()
            .await
            .map_err(|source| RelayError::Fetch {
                target: target.to_string(),
                source,
            })?;

        let status = upstream.status();
        let headers = upstream.headers().clone();
        let body = upstream.bytes().await.map_err(|source| RelayError::Body {
            target: target.to_string(),
            source,
        })?;

        tracing::debug!(url = %target, status = %status, bytes = body.len(), "Relay fetch complete");

        let mut response = Response::new(Body::from(body));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }

    /// Forward `req` to the origin and return its response unmodified.
    ///
    /// Method, path, query, headers (including `Host`) and body are kept; only
    /// the URI authority is pointed at the origin.
    pub async fn forward(
        &self,
        req: Request<Body>,
        host: Option<String>,
    ) -> Result<Response<Body>, RelayError> {
        let origin = self.origin.as_ref().ok_or_else(|| RelayError::NoOrigin {
            host: host.unwrap_or_else(|| "-".to_string()),
        })?;

        let (mut parts, body) = req.into_parts();
        let path_and_query = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/")
            .to_string();
        parts.uri = Uri::builder()
            .scheme(Scheme::HTTP)
            .authority(origin.address.as_str())
            .path_and_query(path_and_query)
            .build()?;
        // The origin connection is always HTTP/1.1.
        parts.version = Version::HTTP_11;

        tracing::debug!(origin = %origin.address, uri = %parts.uri, "Forwarding to origin");

        let response = self
            .origin_client
            .request(Request::from_parts(parts, body))
            .await
            .map_err(|source| RelayError::Origin {
                origin: origin.address.clone(),
                source,
            })?;

        let (parts, body) = response.into_parts();
        Ok(Response::from_parts(parts, Body::new(body)))
    }
}
