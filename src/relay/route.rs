//! Route decision for inbound requests.
//!
//! # Responsibilities
//! - Classify a request by exact path (case-sensitive)
//! - Decide between 404 and origin pass-through by deployment host
//! - Extract the deployment host and the relay target
//!
//! Everything here is pure; the handler executes the decision.

use axum::body::Body;
use axum::http::{header, Request};

use crate::config::RouteTableConfig;

/// What to do with an inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Fetch the caller-supplied target and return its response.
    Relay,
    /// Empty 204 for health and crawler housekeeping paths.
    NoContent,
    /// Plain 404; the deployment has no origin behind it.
    NotFound,
    /// Forward the request unchanged to the origin.
    PassThrough,
}

impl Route {
    /// Classify a request path against the routing table.
    ///
    /// `host` is the deployment host; `None` never matches a platform suffix,
    /// so such requests fall through to the origin.
    pub fn classify(path: &str, host: Option<&str>, table: &RouteTableConfig) -> Self {
        if path == table.path {
            return Route::Relay;
        }
        if table.no_content_paths.iter().any(|p| p == path) {
            return Route::NoContent;
        }
        match host {
            Some(host) if is_platform_host(host, &table.platform_suffixes) => Route::NotFound,
            _ => Route::PassThrough,
        }
    }

    /// Label used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Relay => "relay",
            Route::NoContent => "no_content",
            Route::NotFound => "not_found",
            Route::PassThrough => "pass_through",
        }
    }
}

/// True when `host` is one of the platform's default subdomains.
pub fn is_platform_host(host: &str, suffixes: &[String]) -> bool {
    let host = host.to_ascii_lowercase();
    suffixes
        .iter()
        .any(|suffix| host.ends_with(&suffix.to_ascii_lowercase()))
}

/// Host the request was addressed to, without port, lowercased.
///
/// Absolute-form URIs win over the `Host` header, the same way a URL parse of
/// the full request URL would resolve it.
pub fn deployment_host(req: &Request<Body>) -> Option<String> {
    let host = match req.uri().host() {
        Some(host) => host.to_string(),
        None => {
            let value = req.headers().get(header::HOST)?.to_str().ok()?;
            strip_port(value).to_string()
        }
    };
    if host.is_empty() {
        None
    } else {
        Some(host.to_ascii_lowercase())
    }
}

fn strip_port(authority: &str) -> &str {
    // Bracketed IPv6 literal: keep the brackets, drop what follows.
    if authority.starts_with('[') {
        return match authority.find(']') {
            Some(end) => &authority[..=end],
            None => authority,
        };
    }
    match authority.rsplit_once(':') {
        Some((host, _port)) => host,
        None => authority,
    }
}

/// First value of query parameter `name`, form-decoded.
pub fn target_param(query: Option<&str>, name: &str) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
