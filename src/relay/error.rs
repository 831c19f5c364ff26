//! Relay failures and the generic error response.

use std::error::Error as StdError;

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::Response;

use crate::config::ValidationError;

/// Content type of every synthesized text response.
pub const TEXT_PLAIN: &str = "text/plain;charset=UTF-8";

/// Anything that can go wrong while handling a request.
///
/// Callers never see the variant; every one becomes the same 500.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("relay request has no `{0}` query parameter")]
    MissingTarget(String),

    #[error("invalid relay target `{target}`")]
    InvalidTarget {
        target: String,
        #[source]
        source: url::ParseError,
    },

    #[error("fetch of `{target}` failed")]
    Fetch {
        target: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("reading body of `{target}` failed")]
    Body {
        target: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("no origin server configured for host `{host}`")]
    NoOrigin { host: String },

    #[error("origin request to `{origin}` failed")]
    Origin {
        origin: String,
        #[source]
        source: hyper_util::client::legacy::Error,
    },

    #[error("failed to build request or response")]
    Build(#[from] axum::http::Error),

    #[error("request did not complete within {secs}s")]
    Timeout { secs: u64 },
}

/// Failures while building the handler at startup.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("invalid configuration: {}", join(.0))]
    Invalid(Vec<ValidationError>),

    #[error("origin scheme `{0}` is not supported")]
    OriginScheme(String),

    #[error("failed to build outbound client")]
    Client(#[from] reqwest::Error),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl RelayError {
    /// Display of this error followed by its whole source chain.
    pub fn diagnostic(&self) -> String {
        let mut text = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            text.push_str("\nCaused by: ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }
        text
    }

    /// The generic 500 reported to the caller.
    pub fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.diagnostic()));
        *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN));
        response
    }
}
