//! Configuration validation.
//!
//! Serde handles syntax; this checks values. Every problem is reported, not
//! just the first one.

use std::net::SocketAddr;

use crate::config::schema::RelayConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),

    #[error("relay.path `{0}` must start with `/`")]
    RelayPath(String),

    #[error("relay.target_param must not be empty")]
    EmptyTargetParam,

    #[error("relay.no_content_paths entry `{0}` must start with `/`")]
    NoContentPath(String),

    #[error("relay.path `{0}` is also listed in relay.no_content_paths")]
    PathConflict(String),

    #[error("relay.platform_suffixes entry `{0}` must start with `.`")]
    PlatformSuffix(String),

    #[error("origin.address `{0}` is not a valid authority")]
    OriginAddress(String),

    #[error("origin.scheme `{0}` is not supported")]
    OriginScheme(String),

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Check a parsed configuration, returning every problem found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let table = &config.relay;
    if !table.path.starts_with('/') {
        errors.push(ValidationError::RelayPath(table.path.clone()));
    }
    if table.target_param.is_empty() {
        errors.push(ValidationError::EmptyTargetParam);
    }
    for path in &table.no_content_paths {
        if !path.starts_with('/') {
            errors.push(ValidationError::NoContentPath(path.clone()));
        }
        if *path == table.path {
            errors.push(ValidationError::PathConflict(path.clone()));
        }
    }
    for suffix in &table.platform_suffixes {
        if !suffix.starts_with('.') || suffix.len() < 2 {
            errors.push(ValidationError::PlatformSuffix(suffix.clone()));
        }
    }

    if let Some(address) = &config.origin.address {
        if address.parse::<axum::http::uri::Authority>().is_err() {
            errors.push(ValidationError::OriginAddress(address.clone()));
        }
    }
    // The origin client only speaks plain HTTP.
    if config.origin.scheme != "http" {
        errors.push(ValidationError::OriginScheme(config.origin.scheme.clone()));
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
