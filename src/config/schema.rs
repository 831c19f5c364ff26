//! Configuration schema definitions.
//!
//! All sections default, so an empty file yields a working relay that
//! reproduces the stock routing table.

use serde::{Deserialize, Serialize};

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Relay routing table.
    pub relay: RouteTableConfig,

    /// Origin server behind a custom-domain deployment.
    pub origin: OriginConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Paths and host suffixes that drive the routing decision.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteTableConfig {
    /// Exact path that triggers relay mode.
    pub path: String,

    /// Query parameter holding the relay target.
    pub target_param: String,

    /// Exact paths answered with an empty 204.
    pub no_content_paths: Vec<String>,

    /// Host suffixes of the platform's default subdomains. A deployment on one
    /// of these has no origin behind it.
    pub platform_suffixes: Vec<String>,
}

impl Default for RouteTableConfig {
    fn default() -> Self {
        Self {
            path: "/read/".to_string(),
            target_param: "target".to_string(),
            no_content_paths: vec![
                "/".to_string(),
                "/favicon.ico".to_string(),
                "/robots.txt".to_string(),
            ],
            platform_suffixes: vec![
                ".workers.dev".to_string(),
                ".cloudflareworkers.com".to_string(),
            ],
        }
    }
}

/// Origin server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OriginConfig {
    /// Origin address (e.g., "127.0.0.1:3000"). Unset means no origin.
    pub address: Option<String>,

    /// URI scheme used toward the origin.
    pub scheme: String,
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self {
            address: None,
            scheme: "http".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Outbound connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Whole-request deadline in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: RelayConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.relay.path, "/read/");
        assert_eq!(config.relay.target_param, "target");
        assert_eq!(config.relay.no_content_paths.len(), 3);
        assert!(config.origin.address.is_none());
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_partial_section() {
        let config: RelayConfig = toml::from_str(
            r#"
            [origin]
            address = "10.0.0.5:8000"

            [relay]
            platform_suffixes = [".example.dev"]
            "#,
        )
        .unwrap();
        assert_eq!(config.origin.address.as_deref(), Some("10.0.0.5:8000"));
        assert_eq!(config.origin.scheme, "http");
        assert_eq!(config.relay.platform_suffixes, vec![".example.dev"]);
        assert_eq!(config.relay.path, "/read/");
    }
}
