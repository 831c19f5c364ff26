//! Client side of the relay: what a feed crawler calls.
//!
//! A crawler that gets blocked fetching a feed directly rewrites the feed URL
//! into `<relay>/read/?target=<feed>` and fetches that instead.

use url::Url;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid relay base URL `{0}`")]
    InvalidBase(String, #[source] url::ParseError),

    #[error("request through relay failed")]
    Request(#[from] reqwest::Error),
}

/// Build the relay URL that fetches `feed_url` through the relay at `base`.
///
/// `base` may carry a path prefix; the relay path is appended to it. The
/// target goes in `target_param`, form-encoded so its own query survives.
pub fn relay_url(
    base: &str,
    relay_path: &str,
    target_param: &str,
    feed_url: &str,
) -> Result<Url, ClientError> {
    let mut url =
        Url::parse(base).map_err(|e| ClientError::InvalidBase(base.to_string(), e))?;

    let prefix = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{}{}", prefix, relay_path));
    url.set_query(None);
    url.query_pairs_mut().append_pair(target_param, feed_url);
    Ok(url)
}

/// Minimal relay client built on reqwest.
pub struct RelayClient {
    client: reqwest::Client,
    base: String,
    relay_path: String,
    target_param: String,
}

impl RelayClient {
    pub fn new(base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.to_string(),
            relay_path: "/read/".to_string(),
            target_param: "target".to_string(),
        }
    }

    /// Use a relay path other than `/read/`.
    pub fn with_relay_path(mut self, relay_path: &str) -> Self {
        self.relay_path = relay_path.to_string();
        self
    }

    /// Use a target query parameter other than `target`.
    pub fn with_target_param(mut self, target_param: &str) -> Self {
        self.target_param = target_param.to_string();
        self
    }

    /// The URL [`fetch`](Self::fetch) would request for `feed_url`.
    pub fn url_for(&self, feed_url: &str) -> Result<Url, ClientError> {
        relay_url(&self.base, &self.relay_path, &self.target_param, feed_url)
    }

    /// Fetch `feed_url` through the relay.
    pub async fn fetch(&self, feed_url: &str) -> Result<reqwest::Response, ClientError> {
        let url = self.url_for(feed_url)?;
        tracing::debug!(relay = %url, "Fetching through relay");
        Ok(self.client.get(url).send().await?)
    }
}
