//! Client configuration. Construct with [`ClientConfig::new`], chain
//! `with_*` builders, then hand it to [`crate::ApiClient::from_config`].

use std::time::Duration;

/// Production Blockmove API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.blockmove.io/v1";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub api_secret: String,
    pub endpoint: String,
    pub timeout: Option<Duration>,
    pub accept_invalid_certs: bool,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
            accept_invalid_certs: false,
        }
    }

    /// Override the API endpoint. Leading and trailing `/` are stripped.
    pub fn with_endpoint(mut self, endpoint: impl AsRef<str>) -> Self {
        self.endpoint = trim_endpoint(endpoint.as_ref());
        self
    }

    /// Deadline applied to every request. There is no retry on expiry;
    /// the timeout surfaces as a transport error.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Disable TLS certificate verification.
    ///
    /// Verification is on by default and should stay on. This opt-in
    /// exists for test rigs and staging endpoints with self-signed
    /// certificates.
    pub fn with_danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

pub(crate) fn trim_endpoint(endpoint: &str) -> String {
    endpoint.trim_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_production_and_secure() {
        let config = ClientConfig::new("k", "s");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.timeout.is_none());
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn endpoint_slashes_are_trimmed() {
        let config = ClientConfig::new("k", "s").with_endpoint("https://x/");
        assert_eq!(config.endpoint, "https://x");

        let config = ClientConfig::new("k", "s").with_endpoint("https://x//");
        assert_eq!(config.endpoint, "https://x");
    }

    #[test]
    fn builders_chain() {
        let config = ClientConfig::new("k", "s")
            .with_endpoint("https://staging.example/v1")
            .with_timeout(Duration::from_secs(5))
            .with_danger_accept_invalid_certs(true);
        assert_eq!(config.endpoint, "https://staging.example/v1");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert!(config.accept_invalid_certs);
    }
}
