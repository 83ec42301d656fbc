use crate::config::HttpEnvConfig;
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Creates the shared HTTP client.
    ///
    /// No retry layer: a failed request fails the lookup immediately.
    pub fn create_client(config: &HttpEnvConfig) -> Client {
        Client::builder()
            .pool_max_idle_per_host(2)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(concat!("crypto_tracker/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                warn!(
                    "HttpClientFactory: failed to build configured client ({}), falling back to defaults",
                    e
                );
                Client::new()
            })
    }
}
