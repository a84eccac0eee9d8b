//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the pooled upstream HTTP client and the upstream base URL; the
//! server keeps no per-user state of its own.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::routes::proxy::ProxyError;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub api_host: Arc<str>,
}

impl AppState {
    /// Build the upstream client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &ServerConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ProxyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_host: Arc::from(config.api_host.as_str()) })
    }
}
