//! HTTP implementation of the registry client
//!
//! Talks to the registry's JSON endpoints with reqwest. Endpoint paths and
//! scoping come from `RegistryConfig`.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::config::RegistryConfig;
use crate::error::{NavError, Result};

use super::client::RegistryClient;

/// Registry client backed by reqwest
pub struct HttpRegistryClient {
    client: Client,
    config: RegistryConfig,
    token: Option<String>,
}

impl HttpRegistryClient {
    /// Create a new client
    ///
    /// Reads the bearer token from the environment variable named by
    /// `config.token_env`, if set.
    pub fn new(config: RegistryConfig) -> Result<Self> {
        let token = config
            .token_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok())
            .filter(|token| !token.is_empty());

        if token.is_none() {
            debug!("HttpRegistryClient: no API token found, sending anonymous requests");
        }

        Self::with_token(config, token)
    }

    /// Create a client with an explicit token
    pub fn with_token(config: RegistryConfig, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { client, config, token })
    }

    /// GET a JSON document.
    ///
    /// Transport failures and non-success statuses are errors. A success
    /// body that is not JSON decodes as `Value::Null`, which the fetcher
    /// treats like any other unusable shape.
    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!("GET {}", url);

        let mut request = self.client.get(url).header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NavError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!("Response from {} is not JSON: {}", url, e);
                Ok(Value::Null)
            }
        }
    }
}

#[async_trait]
impl RegistryClient for HttpRegistryClient {
    async fn list_installations(&self) -> Result<Value> {
        self.get_json(&self.config.list_url()).await
    }

    async fn app_configuration(&self, app_id: &str) -> Result<Value> {
        self.get_json(&self.config.detail_url(app_id)).await
    }
}
