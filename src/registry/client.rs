//! HTTP client shared foundation
//!
//! A thin wrapper over reqwest with a configurable timeout and User-Agent.
//! There is deliberately no retry logic: a single failed or non-200
//! response is fatal to the whole analysis run.

use crate::error::RegistryError;
use reqwest::Client;
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("depgraph/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| RegistryError::NetworkError {
                package: String::new(),
                registry: "HTTP client".to_string(),
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Perform a GET request with error context
    pub async fn get_with_context(
        &self,
        url: &str,
        package: &str,
        registry: &str,
    ) -> Result<reqwest::Response, RegistryError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::timeout(package, registry)
            } else {
                RegistryError::network_error(package, registry, e.to_string())
            }
        })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::package_not_found(package, registry));
        }

        if !response.status().is_success() {
            return Err(RegistryError::network_error(
                package,
                registry,
                format!("HTTP {}", response.status()),
            ));
        }

        Ok(response)
    }

    /// Perform a GET request and parse the JSON response
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        package: &str,
        registry: &str,
    ) -> Result<T, RegistryError> {
        let response = self.get_with_context(url, package, registry).await?;

        response.json::<T>().await.map_err(|e| {
            RegistryError::invalid_response(
                package,
                registry,
                format!("failed to parse JSON: {}", e),
            )
        })
    }
}
