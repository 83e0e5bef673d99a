//! Lisk Service API client.
//!
//! [`LiskClient`] owns the resolved configuration and a [`Transport`]. Every
//! endpoint method funnels through [`LiskClient::get`], which joins the base
//! URL, the endpoint path and the encoded query, then performs exactly one
//! request.
//!
//! # Example
//!
//! ```no_run
//! use lisk_service_client::{GeneratorsQuery, LiskClient, ServiceConfig};
//!
//! # async fn run() -> lisk_service_client::Result<()> {
//! let client = LiskClient::new(ServiceConfig::from_env()?)?;
//! let generators = client
//!     .get_generators(&GeneratorsQuery::default().search("genesis_84").limit(5))
//!     .await?;
//! println!("{generators:#}");
//! # Ok(())
//! # }
//! ```

use serde_json::Value;

use super::http::{HttpClient, Transport};
use crate::config::ServiceConfig;
use crate::domain::{Endpoint, QueryParams, Result};

mod blockchain;
mod blocks;
mod generators;
mod market;
mod token;
mod transactions;


// ============================================================================
// Lisk Service Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct LiskClient<T = HttpClient> {
    config: ServiceConfig,
    transport: T,
}

impl LiskClient<HttpClient> {
    /// Creates a client backed by a real HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::ClientInit` if the HTTP client fails to
    /// initialize.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let transport = HttpClient::with_config(config.http().clone())?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> LiskClient<T> {
    /// Creates a client over a caller-supplied transport.
    #[must_use]
    pub fn with_transport(config: ServiceConfig, transport: T) -> Self {
        Self { config, transport }
    }

    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Full request URL for an endpoint and query.
    ///
    /// The `?` separator is only added when at least one parameter survived.
    #[must_use]
    pub fn url_for(&self, endpoint: Endpoint, query: &QueryParams) -> String {
        if query.is_empty() {
            format!("{}{}", self.config.base_url(), endpoint.path())
        } else {
            format!(
                "{}{}?{}",
                self.config.base_url(),
                endpoint.path(),
                query.to_query_string()
            )
        }
    }

    /// Perform one GET against `endpoint` and return the decoded payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service answers with a
    /// non-success status, or the body is not JSON.
    pub async fn get(&self, endpoint: Endpoint, query: &QueryParams) -> Result<Value> {
        let url = self.url_for(endpoint, query);
        tracing::debug!(%endpoint, %url, "GET");

        self.transport
            .get_json(&url)
            .await
            .inspect_err(|e| tracing::debug!(%endpoint, "request failed: {e:?}"))
    }
}
