//! High-level client — `EcsmClient` with per-resource sub-client accessors.
//!
//! Purely a composition root: it owns the shared [`RestClient`] and hands
//! out borrow-carrying sub-clients. The transport configuration is read-only
//! after construction, so sub-clients on different resources can run
//! concurrently without locking.

use std::time::Duration;

use crate::domain::config::client::Configs;
use crate::domain::container::client::Containers;
use crate::domain::micro_service::client::MicroServices;
use crate::domain::node::client::Nodes;
use crate::domain::record::client::Records;
use crate::domain::service::client::Services;
use crate::domain::template::client::Templates;
use crate::error::EcsmError;
use crate::network::{Endpoint, DEFAULT_TIMEOUT_SECS};
use crate::rest::RestClient;

/// The primary entry point for the ECSM client.
///
/// ```rust,ignore
/// let client = EcsmClient::new("http", "192.168.31.129", "3001")?;
/// let services = client.services().list_all(Default::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct EcsmClient {
    rest: RestClient,
}

impl EcsmClient {
    /// Create a client for `protocol://host:port` with default settings.
    pub fn new(protocol: &str, host: &str, port: &str) -> Result<Self, EcsmError> {
        Self::builder()
            .endpoint(Endpoint::new(protocol, host, port))
            .build()
    }

    pub fn builder() -> EcsmClientBuilder {
        EcsmClientBuilder::default()
    }

    /// The underlying REST client, for requests outside the typed surface.
    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn services(&self) -> Services<'_> {
        Services { rest: &self.rest }
    }

    pub fn micro_services(&self) -> MicroServices<'_> {
        MicroServices { rest: &self.rest }
    }

    pub fn records(&self) -> Records<'_> {
        Records { rest: &self.rest }
    }

    pub fn containers(&self) -> Containers<'_> {
        Containers { rest: &self.rest }
    }

    pub fn nodes(&self) -> Nodes<'_> {
        Nodes { rest: &self.rest }
    }

    pub fn configs(&self) -> Configs<'_> {
        Configs { rest: &self.rest }
    }

    pub fn templates(&self) -> Templates<'_> {
        Templates { rest: &self.rest }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct EcsmClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for EcsmClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl EcsmClientBuilder {
    /// Point the client at an API server by endpoint parts.
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.base_url = Some(endpoint.base_url());
        self
    }

    /// Point the client at a full base URL (including the API prefix).
    /// Useful for tests against a local mock server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<EcsmClient, EcsmError> {
        let base_url = self
            .base_url
            .ok_or_else(|| EcsmError::Validation("an endpoint or base URL is required".into()))?;

        Ok(EcsmClient {
            rest: RestClient::with_timeout(base_url, self.timeout)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_points_at_the_versioned_api_root() {
        let client = EcsmClient::new("http", "localhost", "3001").unwrap();
        assert_eq!(client.rest().base_url(), "http://localhost:3001/api/v1");
    }

    #[test]
    fn builder_without_endpoint_is_a_validation_error() {
        let err = EcsmClient::builder().build().unwrap_err();
        assert!(err.is_validation());
    }
}
