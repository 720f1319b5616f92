//! Shared REST transport — `RestClient`.
//!
//! Owns the pooled HTTP client and the base URL. Read-only after
//! construction, so it can back any number of in-flight operations across
//! sub-clients without locking.

use std::time::Duration;

use reqwest::Client;

use crate::error::EcsmError;
use crate::network::{Endpoint, DEFAULT_TIMEOUT_SECS};
use crate::rest::request::{Request, Verb};

/// Low-level client for the ECSM REST API.
///
/// Obtain request builders through the verb selectors:
///
/// ```rust,ignore
/// let list = rest
///     .get()
///     .resource("service")
///     .param("pageNum", 1)
///     .param("pageSize", 10)
///     .send()
///     .await?
///     .decode::<ServiceList>()?;
/// ```
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
}

impl RestClient {
    /// Create a client for `protocol://host:port` with default settings.
    pub fn new(protocol: &str, host: &str, port: &str) -> Result<Self, EcsmError> {
        Self::from_base_url(Endpoint::new(protocol, host, port).base_url())
    }

    /// Create a client from a full base URL (including the API prefix).
    pub fn from_base_url(base_url: impl Into<String>) -> Result<Self, EcsmError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with an explicit request timeout.
    ///
    /// The timeout bounds every request issued through this client; an
    /// expired deadline aborts the in-flight call and surfaces as
    /// [`EcsmError::Transport`].
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, EcsmError> {
        let http = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Verb selectors ───────────────────────────────────────────────────

    pub fn get(&self) -> Request<'_> {
        Request::new(self, Verb::Get)
    }

    pub fn post(&self) -> Request<'_> {
        Request::new(self, Verb::Post)
    }

    pub fn put(&self) -> Request<'_> {
        Request::new(self, Verb::Put)
    }

    pub fn delete(&self) -> Request<'_> {
        Request::new(self, Verb::Delete)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}
