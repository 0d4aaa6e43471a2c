pub mod block;
pub mod transaction;

use std::env;
use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, Result};

/// Timeout applied to every request unless overridden at construction.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Struct representing a client that interacts with the historical ledger
/// data service.
///
/// The client is stateless beyond its transport configuration: it is `Clone`,
/// cheap to share, and safe to call concurrently from multiple tasks.
#[derive(Clone, Debug)]
pub struct HistoricalClient {
    inner: reqwest::Client, // The inner HTTP client used for requests.
    base_url: String,       // The base URL for making requests to the service.
}

impl HistoricalClient {
    /// Creates a new `HistoricalClient` with the default 10 second timeout.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the service, taken as given with no
    ///   normalization.
    ///
    /// # Returns
    ///
    /// A new `HistoricalClient` instance, or an error if the transport could
    /// not be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a new `HistoricalClient` with an explicit request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let inner = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { inner, base_url: base_url.into() })
    }

    /// Creates a client from the `RPCV2_HIST_URL` environment variable,
    /// falling back to the service's default REST listen address.
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("RPCV2_HIST_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Liveness probe.
    /// GET:/health
    pub async fn health(&self) -> Result<()> {
        self.get_ok("health").await
    }

    /// Readiness probe: the service is up and its backing store answers.
    /// GET:/ready
    pub async fn ready(&self) -> Result<()> {
        self.get_ok("ready").await
    }

    /// Issues a single GET for `endpoint` and decodes the body as `T`.
    ///
    /// Failures propagate unmodified: transport errors and timeouts as
    /// [`Error::Transport`], non-success statuses as [`Error::Status`] with
    /// the body text attached. No retry is attempted.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = Url::parse(&format!("{}/{}", self.base_url, endpoint))?;
        tracing::debug!(%url, "requesting");
        let response = self.inner.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status { status, body });
        }
        Ok(response.json().await?)
    }

    /// Issues a single GET and discards the body, for probe endpoints.
    async fn get_ok(&self, endpoint: &str) -> Result<()> {
        let url = Url::parse(&format!("{}/{}", self.base_url, endpoint))?;
        tracing::debug!(%url, "requesting");
        let response = self.inner.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status { status, body });
        }
        Ok(())
    }
}
