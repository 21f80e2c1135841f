//! HTTP client adapter
//!
//! Depends only on core/. A thin typed client for the service's
//! HTTP/JSON contract: one shared connection handle (the underlying
//! client pools and reuses connections), one method per operation
//! the harness exercises. No retries; every call is a single
//! request/response round trip with the configured timeout.

pub mod cluster;
pub mod documents;
pub mod indices;
pub mod search;
mod transport;

pub use search::SearchBody;

use std::time::Duration;

use crate::core::config::ConnectionConfig;
use crate::core::error::Result;

/// Client for an Elasticsearch-compatible search service
#[derive(Debug, Clone)]
pub struct ElasticClient {
    http: reqwest::Client,
    base_url: String,
}

impl ElasticClient {
    /// Build a client and verify the service is reachable.
    ///
    /// The reachability ping means an unreachable host/port fails
    /// here, in the setup phase, rather than on the first operation.
    pub async fn connect(config: &ConnectionConfig) -> Result<Self> {
        let client = Self::new(config)?;
        client.ping().await?;
        tracing::debug!(target_url = %client.base_url, "connected to search service");
        Ok(client)
    }

    /// Build a client without checking reachability.
    pub fn new(config: &ConnectionConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_sec))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url(),
        })
    }

    /// Base URL of the service this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
