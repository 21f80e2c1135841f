//! Cluster operations: health and the reachability ping.

use crate::client::ElasticClient;
use crate::core::error::Result;
use crate::core::types::ClusterHealth;

impl ElasticClient {
    /// Fetch aggregate cluster health: `GET /_cluster/health`.
    pub async fn cluster_health(&self) -> Result<ClusterHealth> {
        let url = self.url("/_cluster/health");
        let health: ClusterHealth = self.request_json(self.http.get(&url)).await?;
        tracing::debug!(status = %health.status, cluster = %health.cluster_name, "cluster health");
        Ok(health)
    }

    /// Reachability check used during setup. Any well-formed health
    /// response counts; the status value is judged later by the
    /// health check itself.
    pub async fn ping(&self) -> Result<()> {
        self.cluster_health().await.map(|_| ())
    }
}
