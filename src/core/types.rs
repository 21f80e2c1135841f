//! Wire types for the service's request/response contract.
//!
//! These mirror the JSON the service actually returns for the
//! operations the harness exercises: document put/get/delete,
//! `_search`, index creation, mapping updates, and cluster health.
//! The contract is the classic typed-document one: document types in
//! paths, `hits.total` as a plain integer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shard bookkeeping attached to write and search responses
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct ShardInfo {
    pub total: u32,
    pub failed: u32,
    pub successful: u32,
}

/// Response to `PUT /{index}/{type}/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct IndexDocResponse {
    #[serde(rename = "_shards", default)]
    pub shards: ShardInfo,
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_version", default)]
    pub version: i64,
    #[serde(default)]
    pub created: bool,
    /// "created" or "updated"
    #[serde(default)]
    pub result: String,
}

/// Response to `GET /{index}/{type}/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct GetDocResponse<T> {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "_version", default)]
    pub version: i64,
    pub found: bool,
    #[serde(rename = "_source")]
    pub source: Option<T>,
}

/// Response to `DELETE /{index}/{type}/{id}`
///
/// Some services answer with a get-shaped body (`found`), others
/// with `result: "deleted"`. Both are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteDocResponse {
    #[serde(default)]
    pub found: bool,
    #[serde(default)]
    pub result: String,
}

impl DeleteDocResponse {
    pub fn deleted(&self) -> bool {
        self.found || self.result == "deleted"
    }
}

/// Response to `POST /{index}/_search`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse<T> {
    #[serde(default)]
    pub took: i64,
    #[serde(default)]
    pub timed_out: bool,
    #[serde(rename = "_shards", default)]
    pub shards: ShardInfo,
    pub hits: SearchHits<T>,
}

/// The `hits` envelope of a search response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHits<T> {
    #[serde(default)]
    pub max_score: Option<f32>,
    /// Total matching documents, as a plain integer
    pub total: u64,
    pub hits: Vec<SearchHit<T>>,
}

/// A single search hit
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit<T> {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score", default)]
    pub score: Option<f32>,
    #[serde(rename = "_source")]
    pub source: T,
}

/// Response to `PUT /{index}`
#[derive(Debug, Clone, Deserialize)]
pub struct IndexCreateResponse {
    pub acknowledged: bool,
    #[serde(default)]
    pub shards_acknowledged: bool,
}

/// Response to `PUT /{index}/_mapping/{type}`
#[derive(Debug, Clone, Deserialize)]
pub struct MappingPutResponse {
    pub acknowledged: bool,
}

/// Aggregate cluster status reported by `GET /_cluster/health`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Green,
    Yellow,
    Red,
    /// Anything the service reports that is not a known status.
    /// Captured rather than rejected so the health check can fail
    /// with the offending value instead of a decode error.
    #[serde(other)]
    Unknown,
}

impl HealthStatus {
    /// Healthy-or-degraded: the two states the scenario accepts
    pub fn is_acceptable(&self) -> bool {
        matches!(self, HealthStatus::Green | HealthStatus::Yellow)
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HealthStatus::Green => "green",
            HealthStatus::Yellow => "yellow",
            HealthStatus::Red => "red",
            HealthStatus::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// Response to `GET /_cluster/health`
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterHealth {
    #[serde(default)]
    pub cluster_name: String,
    pub status: HealthStatus,
    #[serde(default)]
    pub timed_out: bool,
    #[serde(default)]
    pub number_of_nodes: i64,
    #[serde(default)]
    pub active_primary_shards: i64,
    #[serde(default)]
    pub active_shards: i64,
    #[serde(default)]
    pub relocating_shards: i64,
    #[serde(default)]
    pub initializing_shards: i64,
    #[serde(default)]
    pub unassigned_shards: i64,
}

/// One cause inside a service error report
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorCause {
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub reason: String,
}

/// The `error` object of a service error report
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDesc {
    #[serde(default)]
    pub root_cause: Vec<ErrorCause>,
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub reason: String,
}

/// Error report body:
/// `{"error": {"root_cause": [...], "type": ..., "reason": ...}, "status": ...}`
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDesc,
    #[serde(default)]
    pub status: u16,
}

impl ErrorBody {
    /// Preferred cause to surface: the first root cause, falling
    /// back to the top-level type/reason.
    pub fn primary_cause(&self) -> (String, String) {
        match self.error.root_cause.first() {
            Some(cause) => (cause.error_type.clone(), cause.reason.clone()),
            None => (self.error.error_type.clone(), self.error.reason.clone()),
        }
    }
}
