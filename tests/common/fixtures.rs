// Canned response bodies shaped like the service's wire contract.

use serde_json::{json, Value};

/// Message the scenario document carries
pub const MESSAGE: &str = "trying out Elasticsearch";

/// User the scenario document carries
pub const USER: &str = "kimchy";

/// `_source` of the scenario document
#[allow(dead_code)] // Used across integration test binaries
pub fn tweet_source() -> Value {
    json!({
        "message": MESSAGE,
        "user": USER,
        "post_date": "2018-05-12T09:30:00Z",
    })
}

/// Body of a successful `PUT /{index}/{type}/{id}`
#[allow(dead_code)]
pub fn put_doc_body(id: &str, version: i64) -> Value {
    json!({
        "_shards": {"total": 1, "failed": 0, "successful": 1},
        "_index": "twitter",
        "_type": "tweet",
        "_id": id,
        "_version": version,
        "created": version == 1,
        "result": if version == 1 { "created" } else { "updated" },
    })
}

/// Body of a successful `GET /{index}/{type}/{id}`
#[allow(dead_code)]
pub fn get_doc_body(id: &str, source: Value) -> Value {
    json!({
        "_index": "twitter",
        "_type": "tweet",
        "_id": id,
        "_version": 1,
        "found": true,
        "_source": source,
    })
}

/// Body the service returns for a missing document
#[allow(dead_code)]
pub fn get_doc_missing_body() -> Value {
    json!({
        "_index": "twitter",
        "_type": "tweet",
        "found": false,
    })
}

/// Search response envelope around the given `_source` values
#[allow(dead_code)]
pub fn search_body(sources: &[Value]) -> Value {
    let hits: Vec<Value> = sources
        .iter()
        .enumerate()
        .map(|(i, source)| {
            json!({
                "_index": "twitter",
                "_type": "tweet",
                "_id": (i + 1).to_string(),
                "_score": 1.0,
                "_source": source,
            })
        })
        .collect();

    json!({
        "took": 1,
        "timed_out": false,
        "_shards": {"total": 1, "failed": 0, "successful": 1},
        "hits": {
            "max_score": if hits.is_empty() { Value::Null } else { json!(1.0) },
            "total": hits.len(),
            "hits": hits,
        },
    })
}

/// Cluster health body with the given status string
#[allow(dead_code)]
pub fn health_body(status: &str) -> Value {
    json!({
        "cluster_name": "stub_cluster",
        "status": status,
        "timed_out": false,
        "number_of_nodes": 1,
        "active_primary_shards": 0,
        "active_shards": 0,
        "relocating_shards": 0,
        "initializing_shards": 0,
        "unassigned_shards": 0,
        "delayed_unassigned_shards": 0,
        "number_of_pending_tasks": 0,
        "number_of_in_flight_fetch": 0,
        "task_max_waiting_in_queue_millis": 0,
        "active_shards_percent_as_number": 100.0,
    })
}

/// Error report body with one root cause
#[allow(dead_code)]
pub fn error_body(error_type: &str, reason: &str) -> Value {
    json!({
        "error": {
            "root_cause": [{"type": error_type, "reason": reason}],
            "type": error_type,
            "reason": reason,
        },
        "status": 500,
    })
}
