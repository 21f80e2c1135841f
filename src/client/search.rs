//! Full-text search: `POST /{index}/_search`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::client::ElasticClient;
use crate::core::error::Result;
use crate::core::types::SearchResponse;

/// Body of a `_search` request.
///
/// Only the query shapes the scenario needs; the service owns the
/// full query DSL.
#[derive(Debug, Clone, Serialize)]
pub struct SearchBody {
    query: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<u64>,
}

impl SearchBody {
    /// A `match` query against one field:
    /// `{"query": {"match": {"<field>": "<value>"}}}`
    pub fn match_field(field: &str, value: &str) -> Self {
        Self {
            query: json!({ "match": { field: value } }),
            size: None,
        }
    }

    /// Cap the number of returned hits
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }
}

impl ElasticClient {
    /// Run a search against every type in an index.
    pub async fn search<T: DeserializeOwned>(
        &self,
        index: &str,
        body: &SearchBody,
    ) -> Result<SearchResponse<T>> {
        let url = self.url(&format!("/{index}/_search"));
        tracing::debug!(%url, query = %serde_json::to_string(body).unwrap_or_default(), "searching");

        let response: SearchResponse<T> =
            self.request_json(self.http.post(&url).json(body)).await?;
        tracing::debug!(total = response.hits.total, took_ms = response.took, "search done");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_query_body() {
        let body = SearchBody::match_field("message", "try");
        let rendered = serde_json::to_value(&body).unwrap();
        assert_eq!(
            rendered,
            serde_json::json!({ "query": { "match": { "message": "try" } } })
        );
    }

    #[test]
    fn test_size_serialized_only_when_set() {
        let body = SearchBody::match_field("message", "try").with_size(5);
        let rendered = serde_json::to_value(&body).unwrap();
        assert_eq!(rendered["size"], 5);

        let without = serde_json::to_value(SearchBody::match_field("message", "try")).unwrap();
        assert!(without.as_object().unwrap().get("size").is_none());
    }
}
