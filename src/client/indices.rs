//! Index operations: existence, creation, mapping registration.

use reqwest::StatusCode;
use serde_json::json;

use crate::client::ElasticClient;
use crate::core::error::{EscompatError, Result};
use crate::core::schema::TypeMapping;
use crate::core::types::{IndexCreateResponse, MappingPutResponse};

impl ElasticClient {
    /// Check whether an index exists: `HEAD /{index}`.
    pub async fn index_exists(&self, index: &str) -> Result<bool> {
        let url = self.url(&format!("/{index}"));
        let response = self.send(self.http.head(&url)).await?;
        let status = response.status();

        if status.is_success() {
            return Ok(true);
        }
        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        Err(Self::error_from_response(status, String::new()))
    }

    /// Create an index carrying the mapping for one document type:
    /// `PUT /{index}` with `{"mappings": {"<type>": {...}}}`.
    pub async fn create_index(
        &self,
        index: &str,
        doc_type: &str,
        mapping: &TypeMapping,
    ) -> Result<()> {
        let url = self.url(&format!("/{index}"));
        let body = json!({ "mappings": { doc_type: mapping.properties() } });
        tracing::debug!(%url, "creating index");

        let response: IndexCreateResponse =
            self.request_json(self.http.put(&url).json(&body)).await?;
        if !response.acknowledged {
            return Err(EscompatError::SchemaRegistration(format!(
                "index creation for '{index}' was not acknowledged"
            )));
        }
        Ok(())
    }

    /// Register or update a type mapping on an existing index:
    /// `PUT /{index}/_mapping/{type}`.
    pub async fn put_mapping(
        &self,
        index: &str,
        doc_type: &str,
        mapping: &TypeMapping,
    ) -> Result<()> {
        let url = self.url(&format!("/{index}/_mapping/{doc_type}"));
        tracing::debug!(%url, "registering type mapping");

        let response: MappingPutResponse = self
            .request_json(self.http.put(&url).json(&mapping.properties()))
            .await?;
        if !response.acknowledged {
            return Err(EscompatError::SchemaRegistration(format!(
                "mapping update for '{index}/{doc_type}' was not acknowledged"
            )));
        }
        Ok(())
    }
}
