//! Document operations: index, retrieve, delete.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::ElasticClient;
use crate::core::error::{EscompatError, Result};
use crate::core::types::{DeleteDocResponse, GetDocResponse, IndexDocResponse};

impl ElasticClient {
    /// Index a document at an explicit id: `PUT /{index}/{type}/{id}`.
    ///
    /// The service creates or updates depending on whether the id
    /// already exists; the response's `result` field says which.
    pub async fn index_document<T: Serialize>(
        &self,
        index: &str,
        doc_type: &str,
        id: &str,
        document: &T,
    ) -> Result<IndexDocResponse> {
        let url = self.url(&format!("/{index}/{doc_type}/{id}"));
        tracing::debug!(%url, "indexing document");

        let response: IndexDocResponse =
            self.request_json(self.http.put(&url).json(document)).await?;
        tracing::debug!(
            result = %response.result,
            version = response.version,
            "document indexed"
        );
        Ok(response)
    }

    /// Retrieve a document by id: `GET /{index}/{type}/{id}`.
    ///
    /// A miss (HTTP 404, or a body with `found: false`) maps to
    /// `DocumentNotFound`.
    pub async fn get_document<T: DeserializeOwned>(
        &self,
        index: &str,
        doc_type: &str,
        id: &str,
    ) -> Result<T> {
        let url = self.url(&format!("/{index}/{doc_type}/{id}"));
        tracing::debug!(%url, "fetching document");

        let not_found = || EscompatError::DocumentNotFound {
            index: index.to_string(),
            doc_type: doc_type.to_string(),
            id: id.to_string(),
        };

        let response = self.send(self.http.get(&url)).await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(not_found());
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(Self::error_from_response(status, body));
        }

        let decoded: GetDocResponse<T> = serde_json::from_str(&body)?;
        if !decoded.found {
            return Err(not_found());
        }
        decoded.source.ok_or_else(not_found)
    }

    /// Delete a document by id: `DELETE /{index}/{type}/{id}`.
    ///
    /// Returns whether the document existed.
    pub async fn delete_document(&self, index: &str, doc_type: &str, id: &str) -> Result<bool> {
        let url = self.url(&format!("/{index}/{doc_type}/{id}"));
        tracing::debug!(%url, "deleting document");

        let response = self.send(self.http.delete(&url)).await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(Self::error_from_response(status, body));
        }

        let decoded: DeleteDocResponse = serde_json::from_str(&body)?;
        Ok(decoded.deleted())
    }
}
