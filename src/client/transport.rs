//! Request plumbing shared by every client operation.
//!
//! Maps transport failures and non-success statuses into the crate's
//! error taxonomy. Bodies that parse as a service error report
//! become `Api` errors carrying the reported type and reason;
//! anything else becomes `UnexpectedStatus`.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::client::ElasticClient;
use crate::core::error::{EscompatError, Result};
use crate::core::types::ErrorBody;

impl ElasticClient {
    /// Absolute URL for a service path (path must start with `/`)
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a request, mapping connect/timeout failures to
    /// `ConnectionFailed`.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response> {
        request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                EscompatError::ConnectionFailed(self.base_url.clone())
            } else {
                EscompatError::Http(e)
            }
        })
    }

    /// Issue a request and decode a JSON success body, or map an
    /// error status to a typed error.
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.send(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::error_from_response(status, body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Turn a non-success response into the appropriate error.
    pub(crate) fn error_from_response(status: StatusCode, body: String) -> EscompatError {
        if let Ok(report) = serde_json::from_str::<ErrorBody>(&body) {
            let (error_type, reason) = report.primary_cause();
            if !error_type.is_empty() || !reason.is_empty() {
                return EscompatError::Api { error_type, reason };
            }
        }

        EscompatError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        }
    }
}
