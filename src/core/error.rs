//! Error types for the escompat harness.
//!
//! One taxonomy covers the whole crate: transport failures, error
//! reports returned by the service, and check-level assertion
//! failures raised by the verification scenario.

use thiserror::Error;

/// Result type alias for escompat operations
pub type Result<T> = std::result::Result<T, EscompatError>;

/// Main error type for the escompat harness
#[derive(Error, Debug)]
pub enum EscompatError {
    #[error("Cannot reach search service at {0}")]
    ConnectionFailed(String),

    #[error("Document not found: /{index}/{doc_type}/{id}")]
    DocumentNotFound {
        index: String,
        doc_type: String,
        id: String,
    },

    #[error("Schema registration failed: {0}")]
    SchemaRegistration(String),

    #[error("Service error ({error_type}): {reason}")]
    Api { error_type: String, reason: String },

    #[error("Unexpected response status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Check '{check}' failed: {detail}")]
    CheckFailed { check: String, detail: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl EscompatError {
    /// True for the one condition the scenario handles specially:
    /// a retrieval miss on a document that was just indexed.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EscompatError::DocumentNotFound { .. })
    }

    /// Build a check-level assertion failure.
    pub fn check_failed(check: &str, detail: impl Into<String>) -> Self {
        EscompatError::CheckFailed {
            check: check.to_string(),
            detail: detail.into(),
        }
    }
}
