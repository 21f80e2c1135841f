//! escompat - Verification Harness for Elasticsearch-Compatible Services
//!
//! Drives a fixed create/read/search/health round trip against a
//! remote search service over its HTTP/JSON contract and reports
//! whether the service behaved as the contract requires. Built to
//! exercise services that reimplement the classic typed-document
//! API, without depending on any official client library.
//!
//! # Architecture
//!
//! The codebase is organized into four modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, schema (mapping declaration), wire types
//!
//! - **client**: HTTP adapter (depends on core)
//!   - transport, documents, indices, search, cluster
//!
//! - **harness**: The verification scenario (depends on core + client)
//!   - check sequence, per-check outcomes, report
//!
//! - **cli**: clap adapter (depends on everything above)
//!   - run, health, cleanup, show-config, completions
//!
//! # Scenario
//!
//! 1. Connect to `localhost:$ELASTIC_PORT` (default 9200) and
//!    register the tweet schema
//! 2. Index a tweet at id 1, read it back, compare fields
//! 3. Match queries: "try" and "trying" each hit the stemmed token
//!    once, "elastic" hits nothing
//! 4. Cluster health must be yellow or green

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP client adapter
pub mod client;

// Verification scenario
pub mod harness;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use client::{ElasticClient, SearchBody};
pub use core::config::Config;
pub use core::error::{EscompatError, Result};
pub use core::schema::{Tweet, TypeMapping};
pub use core::types::{ClusterHealth, HealthStatus, SearchResponse};
pub use harness::{CheckOutcome, CheckStatus, Scenario, ScenarioReport};
