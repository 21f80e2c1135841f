//! Verification harness
//!
//! Drives the fixed sequence of operations against the service under
//! test and records per-check outcomes:
//!
//! 1. setup: reachability ping plus schema registration
//! 2. index-retrieve: index the scenario tweet, read it back,
//!    compare fields
//! 3. search: three match queries with known expected hit counts
//! 4. health: cluster status must be yellow or green
//!
//! Setup failure aborts the run. A failed check is recorded and the
//! run continues, so a single report covers the whole surface. The
//! sequence is strictly sequential over one shared client; there are
//! no retries.

mod report;

pub use report::{CheckOutcome, CheckStatus, ScenarioReport};

use std::future::Future;
use std::time::Instant;

use crate::client::{ElasticClient, SearchBody};
use crate::core::config::Config;
use crate::core::error::{EscompatError, Result};
use crate::core::schema::Tweet;
use crate::core::types::SearchResponse;

/// Id the scenario document is indexed under
pub const DOC_ID: &str = "1";

/// Message body of the scenario document
pub const MESSAGE: &str = "trying out Elasticsearch";

/// Author of the scenario document
pub const USER: &str = "kimchy";

/// The verification scenario, bound to a reachable service
#[derive(Debug)]
pub struct Scenario {
    client: ElasticClient,
    index: String,
    doc_type: String,
}

impl Scenario {
    /// Connect to the configured service and register the tweet
    /// schema. Fails fast on an unreachable host/port.
    pub async fn setup(config: &Config) -> Result<Self> {
        let client = ElasticClient::connect(&config.connection).await?;
        let scenario = Self {
            client,
            index: config.scenario.index.clone(),
            doc_type: config.scenario.doc_type.clone(),
        };
        scenario.register_schema().await?;
        Ok(scenario)
    }

    /// Declare the tweet mapping with the service: create the index
    /// if it is absent, otherwise update the type mapping in place.
    async fn register_schema(&self) -> Result<()> {
        let mapping = Tweet::mapping();
        if self.client.index_exists(&self.index).await? {
            self.client
                .put_mapping(&self.index, &self.doc_type, &mapping)
                .await?;
        } else {
            self.client
                .create_index(&self.index, &self.doc_type, &mapping)
                .await?;
        }
        tracing::info!(index = %self.index, doc_type = %self.doc_type, "schema registered");
        Ok(())
    }

    /// Run the full check sequence and collect the report.
    pub async fn run(&self) -> ScenarioReport {
        let mut report = ScenarioReport::new(self.client.base_url());
        report.push(Self::timed("index-retrieve", self.check_index_retrieve()).await);
        report.push(Self::timed("search", self.check_search()).await);
        report.push(Self::timed("health", self.check_health()).await);

        for check in report.checks() {
            match check.status {
                CheckStatus::Passed => {
                    tracing::info!(check = %check.name, "check passed: {}", check.detail)
                }
                CheckStatus::Failed => {
                    tracing::warn!(check = %check.name, "check failed: {}", check.detail)
                }
            }
        }
        report
    }

    /// The connected client, for callers that drive operations
    /// outside the fixed sequence.
    pub fn client(&self) -> &ElasticClient {
        &self.client
    }

    /// Delete the scenario document so a later run starts from an
    /// empty corpus again. Returns whether the document existed.
    pub async fn cleanup(&self) -> Result<bool> {
        self.client
            .delete_document(&self.index, &self.doc_type, DOC_ID)
            .await
    }

    async fn timed(name: &str, check: impl Future<Output = Result<String>>) -> CheckOutcome {
        let start = Instant::now();
        let result = check.await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(detail) => CheckOutcome::passed(name, detail, duration_ms),
            Err(e) => CheckOutcome::failed(name, e.to_string(), duration_ms),
        }
    }

    /// Index the scenario tweet at an explicit id, read it back, and
    /// compare field by field. A genuine retrieval miss surfaces as
    /// `DocumentNotFound` and fails this check.
    async fn check_index_retrieve(&self) -> Result<String> {
        let tweet = Tweet::new(MESSAGE, USER);
        let indexed = self
            .client
            .index_document(&self.index, &self.doc_type, DOC_ID, &tweet)
            .await?;

        let fetched: Tweet = self
            .client
            .get_document(&self.index, &self.doc_type, DOC_ID)
            .await?;

        if fetched.message != tweet.message {
            return Err(EscompatError::check_failed(
                "index-retrieve",
                format!(
                    "message mismatch: expected {:?}, got {:?}",
                    tweet.message, fetched.message
                ),
            ));
        }
        if fetched.user != tweet.user {
            return Err(EscompatError::check_failed(
                "index-retrieve",
                format!(
                    "user mismatch: expected {:?}, got {:?}",
                    tweet.user, fetched.user
                ),
            ));
        }

        Ok(format!(
            "document {DOC_ID} indexed ({}) and retrieved intact",
            indexed.result
        ))
    }

    /// Three match queries against the message field. "try" and
    /// "trying" must both reduce to the same stem as the indexed
    /// "trying" token; "elastic" is a substring of an indexed token
    /// but not a token itself, so it must not match.
    async fn check_search(&self) -> Result<String> {
        self.expect_hits("try", 1, Some(MESSAGE)).await?;
        self.expect_hits("trying", 1, None).await?;
        self.expect_hits("elastic", 0, None).await?;
        Ok("match queries returned expected hit counts".to_string())
    }

    async fn expect_hits(
        &self,
        term: &str,
        expected: u64,
        expected_message: Option<&str>,
    ) -> Result<SearchResponse<Tweet>> {
        let body = SearchBody::match_field("message", term);
        let response: SearchResponse<Tweet> = self.client.search(&self.index, &body).await?;

        if response.hits.total != expected {
            return Err(EscompatError::check_failed(
                "search",
                format!(
                    "query {term:?}: expected {expected} hit(s), got {}",
                    response.hits.total
                ),
            ));
        }

        if let Some(message) = expected_message {
            for hit in &response.hits.hits {
                if hit.source.message != message {
                    return Err(EscompatError::check_failed(
                        "search",
                        format!(
                            "query {term:?}: hit {} has message {:?}, expected {message:?}",
                            hit.id, hit.source.message
                        ),
                    ));
                }
            }
        }

        Ok(response)
    }

    /// Cluster health must be yellow or green; red or anything
    /// unrecognized fails.
    async fn check_health(&self) -> Result<String> {
        let health = self.client.cluster_health().await?;

        if !health.status.is_acceptable() {
            return Err(EscompatError::check_failed(
                "health",
                format!(
                    "cluster status is {}, expected yellow or green",
                    health.status
                ),
            ));
        }

        Ok(format!(
            "cluster '{}' is {} ({} node(s))",
            health.cluster_name, health.status, health.number_of_nodes
        ))
    }
}
