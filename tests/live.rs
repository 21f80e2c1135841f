//! Live-service tests
//!
//! These run the original round trip against a real search service
//! on localhost, port taken from ELASTIC_PORT (default 9200). The
//! service must be running with an empty corpus. Ignored by default:
//!
//! ```bash
//! ELASTIC_PORT=9200 cargo test --test live -- --ignored --test-threads=1
//! ```

use escompat::{Config, ElasticClient, Scenario, SearchBody, Tweet};

fn live_config() -> Config {
    Config::load().expect("Failed to load config")
}

#[tokio::test]
#[ignore = "requires a running search service"]
async fn live_index_and_retrieve() {
    let config = live_config();
    let scenario = Scenario::setup(&config).await.expect("setup failed");
    let client = scenario.client();

    let tweet = Tweet::new("trying out Elasticsearch", "kimchy");
    client
        .index_document(&config.scenario.index, &config.scenario.doc_type, "1", &tweet)
        .await
        .expect("indexing failed");

    let fetched: Tweet = client
        .get_document(&config.scenario.index, &config.scenario.doc_type, "1")
        .await
        .expect("retrieval failed");

    assert_eq!(fetched.message, tweet.message);
    assert_eq!(fetched.user, tweet.user);
}

#[tokio::test]
#[ignore = "requires a running search service"]
async fn live_search_hit_counts() {
    let config = live_config();
    let scenario = Scenario::setup(&config).await.expect("setup failed");
    let client = scenario.client();

    let tweet = Tweet::new("trying out Elasticsearch", "kimchy");
    client
        .index_document(&config.scenario.index, &config.scenario.doc_type, "1", &tweet)
        .await
        .expect("indexing failed");

    let response = client
        .search::<Tweet>(&config.scenario.index, &SearchBody::match_field("message", "try"))
        .await
        .expect("search failed");
    assert_eq!(response.hits.total, 1);
    for hit in &response.hits.hits {
        assert_eq!(hit.source.message, "trying out Elasticsearch");
    }

    let response = client
        .search::<Tweet>(&config.scenario.index, &SearchBody::match_field("message", "trying"))
        .await
        .expect("search failed");
    assert_eq!(response.hits.total, 1);

    let response = client
        .search::<Tweet>(&config.scenario.index, &SearchBody::match_field("message", "elastic"))
        .await
        .expect("search failed");
    assert_eq!(response.hits.total, 0);
}

#[tokio::test]
#[ignore = "requires a running search service"]
async fn live_cluster_health() {
    let config = live_config();
    let client = ElasticClient::connect(&config.connection)
        .await
        .expect("connect failed");

    let health = client.cluster_health().await.expect("health failed");
    assert!(
        health.status.is_acceptable(),
        "cluster status is {}, expected yellow or green",
        health.status
    );
}

#[tokio::test]
#[ignore = "requires a running search service"]
async fn live_full_scenario() {
    let config = live_config();
    let scenario = Scenario::setup(&config).await.expect("setup failed");

    let report = scenario.run().await;
    assert!(report.passed(), "report: {report:#?}");

    // Leave the corpus the way we found it.
    scenario.cleanup().await.expect("cleanup failed");
}
