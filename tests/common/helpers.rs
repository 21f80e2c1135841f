// Test helper functions: stub-service plumbing around wiremock.

use escompat::Config;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::fixtures;

/// Config pointing at a stub service
#[allow(dead_code)] // Used in integration tests
pub fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    let addr = server.address();
    config.connection.host = addr.ip().to_string();
    config.connection.port = addr.port();
    config.connection.timeout_sec = 5;
    config
}

/// Config pointing at a port nothing listens on
#[allow(dead_code)]
pub fn unreachable_config() -> Config {
    // Bind to an ephemeral port and release it; nothing is listening
    // there by the time the client connects.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("Failed to read addr").port();
    drop(listener);

    let mut config = Config::default();
    config.connection.host = "127.0.0.1".to_string();
    config.connection.port = port;
    config.connection.timeout_sec = 2;
    config
}

/// Mount `GET /_cluster/health` with the given status
#[allow(dead_code)]
pub async fn mount_health(server: &MockServer, status: &str) {
    Mock::given(method("GET"))
        .and(path("/_cluster/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::health_body(status)))
        .mount(server)
        .await;
}

/// Mount schema registration for a fresh index: HEAD says absent,
/// PUT acknowledges creation.
#[allow(dead_code)]
pub async fn mount_schema_registration(server: &MockServer) {
    Mock::given(method("HEAD"))
        .and(path("/twitter"))
        .respond_with(ResponseTemplate::new(404))
        .mount(server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/twitter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "acknowledged": true,
            "shards_acknowledged": true,
        })))
        .mount(server)
        .await;
}

/// Mount `PUT /twitter/tweet/1` acknowledging the scenario document
#[allow(dead_code)]
pub async fn mount_put_document(server: &MockServer) {
    Mock::given(method("PUT"))
        .and(path("/twitter/tweet/1"))
        .respond_with(ResponseTemplate::new(201).set_body_json(fixtures::put_doc_body("1", 1)))
        .mount(server)
        .await;
}

/// Mount `GET /twitter/tweet/1` returning the given `_source`
#[allow(dead_code)]
pub async fn mount_get_document(server: &MockServer, source: Value) {
    Mock::given(method("GET"))
        .and(path("/twitter/tweet/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixtures::get_doc_body("1", source)),
        )
        .mount(server)
        .await;
}

/// Mount a `_search` answer for one match term
#[allow(dead_code)]
pub async fn mount_search(server: &MockServer, term: &str, sources: &[Value]) {
    Mock::given(method("POST"))
        .and(path("/twitter/_search"))
        .and(body_partial_json(json!({
            "query": {"match": {"message": term}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::search_body(sources)))
        .mount(server)
        .await;
}

/// Stub service scripted to satisfy every scenario check
#[allow(dead_code)]
pub async fn stub_compliant_service() -> MockServer {
    let server = MockServer::start().await;

    mount_health(&server, "yellow").await;
    mount_schema_registration(&server).await;
    mount_put_document(&server).await;
    mount_get_document(&server, fixtures::tweet_source()).await;

    // The analyzer stems "trying" to "try", so both terms hit the
    // one indexed document; "elastic" is no token and hits nothing.
    mount_search(&server, "try", &[fixtures::tweet_source()]).await;
    mount_search(&server, "trying", &[fixtures::tweet_source()]).await;
    mount_search(&server, "elastic", &[]).await;

    server
}
