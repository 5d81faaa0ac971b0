//! Integration tests for the overlay search flow.
//!
//! These exercise the open → fetch → query pipeline against a wiremock
//! HTTP server standing in for GitHub and the hosted content database,
//! so the remote-source behavior (growth on resolve, degradation on
//! failure, retry-on-reopen, in-flight dedup) runs without network
//! access.

use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use spotlight::config::Config;
use spotlight::nav::NoopUiBridge;
use spotlight::overlay::OverlayController;

// ============================================================================
// Test Helpers
// ============================================================================

fn repo_body() -> serde_json::Value {
    json!([
        {
            "id": 101,
            "name": "react-portfolio",
            "description": "Personal portfolio built with React",
            "language": "TypeScript",
            "html_url": "https://github.com/niya-shroff/react-portfolio"
        },
        {
            "id": 102,
            "name": "algo-notes",
            "description": null,
            "language": "Python",
            "html_url": "https://github.com/niya-shroff/algo-notes"
        }
    ])
}

/// Config pointing the GitHub client at the mock server; content API
/// stays unconfigured unless a test opts in.
fn github_config(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.github.api_base = server.uri();
    config
}

fn controller(config: &Config) -> OverlayController {
    OverlayController::new(config, Arc::new(NoopUiBridge))
}

// ============================================================================
// Remote Growth
// ============================================================================

#[tokio::test]
async fn unfetched_remote_contributes_zero_then_grows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/niya-shroff/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repo_body()))
        .mount(&server)
        .await;

    let ctrl = controller(&github_config(&server));

    // Before any fetch: the projects source contributes nothing and that
    // is not an error.
    assert!(ctrl.set_query("react").is_empty());

    let mut rx = ctrl.subscribe_changes();
    ctrl.open();
    rx.changed().await.expect("cache alive");

    // Same query, same session: the repo now shows up.
    let results = ctrl.set_query("react");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "proj-101");
    assert_eq!(results[0].path, "/technical");
}

#[tokio::test]
async fn repo_language_and_missing_description_are_matchable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/niya-shroff/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repo_body()))
        .mount(&server)
        .await;

    let ctrl = controller(&github_config(&server));
    ctrl.fetch_now().await;

    // Matches on the language field.
    let results = ctrl.set_query("python");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "proj-102");
    // A null description falls back to a stock label, not an error.
    assert_eq!(results[0].description, "GitHub Repository");
}

// ============================================================================
// Failure / Retry Semantics
// ============================================================================

#[tokio::test]
async fn fetch_failure_degrades_then_reopen_retries() {
    let server = MockServer::start().await;
    // First attempt fails, second succeeds.
    Mock::given(method("GET"))
        .and(path("/users/niya-shroff/repos"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/niya-shroff/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repo_body()))
        .expect(1)
        .mount(&server)
        .await;

    let ctrl = controller(&github_config(&server));

    let mut rx = ctrl.subscribe_changes();
    ctrl.open();
    rx.changed().await.expect("cache alive");

    // Degraded: fewer results, no error surfaced, not loading.
    assert!(ctrl.set_query("react").is_empty());
    assert!(!ctrl.loading());

    // Reopening retries a failed source.
    ctrl.close();
    ctrl.open();
    rx.changed().await.expect("cache alive");

    let results = ctrl.set_query("react");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "proj-101");
}

#[tokio::test]
async fn inflight_fetch_is_not_duplicated_by_reopen() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/niya-shroff/repos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(repo_body())
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ctrl = controller(&github_config(&server));
    let mut rx = ctrl.subscribe_changes();

    ctrl.open();
    assert!(ctrl.loading());

    // Close and reopen while the first fetch is still in flight.
    ctrl.close();
    ctrl.open();

    rx.changed().await.expect("cache alive");
    assert!(!ctrl.loading());
    assert_eq!(ctrl.set_query("react").len(), 1);
    // The .expect(1) on the mock verifies no duplicate request on drop.
}

#[tokio::test]
async fn successful_fetch_is_not_refreshed_on_reopen() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/niya-shroff/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repo_body()))
        .expect(1)
        .mount(&server)
        .await;

    let ctrl = controller(&github_config(&server));
    ctrl.fetch_now().await;

    ctrl.open();
    ctrl.close();
    ctrl.open();

    assert_eq!(ctrl.set_query("react").len(), 1);
}

#[tokio::test]
async fn non_array_github_body_degrades_to_zero_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/niya-shroff/repos"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "rate limited"})),
        )
        .mount(&server)
        .await;

    let ctrl = controller(&github_config(&server));
    ctrl.fetch_now().await;

    assert!(ctrl.set_query("react").is_empty());
    assert!(!ctrl.loading());
}

// ============================================================================
// Content API Sources
// ============================================================================

#[tokio::test]
async fn content_rows_feed_their_sources() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/niya-shroff/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/photos"))
        .and(query_param("select", "*"))
        .and(header("apikey", "anon-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Mountain Landscape", "category": "Nature", "location": "Alps", "url": "https://img.example/1"},
            {"id": 2, "title": "Urban Life", "category": "City", "location": "New York", "url": "https://img.example/2"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/videos"))
        .and(query_param("select", "*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Cinematic Travel Reel", "platform": "YouTube", "video_url": "https://yt.example/1"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/writings"))
        .and(query_param("select", "*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 9, "title": "On Latency", "category": "Essay", "published_date": "2025-11-02"}
        ])))
        .mount(&server)
        .await;

    let mut config = github_config(&server);
    config.content_api.base_url = server.uri();
    config.content_api.anon_key = Some("anon-test-key".to_string());

    let ctrl = controller(&config);
    ctrl.fetch_now().await;

    // Photo matched via its location field.
    let results = ctrl.set_query("alps");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "photo-1");
    assert_eq!(results[0].path, "/photography");

    // Video matched via its platform field.
    let results = ctrl.set_query("youtube");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "video-1");

    // Writing row matched via its title; its category is a matchable
    // field too ("essay" alone would also hit the Writing page blurb).
    let results = ctrl.set_query("latency essay");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "writing-9");
    assert_eq!(results[0].path, "/writing");
}

#[tokio::test]
async fn one_failing_source_leaves_the_others_intact() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/niya-shroff/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repo_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/photos"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/writings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let mut config = github_config(&server);
    config.content_api.base_url = server.uri();

    let ctrl = controller(&config);
    ctrl.fetch_now().await;

    // Photos failed; projects are unaffected.
    assert!(ctrl.set_query("mountain").is_empty());
    assert_eq!(ctrl.set_query("react").len(), 1);
}

// ============================================================================
// Loading Indicator
// ============================================================================

#[tokio::test]
async fn loading_is_true_only_while_a_fetch_is_outstanding() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/niya-shroff/repos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(150)),
        )
        .mount(&server)
        .await;

    let ctrl = controller(&github_config(&server));
    assert!(!ctrl.loading());

    let mut rx = ctrl.subscribe_changes();
    ctrl.open();
    assert!(ctrl.loading());
    assert_eq!(ctrl.loading_sources(), vec!["projects"]);

    rx.changed().await.expect("cache alive");
    assert!(!ctrl.loading());
    assert!(ctrl.loading_sources().is_empty());
}

// ============================================================================
// Ordering Across Sources
// ============================================================================

#[tokio::test]
async fn results_follow_source_declaration_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/niya-shroff/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "name": "writing-tools", "description": "Helpers for the writing page", "language": "Rust", "html_url": "https://github.com/niya-shroff/writing-tools"}
        ])))
        .mount(&server)
        .await;

    let ctrl = controller(&github_config(&server));
    ctrl.fetch_now().await;

    // "writing" hits the Writing page link and the repo; the pages
    // source is declared before the projects source.
    let ids: Vec<String> = ctrl.set_query("writing").into_iter().map(|r| r.id).collect();
    let page_pos = ids.iter().position(|id| id == "page-writing");
    let proj_pos = ids.iter().position(|id| id == "proj-7");
    assert!(page_pos.is_some() && proj_pos.is_some());
    assert!(page_pos < proj_pos);
}
