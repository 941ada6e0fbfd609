use pretty_assertions::assert_eq;
use retro_client::{
    BackendClient, ClientError, CustomInsightSource, InsightOrigin, RetrospectiveSource,
};
use retro_config::BackendConfig;
use retro_core::errors::ErrorKind;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BackendClient {
    BackendClient::new(&BackendConfig {
        base_url: format!("{}/api/", server.uri()),
        timeout_secs: 5,
    })
}

#[tokio::test]
async fn retrospective_is_narrative_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/retrospective"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": "Quiet week",
            "source_summary_count": 4
        })))
        .expect(1)
        .mount(&server)
        .await;

    let loaded = client_for(&server).fetch_retrospective().await.unwrap();
    assert_eq!(loaded.summary_text, "Quiet week");
    assert_eq!(loaded.source_summary_count, Some(4));
    assert!(loaded.insights.is_none());
}

#[tokio::test]
async fn server_error_carries_body_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/retrospective"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "db down"})))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_retrospective().await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 500, .. }));
    assert_eq!(err.user_message(), "db down");
}

#[tokio::test]
async fn server_error_without_json_body_is_not_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/retrospective"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_retrospective().await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 502, .. }));
    assert_eq!(err.user_message(), "Network response was not ok");
}

#[tokio::test]
async fn server_error_with_json_but_no_error_field_uses_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/retrospective"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"detail": "maintenance"})))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_retrospective().await.unwrap_err();
    assert_eq!(err.user_message(), "HTTP error! status: 503");
}

#[tokio::test]
async fn ok_status_without_summary_fields_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/retrospective"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_retrospective().await.unwrap_err();
    assert!(matches!(err, ClientError::Malformed(_)));
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn submission_without_count_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/submit_daily"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "stored"})))
        .mount(&server)
        .await;

    let err = client_for(&server).submit_daily("notes").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn ok_status_with_error_field_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/retrospective"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "no summaries yet"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_retrospective().await.unwrap_err();
    assert!(matches!(err, ClientError::Backend(ref m) if m == "no summaries yet"));
}

#[tokio::test]
async fn submission_posts_tag_text_and_builds_pseudo_insight() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/submit_daily"))
        .and(body_json(json!({"text": "Daily notes based on tags: A, B."})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "stored",
            "current_summary_count": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tags = vec!["A".to_string(), "B".to_string()];
    let outcome = client_for(&server)
        .generate_custom_insight(&tags)
        .await
        .unwrap();

    assert_eq!(outcome.origin, InsightOrigin::Submitted);
    assert_eq!(outcome.insight.tags, tags);
    assert_eq!(outcome.insight.count, 1);
    assert_eq!(
        outcome.insight.summary,
        "Submitted: \"Daily notes based on tags: A, B.\" (Count: 3)"
    );
}

#[tokio::test]
async fn mock_listing_passes_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/mock/daily_summaries"))
        .and(query_param("count", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"text": "a"}, {"text": "b"}])),
        )
        .mount(&server)
        .await;

    let items = client_for(&server)
        .mock_daily_summaries(Some(2))
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["text"], "b");
}

#[tokio::test]
async fn mock_listing_rejects_non_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/mock/retrospective_summaries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .mock_retrospective_summaries(None)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Malformed(_)));
}

#[tokio::test]
async fn malformed_body_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/retrospective"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_retrospective().await.unwrap_err();
    assert!(matches!(err, ClientError::Malformed(_)));
}
