//! Integration tests for `FinnhubClient` using wiremock HTTP mocks.

use quotegate_providers::{build_http_client, FinnhubClient, ProviderError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str, api_key: Option<&str>) -> FinnhubClient {
    let http = build_http_client("quotegate-test/0.1").expect("http client");
    FinnhubClient::new(http, api_key.map(str::to_owned), base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn quote_passes_provider_json_through() {
    let server = MockServer::start().await;
    let body = json!({
        "c": 189.84, "d": 1.25, "dp": 0.6628, "h": 190.3,
        "l": 187.6, "o": 188.1, "pc": 188.59, "t": 1_714_593_600
    });

    Mock::given(method("GET"))
        .and(path("/quote"))
        .and(query_param("symbol", "AAPL"))
        .and(query_param("token", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), Some("test-key"));
    let quote = client.quote("AAPL").await.expect("quote should succeed");

    assert_eq!(quote, body);
}

#[tokio::test]
async fn quote_without_key_fails_before_calling_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let err = client.quote("AAPL").await.unwrap_err();

    assert!(
        matches!(err, ProviderError::MissingApiKey { provider: "finnhub" }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn quote_maps_unauthorized_to_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/quote"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid API key" })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), Some("bad-key"));
    let err = client.quote("AAPL").await.unwrap_err();

    assert!(
        matches!(err, ProviderError::UnexpectedStatus { status: 401, .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn quote_error_field_under_200_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/quote"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "error": "You don't have access to this resource." })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), Some("test-key"));
    let err = client.quote("AAPL").await.unwrap_err();

    assert!(matches!(err, ProviderError::Api { .. }), "got: {err:?}");
}

#[tokio::test]
async fn quote_rejects_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/quote"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), Some("test-key"));
    let err = client.quote("AAPL").await.unwrap_err();

    assert!(
        matches!(err, ProviderError::Deserialize { .. }),
        "got: {err:?}"
    );
}
