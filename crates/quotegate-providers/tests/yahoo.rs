//! Integration tests for `YahooChartClient` using wiremock HTTP mocks.

use quotegate_providers::{build_http_client, ProviderError, YahooChartClient};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DAY: i64 = 86_400;
/// Monday 2024-04-08 13:30 UTC (09:30 New York).
const FIRST_OPEN: i64 = 1_712_583_000;

fn test_client(base_url: &str) -> YahooChartClient {
    let http = build_http_client("quotegate-test/0.1").expect("http client");
    YahooChartClient::new(http, base_url).expect("client construction should not fail")
}

/// Builds a chart body with one bar per timestamp and flat prices.
fn chart_body(timestamps: &[i64]) -> Value {
    let n = timestamps.len();
    let prices: Vec<f64> = (0..n).map(|i| 100.0 + i as f64).collect();
    json!({
        "chart": {
            "result": [{
                "meta": { "symbol": "AAPL", "gmtoffset": -14400, "exchangeTimezoneName": "America/New_York" },
                "timestamp": timestamps,
                "indicators": {
                    "quote": [{
                        "open": prices,
                        "high": prices,
                        "low": prices,
                        "close": prices,
                        "volume": vec![1_000_u64; n]
                    }]
                }
            }],
            "error": null
        }
    })
}

#[tokio::test]
async fn history_weekly_month_returns_ascending_weekly_records() {
    let server = MockServer::start().await;
    let weeks: Vec<i64> = (0..5).map(|w| FIRST_OPEN + w * 7 * DAY).collect();

    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/AAPL"))
        .and(query_param("range", "1mo"))
        .and(query_param("interval", "1wk"))
        .and(query_param("events", "div,splits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(&weeks)))
        .mount(&server)
        .await;

    let bars = test_client(&server.uri())
        .history("AAPL", "1mo", "1wk")
        .await
        .expect("history should succeed");

    let dates: Vec<&str> = bars.iter().map(|b| b.date.as_str()).collect();
    assert_eq!(
        dates,
        ["2024-04-08", "2024-04-15", "2024-04-22", "2024-04-29", "2024-05-06"]
    );
    assert!(bars.iter().all(|b| b.volume == 1_000));
}

#[tokio::test]
async fn history_records_serialize_with_column_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/MSFT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(&[FIRST_OPEN])))
        .mount(&server)
        .await;

    let bars = test_client(&server.uri())
        .history("MSFT", "5d", "1d")
        .await
        .expect("history should succeed");

    let json = serde_json::to_value(&bars).expect("serialize");
    let record = &json[0];
    for key in ["Date", "Open", "High", "Low", "Close", "Volume", "Dividends", "Stock Splits"] {
        assert!(record.get(key).is_some(), "missing column {key}: {record}");
    }
}

#[tokio::test]
async fn latest_keeps_only_most_recent_bar() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/AAPL"))
        .and(query_param("range", "1d"))
        .and(query_param("interval", "1d"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chart_body(&[FIRST_OPEN, FIRST_OPEN + DAY])),
        )
        .mount(&server)
        .await;

    let bars = test_client(&server.uri())
        .latest("AAPL")
        .await
        .expect("latest should succeed");

    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].date, "2024-04-09");
}

#[tokio::test]
async fn unknown_symbol_is_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/NOPE"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found, symbol may be delisted" }
            }
        })))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .history("NOPE", "1y", "1d")
        .await
        .unwrap_err();

    assert!(
        matches!(err, ProviderError::UnexpectedStatus { status: 404, .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn invalid_interval_error_under_200_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chart": {
                "result": null,
                "error": { "code": "Unprocessable Entity", "description": "Invalid input - interval=2wk is not supported." }
            }
        })))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .history("AAPL", "1y", "2wk")
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Api { .. }), "got: {err:?}");
}
