mod news;
mod stock;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use quotegate_core::AppConfig;
use quotegate_providers::{
    build_http_client, AlphaVantageClient, FinnhubClient, NewsApiClient, ProviderError,
    YahooChartClient,
};
use quotegate_sentiment::{LexiconScorer, SentimentScorer};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, REQUEST_ID_HEADER};

pub(crate) const UPSTREAM_FAILURE: &str = "upstream_failure";
pub(crate) const NO_ANALYZABLE_CONTENT: &str = "no_analyzable_content";

/// Read-only state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub finnhub: FinnhubClient,
    pub yahoo: YahooChartClient,
    pub alpha_vantage: AlphaVantageClient,
    pub newsapi: NewsApiClient,
    pub scorer: Arc<dyn SentimentScorer>,
}

impl AppState {
    /// Builds every provider client from `config`, sharing one HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the HTTP client cannot be built or a
    /// configured base URL is unusable.
    pub fn from_config(config: &AppConfig) -> Result<Self, ProviderError> {
        let http = build_http_client(&config.user_agent)?;

        Ok(Self {
            finnhub: FinnhubClient::new(
                http.clone(),
                config.finnhub_api_key.clone(),
                &config.finnhub_base_url,
            )?,
            yahoo: YahooChartClient::new(http.clone(), &config.yahoo_base_url)?,
            alpha_vantage: AlphaVantageClient::new(
                http.clone(),
                config.alphavantage_api_key.clone(),
                &config.alphavantage_base_url,
            )?,
            newsapi: NewsApiClient::new(
                http,
                config.newsapi_api_key.clone(),
                &config.newsapi_base_url,
            )?,
            scorer: Arc::new(LexiconScorer),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    pub request_id: String,
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: message.into(),
            code: code.into(),
            request_id: request_id.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.code.as_str() {
            UPSTREAM_FAILURE | NO_ANALYZABLE_CONTENT => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Logs the provider error and converts it to a client-facing upstream
/// failure carrying only `message`.
pub(super) fn map_provider_error(
    request_id: String,
    error: &ProviderError,
    message: impl Into<String>,
) -> ApiError {
    tracing::warn!(error = %error, request_id = %request_id, "upstream provider call failed");
    ApiError::new(request_id, UPSTREAM_FAILURE, message)
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stock/finnhub/{symbol}", get(stock::finnhub_quote))
        .route("/stock/yfinance/{symbol}", get(stock::yfinance_latest))
        .route(
            "/stock/yfinance/historical/{symbol}",
            get(stock::yfinance_history),
        )
        .route(
            "/stock/alphavantage/{symbol}",
            get(stock::alpha_vantage_quote),
        )
        .route("/news/{keyword}", get(news::list_articles))
        .route("/news/sentiment/{keyword}", get(news::keyword_sentiment))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

async fn health() -> impl IntoResponse {
    Json(HealthData {
        status: "ok",
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
