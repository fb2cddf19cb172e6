use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use quotegate_core::PriceBar;
use serde::Deserialize;
use serde_json::Value;

use crate::middleware::RequestId;

use super::{map_provider_error, ApiError, AppState};

fn default_period() -> String {
    "1y".to_owned()
}

fn default_interval() -> String {
    "1d".to_owned()
}

#[derive(Debug, Deserialize)]
pub(super) struct HistoryQuery {
    #[serde(default = "default_period")]
    pub period: String,
    #[serde(default = "default_interval")]
    pub interval: String,
}

fn quote_failure_message(symbol: &str) -> String {
    format!("Unable to fetch quote data for {symbol}")
}

pub(super) async fn finnhub_quote(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(symbol): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let quote = state
        .finnhub
        .quote(&symbol)
        .await
        .map_err(|e| map_provider_error(req_id.0, &e, quote_failure_message(&symbol)))?;
    Ok(Json(quote))
}

pub(super) async fn yfinance_latest(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(symbol): Path<String>,
) -> Result<Json<Vec<PriceBar>>, ApiError> {
    let bars = state
        .yahoo
        .latest(&symbol)
        .await
        .map_err(|e| map_provider_error(req_id.0, &e, quote_failure_message(&symbol)))?;
    Ok(Json(bars))
}

pub(super) async fn yfinance_history(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(symbol): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<PriceBar>>, ApiError> {
    let bars = state
        .yahoo
        .history(&symbol, &query.period, &query.interval)
        .await
        .map_err(|e| map_provider_error(req_id.0, &e, quote_failure_message(&symbol)))?;
    Ok(Json(bars))
}

pub(super) async fn alpha_vantage_quote(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(symbol): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let quote = state
        .alpha_vantage
        .global_quote(&symbol)
        .await
        .map_err(|e| map_provider_error(req_id.0, &e, quote_failure_message(&symbol)))?;
    Ok(Json(quote))
}
