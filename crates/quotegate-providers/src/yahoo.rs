//! Yahoo Finance chart client.
//!
//! Calls the public `v8/finance/chart` endpoint and flattens its columnar
//! response into one [`PriceBar`] per interval. Prices are adjusted for
//! dividends and splits using the provider's adjusted close, and dividend or
//! split events are attached to the bar whose interval contains them.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use chrono_tz::Tz;
use quotegate_core::PriceBar;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ProviderError;
use crate::http::{endpoint, get_json, parse_base_url};

const PROVIDER: &str = "yahoo";

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartResult {
    #[serde(default)]
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    events: ChartEvents,
    #[serde(default)]
    indicators: Indicators,
}

#[derive(Debug, Default, Deserialize)]
struct ChartMeta {
    /// Exchange offset from UTC in seconds at request time.
    #[serde(default)]
    gmtoffset: i32,
    /// IANA zone name, e.g. `America/New_York`.
    #[serde(default, rename = "exchangeTimezoneName")]
    exchange_timezone_name: Option<String>,
}

/// Converts bar timestamps to exchange-local calendar days.
///
/// The named zone tracks DST across the range; `gmtoffset` is only a fallback
/// because it reflects the offset at request time.
enum ExchangeZone {
    Named(Tz),
    Fixed(FixedOffset),
}

impl ExchangeZone {
    fn from_meta(meta: &ChartMeta) -> Self {
        match meta
            .exchange_timezone_name
            .as_deref()
            .and_then(|name| name.parse::<Tz>().ok())
        {
            Some(tz) => Self::Named(tz),
            None => Self::Fixed(
                FixedOffset::east_opt(meta.gmtoffset).unwrap_or_else(|| Utc.fix()),
            ),
        }
    }

    fn date(&self, at: DateTime<Utc>) -> String {
        match self {
            Self::Named(tz) => at.with_timezone(tz).format("%Y-%m-%d").to_string(),
            Self::Fixed(offset) => at.with_timezone(offset).format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ChartEvents {
    #[serde(default)]
    dividends: HashMap<String, DividendEvent>,
    #[serde(default)]
    splits: HashMap<String, SplitEvent>,
}

#[derive(Debug, Deserialize)]
struct DividendEvent {
    amount: f64,
    date: i64,
}

#[derive(Debug, Deserialize)]
struct SplitEvent {
    date: i64,
    numerator: f64,
    denominator: f64,
}

#[derive(Debug, Default, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteColumns>,
    #[serde(default)]
    adjclose: Vec<AdjCloseColumn>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteColumns {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

#[derive(Debug, Default, Deserialize)]
struct AdjCloseColumn {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

/// Client for Yahoo Finance's chart endpoint. No API key is required.
#[derive(Debug, Clone)]
pub struct YahooChartClient {
    client: Client,
    base_url: Url,
}

impl YahooChartClient {
    /// Creates a client against `base_url` (production: `https://query1.finance.yahoo.com/`).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute http(s) URL.
    pub fn new(client: Client, base_url: &str) -> Result<Self, ProviderError> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Fetches price bars for `symbol` over `period` (e.g. `1mo`, `1y`,
    /// `max`) at `interval` (e.g. `1d`, `1wk`), oldest first.
    ///
    /// `period` and `interval` are passed through unvalidated; the provider
    /// rejects values it does not support.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ProviderError::Api`] if the chart carries an error or no result.
    /// - [`ProviderError::Http`] / [`ProviderError::Deserialize`] on transport
    ///   or parse failure.
    pub async fn history(
        &self,
        symbol: &str,
        period: &str,
        interval: &str,
    ) -> Result<Vec<PriceBar>, ProviderError> {
        let mut url = endpoint(&self.base_url, &["v8", "finance", "chart", symbol]);
        url.query_pairs_mut()
            .append_pair("range", period)
            .append_pair("interval", interval)
            .append_pair("events", "div,splits");

        let body = get_json(&self.client, PROVIDER, url).await?;
        let result = parse_chart(body, symbol)?;
        let bars = bars_from_chart(result);

        tracing::debug!(symbol, period, interval, count = bars.len(), "parsed chart bars");
        Ok(bars)
    }

    /// Fetches the most recent trading day's bar as a one-element list.
    ///
    /// # Errors
    ///
    /// Same as [`YahooChartClient::history`].
    pub async fn latest(&self, symbol: &str) -> Result<Vec<PriceBar>, ProviderError> {
        let mut bars = self.history(symbol, "1d", "1d").await?;
        let last = bars.len().saturating_sub(1);
        Ok(bars.split_off(last))
    }
}

fn parse_chart(body: Value, symbol: &str) -> Result<ChartResult, ProviderError> {
    let envelope: ChartEnvelope =
        serde_json::from_value(body).map_err(|source| ProviderError::Deserialize {
            context: format!("{PROVIDER} chart({symbol})"),
            source,
        })?;

    if let Some(error) = envelope.chart.error {
        let message = error
            .description
            .or(error.code)
            .unwrap_or_else(|| "unknown error".to_owned());
        return Err(ProviderError::Api {
            provider: PROVIDER,
            message,
        });
    }

    envelope
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| ProviderError::Api {
            provider: PROVIDER,
            message: format!("no chart data returned for {symbol}"),
        })
}

/// Flattens a columnar chart result into chronologically ordered bars.
///
/// Rows missing any of open/high/low/close are skipped; a missing volume
/// becomes 0.
pub(crate) fn bars_from_chart(result: ChartResult) -> Vec<PriceBar> {
    let zone = ExchangeZone::from_meta(&result.meta);
    let Some(quote) = result.indicators.quote.into_iter().next() else {
        return Vec::new();
    };
    let adjclose = result
        .indicators
        .adjclose
        .into_iter()
        .next()
        .map(|column| column.adjclose)
        .unwrap_or_default();

    let column = |values: &[Option<f64>], i: usize| values.get(i).copied().flatten();

    let mut rows: Vec<(i64, PriceBar)> = Vec::with_capacity(result.timestamp.len());
    for (i, &ts) in result.timestamp.iter().enumerate() {
        let (Some(open), Some(high), Some(low), Some(close)) = (
            column(&quote.open, i),
            column(&quote.high, i),
            column(&quote.low, i),
            column(&quote.close, i),
        ) else {
            continue;
        };
        let Some(date) = DateTime::from_timestamp(ts, 0) else {
            continue;
        };

        let factor = column(&adjclose, i)
            .filter(|_| close.abs() > f64::EPSILON)
            .map_or(1.0, |adj| adj / close);

        rows.push((
            ts,
            PriceBar {
                date: zone.date(date),
                open: open * factor,
                high: high * factor,
                low: low * factor,
                close: close * factor,
                volume: quote.volume.get(i).copied().flatten().unwrap_or(0),
                dividends: 0.0,
                stock_splits: 0.0,
            },
        ));
    }
    rows.sort_by_key(|(ts, _)| *ts);

    for dividend in result.events.dividends.values() {
        if let Some(i) = bar_containing(&rows, dividend.date) {
            rows[i].1.dividends += dividend.amount;
        }
    }
    for split in result.events.splits.values() {
        if split.denominator.abs() < f64::EPSILON {
            continue;
        }
        if let Some(i) = bar_containing(&rows, split.date) {
            let ratio = split.numerator / split.denominator;
            let bar = &mut rows[i].1;
            bar.stock_splits = if bar.stock_splits > 0.0 {
                bar.stock_splits * ratio
            } else {
                ratio
            };
        }
    }

    rows.into_iter().map(|(_, bar)| bar).collect()
}

/// Index of the last bar starting at or before `ts`.
fn bar_containing(rows: &[(i64, PriceBar)], ts: i64) -> Option<usize> {
    rows.partition_point(|(start, _)| *start <= ts).checked_sub(1)
}
