//! REST clients for the upstream market-data and news providers.
//!
//! Each client issues a single GET per call and either passes the provider's
//! JSON through untouched or maps it into the shared domain types from
//! `quotegate-core`. There are no retries and no caching.

pub mod alpha_vantage;
pub mod error;
pub mod finnhub;
pub mod http;
pub mod newsapi;
pub mod yahoo;

pub use alpha_vantage::AlphaVantageClient;
pub use error::ProviderError;
pub use finnhub::FinnhubClient;
pub use http::build_http_client;
pub use newsapi::{NewsApiClient, MAX_ARTICLES};
pub use yahoo::YahooChartClient;
