//! Alpha Vantage `GLOBAL_QUOTE` client.

use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::ProviderError;
use crate::http::{endpoint, get_json, parse_base_url, require_key};

const PROVIDER: &str = "alphavantage";

/// Body keys Alpha Vantage uses to report errors and throttling under HTTP 200.
const ERROR_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    client: Client,
    api_key: Option<String>,
    base_url: Url,
}

impl AlphaVantageClient {
    /// Creates a client against `base_url` (production: `https://www.alphavantage.co/`).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute http(s) URL.
    pub fn new(
        client: Client,
        api_key: Option<String>,
        base_url: &str,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            client,
            api_key,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Fetches the latest quote for `symbol` and returns the provider JSON
    /// unmodified.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::MissingApiKey`] if no key is configured.
    /// - [`ProviderError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ProviderError::Api`] if the body reports an error, a throttling
    ///   notice, or an empty quote.
    /// - [`ProviderError::Http`] / [`ProviderError::Deserialize`] on transport
    ///   or parse failure.
    pub async fn global_quote(&self, symbol: &str) -> Result<Value, ProviderError> {
        let api_key = require_key(PROVIDER, self.api_key.as_deref())?;

        let mut url = endpoint(&self.base_url, &["query"]);
        url.query_pairs_mut()
            .append_pair("function", "GLOBAL_QUOTE")
            .append_pair("symbol", symbol)
            .append_pair("apikey", api_key);

        let body = get_json(&self.client, PROVIDER, url).await?;
        check_api_error(&body)?;
        Ok(body)
    }
}

fn check_api_error(body: &Value) -> Result<(), ProviderError> {
    for key in ERROR_KEYS {
        if let Some(message) = body.get(key).and_then(Value::as_str) {
            return Err(ProviderError::Api {
                provider: PROVIDER,
                message: message.to_owned(),
            });
        }
    }

    let has_quote = body
        .get("Global Quote")
        .and_then(Value::as_object)
        .is_some_and(|quote| !quote.is_empty());
    if !has_quote {
        return Err(ProviderError::Api {
            provider: PROVIDER,
            message: "response contained no quote data".to_owned(),
        });
    }

    Ok(())
}
