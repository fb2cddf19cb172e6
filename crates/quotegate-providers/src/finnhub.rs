//! Finnhub quote client.

use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::ProviderError;
use crate::http::{endpoint, get_json, parse_base_url, require_key};

const PROVIDER: &str = "finnhub";

/// Client for Finnhub's `/quote` endpoint.
#[derive(Debug, Clone)]
pub struct FinnhubClient {
    client: Client,
    api_key: Option<String>,
    base_url: Url,
}

impl FinnhubClient {
    /// Creates a client against `base_url` (production: `https://finnhub.io/api/v1/`).
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

    /// Fetches the current quote snapshot for `symbol`.
    ///
    /// The provider JSON is returned unmodified.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::MissingApiKey`] if no token is configured.
    /// - [`ProviderError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ProviderError::Api`] if the body carries an `error` field.
    /// - [`ProviderError::Http`] / [`ProviderError::Deserialize`] on transport
    ///   or parse failure.
    pub async fn quote(&self, symbol: &str) -> Result<Value, ProviderError> {
        let token = require_key(PROVIDER, self.api_key.as_deref())?;

        let mut url = endpoint(&self.base_url, &["quote"]);
        url.query_pairs_mut()
            .append_pair("symbol", symbol)
            .append_pair("token", token);

        let body = get_json(&self.client, PROVIDER, url).await?;
        if let Some(message) = body.get("error").and_then(Value::as_str) {
            return Err(ProviderError::Api {
                provider: PROVIDER,
                message: message.to_owned(),
            });
        }
        Ok(body)
    }
}
