//! NewsAPI `everything` search client.

use quotegate_core::Article;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::ProviderError;
use crate::http::{endpoint, get_json, parse_base_url, require_key};

const PROVIDER: &str = "newsapi";

/// Number of top-ranked articles kept from a search.
pub const MAX_ARTICLES: usize = 10;

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Option<Vec<Article>>,
}

#[derive(Debug, Clone)]
pub struct NewsApiClient {
    client: Client,
    api_key: Option<String>,
    base_url: Url,
}

impl NewsApiClient {
    /// Creates a client against `base_url` (production: `https://newsapi.org/v2/`).
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

    /// Searches English-language articles matching `keyword`, ordered by
    /// relevancy, and returns at most [`MAX_ARTICLES`] of them.
    ///
    /// An empty result list is not an error; a body with no `articles` list
    /// at all is.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::MissingApiKey`] if no key is configured.
    /// - [`ProviderError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ProviderError::Api`] if the body reports `status: "error"` or
    ///   lacks an `articles` list.
    /// - [`ProviderError::Http`] / [`ProviderError::Deserialize`] on transport
    ///   or parse failure.
    pub async fn everything(&self, keyword: &str) -> Result<Vec<Article>, ProviderError> {
        let api_key = require_key(PROVIDER, self.api_key.as_deref())?;

        let mut url = endpoint(&self.base_url, &["everything"]);
        url.query_pairs_mut()
            .append_pair("q", keyword)
            .append_pair("language", "en")
            .append_pair("sortBy", "relevancy")
            .append_pair("apiKey", api_key);

        let body = get_json(&self.client, PROVIDER, url).await?;
        let response: EverythingResponse =
            serde_json::from_value(body).map_err(|source| ProviderError::Deserialize {
                context: format!("{PROVIDER} everything(q={keyword})"),
                source,
            })?;

        if response.status.as_deref() == Some("error") {
            return Err(ProviderError::Api {
                provider: PROVIDER,
                message: response
                    .message
                    .unwrap_or_else(|| "unknown error".to_owned()),
            });
        }

        let mut articles = response.articles.ok_or_else(|| ProviderError::Api {
            provider: PROVIDER,
            message: "response did not include an articles list".to_owned(),
        })?;
        articles.truncate(MAX_ARTICLES);

        tracing::debug!(keyword, count = articles.len(), "fetched news articles");
        Ok(articles)
    }
}
