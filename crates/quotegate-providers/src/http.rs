//! Request plumbing shared by every provider client.

use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::ProviderError;

/// Longest slice of an error body copied into debug logs.
const MAX_LOGGED_BODY: usize = 200;

/// Builds the `reqwest::Client` shared by all provider clients.
///
/// # Errors
///
/// Returns [`ProviderError::Http`] if the client cannot be constructed.
pub fn build_http_client(user_agent: &str) -> Result<Client, ProviderError> {
    Ok(Client::builder().user_agent(user_agent).build()?)
}

/// Parses a provider base URL, normalising it to end with exactly one slash
/// so endpoint segments are appended rather than replacing the last segment.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, ProviderError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    let url = Url::parse(&normalised).map_err(|e| ProviderError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ProviderError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: "expected an absolute http(s) URL".to_owned(),
        });
    }

    Ok(url)
}

/// Appends percent-encoded path segments to `base`.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

pub(crate) fn require_key<'a>(
    provider: &'static str,
    api_key: Option<&'a str>,
) -> Result<&'a str, ProviderError> {
    api_key.ok_or(ProviderError::MissingApiKey { provider })
}

/// Sends a GET request, asserts a 2xx status, and parses the body as JSON.
///
/// Query strings carry API keys, so only the URL path is ever logged or
/// embedded in errors.
pub(crate) async fn get_json(
    client: &Client,
    provider: &'static str,
    url: Url,
) -> Result<Value, ProviderError> {
    let path = url.path().to_owned();
    tracing::debug!(provider, path = %path, "calling upstream provider");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ProviderError::Http(e.without_url()))?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let snippet: String = body.chars().take(MAX_LOGGED_BODY).collect();
        tracing::debug!(
            provider,
            path = %path,
            status = status.as_u16(),
            body = %snippet,
            "upstream provider returned non-success status"
        );
        return Err(ProviderError::UnexpectedStatus {
            provider,
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ProviderError::Http(e.without_url()))?;
    serde_json::from_str(&body).map_err(|source| ProviderError::Deserialize {
        context: format!("{provider} {path}"),
        source,
    })
}
