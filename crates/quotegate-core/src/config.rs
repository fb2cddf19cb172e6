use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
pub const DEFAULT_FINNHUB_BASE_URL: &str = "https://finnhub.io/api/v1/";
pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com/";
pub const DEFAULT_ALPHAVANTAGE_BASE_URL: &str = "https://www.alphavantage.co/";
pub const DEFAULT_NEWSAPI_BASE_URL: &str = "https://newsapi.org/v2/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Provider API keys are optional here: a missing key only fails the
/// corresponding upstream call when a request needs it.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let base_url = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Ok(raw)
        } else {
            Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected an http(s) URL, got \"{raw}\""),
            })
        }
    };

    let bind_addr = or_default("QUOTEGATE_BIND_ADDR", DEFAULT_BIND_ADDR)
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "QUOTEGATE_BIND_ADDR".to_string(),
            reason: e.to_string(),
        })?;
    let log_level = or_default("QUOTEGATE_LOG_LEVEL", "info");
    let user_agent = or_default("QUOTEGATE_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(AppConfig {
        bind_addr,
        log_level,
        user_agent,
        finnhub_api_key: optional("FINNHUB_API_KEY"),
        alphavantage_api_key: optional("ALPHAVANTAGE_API_KEY"),
        newsapi_api_key: optional("NEWSAPI_API_KEY"),
        finnhub_base_url: base_url("QUOTEGATE_FINNHUB_BASE_URL", DEFAULT_FINNHUB_BASE_URL)?,
        yahoo_base_url: base_url("QUOTEGATE_YAHOO_BASE_URL", DEFAULT_YAHOO_BASE_URL)?,
        alphavantage_base_url: base_url(
            "QUOTEGATE_ALPHAVANTAGE_BASE_URL",
            DEFAULT_ALPHAVANTAGE_BASE_URL,
        )?,
        newsapi_base_url: base_url("QUOTEGATE_NEWSAPI_BASE_URL", DEFAULT_NEWSAPI_BASE_URL)?,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
