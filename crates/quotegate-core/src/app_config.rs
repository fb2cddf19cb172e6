use std::net::SocketAddr;

/// Process configuration, built once at startup and shared read-only.
#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub user_agent: String,
    pub finnhub_api_key: Option<String>,
    pub alphavantage_api_key: Option<String>,
    pub newsapi_api_key: Option<String>,
    pub finnhub_base_url: String,
    pub yahoo_base_url: String,
    pub alphavantage_base_url: String,
    pub newsapi_base_url: String,
}

fn redact(secret: Option<&String>) -> Option<&'static str> {
    secret.map(|_| "[redacted]")
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("user_agent", &self.user_agent)
            .field("finnhub_api_key", &redact(self.finnhub_api_key.as_ref()))
            .field(
                "alphavantage_api_key",
                &redact(self.alphavantage_api_key.as_ref()),
            )
            .field("newsapi_api_key", &redact(self.newsapi_api_key.as_ref()))
            .field("finnhub_base_url", &self.finnhub_base_url)
            .field("yahoo_base_url", &self.yahoo_base_url)
            .field("alphavantage_base_url", &self.alphavantage_base_url)
            .field("newsapi_base_url", &self.newsapi_base_url)
            .finish()
    }
}
