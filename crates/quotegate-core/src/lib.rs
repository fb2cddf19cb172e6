//! Shared configuration and domain types for the quotegate gateway.

pub mod app_config;
pub mod config;
pub mod market;
pub mod news;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use market::PriceBar;
pub use news::{Article, Sentiment};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
