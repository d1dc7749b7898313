//! Genre-Harvest: a two-stage catalog link harvester
//!
//! This crate crawls a catalog site's root page for category pages, then
//! scrapes every category page for links into an external media domain,
//! producing a map from category label to leaf links that is written out
//! as JSON.

pub mod config;
pub mod harvest;
pub mod output;

use thiserror::Error;

/// Main error type for Genre-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to fetch {url}: HTTP {status}")]
    Fetch { url: String, status: u16 },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid link pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid site in config: {0}")]
    InvalidSite(String),

    #[error("Invalid link pattern in config: {0}")]
    InvalidPattern(String),
}

/// Result type alias for Genre-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use harvest::{run_genre_crawl, slug_label, CrawlRequest, Harvester, LabeledLinkMap, LinkSet};
pub use output::CrawlStatistics;
