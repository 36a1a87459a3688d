//! Tern-Dive: a bounded same-origin term-search crawler
//!
//! This crate implements a breadth-first crawler that starts from a seed URL,
//! follows root-relative links on the same origin up to a configured depth,
//! and reports every page whose visible text contains a target term, together
//! with a short excerpt around the first match.

pub mod config;
pub mod crawler;
pub mod origin;
pub mod output;

use thiserror::Error;

/// Main error type for Tern-Dive operations
#[derive(Debug, Error)]
pub enum TernError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Selector error: {0}")]
    Selector(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
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

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,

    #[error("Malformed URL: {0}")]
    Malformed(String),
}

/// Result type alias for Tern-Dive operations
pub type Result<T> = std::result::Result<T, TernError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::{BudgetRule, Config, CrawlSettings, FetchSettings};
pub use crawler::{crawl, Coordinator, Frontier};
pub use origin::Origin;
pub use output::{PageMatch, RunSummary};
