//! Configuration handling for Tern-Dive
//!
//! Configuration is a small TOML file with a `[crawl]` section describing
//! what to crawl and search for, and an optional `[fetch]` section tuning
//! the HTTP client.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{BudgetRule, Config, CrawlSettings, FetchSettings};
pub use validation::validate;
