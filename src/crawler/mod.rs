//! Crawler module for page fetching and term searching
//!
//! This module contains the core crawling logic:
//! - The frontier (pending queue, visited set, page budget)
//! - HTTP fetching with failure tolerance
//! - HTML parsing, link policy and term matching
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod links;
mod matcher;
mod parser;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use frontier::Frontier;
pub use links::{link_depth, strip_trailing_slash, LinkExtractor};
pub use matcher::TermMatcher;
pub use parser::{PageParser, ParsedPage};

use crate::config::Config;
use crate::output::RunSummary;
use crate::TernError;

/// Runs a complete crawl
///
/// This is the main entry point for a crawl. It validates the
/// configuration, seeds the frontier with the seed URL, runs the fetch loop
/// to exhaustion, and returns the summary.
///
/// # Arguments
///
/// * `config` - The crawl configuration
///
/// # Returns
///
/// * `Ok(RunSummary)` - The completed run's summary
/// * `Err(TernError)` - The configuration was unusable; nothing was fetched
pub async fn crawl(config: Config) -> Result<RunSummary, TernError> {
    let coordinator = Coordinator::new(config)?;
    Ok(coordinator.run().await)
}
