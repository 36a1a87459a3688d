//! Run summary types and stdout reporting

use std::time::Duration;
use url::Url;

/// One page on which the term was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMatch {
    /// The page the term was found on
    pub url: Url,

    /// Bounded excerpt around the first match
    pub excerpt: String,
}

/// Outcome of a completed crawl run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// The term that was searched for
    pub term: String,

    /// Number of URLs visited (fetch attempts, successful or not)
    pub pages_visited: usize,

    /// Pages where the term was found, in visit order
    pub matches: Vec<PageMatch>,

    /// Wall time of the run
    pub elapsed: Duration,
}

/// Prints a run summary to stdout in a formatted manner
///
/// # Arguments
///
/// * `summary` - The summary to display
pub fn print_summary(summary: &RunSummary) {
    println!("=== Crawl Summary ===\n");

    println!(
        "Crawled {} urls in {:.2}s. Found {} pages with the term '{}'.",
        summary.pages_visited,
        summary.elapsed.as_secs_f64(),
        summary.matches.len(),
        summary.term
    );

    if !summary.matches.is_empty() {
        println!();
        for found in &summary.matches {
            println!("  Url: {}, excerpt: {}", found.url, found.excerpt);
        }
    }
}
