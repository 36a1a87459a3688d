//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that coordinates all stages of a run:
//! - Seeding and draining the frontier
//! - Fetching pages and tolerating fetch failures
//! - Feeding parsed pages to link extraction and term matching
//! - Producing the final run summary

use crate::config::{validate, Config};
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchResult};
use crate::crawler::frontier::Frontier;
use crate::crawler::links::LinkExtractor;
use crate::crawler::matcher::TermMatcher;
use crate::crawler::parser::PageParser;
use crate::origin::Origin;
use crate::output::{PageMatch, RunSummary};
use crate::TernError;
use reqwest::Client;
use std::time::Instant;
use url::Url;

/// Main crawler coordinator structure
///
/// Owns every piece of run state. The loop is strictly sequential: one URL
/// at a time, with the in-flight fetch as the only suspend point, and the
/// frontier and match list mutated only between fetches.
pub struct Coordinator {
    config: Config,
    origin: Origin,
    frontier: Frontier,
    client: Client,
    parser: PageParser,
    extractor: LinkExtractor,
    matcher: TermMatcher,
    matches: Vec<PageMatch>,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// Configuration problems such as a malformed seed URL or an empty
    /// term are fatal here, before anything is fetched.
    ///
    /// # Arguments
    ///
    /// * `config` - The crawl configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run, frontier seeded
    /// * `Err(TernError)` - The configuration is unusable
    pub fn new(config: Config) -> Result<Self, TernError> {
        validate(&config)?;

        let seed = Url::parse(&config.crawl.seed_url)?;
        let origin = Origin::from_url(&seed)?;

        let client = build_http_client(&config.fetch)?;
        let parser = PageParser::new()?;
        let extractor = LinkExtractor::new(origin.clone(), config.crawl.max_link_depth);
        let matcher = TermMatcher::new(&config.crawl.term, config.crawl.context_window)?;

        let mut frontier = Frontier::new();
        frontier.enqueue(seed);

        Ok(Self {
            config,
            origin,
            frontier,
            client,
            parser,
            extractor,
            matcher,
            matches: Vec::new(),
        })
    }

    /// Runs the crawl loop to completion
    ///
    /// Each step dequeues one URL, skips it if already visited, otherwise
    /// marks it visited and processes it, then checks whether the frontier
    /// is exhausted. Termination is guaranteed: every iteration either
    /// shrinks the pending queue or grows the visited set toward the page
    /// budget.
    pub async fn run(mut self) -> RunSummary {
        tracing::info!(
            "Starting crawl of {} for term '{}'",
            self.origin,
            self.config.crawl.term
        );

        let started = Instant::now();

        loop {
            if let Some(url) = self.frontier.dequeue_next() {
                if !self.frontier.is_visited(&url) {
                    // Mark before fetching: a failed fetch must never be
                    // retried, and it still consumes page budget.
                    self.frontier.mark_visited(url.clone());
                    self.visit(&url).await;
                }
            }

            if self
                .frontier
                .is_exhausted(self.config.crawl.max_pages, self.config.crawl.budget_rule)
            {
                break;
            }
        }

        let summary = RunSummary {
            term: self.config.crawl.term,
            pages_visited: self.frontier.visited_count(),
            matches: self.matches,
            elapsed: started.elapsed(),
        };

        tracing::info!(
            "Crawl finished: {} pages visited, {} matched, in {:?}",
            summary.pages_visited,
            summary.matches.len(),
            summary.elapsed
        );

        summary
    }

    /// Visits a single URL: fetch, extract links, match the term
    ///
    /// A fetch failure is logged and the page treated as empty (no links,
    /// no match); the run continues with the next URL.
    async fn visit(&mut self, url: &Url) {
        tracing::info!("Visiting {}", url);

        let body = match fetch_url(&self.client, url.as_str()).await {
            FetchResult::Success { status_code, body } => {
                if !(200..300).contains(&status_code) {
                    tracing::warn!("{} answered HTTP {}", url, status_code);
                }
                body
            }
            FetchResult::NetworkError { error } => {
                tracing::warn!("Failed to fetch {}: {}", url, error);
                return;
            }
        };

        let page = self.parser.parse(&body);

        self.extractor.collect(&page, &mut self.frontier);

        if let Some(excerpt) = self.matcher.search(&page.body_text) {
            tracing::debug!("Term found on {}", url);
            self.matches.push(PageMatch {
                url: url.clone(),
                excerpt,
            });
        }
    }
}
