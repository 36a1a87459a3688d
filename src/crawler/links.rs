//! Link policy: normalization, depth filtering and enqueueing
//!
//! Candidate links arrive as raw root-relative hrefs from the page parser.
//! This module applies the crawl's link policy (strip exactly one trailing
//! slash, compute the link depth, drop anything deeper than the configured
//! maximum) and enqueues the survivors onto the frontier as absolute
//! same-origin URLs. Deduplication is not this module's job; the frontier
//! filters repeats at dequeue time.

use crate::crawler::frontier::Frontier;
use crate::crawler::parser::ParsedPage;
use crate::origin::Origin;

/// Discovers followable links on a parsed page and feeds the frontier
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    origin: Origin,
    max_link_depth: usize,
}

impl LinkExtractor {
    /// Creates a link extractor bound to an origin and a depth limit
    pub fn new(origin: Origin, max_link_depth: usize) -> Self {
        Self {
            origin,
            max_link_depth,
        }
    }

    /// Applies the link policy to a parsed page, enqueueing every kept link
    ///
    /// The empty path (an href of `/`, or an empty string after the trailing
    /// slash is stripped) resolves to the origin root and is enqueued like
    /// any other link; the visited set catches the repeat later.
    pub fn collect(&self, page: &ParsedPage, frontier: &mut Frontier) {
        for href in &page.local_hrefs {
            let path = strip_trailing_slash(href);

            let depth = link_depth(path);
            if depth > self.max_link_depth {
                tracing::debug!("Skipping {} (depth {})", href, depth);
                continue;
            }

            match self.origin.join(path) {
                Ok(url) => {
                    tracing::trace!("Queueing {}", url);
                    frontier.enqueue(url);
                }
                Err(e) => {
                    tracing::debug!("Skipping {}: {}", href, e);
                }
            }
        }
    }
}

/// Strips exactly one trailing `/` from a path, if present
pub fn strip_trailing_slash(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// Computes the link depth of a root-relative path
///
/// Depth is one less than the number of non-empty `/`-delimited segments,
/// clamped at zero: `/a/b` has depth 1, `/d/e/f` has depth 2, and both `/`
/// and the empty path have depth 0. Query strings are not split off; a
/// trailing `?q=1` rides along inside the last segment.
pub fn link_depth(path: &str) -> usize {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .count()
        .saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn extractor(max_link_depth: usize) -> LinkExtractor {
        let seed = Url::parse("https://example.com").unwrap();
        LinkExtractor::new(Origin::from_url(&seed).unwrap(), max_link_depth)
    }

    fn page_with(hrefs: &[&str]) -> ParsedPage {
        ParsedPage {
            local_hrefs: hrefs.iter().map(|s| s.to_string()).collect(),
            body_text: String::new(),
        }
    }

    fn drain(frontier: &mut Frontier) -> Vec<String> {
        let mut urls = Vec::new();
        while let Some(url) = frontier.dequeue_next() {
            urls.push(url.to_string());
        }
        urls
    }

    #[test]
    fn test_strip_trailing_slash_strips_exactly_one() {
        assert_eq!(strip_trailing_slash("/a/"), "/a");
        assert_eq!(strip_trailing_slash("/a"), "/a");
        assert_eq!(strip_trailing_slash("/"), "");
        assert_eq!(strip_trailing_slash("//"), "/");
        assert_eq!(strip_trailing_slash(""), "");
    }

    #[test]
    fn test_link_depth() {
        assert_eq!(link_depth(""), 0);
        assert_eq!(link_depth("/"), 0);
        assert_eq!(link_depth("/a"), 0);
        assert_eq!(link_depth("/a/b"), 1);
        assert_eq!(link_depth("/d/e/f"), 2);
        assert_eq!(link_depth("/j/k/l/m"), 3);
    }

    #[test]
    fn test_collect_preserves_discovery_order() {
        let mut frontier = Frontier::new();
        extractor(2).collect(&page_with(&["/a", "/b/c"]), &mut frontier);

        assert_eq!(
            drain(&mut frontier),
            vec!["https://example.com/a", "https://example.com/b/c"]
        );
    }

    #[test]
    fn test_collect_filters_by_depth() {
        let mut frontier = Frontier::new();
        extractor(2).collect(
            &page_with(&["/a", "/a/b", "/d/e/f", "/j/k/l/m"]),
            &mut frontier,
        );

        assert_eq!(
            drain(&mut frontier),
            vec![
                "https://example.com/a",
                "https://example.com/a/b",
                "https://example.com/d/e/f",
            ]
        );
    }

    #[test]
    fn test_collect_resolves_root_href_to_origin() {
        let mut frontier = Frontier::new();
        extractor(2).collect(&page_with(&["/"]), &mut frontier);

        assert_eq!(drain(&mut frontier), vec!["https://example.com/"]);
    }

    #[test]
    fn test_collect_drops_scheme_relative_hrefs() {
        let mut frontier = Frontier::new();
        extractor(2).collect(&page_with(&["//cdn.example.net/lib", "/ok"]), &mut frontier);

        assert_eq!(drain(&mut frontier), vec!["https://example.com/ok"]);
    }

    #[test]
    fn test_collect_strips_one_trailing_slash() {
        let mut frontier = Frontier::new();
        extractor(2).collect(&page_with(&["/docs/"]), &mut frontier);

        assert_eq!(drain(&mut frontier), vec!["https://example.com/docs"]);
    }

    #[test]
    fn test_collect_keeps_query_strings() {
        let mut frontier = Frontier::new();
        extractor(2).collect(&page_with(&["/search?q=1"]), &mut frontier);

        assert_eq!(drain(&mut frontier), vec!["https://example.com/search?q=1"]);
    }
}
