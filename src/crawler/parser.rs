//! HTML parser for link discovery and text extraction
//!
//! This module turns a fetched body into the two things the crawl loop
//! needs: the raw hrefs of root-relative hyperlinks, and the concatenated
//! visible text of the document body. Parsing is permissive: an empty or
//! malformed body yields an empty page, never an error.

use crate::TernError;
use scraper::{Html, Selector};

/// Extracted information from a fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    /// Raw href values of hyperlinks whose target starts with `/`
    pub local_hrefs: Vec<String>,

    /// Concatenated text content of the document body
    pub body_text: String,
}

/// Parser with precompiled selectors, reused across every page of a run
#[derive(Debug, Clone)]
pub struct PageParser {
    local_links: Selector,
    body: Selector,
}

impl PageParser {
    /// Creates a parser, compiling its selectors once
    pub fn new() -> Result<Self, TernError> {
        let local_links = Selector::parse(r#"a[href^='/']"#)
            .map_err(|e| TernError::Selector(e.to_string()))?;
        let body =
            Selector::parse("html > body").map_err(|e| TernError::Selector(e.to_string()))?;

        Ok(Self { local_links, body })
    }

    /// Parses an HTML body into links and text
    ///
    /// Only hyperlinks whose href begins with `/` are collected; absolute
    /// URLs, scheme-relative references and bare relative paths are ignored
    /// entirely. The hrefs are returned verbatim; normalization and depth
    /// filtering are link-policy concerns, not parsing concerns.
    ///
    /// # Arguments
    ///
    /// * `html` - The HTML content to parse
    ///
    /// # Returns
    ///
    /// The parsed page; empty input parses to an empty page
    pub fn parse(&self, html: &str) -> ParsedPage {
        let document = Html::parse_document(html);

        let local_hrefs = document
            .select(&self.local_links)
            .filter_map(|element| element.value().attr("href"))
            .map(str::to_string)
            .collect();

        let body_text = document
            .select(&self.body)
            .next()
            .map(|body| body.text().collect::<String>())
            .unwrap_or_default();

        ParsedPage {
            local_hrefs,
            body_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> ParsedPage {
        PageParser::new().unwrap().parse(html)
    }

    #[test]
    fn test_collects_root_relative_hrefs() {
        let html = r#"<html><body>
            <a href="/a">A</a>
            <a href="/b/c">BC</a>
        </body></html>"#;
        let page = parse(html);
        assert_eq!(page.local_hrefs, vec!["/a", "/b/c"]);
    }

    #[test]
    fn test_ignores_absolute_links() {
        let html = r#"<html><body><a href="https://other.com/x">X</a></body></html>"#;
        let page = parse(html);
        assert!(page.local_hrefs.is_empty());
    }

    #[test]
    fn test_ignores_bare_relative_links() {
        let html = r#"<html><body><a href="about">About</a><a href="../up">Up</a></body></html>"#;
        let page = parse(html);
        assert!(page.local_hrefs.is_empty());
    }

    #[test]
    fn test_ignores_special_scheme_links() {
        let html = r#"<html><body><a href="/ok">Ok</a><a href="mailto:x@y.z">Mail</a></body></html>"#;
        let page = parse(html);
        assert_eq!(page.local_hrefs, vec!["/ok"]);
    }

    #[test]
    fn test_scheme_relative_hrefs_match_the_prefix_selector() {
        // //host/x starts with / and is collected here; the origin join
        // refuses to resolve it off-origin, so it is dropped downstream.
        let html = r#"<html><body><a href="//cdn.example.net/lib">Lib</a></body></html>"#;
        let page = parse(html);
        assert_eq!(page.local_hrefs, vec!["//cdn.example.net/lib"]);
    }

    #[test]
    fn test_keeps_href_verbatim() {
        let html = r#"<html><body><a href="/a/b/?q=1">Q</a></body></html>"#;
        let page = parse(html);
        assert_eq!(page.local_hrefs, vec!["/a/b/?q=1"]);
    }

    #[test]
    fn test_extracts_body_text() {
        let html = r#"<html><body><h1>Title</h1><p>Some durable text.</p></body></html>"#;
        let page = parse(html);
        assert!(page.body_text.contains("Title"));
        assert!(page.body_text.contains("Some durable text."));
    }

    #[test]
    fn test_empty_input_yields_empty_page() {
        let page = parse("");
        assert!(page.local_hrefs.is_empty());
        assert!(page.body_text.is_empty());
    }

    #[test]
    fn test_malformed_input_is_not_fatal() {
        // Unclosed tags everywhere; the parser recovers and the link and
        // text are still found.
        let page = parse("<p>broken<div><a href='/still-a-link'>unclosed");
        assert_eq!(page.local_hrefs, vec!["/still-a-link"]);
        assert!(page.body_text.contains("broken"));
    }
}
