//! Origin handling for Tern-Dive
//!
//! The origin is the scheme + host (+ explicit port) of the seed URL. Every
//! followed link is root-relative and is resolved against the origin root,
//! so a crawl can never leave the site it started on.

use crate::UrlError;
use url::Url;

/// The scheme and host a crawl is confined to
///
/// Derived once from the seed URL at construction time. `join` provides the
/// explicit resolution semantics for the root-relative paths the link
/// extractor produces; there is no general relative-URL resolution here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    root: Url,
}

impl Origin {
    /// Derives the origin from a parsed URL
    ///
    /// # Arguments
    ///
    /// * `url` - The seed URL to take the scheme, host and port from
    ///
    /// # Returns
    ///
    /// * `Ok(Origin)` - The origin root with path `/` and no query/fragment
    /// * `Err(UrlError)` - The URL has an unsupported scheme or no host
    pub fn from_url(url: &Url) -> Result<Self, UrlError> {
        if url.host_str().is_none() {
            return Err(UrlError::MissingHost);
        }

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(UrlError::InvalidScheme(format!(
                "Only HTTP and HTTPS schemes are supported, got: {}",
                url.scheme()
            )));
        }

        let mut root = url.clone();
        root.set_path("/");
        root.set_query(None);
        root.set_fragment(None);
        root.set_username("")
            .map_err(|_| UrlError::Malformed(format!("Cannot clear username of {}", url)))?;
        root.set_password(None)
            .map_err(|_| UrlError::Malformed(format!("Cannot clear password of {}", url)))?;

        Ok(Self { root })
    }

    /// Resolves a root-relative path against the origin root
    ///
    /// The path may carry a query string; it is kept verbatim. An empty path
    /// resolves to the origin root itself. Paths that resolve anywhere other
    /// than this origin (scheme-relative `//host/...` references) are
    /// rejected rather than followed off-site.
    ///
    /// # Arguments
    ///
    /// * `path` - A root-relative path such as `/a/b`, or the empty string
    ///
    /// # Returns
    ///
    /// * `Ok(Url)` - The absolute same-origin URL
    /// * `Err(UrlError)` - The path could not be resolved on this origin
    ///
    /// # Examples
    ///
    /// ```
    /// use tern_dive::origin::Origin;
    /// use url::Url;
    ///
    /// let seed = Url::parse("https://example.com/start?x=1").unwrap();
    /// let origin = Origin::from_url(&seed).unwrap();
    /// assert_eq!(origin.join("/a/b").unwrap().as_str(), "https://example.com/a/b");
    /// assert_eq!(origin.join("").unwrap().as_str(), "https://example.com/");
    /// ```
    pub fn join(&self, path: &str) -> Result<Url, UrlError> {
        let joined = self
            .root
            .join(path)
            .map_err(|e| UrlError::Parse(format!("Cannot resolve '{}': {}", path, e)))?;

        if joined.scheme() != self.root.scheme()
            || joined.host_str() != self.root.host_str()
            || joined.port() != self.root.port()
        {
            return Err(UrlError::Malformed(format!(
                "'{}' resolves outside origin {}",
                path, self.root
            )));
        }

        Ok(joined)
    }

    /// Returns the origin root URL as a string
    pub fn as_str(&self) -> &str {
        self.root.as_str()
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.root.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin_of(seed: &str) -> Origin {
        Origin::from_url(&Url::parse(seed).unwrap()).unwrap()
    }

    #[test]
    fn test_origin_strips_path_and_query() {
        let origin = origin_of("https://example.com/some/page?q=1#frag");
        assert_eq!(origin.as_str(), "https://example.com/");
    }

    #[test]
    fn test_origin_keeps_explicit_port() {
        let origin = origin_of("http://127.0.0.1:8080/index.html");
        assert_eq!(origin.as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_origin_rejects_unsupported_scheme() {
        let url = Url::parse("ftp://example.com/").unwrap();
        assert!(matches!(
            Origin::from_url(&url),
            Err(UrlError::InvalidScheme(_))
        ));
    }

    #[test]
    fn test_origin_rejects_missing_host() {
        let url = Url::parse("data:text/plain,hello").unwrap();
        assert!(matches!(Origin::from_url(&url), Err(UrlError::MissingHost)));
    }

    #[test]
    fn test_join_root_relative_path() {
        let origin = origin_of("https://example.com/elsewhere");
        let joined = origin.join("/a/b").unwrap();
        assert_eq!(joined.as_str(), "https://example.com/a/b");
    }

    #[test]
    fn test_join_empty_path_is_origin_root() {
        let origin = origin_of("https://example.com/elsewhere");
        let joined = origin.join("").unwrap();
        assert_eq!(joined.as_str(), "https://example.com/");
    }

    #[test]
    fn test_join_keeps_query_string() {
        let origin = origin_of("https://example.com");
        let joined = origin.join("/search?q=durability").unwrap();
        assert_eq!(joined.as_str(), "https://example.com/search?q=durability");
    }

    #[test]
    fn test_join_rejects_scheme_relative_escape() {
        let origin = origin_of("https://example.com");
        assert!(matches!(
            origin.join("//cdn.example.net/lib"),
            Err(UrlError::Malformed(_))
        ));
    }
}
