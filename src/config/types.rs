use serde::Deserialize;

/// Main configuration structure for Tern-Dive
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawl: CrawlSettings,
    #[serde(default)]
    pub fetch: FetchSettings,
}

impl Config {
    /// Creates a configuration with the given seed URL and search term,
    /// leaving every other setting at its default.
    pub fn new(seed_url: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            crawl: CrawlSettings::new(seed_url, term),
            fetch: FetchSettings::default(),
        }
    }
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlSettings {
    /// URL the crawl starts from; its scheme and host define the origin
    #[serde(rename = "seed-url")]
    pub seed_url: String,

    /// Term to search for in each page's visible text (case-insensitive)
    pub term: String,

    /// Maximum number of pages to visit in one run
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: usize,

    /// Maximum link depth of paths to follow
    #[serde(rename = "max-link-depth", default = "default_max_link_depth")]
    pub max_link_depth: usize,

    /// Number of characters of context kept on each side of a match
    #[serde(rename = "context-window", default = "default_context_window")]
    pub context_window: usize,

    /// How the page budget terminates the crawl
    #[serde(rename = "budget-rule", default)]
    pub budget_rule: BudgetRule,
}

impl CrawlSettings {
    /// Creates crawl settings with the given seed URL and term and default
    /// limits.
    pub fn new(seed_url: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            seed_url: seed_url.into(),
            term: term.into(),
            max_pages: default_max_pages(),
            max_link_depth: default_max_link_depth(),
            context_window: default_context_window(),
            budget_rule: BudgetRule::default(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchSettings {
    /// User agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Total per-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// How the visited-page budget is compared against `max_pages`
///
/// `Exact` reproduces the behavior of stopping only when the visited count
/// lands exactly on the budget; a count that ever stepped past the budget
/// would no longer terminate the crawl, which then runs until the queue
/// drains. `Bounded` stops as soon as the count reaches or exceeds the
/// budget and is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetRule {
    /// Stop only when the visited count equals the budget exactly
    Exact,
    /// Stop once the visited count reaches or exceeds the budget
    #[default]
    Bounded,
}

impl BudgetRule {
    /// Returns true when `visited` has consumed the page budget under this
    /// rule.
    pub fn budget_reached(self, visited: usize, max_pages: usize) -> bool {
        match self {
            Self::Exact => visited == max_pages,
            Self::Bounded => visited >= max_pages,
        }
    }
}

fn default_max_pages() -> usize {
    100
}

fn default_max_link_depth() -> usize {
    2
}

fn default_context_window() -> usize {
    10
}

fn default_user_agent() -> String {
    format!("tern-dive/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}
