use serde::Deserialize;

/// Main configuration structure for lexicrawl
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Seed URLs the crawl starts from
    pub seeds: Vec<String>,

    /// Maximum number of pages to fetch before stopping
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: u64,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs", default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

/// Admissibility filter configuration
///
/// Every rule is a data-driven list or threshold; a URL must clear all of
/// them to be eligible for crawling. The defaults reproduce the original
/// deployment (four UCI-affiliated domain suffixes).
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    /// Domain suffixes a host must end with to be crawled
    #[serde(rename = "allowed-domains", default = "default_allowed_domains")]
    pub allowed_domains: Vec<String>,

    /// Path substrings marking known low-value pages (e.g. wiki action scripts)
    #[serde(rename = "path-markers", default = "default_path_markers")]
    pub path_markers: Vec<String>,

    /// Query substrings marking low-value parameters (pagination, sorting,
    /// session tokens, tab/namespace selectors, image parameters)
    #[serde(rename = "query-patterns", default = "default_query_patterns")]
    pub query_patterns: Vec<String>,

    /// Maximum number of `/` separators allowed in a path (trap guard)
    #[serde(rename = "max-path-segments", default = "default_max_path_segments")]
    pub max_path_segments: usize,

    /// File extensions of non-HTML resources that are never crawled
    #[serde(rename = "denied-extensions", default = "default_denied_extensions")]
    pub denied_extensions: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            allowed_domains: default_allowed_domains(),
            path_markers: default_path_markers(),
            query_patterns: default_query_patterns(),
            max_path_segments: default_max_path_segments(),
            denied_extensions: default_denied_extensions(),
        }
    }
}

/// Page analysis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Pages with fewer tokens than this contribute no statistics
    #[serde(rename = "min-word-count", default = "default_min_word_count")]
    pub min_word_count: usize,

    /// Parent domain whose subdomains are indexed
    #[serde(rename = "parent-domain", default = "default_parent_domain")]
    pub parent_domain: String,

    /// Stop-word override; the built-in English list is used when absent
    #[serde(rename = "stop-words", default)]
    pub stop_words: Option<Vec<String>>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_word_count: default_min_word_count(),
            parent_domain: default_parent_domain(),
            stop_words: None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the markdown summary file
    #[serde(rename = "summary-path", default = "default_summary_path")]
    pub summary_path: String,

    /// Number of most frequent words included in reports
    #[serde(rename = "top-words", default = "default_top_words")]
    pub top_words: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            summary_path: default_summary_path(),
            top_words: default_top_words(),
        }
    }
}

fn default_max_pages() -> u64 {
    1000
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_allowed_domains() -> Vec<String> {
    [
        "ics.uci.edu",
        "cs.uci.edu",
        "informatics.uci.edu",
        "stat.uci.edu",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_path_markers() -> Vec<String> {
    vec!["doku.php".to_string()]
}

fn default_query_patterns() -> Vec<String> {
    ["page", "sort", "filter", "sessions", "do=", "tab_", "image=", "ns="]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_max_path_segments() -> usize {
    10
}

fn default_denied_extensions() -> Vec<String> {
    [
        "css", "js", "bmp", "gif", "jpg", "jpeg", "ico", "png", "tif", "tiff", "mid", "mp2",
        "mp3", "mp4", "wav", "avi", "mov", "mpeg", "ram", "m4v", "mkv", "ogg", "ogv", "pdf",
        "ps", "eps", "tex", "ppt", "pptx", "doc", "docx", "xls", "xlsx", "names", "data", "dat",
        "exe", "bz2", "tar", "msi", "bin", "7z", "psd", "dmg", "iso", "epub", "dll", "cnf",
        "tgz", "sha1", "thmx", "mso", "arff", "rtf", "jar", "csv", "rm", "smil", "wmv", "swf",
        "wma", "zip", "rar", "gz",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_min_word_count() -> usize {
    50
}

fn default_parent_domain() -> String {
    "uci.edu".to_string()
}

fn default_summary_path() -> String {
    "./crawl-summary.md".to_string()
}

fn default_top_words() -> usize {
    50
}
