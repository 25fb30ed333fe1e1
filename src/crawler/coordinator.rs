//! Crawl coordinator - main crawl orchestration logic
//!
//! Drives the whole crawl: seeds the frontier, fetches pages, hands each
//! response to the page analyzer, and feeds the returned links back into
//! the frontier until it drains or the page budget is spent.
//!
//! The loop is sequential; the session state has a single owner and no
//! mutation ever races. Fetch failures are logged and skipped, never
//! fatal to the run.

use crate::analysis::{PageAnalyzer, SessionState};
use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_url};
use crate::LexiError;
use reqwest::Client;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

/// Main crawl coordinator structure
pub struct Coordinator {
    config: Arc<Config>,
    client: Client,
    analyzer: PageAnalyzer,
    session: SessionState,
    frontier: VecDeque<String>,
    queued: HashSet<String>,
}

impl Coordinator {
    /// Creates a new coordinator with a frontier seeded from the config
    ///
    /// # Arguments
    ///
    /// * `config` - The crawl configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(LexiError)` - Failed to build the HTTP client
    pub fn new(config: Config) -> Result<Self, LexiError> {
        let client = build_http_client(&config.user_agent, config.crawler.request_timeout_secs)?;
        let analyzer = PageAnalyzer::new(&config);

        let mut frontier = VecDeque::new();
        let mut queued = HashSet::new();
        for seed in &config.crawler.seeds {
            if queued.insert(seed.clone()) {
                frontier.push_back(seed.clone());
            }
        }

        Ok(Self {
            config: Arc::new(config),
            client,
            analyzer,
            session: SessionState::new(),
            frontier,
            queued,
        })
    }

    /// Runs the main crawl loop
    ///
    /// 1. Pop the next URL from the frontier
    /// 2. Fetch it
    /// 3. Analyze the response, updating the session aggregates
    /// 4. Queue returned links that have not been queued before
    ///
    /// Stops when the frontier is empty or `max-pages` fetches have been
    /// made.
    pub async fn run(&mut self) -> Result<(), LexiError> {
        tracing::info!("Starting crawl with {} seed URLs", self.frontier.len());

        let start_time = std::time::Instant::now();
        let mut pages_fetched: u64 = 0;

        while let Some(url) = self.frontier.pop_front() {
            if pages_fetched >= self.config.crawler.max_pages {
                tracing::info!(
                    "Reached max-pages limit ({}), stopping with {} URLs still queued",
                    self.config.crawler.max_pages,
                    self.frontier.len() + 1
                );
                break;
            }

            pages_fetched += 1;
            tracing::debug!("Fetching {}", url);

            let response = match fetch_url(&self.client, &url).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!("Fetch failed for {}: {}", url, e);
                    continue;
                }
            };

            let links = self.analyzer.analyze(&url, &response, &mut self.session);

            for link in links {
                if self.queued.insert(link.clone()) {
                    self.frontier.push_back(link);
                }
            }

            // Progress reporting every 10 pages
            if pages_fetched % 10 == 0 {
                let rate = pages_fetched as f64 / start_time.elapsed().as_secs_f64();
                tracing::info!(
                    "Progress: {} pages fetched, {} analyzed, {} in frontier, {:.2} pages/sec",
                    pages_fetched,
                    self.session.unique_page_count(),
                    self.frontier.len(),
                    rate
                );
            }
        }

        tracing::info!(
            "Crawl finished: {} pages fetched, {} unique pages analyzed in {:?}",
            pages_fetched,
            self.session.unique_page_count(),
            start_time.elapsed()
        );

        Ok(())
    }

    /// The session aggregates accumulated so far
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Consumes the coordinator, yielding the session for reporting
    pub fn into_session(self) -> SessionState {
        self.session
    }
}

/// Runs a complete crawl and returns the accumulated session state
///
/// # Arguments
///
/// * `config` - The crawl configuration
///
/// # Example
///
/// ```no_run
/// use lexicrawl::config::load_config;
/// use lexicrawl::crawler::run_crawl;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("config.toml"))?;
/// let session = run_crawl(config).await?;
/// println!("{} unique pages", session.unique_page_count());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> Result<SessionState, LexiError> {
    let mut coordinator = Coordinator::new(config)?;
    coordinator.run().await?;
    Ok(coordinator.into_session())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        AnalysisConfig, CrawlerConfig, FilterConfig, OutputConfig, UserAgentConfig,
    };

    fn test_config(seeds: Vec<String>) -> Config {
        Config {
            crawler: CrawlerConfig {
                seeds,
                max_pages: 10,
                request_timeout_secs: 5,
            },
            user_agent: UserAgentConfig {
                crawler_name: "TestBot".to_string(),
                crawler_version: "1.0".to_string(),
                contact_url: "https://example.com/about".to_string(),
                contact_email: "admin@example.com".to_string(),
            },
            filter: FilterConfig::default(),
            analysis: AnalysisConfig::default(),
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_frontier_seeded_without_duplicates() {
        let seed = "https://www.ics.uci.edu/".to_string();
        let coordinator =
            Coordinator::new(test_config(vec![seed.clone(), seed.clone()])).unwrap();
        assert_eq!(coordinator.frontier.len(), 1);
    }

    #[test]
    fn test_new_coordinator_has_empty_session() {
        let coordinator =
            Coordinator::new(test_config(vec!["https://www.ics.uci.edu/".to_string()])).unwrap();
        assert_eq!(coordinator.session().unique_page_count(), 0);
    }
}
