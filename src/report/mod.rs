//! End-of-crawl reporting
//!
//! Turns the session aggregates into a `CrawlReport` and renders it to
//! stdout or a markdown summary file: top words by descending count, the
//! longest page, and distinct-URL counts per discovered subdomain.

use crate::analysis::{sorted_frequencies, LongestPage, SessionState};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Summary of one crawl session
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Number of distinct pages analyzed
    pub pages_analyzed: usize,

    /// Number of distinct non-stop-words seen
    pub distinct_words: usize,

    /// Most frequent words, descending by count, ties alphabetical
    pub top_words: Vec<(String, u64)>,

    /// The page with the highest in-page word count
    pub longest_page: LongestPage,

    /// Distinct-URL count per subdomain, sorted by host
    pub subdomains: Vec<(String, usize)>,
}

impl CrawlReport {
    /// Builds a report from the session aggregates
    ///
    /// # Arguments
    ///
    /// * `session` - The finished crawl session
    /// * `top_words` - How many of the most frequent words to include
    pub fn from_session(session: &SessionState, top_words: usize) -> Self {
        let mut words = sorted_frequencies(session.word_frequency());
        words.truncate(top_words);

        let mut subdomains: Vec<(String, usize)> = session
            .subdomain_index()
            .iter()
            .map(|(host, urls)| (host.clone(), urls.len()))
            .collect();
        subdomains.sort_by(|a, b| a.0.cmp(&b.0));

        Self {
            pages_analyzed: session.unique_page_count(),
            distinct_words: session.word_frequency().len(),
            top_words: words,
            longest_page: session.longest_page().clone(),
            subdomains,
        }
    }
}

/// Prints a report to stdout in a formatted manner
pub fn print_report(report: &CrawlReport) {
    println!("=== Crawl Report ===\n");

    println!("Overview:");
    println!("  Unique pages analyzed: {}", report.pages_analyzed);
    println!("  Distinct words: {}", report.distinct_words);
    println!();

    match &report.longest_page.url {
        Some(url) => println!(
            "Longest page: {} ({} words)",
            url, report.longest_page.word_count
        ),
        None => println!("Longest page: none recorded"),
    }
    println!();

    println!("Top {} words:", report.top_words.len());
    for (token, count) in &report.top_words {
        println!("  {} = {}", token, count);
    }
    println!();

    println!("Subdomains ({}):", report.subdomains.len());
    for (host, count) in &report.subdomains {
        println!("  {}, {}", host, count);
    }
}

/// Formats a crawl report as markdown
pub fn format_markdown_summary(report: &CrawlReport) -> String {
    let mut md = String::new();

    md.push_str("# Lexicrawl Crawl Summary\n\n");

    md.push_str("## Overview\n\n");
    md.push_str(&format!(
        "- **Unique pages analyzed**: {}\n",
        report.pages_analyzed
    ));
    md.push_str(&format!("- **Distinct words**: {}\n", report.distinct_words));
    match &report.longest_page.url {
        Some(url) => md.push_str(&format!(
            "- **Longest page**: {} ({} words)\n\n",
            url, report.longest_page.word_count
        )),
        None => md.push_str("- **Longest page**: none recorded\n\n"),
    }

    md.push_str("## Top Words\n\n");
    md.push_str("| Word | Count |\n");
    md.push_str("|------|-------|\n");
    for (token, count) in &report.top_words {
        md.push_str(&format!("| {} | {} |\n", token, count));
    }
    md.push('\n');

    md.push_str("## Subdomains\n\n");
    md.push_str("| Host | Unique URLs |\n");
    md.push_str("|------|-------------|\n");
    for (host, count) in &report.subdomains {
        md.push_str(&format!("| {} | {} |\n", host, count));
    }

    md
}

/// Writes the markdown summary to a file
///
/// # Arguments
///
/// * `report` - The crawl report
/// * `output_path` - Path where the markdown file should be written
pub fn write_markdown_summary(report: &CrawlReport, output_path: &Path) -> crate::Result<()> {
    let markdown = format_markdown_summary(report);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SessionState;

    fn populated_session() -> SessionState {
        let mut session = SessionState::new();
        session.mark_seen("https://www.ics.uci.edu/a");
        session.mark_seen("https://vision.ics.uci.edu/b");

        for _ in 0..3 {
            session.increment_word("mat");
        }
        session.increment_word("cat");
        session.increment_word("ant");

        session.record_page_length("https://www.ics.uci.edu/a", 120);
        session.record_subdomain("www.ics.uci.edu", "https://www.ics.uci.edu/a");
        session.record_subdomain("vision.ics.uci.edu", "https://vision.ics.uci.edu/b");
        session
    }

    #[test]
    fn test_report_orders_words_descending_then_alpha() {
        let report = CrawlReport::from_session(&populated_session(), 50);
        assert_eq!(
            report.top_words,
            vec![
                ("mat".to_string(), 3),
                ("ant".to_string(), 1),
                ("cat".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_report_truncates_to_top_n() {
        let report = CrawlReport::from_session(&populated_session(), 2);
        assert_eq!(report.top_words.len(), 2);
        assert_eq!(report.top_words[0].0, "mat");
        assert_eq!(report.distinct_words, 3);
    }

    #[test]
    fn test_report_subdomains_sorted_by_host() {
        let report = CrawlReport::from_session(&populated_session(), 50);
        assert_eq!(
            report.subdomains,
            vec![
                ("vision.ics.uci.edu".to_string(), 1),
                ("www.ics.uci.edu".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_report_counts_pages_and_longest() {
        let report = CrawlReport::from_session(&populated_session(), 50);
        assert_eq!(report.pages_analyzed, 2);
        assert_eq!(report.longest_page.word_count, 120);
        assert_eq!(
            report.longest_page.url.as_deref(),
            Some("https://www.ics.uci.edu/a")
        );
    }

    #[test]
    fn test_markdown_contains_sections() {
        let report = CrawlReport::from_session(&populated_session(), 50);
        let md = format_markdown_summary(&report);
        assert!(md.contains("# Lexicrawl Crawl Summary"));
        assert!(md.contains("## Top Words"));
        assert!(md.contains("| mat | 3 |"));
        assert!(md.contains("## Subdomains"));
        assert!(md.contains("| vision.ics.uci.edu | 1 |"));
    }

    #[test]
    fn test_empty_session_report() {
        let report = CrawlReport::from_session(&SessionState::new(), 50);
        assert_eq!(report.pages_analyzed, 0);
        assert!(report.top_words.is_empty());
        assert!(report.longest_page.url.is_none());
        assert!(report.subdomains.is_empty());
    }
}
