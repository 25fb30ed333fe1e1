//! Page analysis module for lexicrawl
//!
//! Tokenization, stop-word handling, the per-session aggregate state, and
//! the page analyzer that ties them together.

mod analyzer;
mod session;
mod tokenize;

pub use analyzer::PageAnalyzer;
pub use session::{LongestPage, SessionState};
pub use tokenize::{is_stop_word, sorted_frequencies, tokenize, word_frequencies, STOP_WORDS};
