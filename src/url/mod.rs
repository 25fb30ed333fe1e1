//! URL handling module for lexicrawl
//!
//! Provides the admissibility filter that decides whether a discovered URL
//! is eligible for crawling, plus host extraction and suffix matching.

mod domain;
mod filter;

pub use domain::{extract_host, host_matches_suffix};
pub use filter::is_valid;
