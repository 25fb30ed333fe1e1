//! Configuration module for lexicrawl
//!
//! Handles loading, parsing, and validating TOML configuration files,
//! including the admissibility filter rules and analysis thresholds.

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use types::{
    AnalysisConfig, Config, CrawlerConfig, FilterConfig, OutputConfig, UserAgentConfig,
};
pub use validation::validate;
