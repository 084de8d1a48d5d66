//! JSON tool configuration.
pub mod analyzer;

pub use analyzer::{load_config, parse_config, AnalyzerConfig};
