//! TOML configuration file parsing
//!
//! A config file holds a full `GenerationConfig`:
//!
//! ```toml
//! min_size_kb = 64
//! max_size_kb = 4096
//! file_count = 10000
//! files_per_dir = 1000
//! content = "random"
//! destination = "/mnt/bench"
//! ```

use super::cli::Cli;
use super::cli_convert::apply_overrides;
use super::GenerationConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<GenerationConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<GenerationConfig> {
    let config: GenerationConfig = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, config: GenerationConfig) -> Result<GenerationConfig> {
    apply_overrides(cli, config)
}
