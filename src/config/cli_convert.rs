//! CLI to Config conversion utilities

use crate::config::cli::Cli;
use crate::config::{ContentKind, GenerationConfig};
use anyhow::{Context, Result};

/// Parse a size string in KB (e.g., "10", "4k", "100M", "1G") to KB
///
/// A bare number is already KB.
pub fn parse_size_kb(s: &str) -> Result<u64> {
    let s = s.trim().to_lowercase();

    let (num_str, multiplier) = if s.ends_with("k") || s.ends_with("kb") {
        (s.trim_end_matches("kb").trim_end_matches("k"), 1u64)
    } else if s.ends_with("m") || s.ends_with("mb") {
        (s.trim_end_matches("mb").trim_end_matches("m"), 1024)
    } else if s.ends_with("g") || s.ends_with("gb") {
        (s.trim_end_matches("gb").trim_end_matches("g"), 1024 * 1024)
    } else if s.ends_with("t") || s.ends_with("tb") {
        (s.trim_end_matches("tb").trim_end_matches("t"), 1024 * 1024 * 1024)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str.parse()
        .with_context(|| format!("Invalid size format: {}", s))?;

    num.checked_mul(multiplier)
        .with_context(|| format!("Size too large: {}", s))
}

/// Build a configuration purely from CLI arguments
///
/// `Cli::validate` must have passed, so the required flags are present.
pub fn config_from_cli(cli: &Cli) -> Result<GenerationConfig> {
    let min = cli.min.as_deref()
        .ok_or_else(|| anyhow::anyhow!("--min is required"))?;
    let max = cli.max.as_deref()
        .ok_or_else(|| anyhow::anyhow!("--max is required"))?;
    let qty = cli.qty
        .ok_or_else(|| anyhow::anyhow!("--qty is required"))?;

    let config = GenerationConfig::new(
        parse_size_kb(min).context("Invalid --min")?,
        parse_size_kb(max).context("Invalid --max")?,
        qty,
    );

    apply_overrides(cli, config)
}

/// Apply every flag the user actually passed on top of `config`
pub fn apply_overrides(cli: &Cli, mut config: GenerationConfig) -> Result<GenerationConfig> {
    if let Some(ref min) = cli.min {
        config.min_size_kb = parse_size_kb(min).context("Invalid --min")?;
    }
    if let Some(ref max) = cli.max {
        config.max_size_kb = parse_size_kb(max).context("Invalid --max")?;
    }
    if let Some(qty) = cli.qty {
        config.file_count = qty;
    }
    if let Some(split) = cli.split {
        config.files_per_dir = split;
    }
    if let Some(code) = cli.ftype {
        config.content = ContentKind::try_from(code)?;
    }
    if let Some(ref bs) = cli.bs {
        config.block_size_kb = parse_size_kb(bs).context("Invalid --bs")?;
    }
    if let Some(ref dst) = cli.dst {
        config.destination = dst.clone();
    }
    if cli.fsync {
        config.fsync = true;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_size_plain_kb() {
        assert_eq!(parse_size_kb("10").unwrap(), 10);
        assert_eq!(parse_size_kb(" 512 ").unwrap(), 512);
    }

    #[test]
    fn test_parse_size_suffixes() {
        assert_eq!(parse_size_kb("4k").unwrap(), 4);
        assert_eq!(parse_size_kb("4KB").unwrap(), 4);
        assert_eq!(parse_size_kb("1m").unwrap(), 1024);
        assert_eq!(parse_size_kb("100M").unwrap(), 100 * 1024);
        assert_eq!(parse_size_kb("2g").unwrap(), 2 * 1024 * 1024);
        assert_eq!(parse_size_kb("1tb").unwrap(), 1024 * 1024 * 1024);
    }

    #[test]
    fn test_parse_size_invalid() {
        assert!(parse_size_kb("ten").is_err());
        assert!(parse_size_kb("-1").is_err());
        assert!(parse_size_kb("").is_err());
    }

    #[test]
    fn test_config_from_cli_defaults() {
        let cli = Cli::try_parse_from(["filegen", "--min", "1", "--max", "2", "--qty", "3"]).unwrap();
        let config = config_from_cli(&cli).unwrap();

        assert_eq!(config.min_size_kb, 1);
        assert_eq!(config.max_size_kb, 2);
        assert_eq!(config.file_count, 3);
        assert_eq!(config.files_per_dir, 0);
        assert_eq!(config.block_size_kb, 1024);
        assert_eq!(config.content, ContentKind::PseudoRandom);
        assert_eq!(config.destination, PathBuf::from("."));
        assert!(!config.fsync);
    }

    #[test]
    fn test_config_from_cli_all_flags() {
        let cli = Cli::try_parse_from([
            "filegen", "--dst", "out", "--min", "1M", "--max", "2M", "--qty", "9",
            "--split", "4", "--ftype", "0", "--bs", "64", "--fsync", "--seed", "7",
        ])
        .unwrap();
        let config = config_from_cli(&cli).unwrap();

        assert_eq!(config.min_size_kb, 1024);
        assert_eq!(config.max_size_kb, 2048);
        assert_eq!(config.files_per_dir, 4);
        assert_eq!(config.content, ContentKind::Zero);
        assert_eq!(config.block_size_kb, 64);
        assert_eq!(config.destination, PathBuf::from("out"));
        assert!(config.fsync);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_config_from_cli_bad_ftype() {
        let cli = Cli::try_parse_from([
            "filegen", "--min", "1", "--max", "1", "--qty", "1", "--ftype", "5",
        ])
        .unwrap();
        let err = config_from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("unknown content type 5"));
    }
}
