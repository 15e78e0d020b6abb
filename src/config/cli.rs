//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// filegen - synthetic dataset generator
#[derive(Parser, Debug)]
#[command(name = "filegen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Destination directory (default: current directory)
    #[arg(long, value_name = "PATH")]
    pub dst: Option<PathBuf>,

    /// Minimum file size in KB (suffixes accepted: 4M, 1G)
    #[arg(long, value_name = "KB")]
    pub min: Option<String>,

    /// Maximum file size in KB (suffixes accepted: 4M, 1G)
    #[arg(long, value_name = "KB")]
    pub max: Option<String>,

    /// Total number of files to generate
    #[arg(long, value_name = "N")]
    pub qty: Option<u64>,

    /// Files per numbered subdirectory (omit for a flat layout)
    #[arg(long, value_name = "N")]
    pub split: Option<u64>,

    /// Content type: 0=zero, 1=random, 2=pseudo-random
    #[arg(long, value_name = "0|1|2")]
    pub ftype: Option<u8>,

    /// Write chunk size in KB [default: 1024]
    #[arg(long, value_name = "KB")]
    pub bs: Option<String>,

    /// Flush and fsync every file before writing the next
    #[arg(long)]
    pub fsync: bool,

    /// Seed for the file size sequence (reproducible sizes)
    #[arg(long)]
    pub seed: Option<u64>,

    // === Configuration File ===
    /// TOML configuration file (CLI flags take precedence)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    // === Output Options ===
    /// Write a JSON run report to this path
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Dry run - validate configuration without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug output (per-file logging)
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    ///
    /// Only checks presence; value checks happen on the merged configuration.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.config.is_some() {
            return Ok(());
        }

        let missing: Vec<&str> = [
            ("--min", self.min.is_none()),
            ("--max", self.max.is_none()),
            ("--qty", self.qty.is_none()),
        ]
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(flag, _)| *flag)
        .collect();

        if !missing.is_empty() {
            anyhow::bail!(
                "missing required argument(s): {} (or supply them via --config)",
                missing.join(", ")
            );
        }

        Ok(())
    }
}
