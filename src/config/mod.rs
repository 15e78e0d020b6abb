//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//!
//! All public sizes are expressed in KB (1 KB = 1024 bytes). Conversion to
//! bytes only happens where buffers are allocated and written.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::error::GenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Bytes per KB
pub const KIB: u64 = 1024;

/// Default write chunk size in KB
pub const DEFAULT_BLOCK_SIZE_KB: u64 = 1024;

/// Complete generation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Smallest file size in KB (inclusive)
    pub min_size_kb: u64,
    /// Largest file size in KB (inclusive)
    pub max_size_kb: u64,
    /// Total number of files to write
    pub file_count: u64,
    /// Files per numbered subdirectory (0 = no sharding)
    #[serde(default)]
    pub files_per_dir: u64,
    /// Write chunk size in KB
    #[serde(default = "default_block_size_kb")]
    pub block_size_kb: u64,
    /// Content strategy
    #[serde(default)]
    pub content: ContentKind,
    /// Destination directory
    #[serde(default = "default_destination")]
    pub destination: PathBuf,
    /// Flush and fsync each file before moving on
    #[serde(default)]
    pub fsync: bool,
    /// Seed for the size distribution (None = seeded from entropy)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_block_size_kb() -> u64 {
    DEFAULT_BLOCK_SIZE_KB
}

fn default_destination() -> PathBuf {
    PathBuf::from(".")
}

impl GenerationConfig {
    /// Create a configuration with defaults for everything but the size range and count
    pub fn new(min_size_kb: u64, max_size_kb: u64, file_count: u64) -> Self {
        Self {
            min_size_kb,
            max_size_kb,
            file_count,
            files_per_dir: 0,
            block_size_kb: DEFAULT_BLOCK_SIZE_KB,
            content: ContentKind::default(),
            destination: default_destination(),
            fsync: false,
            seed: None,
        }
    }

    /// Whether files are spread across numbered subdirectories
    pub fn is_sharded(&self) -> bool {
        self.files_per_dir > 0
    }

    /// Per-directory quota actually applied by the generator
    ///
    /// Without sharding the whole run lands in one directory.
    pub fn effective_files_per_dir(&self) -> u64 {
        if self.is_sharded() {
            self.files_per_dir
        } else {
            self.file_count
        }
    }

    /// Number of shard directories a run will leave behind
    pub fn expected_dir_count(&self) -> u64 {
        if !self.is_sharded() {
            return 0;
        }
        // Directory 0 is created up front even for an empty run
        self.file_count.div_ceil(self.files_per_dir).max(1)
    }
}

/// Content strategy used to fill each file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    /// All zero bytes
    Zero,
    /// Fresh CSPRNG bytes for every chunk
    Random,
    /// One random unit per file, repeated to fill it
    #[default]
    PseudoRandom,
}

impl ContentKind {
    /// Numeric code used by `--ftype`
    pub fn code(self) -> u8 {
        match self {
            ContentKind::Zero => 0,
            ContentKind::Random => 1,
            ContentKind::PseudoRandom => 2,
        }
    }
}

impl TryFrom<u8> for ContentKind {
    type Error = GenError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ContentKind::Zero),
            1 => Ok(ContentKind::Random),
            2 => Ok(ContentKind::PseudoRandom),
            other => Err(GenError::invalid(format!(
                "unknown content type {} (expected 0=zero, 1=random, 2=pseudo-random)",
                other
            ))),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Zero => write!(f, "zero"),
            ContentKind::Random => write!(f, "random"),
            ContentKind::PseudoRandom => write!(f, "pseudo-random"),
        }
    }
}

impl fmt::Display for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files of {}-{} KB ({}, bs={} KB) into {}",
            self.file_count,
            self.min_size_kb,
            self.max_size_kb,
            self.content,
            self.block_size_kb,
            self.destination.display()
        )?;
        if self.is_sharded() {
            write!(f, ", {} per dir", self.files_per_dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_kind_from_code() {
        assert_eq!(ContentKind::try_from(0).unwrap(), ContentKind::Zero);
        assert_eq!(ContentKind::try_from(1).unwrap(), ContentKind::Random);
        assert_eq!(ContentKind::try_from(2).unwrap(), ContentKind::PseudoRandom);
        assert!(matches!(
            ContentKind::try_from(3),
            Err(GenError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_content_kind_code_matches() {
        for kind in [ContentKind::Zero, ContentKind::Random, ContentKind::PseudoRandom] {
            assert_eq!(ContentKind::try_from(kind.code()).unwrap(), kind);
        }
    }

    #[test]
    fn test_effective_files_per_dir() {
        let mut config = GenerationConfig::new(1, 1, 7);
        assert!(!config.is_sharded());
        assert_eq!(config.effective_files_per_dir(), 7);
        assert_eq!(config.expected_dir_count(), 0);

        config.files_per_dir = 3;
        assert!(config.is_sharded());
        assert_eq!(config.effective_files_per_dir(), 3);
        assert_eq!(config.expected_dir_count(), 3);
    }

    #[test]
    fn test_expected_dir_count_empty_run() {
        let mut config = GenerationConfig::new(1, 1, 0);
        config.files_per_dir = 4;
        assert_eq!(config.expected_dir_count(), 1);
    }

    #[test]
    fn test_display() {
        let mut config = GenerationConfig::new(10, 20, 5);
        config.files_per_dir = 2;
        config.content = ContentKind::Zero;
        let s = config.to_string();
        assert!(s.contains("5 files of 10-20 KB"));
        assert!(s.contains("zero"));
        assert!(s.contains("2 per dir"));
    }
}
