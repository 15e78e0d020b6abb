//! Configuration validation
//!
//! Runs before any filesystem access so a bad configuration never leaves a
//! half-populated destination behind.

use super::{GenerationConfig, KIB};
use crate::error::GenError;
use tracing::warn;

/// Largest accepted write chunk (1 GB) in KB
pub const MAX_BLOCK_SIZE_KB: u64 = 1024 * 1024;

/// Validate complete configuration
pub fn validate_config(config: &GenerationConfig) -> Result<(), GenError> {
    validate_sizes(config)?;
    validate_block_size(config.block_size_kb)?;

    if config.destination.as_os_str().is_empty() {
        return Err(GenError::invalid("destination directory must not be empty"));
    }

    Ok(())
}

/// Validate the file size range
fn validate_sizes(config: &GenerationConfig) -> Result<(), GenError> {
    if config.min_size_kb > config.max_size_kb {
        return Err(GenError::invalid(format!(
            "min size ({} KB) must not exceed max size ({} KB)",
            config.min_size_kb, config.max_size_kb
        )));
    }

    if config.max_size_kb.checked_mul(KIB).is_none() {
        return Err(GenError::invalid(format!(
            "max size ({} KB) overflows a byte count",
            config.max_size_kb
        )));
    }

    Ok(())
}

/// Validate the write chunk size
fn validate_block_size(block_size_kb: u64) -> Result<(), GenError> {
    if block_size_kb == 0 {
        return Err(GenError::invalid("block size must be at least 1 KB"));
    }

    if block_size_kb > MAX_BLOCK_SIZE_KB {
        return Err(GenError::invalid(format!(
            "block size ({} KB) must not exceed {} KB",
            block_size_kb, MAX_BLOCK_SIZE_KB
        )));
    }

    if !block_size_kb.is_power_of_two() {
        warn!(block_size_kb, "block size is not a power of 2");
    }

    Ok(())
}
