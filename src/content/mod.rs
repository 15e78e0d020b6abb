//! Content strategies
//!
//! A content strategy decides which bytes go into a generated file. All
//! strategies share one chunked write loop ([`ContentWriter`]); they only differ
//! in how the block buffer is filled.
//!
//! # Strategies
//!
//! - **Zero**: every byte is 0x00. Cheapest, fully compressible baseline.
//! - **Random**: fresh CSPRNG bytes for every chunk. Defeats compression and dedup.
//! - **PseudoRandom**: one random 1 KB unit per file, tiled and repeated.
//!   Defeats all-same-byte detection but dedups within the file.
//!
//! # Example
//!
//! ```no_run
//! use filegen::config::ContentKind;
//! use filegen::content::ContentWriter;
//! use std::path::Path;
//!
//! let mut writer = ContentWriter::new(ContentKind::Random);
//! let bytes = writer.write(Path::new("/tmp/0.data"), 16, 4, false).unwrap();
//! assert_eq!(bytes, 16 * 1024);
//! ```

pub mod pseudo;
pub mod random;
pub mod zero;

use crate::config::{ContentKind, KIB};
use crate::error::GenError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Buffer-fill logic for one content kind
///
/// The writer owns a single block buffer that is reused across files. A
/// strategy sees that buffer once at the start of every file, trimmed to the
/// file size when the file is smaller than a block, and then each chunk right
/// before it is written. Chunks are prefixes of the prepared buffer; only the
/// last chunk of a file can be shorter than it.
pub trait ContentStrategy: Send {
    /// Kind of content this strategy produces
    fn kind(&self) -> ContentKind;

    /// Prepare the buffer for a new file; never longer than the file itself
    fn begin_file(&mut self, block: &mut [u8]);

    /// Fill the next chunk before it is written
    fn fill_chunk(&mut self, chunk: &mut [u8]);
}

/// Create the strategy for a content kind
pub fn strategy_for(kind: ContentKind) -> Box<dyn ContentStrategy> {
    match kind {
        ContentKind::Zero => Box::new(zero::ZeroContent),
        ContentKind::Random => Box::new(random::RandomContent::new()),
        ContentKind::PseudoRandom => Box::new(pseudo::PseudoRandomContent::new()),
    }
}

/// Writes whole files using a content strategy
pub struct ContentWriter {
    strategy: Box<dyn ContentStrategy>,
    buffer: Vec<u8>,
}

impl ContentWriter {
    /// Create a writer for the given content kind
    pub fn new(kind: ContentKind) -> Self {
        Self::with_strategy(strategy_for(kind))
    }

    /// Create a writer around an existing strategy
    pub fn with_strategy(strategy: Box<dyn ContentStrategy>) -> Self {
        Self {
            strategy,
            buffer: Vec::new(),
        }
    }

    /// Kind of content this writer produces
    pub fn kind(&self) -> ContentKind {
        self.strategy.kind()
    }

    /// Create (or truncate) `path` and fill it with exactly `size_kb` KB
    ///
    /// Data is written in chunks of `block_size_kb` KB, the last chunk holding
    /// the remainder. With `fsync` set the file is flushed and synced before
    /// returning. The file handle is closed on every return path.
    ///
    /// Returns the number of bytes written.
    pub fn write(
        &mut self,
        path: &Path,
        size_kb: u64,
        block_size_kb: u64,
        fsync: bool,
    ) -> Result<u64, GenError> {
        if block_size_kb == 0 {
            return Err(GenError::invalid("block size must be at least 1 KB"));
        }
        let total = size_kb.checked_mul(KIB).ok_or_else(|| {
            GenError::invalid(format!("file size {} KB overflows a byte count", size_kb))
        })?;
        let block_len = block_size_kb
            .checked_mul(KIB)
            .and_then(|b| usize::try_from(b).ok())
            .ok_or_else(|| {
                GenError::invalid(format!("block size {} KB is too large", block_size_kb))
            })?;

        // Never prepare more than the file will actually use
        let prep = remaining_len(total, block_len);
        if self.buffer.len() < prep {
            self.buffer.resize(prep, 0);
        }

        let mut file = File::create(path).map_err(|source| GenError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        self.strategy.begin_file(&mut self.buffer[..prep]);

        let mut remaining = total;
        while remaining > 0 {
            let len = remaining_len(remaining, prep);
            let chunk = &mut self.buffer[..len];
            self.strategy.fill_chunk(chunk);

            file.write_all(chunk).map_err(|source| GenError::Write {
                path: path.to_path_buf(),
                source,
            })?;

            remaining -= len as u64;
        }

        if fsync {
            file.flush()
                .and_then(|_| file.sync_all())
                .map_err(|source| GenError::Sync {
                    path: path.to_path_buf(),
                    source,
                })?;
        }

        Ok(total)
    }
}

/// Bytes of the next chunk: at most `block_len`, at most what is left
#[inline]
fn remaining_len(remaining: u64, block_len: usize) -> usize {
    remaining.min(block_len as u64) as usize
}
