//! Dataset generation loop
//!
//! The generator writes `file_count` files into the destination, drawing each
//! file's size independently and delegating its bytes to a [`ContentWriter`].
//! With sharding enabled files go to numbered subdirectories holding at most
//! `files_per_dir` files each:
//!
//! ```text
//! dst/0/0.data  dst/0/1.data  dst/1/0.data ...   (sharded)
//! dst/0.data    dst/1.data    dst/2.data   ...   (flat)
//! ```
//!
//! The first IO failure aborts the run; files already written stay in place.
//! Rerunning into the same destination overwrites files with the same path.

pub mod stats;

pub use stats::GenerationReport;

use crate::config::validator::validate_config;
use crate::config::GenerationConfig;
use crate::content::ContentWriter;
use crate::distribution::{uniform::UniformSize, SizeDistribution};
use crate::error::GenError;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Position of the generator within the shard layout
///
/// Lives only for the duration of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryCursor {
    dir_index: u64,
    files_in_dir: u64,
}

impl DirectoryCursor {
    /// Cursor at directory 0, no files written
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the directory currently being filled
    pub fn dir_index(&self) -> u64 {
        self.dir_index
    }

    /// Files written to the current directory so far (also the next sequence number)
    pub fn files_in_dir(&self) -> u64 {
        self.files_in_dir
    }

    /// Count a written file; returns true once `quota` files are in the directory
    pub fn advance(&mut self, quota: u64) -> bool {
        self.files_in_dir += 1;
        self.files_in_dir >= quota
    }

    /// Move on to the next directory
    pub fn roll_over(&mut self) {
        self.dir_index += 1;
        self.files_in_dir = 0;
    }
}

/// Writes a dataset according to a [`GenerationConfig`]
pub struct FileGenerator {
    config: GenerationConfig,
    sizes: Box<dyn SizeDistribution>,
    writer: ContentWriter,
}

impl FileGenerator {
    /// Create a generator, validating the configuration first
    pub fn new(config: GenerationConfig) -> Result<Self, GenError> {
        let sizes = Box::new(UniformSize::from_seed_opt(
            config.min_size_kb,
            config.max_size_kb,
            config.seed,
        ));
        let writer = ContentWriter::new(config.content);
        Self::with_parts(config, sizes, writer)
    }

    /// Create a generator with a custom size distribution and writer
    pub fn with_parts(
        config: GenerationConfig,
        sizes: Box<dyn SizeDistribution>,
        writer: ContentWriter,
    ) -> Result<Self, GenError> {
        validate_config(&config)?;
        Ok(Self {
            config,
            sizes,
            writer,
        })
    }

    /// Configuration this generator runs with
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Write every file, stopping at the first failure
    pub fn run(&mut self) -> Result<GenerationReport, GenError> {
        let start = Instant::now();
        let mut report = GenerationReport::default();
        let quota = self.config.effective_files_per_dir();
        let mut cursor = DirectoryCursor::new();

        info!(
            destination = %self.config.destination.display(),
            files = self.config.file_count,
            content = %self.config.content,
            "starting generation"
        );

        create_dir(&self.config.destination, None)?;
        if self.config.is_sharded() {
            let dir = self.shard_dir(cursor.dir_index());
            create_dir(&dir, Some(&mut report))?;
        }

        let mut remaining = self.config.file_count;
        while remaining > 0 {
            let size_kb = self.sizes.next_size_kb();
            let path = self.file_path(&cursor);

            let file_start = Instant::now();
            let bytes = self.writer.write(
                &path,
                size_kb,
                self.config.block_size_kb,
                self.config.fsync,
            )?;
            report.record_file(bytes, file_start.elapsed().as_nanos() as u64);
            debug!(path = %path.display(), size_kb, "wrote file");

            remaining -= 1;
            if cursor.advance(quota) && remaining > 0 {
                cursor.roll_over();
                let dir = self.shard_dir(cursor.dir_index());
                create_dir(&dir, Some(&mut report))?;
            }
        }

        report.elapsed = start.elapsed();
        info!(
            files = report.files_written,
            dirs = report.directories_created,
            bytes = report.bytes_written,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "generation complete"
        );

        Ok(report)
    }

    /// Directory holding shard `index`
    fn shard_dir(&self, index: u64) -> PathBuf {
        self.config.destination.join(index.to_string())
    }

    /// Path of the next file for the cursor position
    fn file_path(&self, cursor: &DirectoryCursor) -> PathBuf {
        let name = format!("{}.data", cursor.files_in_dir());
        if self.config.is_sharded() {
            self.shard_dir(cursor.dir_index()).join(name)
        } else {
            self.config.destination.join(name)
        }
    }
}

/// Validate `config` and generate the dataset it describes
pub fn run(config: GenerationConfig) -> Result<GenerationReport, GenError> {
    FileGenerator::new(config)?.run()
}

/// Create `path` (and parents), tolerating an existing directory
fn create_dir(path: &Path, report: Option<&mut GenerationReport>) -> Result<(), GenError> {
    let start = Instant::now();
    fs::create_dir_all(path).map_err(|source| GenError::DirectoryCreation {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(report) = report {
        report.record_mkdir(start.elapsed().as_nanos() as u64);
        debug!(path = %path.display(), "created directory");
    }

    Ok(())
}
