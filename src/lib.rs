//! filegen - synthetic dataset generator
//!
//! filegen populates a directory with `.data` files of random sizes for storage
//! benchmarks and filesystem stress tests. File contents are zero-filled,
//! fully random, or a repeated random unit, which controls how well the data
//! compresses and dedups.
//!
//! # Architecture
//!
//! - **Config**: CLI and TOML configuration, validated before any IO
//! - **Distribution**: per-file size draws
//! - **Content**: interchangeable buffer-fill strategies sharing one write loop
//! - **Generator**: the directory/quota loop with optional sharding
//! - **Output**: text summary and JSON run report
//!
//! # Example
//!
//! ```no_run
//! use filegen::config::{ContentKind, GenerationConfig};
//!
//! let mut config = GenerationConfig::new(10, 10, 3);
//! config.files_per_dir = 2;
//! config.content = ContentKind::Zero;
//! config.destination = "/tmp/dataset".into();
//!
//! let report = filegen::generator::run(config).unwrap();
//! assert_eq!(report.files_written, 3);
//! ```

pub mod config;
pub mod content;
pub mod distribution;
pub mod error;
pub mod generator;
pub mod output;
pub mod util;

// Re-export commonly used types
pub use config::{ContentKind, GenerationConfig};
pub use error::GenError;
pub use generator::{FileGenerator, GenerationReport};
