//! File size distributions
//!
//! A distribution decides how large each generated file is. Sizes are drawn
//! in KB and converted to bytes only by the content writers.
//!
//! # Example
//!
//! ```
//! use filegen::distribution::{SizeDistribution, uniform::UniformSize};
//!
//! let mut dist = UniformSize::new(10, 20);
//! let size_kb = dist.next_size_kb();
//! assert!((10..=20).contains(&size_kb));
//! ```

/// Source of per-file sizes
///
/// Each call is independent of the previous ones; the generator calls it
/// exactly once per file.
pub trait SizeDistribution: Send {
    /// Draw the size of the next file in KB
    fn next_size_kb(&mut self) -> u64;
}

pub mod uniform;
