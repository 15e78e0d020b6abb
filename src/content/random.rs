//! Fully random content
//!
//! Every chunk is refilled from a CSPRNG (`StdRng`, ChaCha based) right before
//! it is written, so no block repeats within or across files. This is the most
//! CPU-hungry strategy.

use super::ContentStrategy;
use crate::config::ContentKind;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Writes fresh random bytes for every chunk
pub struct RandomContent {
    rng: StdRng,
}

impl RandomContent {
    /// Create a strategy seeded from the OS entropy source
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for RandomContent {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStrategy for RandomContent {
    fn kind(&self) -> ContentKind {
        ContentKind::Random
    }

    fn begin_file(&mut self, _block: &mut [u8]) {}

    #[inline]
    fn fill_chunk(&mut self, chunk: &mut [u8]) {
        self.rng.fill_bytes(chunk);
    }
}
