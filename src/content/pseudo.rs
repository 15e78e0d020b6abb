//! Pseudo-random repeated content
//!
//! One random 1 KB unit is drawn per file and tiled across the block buffer;
//! that same buffer is then written until the file is full. Every full block
//! equals the first one and the file repeats with a 1 KB period.

use super::ContentStrategy;
use crate::config::{ContentKind, KIB};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Size of the random unit repeated through the file
pub const UNIT_SIZE: usize = KIB as usize;

/// Writes one random unit per file, repeated
pub struct PseudoRandomContent {
    rng: StdRng,
    unit: [u8; UNIT_SIZE],
}

impl PseudoRandomContent {
    /// Create a strategy seeded from the OS entropy source
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            unit: [0u8; UNIT_SIZE],
        }
    }

    /// Random unit used for the current file
    pub fn unit(&self) -> &[u8] {
        &self.unit
    }
}

impl Default for PseudoRandomContent {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStrategy for PseudoRandomContent {
    fn kind(&self) -> ContentKind {
        ContentKind::PseudoRandom
    }

    fn begin_file(&mut self, block: &mut [u8]) {
        self.rng.fill_bytes(&mut self.unit);
        for piece in block.chunks_mut(UNIT_SIZE) {
            let len = piece.len();
            piece.copy_from_slice(&self.unit[..len]);
        }
    }

    // Block buffer already holds the tiled unit
    #[inline]
    fn fill_chunk(&mut self, _chunk: &mut [u8]) {}
}
