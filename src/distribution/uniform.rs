//! Uniform file size distribution
//!
//! Every size in `[min, max]` (both ends inclusive) is equally likely. Uses the
//! xoshiro256++ PRNG: sizes need to be fast and reproducible, not secret.

use super::SizeDistribution;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Uniform size distribution over an inclusive KB range
pub struct UniformSize {
    rng: Xoshiro256PlusPlus,
    min_kb: u64,
    max_kb: u64,
}

impl UniformSize {
    /// Create a new uniform distribution with random seed
    ///
    /// `min_kb` must not exceed `max_kb`; the validator enforces this.
    pub fn new(min_kb: u64, max_kb: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_entropy(),
            min_kb,
            max_kb,
        }
    }

    /// Create a new uniform distribution with specific seed
    ///
    /// Useful for reproducible datasets and tests.
    pub fn with_seed(min_kb: u64, max_kb: u64, seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            min_kb,
            max_kb,
        }
    }

    /// Build from an optional seed
    pub fn from_seed_opt(min_kb: u64, max_kb: u64, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(min_kb, max_kb, seed),
            None => Self::new(min_kb, max_kb),
        }
    }
}

impl SizeDistribution for UniformSize {
    #[inline]
    fn next_size_kb(&mut self) -> u64 {
        if self.min_kb >= self.max_kb {
            return self.min_kb;
        }
        self.rng.gen_range(self.min_kb..=self.max_kb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size_in_range() {
        let mut dist = UniformSize::new(10, 20);

        for _ in 0..1000 {
            let size = dist.next_size_kb();
            assert!((10..=20).contains(&size));
        }
    }

    #[test]
    fn test_uniform_size_fixed() {
        let mut dist = UniformSize::new(7, 7);
        for _ in 0..10 {
            assert_eq!(dist.next_size_kb(), 7);
        }
    }

    #[test]
    fn test_uniform_size_seeded() {
        let mut dist1 = UniformSize::with_seed(0, 1000, 12345);
        let mut dist2 = UniformSize::with_seed(0, 1000, 12345);

        // Same seed should produce same sequence
        for _ in 0..10 {
            assert_eq!(dist1.next_size_kb(), dist2.next_size_kb());
        }
    }

    #[test]
    fn test_uniform_size_hits_both_ends() {
        let mut dist = UniformSize::with_seed(1, 3, 42);
        let mut seen = [false; 3];

        for _ in 0..1000 {
            seen[(dist.next_size_kb() - 1) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s), "inclusive range not covered: {:?}", seen);
    }

    #[test]
    fn test_uniform_size_coverage() {
        let mut dist = UniformSize::with_seed(0, 99, 42);
        let mut buckets = vec![0u32; 10];

        for _ in 0..10000 {
            let size = dist.next_size_kb();
            buckets[(size / 10) as usize] += 1;
        }

        // Each bucket should have roughly 1000 samples; allow 20% deviation
        for count in buckets {
            assert!(count > 800 && count < 1200, "Bucket count {} outside expected range", count);
        }
    }
}
