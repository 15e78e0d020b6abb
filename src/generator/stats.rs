//! Run statistics

use std::time::Duration;

/// Summary of a completed generation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationReport {
    /// Number of `.data` files written
    pub files_written: u64,

    /// Number of shard directories created (0 when not sharding)
    pub directories_created: u64,

    /// Total bytes written across all files
    pub bytes_written: u64,

    /// Smallest file written, in bytes
    pub min_file_bytes: Option<u64>,

    /// Largest file written, in bytes
    pub max_file_bytes: Option<u64>,

    /// Total mkdir latency (nanoseconds)
    pub mkdir_latency_ns: u64,

    /// Total file write latency, open through close (nanoseconds)
    pub write_latency_ns: u64,

    /// Wall-clock time of the whole run
    pub elapsed: Duration,
}

impl GenerationReport {
    /// Record one finished file
    pub fn record_file(&mut self, bytes: u64, latency_ns: u64) {
        self.files_written += 1;
        self.bytes_written += bytes;
        self.write_latency_ns += latency_ns;
        self.min_file_bytes = Some(self.min_file_bytes.map_or(bytes, |m| m.min(bytes)));
        self.max_file_bytes = Some(self.max_file_bytes.map_or(bytes, |m| m.max(bytes)));
    }

    /// Record one created directory
    pub fn record_mkdir(&mut self, latency_ns: u64) {
        self.directories_created += 1;
        self.mkdir_latency_ns += latency_ns;
    }

    /// Get average file write latency in nanoseconds
    pub fn avg_write_latency_ns(&self) -> u64 {
        if self.files_written > 0 {
            self.write_latency_ns / self.files_written
        } else {
            0
        }
    }

    /// Get average mkdir latency in nanoseconds
    pub fn avg_mkdir_latency_ns(&self) -> u64 {
        if self.directories_created > 0 {
            self.mkdir_latency_ns / self.directories_created
        } else {
            0
        }
    }

    /// Bytes per second over the whole run
    pub fn throughput(&self) -> f64 {
        let seconds = self.elapsed.as_secs_f64();
        if seconds > 0.0 {
            self.bytes_written as f64 / seconds
        } else {
            0.0
        }
    }

    /// Files per second over the whole run
    pub fn files_per_sec(&self) -> f64 {
        let seconds = self.elapsed.as_secs_f64();
        if seconds > 0.0 {
            self.files_written as f64 / seconds
        } else {
            0.0
        }
    }
}
