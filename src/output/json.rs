//! JSON output formatting
//!
//! Writes a single run report: when it ran, what it was asked to do, and what
//! it actually wrote.

use crate::config::GenerationConfig;
use crate::error::GenError;
use crate::generator::GenerationReport;
use crate::util::format::{format_bytes, format_duration, format_throughput};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Duration with both microseconds and human-readable format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonDuration {
    pub micros: u64,
    pub human: String,
}

impl JsonDuration {
    pub fn from_duration(d: Duration) -> Self {
        let micros = d.as_micros() as u64;
        let human = format_duration(d);
        Self { micros, human }
    }
}

/// Byte count with human-readable format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonBytes {
    pub bytes: u64,
    pub human: String,
}

impl JsonBytes {
    pub fn new(bytes: u64) -> Self {
        Self {
            bytes,
            human: format_bytes(bytes),
        }
    }
}

/// Throughput with bytes/sec and human-readable format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonThroughput {
    pub bytes_per_sec: u64,
    pub human: String,
}

impl JsonThroughput {
    pub fn new(bytes_per_sec: f64) -> Self {
        Self {
            bytes_per_sec: bytes_per_sec as u64,
            human: format_throughput(bytes_per_sec),
        }
    }
}

/// Complete run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// RFC 3339 completion time
    pub timestamp: String,
    pub tool_version: String,
    pub config: GenerationConfig,
    pub files_written: u64,
    pub directories_created: u64,
    pub bytes_written: JsonBytes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_file_size: Option<JsonBytes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<JsonBytes>,
    pub elapsed: JsonDuration,
    pub throughput: JsonThroughput,
    pub files_per_sec: f64,
    pub avg_write_latency: JsonDuration,
}

impl JsonReport {
    /// Build a report stamped with the current time
    pub fn new(config: &GenerationConfig, report: &GenerationReport) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            config: config.clone(),
            files_written: report.files_written,
            directories_created: report.directories_created,
            bytes_written: JsonBytes::new(report.bytes_written),
            min_file_size: report.min_file_bytes.map(JsonBytes::new),
            max_file_size: report.max_file_bytes.map(JsonBytes::new),
            elapsed: JsonDuration::from_duration(report.elapsed),
            throughput: JsonThroughput::new(report.throughput()),
            files_per_sec: report.files_per_sec(),
            avg_write_latency: JsonDuration::from_duration(Duration::from_nanos(
                report.avg_write_latency_ns(),
            )),
        }
    }
}

/// Serialize the run report to `path`
pub fn write_json_report(
    path: &Path,
    config: &GenerationConfig,
    report: &GenerationReport,
) -> Result<(), GenError> {
    let json = JsonReport::new(config, report);
    let to_report_err = |source: std::io::Error| GenError::Report {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(to_report_err)?;
    serde_json::to_writer_pretty(&mut file, &json).map_err(|e| to_report_err(e.into()))?;
    file.write_all(b"\n").map_err(to_report_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> (GenerationConfig, GenerationReport) {
        let config = GenerationConfig::new(1, 4, 3);
        let mut report = GenerationReport::default();
        report.record_file(1024, 1_000);
        report.record_file(4096, 3_000);
        report.elapsed = Duration::from_millis(1500);
        (config, report)
    }

    #[test]
    fn test_json_duration_matches_text_output() {
        let elapsed = JsonDuration::from_duration(Duration::from_millis(1500));
        assert_eq!(elapsed.micros, 1_500_000);
        assert_eq!(elapsed.human, "1.50s");

        let latency = JsonDuration::from_duration(Duration::from_nanos(2_000));
        assert_eq!(latency.micros, 2);
        assert_eq!(latency.human, format_duration(Duration::from_nanos(2_000)));
    }

    #[test]
    fn test_json_report_fields() {
        let (config, report) = sample();
        let json = JsonReport::new(&config, &report);

        assert_eq!(json.files_written, 2);
        assert_eq!(json.bytes_written.bytes, 5120);
        assert_eq!(json.min_file_size.as_ref().unwrap().bytes, 1024);
        assert_eq!(json.max_file_size.as_ref().unwrap().bytes, 4096);
        assert_eq!(json.elapsed.micros, 1_500_000);
        assert!(chrono::DateTime::parse_from_rfc3339(&json.timestamp).is_ok());
    }

    #[test]
    fn test_write_json_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");
        let (config, report) = sample();

        write_json_report(&path, &config, &report).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["files_written"], 2);
        assert_eq!(value["config"]["file_count"], 3);
        assert_eq!(value["config"]["content"], "pseudo-random");
        assert_eq!(value["bytes_written"]["human"], "5.00 KB");
    }

    #[test]
    fn test_write_json_report_bad_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("report.json");
        let (config, report) = sample();

        let err = write_json_report(&path, &config, &report).unwrap_err();
        assert!(matches!(err, GenError::Report { .. }));
    }
}
