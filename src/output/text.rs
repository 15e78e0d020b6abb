//! Human-readable text output

use crate::config::GenerationConfig;
use crate::generator::GenerationReport;
use crate::util::format::{format_bytes, format_duration, format_number, format_rate, format_throughput};

/// Print configuration summary
pub fn print_configuration(config: &GenerationConfig) {
    println!("Configuration:");
    println!("  Destination: {}", config.destination.display());
    println!("  Files: {}", format_number(config.file_count));
    println!("  Size range: {} - {} KB", config.min_size_kb, config.max_size_kb);
    println!("  Content: {}", config.content);
    println!("  Block size: {} KB", config.block_size_kb);
    if config.is_sharded() {
        println!(
            "  Layout: {} files per directory ({} directories)",
            format_number(config.files_per_dir),
            format_number(config.expected_dir_count())
        );
    } else {
        println!("  Layout: flat");
    }
    println!("  Fsync: {}", if config.fsync { "yes" } else { "no" });
    if let Some(seed) = config.seed {
        println!("  Size seed: {}", seed);
    }
}

/// Print run results to console
pub fn print_results(report: &GenerationReport) {
    println!("═══════════════════════════════════════════════════════════");
    println!("                  GENERATION RESULTS");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    println!("Elapsed Time: {:.3}s", report.elapsed.as_secs_f64());
    println!();

    println!("Files:");
    println!(
        "  Written: {} ({}/s)",
        format_number(report.files_written),
        format_rate(report.files_per_sec())
    );
    println!("  Data:    {}", format_bytes(report.bytes_written));
    if let (Some(min), Some(max)) = (report.min_file_bytes, report.max_file_bytes) {
        println!("  Sizes:   {} - {}", format_bytes(min), format_bytes(max));
    }
    println!("  Throughput: {}", format_throughput(report.throughput()));
    if report.files_written > 0 {
        println!(
            "  Avg write latency: {}",
            format_duration(std::time::Duration::from_nanos(report.avg_write_latency_ns()))
        );
    }

    if report.directories_created > 0 {
        println!();
        println!("Directories:");
        println!("  Created: {}", format_number(report.directories_created));
        println!(
            "  Avg mkdir latency: {}",
            format_duration(std::time::Duration::from_nanos(report.avg_mkdir_latency_ns()))
        );
    }

    println!();
}
