//! filegen CLI entry point

use anyhow::{Context, Result};
use filegen::config::{cli::Cli, cli_convert, toml, GenerationConfig};
use filegen::generator::FileGenerator;
use filegen::output::{json, text};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    println!("filegen v{}", env!("CARGO_PKG_VERSION"));
    println!("Synthetic dataset generator");
    println!();

    cli.validate()?;

    let config = build_config(&cli)?;
    let mut generator = FileGenerator::new(config)
        .context("Configuration validation failed")?;

    text::print_configuration(generator.config());

    if cli.dry_run {
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    println!();
    println!("Generating files...");
    println!();

    let report = generator.run().context("Generation failed")?;

    text::print_results(&report);

    if let Some(ref path) = cli.json_output {
        json::write_json_report(path, generator.config(), &report)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

/// Build configuration from CLI arguments, layering them over a config file if given
fn build_config(cli: &Cli) -> Result<GenerationConfig> {
    match cli.config {
        Some(ref path) => {
            let file_config = toml::parse_toml_file(path)?;
            toml::merge_cli_with_config(cli, file_config)
        }
        None => cli_convert::config_from_cli(cli),
    }
}

/// Initialize logging to stderr
///
/// `RUST_LOG` wins over `--debug`.
fn init_logging(debug: bool) {
    let default_level = if debug { "filegen=debug" } else { "filegen=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
