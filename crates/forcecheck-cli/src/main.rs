//! `forcecheck` — compare two particle-force result files.
//!
//! Usage: `forcecheck <file1> <file2> [--threshold <float>] [--config <yaml>]`
//!
//! Reads both result files, checks that they cover the same entity
//! identifiers, and reports every force pair whose absolute difference
//! exceeds the threshold. The report goes to stdout; logging goes to stderr.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use forcecheck_core::{verify_files, VerifyConfig};

#[derive(Parser)]
#[command(name = "forcecheck", version, about = "Verify two simulation result files agree within a tolerance")]
struct Cli {
    /// First result file (e.g., the serial run)
    file1: PathBuf,

    /// Second result file (e.g., the parallel or distributed run)
    file2: PathBuf,

    /// Maximum allowed absolute difference before a force pair is flagged
    /// (overrides the config file; default 1e-10)
    #[arg(long)]
    threshold: Option<f64>,

    /// YAML config file with recognized options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(&cli)?;
    tracing::debug!(
        file1 = %cli.file1.display(),
        file2 = %cli.file2.display(),
        threshold = config.threshold,
        "starting comparison"
    );
    let report = verify_files(&cli.file1, &cli.file2, &config)?;

    match cli.format {
        Format::Text => println!("{}", report),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Resolve the effective configuration: built-in default, overridden by the
/// config file, overridden by `--threshold`.
fn resolve_config(cli: &Cli) -> anyhow::Result<VerifyConfig> {
    let mut config = match &cli.config {
        Some(path) => VerifyConfig::from_yaml_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => VerifyConfig::default(),
    };
    if let Some(threshold) = cli.threshold {
        config.threshold = threshold;
    }
    anyhow::ensure!(
        config.threshold.is_finite() && config.threshold >= 0.0,
        "threshold must be finite and non-negative, got {}",
        config.threshold
    );
    Ok(config)
}
