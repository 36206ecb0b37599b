use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use pogo_triage_lib::commands::{run_triage, OutputFormat, TriageRequest, DEFAULT_CATALOG};
use pogo_triage_lib::services::catalog::CatalogSource;
use pogo_triage_lib::services::triage::TriageStrategy;

#[derive(Parser)]
#[command(name = "pogo-triage")]
#[command(
    about = "Sort a Pokemon GO collection into keep, tag and transfer piles",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Collection export (JSON array or `{ "pokemon": [...] }`)
    collection: PathBuf,

    /// Meta catalog: file path or http(s) URL
    #[arg(long, default_value = DEFAULT_CATALOG)]
    catalog: String,

    /// Strategy: tiered|standard|casual|meta
    #[arg(long, default_value = "tiered")]
    strategy: String,

    /// With the casual strategy, mark duplicates for trade instead of transfer
    #[arg(long)]
    trade_duplicates: bool,

    /// Threshold overrides (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let mut strategy: TriageStrategy = cli.strategy.parse().map_err(anyhow::Error::msg)?;
    if let TriageStrategy::Casual { trade_duplicates } = &mut strategy {
        *trade_duplicates = cli.trade_duplicates;
    } else if cli.trade_duplicates {
        log::warn!("--trade-duplicates only applies to the casual strategy");
    }

    let request = TriageRequest {
        collection: cli.collection,
        catalog: CatalogSource::parse(&cli.catalog),
        strategy,
        config: cli.config,
        format: cli.format,
    };
    let text = run_triage(&request).await?;

    match cli.output {
        Some(path) => {
            tokio::fs::write(&path, text)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}
