use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sector_core::{Sector, SectorConfig};
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

mod output;
mod overrides;
mod runner;
mod scenario;
mod summary;

#[derive(Parser)]
#[command(
    name = "sector_bench",
    about = "Batch runner for sector event probabilities"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute every region in a batch file.
    Run {
        /// Path to the batch JSON file.
        #[arg(long)]
        regions: String,
        /// Output directory (default: runs/).
        #[arg(long, default_value = "runs")]
        output_dir: String,
    },
}

fn run(batch_path: &str, output_dir: &str) -> Result<()> {
    let batch = scenario::load_batch(Path::new(batch_path))?;

    let mut config = SectorConfig::default();
    overrides::apply_overrides(&mut config, &batch.config)
        .with_context(|| format!("applying config overrides from {batch_path}"))?;

    info!(
        batch = %batch.name,
        regions = batch.regions.len(),
        total_slots = config.total_slots,
        traversal_length = config.traversal_length,
        "loaded batch"
    );

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let run_dir = PathBuf::from(output_dir).join(format!("{}_{}", batch.name, timestamp));
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("creating output directory: {}", run_dir.display()))?;

    let outcomes = runner::run_regions(&batch.regions, &batch.names, &config);
    let summary = output::BatchSummary::from_outcomes(
        Uuid::new_v4().to_string(),
        &batch.name,
        &config,
        batch.regions.len(),
        &outcomes,
    );

    let sectors: Vec<&Sector> = outcomes
        .iter()
        .filter_map(|outcome| outcome.result.as_ref().ok())
        .collect();

    output::write_json_atomic(&sectors, &run_dir.join("sectors.json"))?;
    output::write_events_csv(&sectors, &run_dir.join("events.csv"))?;
    let summary_path = run_dir.join("batch_summary.json");
    output::write_json_atomic(&summary, &summary_path)?;

    summary::print_sectors(&batch.name, config.traversal_length, &sectors);
    println!(
        "\n{} computed, {} skipped (no display name), {} failed",
        summary.computed_count,
        summary.skipped_count,
        summary.failed.len()
    );
    println!("Batch summary written to {}", summary_path.display());

    if sectors.is_empty() && !summary.failed.is_empty() {
        anyhow::bail!("all regions failed");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            regions,
            output_dir,
        } => run(&regions, &output_dir)?,
    }
    Ok(())
}
