//! fleet: runs the sample eVTOL fleet and reports per-model statistics.
//!
//! ```text
//! fleet --vehicles 20 --charging-stations 3 --duration-hours 3 \
//!       --results results.txt --csv-dir output/fleet --seed 42
//! ```
//!
//! Logging is controlled with `RUST_LOG` (default `info`); `RUST_LOG=debug`
//! traces every status change and station queue operation.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use uom::si::time::hour;

use fleet_core::SimConfig;
use fleet_core::units::hours;
use fleet_output::{
    CsvWriter, OutputWriter, SimOutputObserver, TableWriter, format_results_table, results_rows,
};
use fleet_sim::{NoopObserver, RunOutcome, Sim, SimBuilder};
use fleet_vehicle::sample_vehicle_models;

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "fleet", about = "Vehicle fleet simulation over the sample eVTOL catalog")]
struct Cli {
    /// Number of vehicles, each of a model drawn uniformly from the catalog.
    #[arg(long)]
    vehicles: usize,

    /// Number of charging stations.
    #[arg(long)]
    charging_stations: usize,

    /// Simulated duration in hours.  Negative values are treated as zero.
    #[arg(long, allow_negative_numbers = true)]
    duration_hours: f64,

    /// Write the padded results table to this file.
    #[arg(long)]
    results: Option<PathBuf>,

    /// Write step summaries, snapshots, and results as CSV into this directory.
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Snapshot every N steps in the CSV output (0 disables snapshots).
    #[arg(long, default_value_t = 1)]
    snapshot_every: u64,

    /// Seed for reproducible runs.  Omit for a random seed.
    #[arg(long)]
    seed: Option<u64>,
}

// ── Run ───────────────────────────────────────────────────────────────────────

/// Run `sim` to completion, streaming CSV output when `csv_dir` is set.
fn run(sim: &mut Sim, csv_dir: Option<&PathBuf>) -> Result<RunOutcome> {
    let Some(dir) = csv_dir else {
        return Ok(sim.run(&mut NoopObserver));
    };

    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let writer = CsvWriter::new(dir).with_context(|| format!("opening CSV files in {}", dir.display()))?;
    let mut obs = SimOutputObserver::new(writer);
    let outcome = sim.run(&mut obs);
    obs.write_results(&results_rows(&sim.models, &sim.aggregate_statistics()));
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing CSV output");
    }
    info!(dir = %dir.display(), "CSV output written");
    Ok(outcome)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = SimConfig::new(
        hours(cli.duration_hours),
        cli.vehicles,
        cli.charging_stations,
        cli.seed,
    )
    .with_output_interval(cli.snapshot_every);
    info!(
        vehicles          = config.vehicle_count,
        charging_stations = config.charging_station_count,
        duration_h        = config.duration.get::<hour>(),
        seed              = ?config.seed,
        "settings"
    );

    let models = sample_vehicle_models();
    let mut sim = SimBuilder::new(config).models(models).build()?;
    for (model, count) in sim.vehicles.model_counts() {
        info!(%model, count, "fleet composition");
    }

    let t0 = Instant::now();
    let outcome = run(&mut sim, cli.csv_dir.as_ref())?;
    info!(wall_secs = t0.elapsed().as_secs_f64(), "{outcome}");
    if !outcome.reached_target() {
        warn!("simulation ended before reaching the target duration");
    }

    let rows = results_rows(&sim.models, &sim.aggregate_statistics());
    print!("{}", format_results_table(&rows));

    if let Some(path) = &cli.results {
        let mut writer =
            TableWriter::create(path).with_context(|| format!("creating {}", path.display()))?;
        writer.write_results(&rows)?;
        writer.finish()?;
        info!(path = %path.display(), "results written");
    }

    Ok(())
}
