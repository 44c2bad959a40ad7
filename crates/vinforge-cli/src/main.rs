//! Vinforge command-line interface.
//!
//! Thin orchestration over the library crates: reads JSON inputs, runs the
//! requested pipeline stage, writes JSON outputs. All domain logic lives in
//! `vinforge-classify` and `vinforge-generate`.

mod logging;

use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use vinforge_classify::BodyClassClassifier;
use vinforge_core::{validate_vehicles, VehicleRecord};
use vinforge_generate::backfill::backfill_record;
use vinforge_generate::{
    synthesize_vehicles, GenerateOptions, GenerationEngine, HistoricalDatabase,
};

#[derive(Debug, Error)]
enum CliError {
    #[error("logging setup failed: {0}")]
    Logging(String),
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Record(#[from] vinforge_core::Error),
    #[error(transparent)]
    Generation(#[from] vinforge_generate::GenerationError),
}

#[derive(Parser)]
#[command(name = "vinforge", version, about = "Vehicle classification and synthetic ownership data")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify vehicle body classes through the tiered rule catalogs.
    Classify {
        /// JSON array of vehicle records to classify.
        #[arg(long)]
        vehicles: PathBuf,
        /// Directory holding the rule catalog files.
        #[arg(long, default_value = "data/catalogs")]
        catalogs: PathBuf,
        /// Output path for the classified vehicles.
        #[arg(long, default_value = "classified_vehicles.json")]
        out: PathBuf,
        /// Optional output path for classification statistics.
        #[arg(long)]
        stats_out: Option<PathBuf>,
    },
    /// Generate a deterministic batch of ownership records.
    Generate {
        /// JSON array of vehicle records to generate against.
        #[arg(long)]
        vehicles: PathBuf,
        /// Directory that receives per-run output directories.
        #[arg(long, default_value = "runs")]
        out_dir: PathBuf,
        /// Total records to generate across the population.
        #[arg(long, default_value_t = 15_000)]
        target: u64,
        /// Minimum records per vehicle.
        #[arg(long, default_value_t = 5)]
        min_per_vehicle: u64,
        /// Reference date for ages and service dates (defaults to today).
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Backfill non-reproducible ownership records for a vehicle list.
    Backfill {
        /// JSON array of vehicle records to backfill.
        #[arg(long)]
        vehicles: PathBuf,
        /// Output path for the backfilled records.
        #[arg(long, default_value = "backfill_records.json")]
        out: PathBuf,
        /// Records to produce per vehicle.
        #[arg(long, default_value_t = 5)]
        per_vehicle: u64,
    },
    /// Expand a historical manufacturers database into vehicle records.
    Synthesize {
        /// Historical manufacturers database JSON.
        #[arg(long)]
        database: PathBuf,
        /// Output path for the synthesized vehicles.
        #[arg(long, default_value = "synthetic_vehicles.json")]
        out: PathBuf,
        /// First production year to cover.
        #[arg(long, default_value_t = 1908)]
        start_year: i32,
        /// Last production year to cover.
        #[arg(long, default_value_t = 2024)]
        end_year: i32,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    logging::init().map_err(CliError::Logging)?;

    match cli.command {
        Command::Classify {
            vehicles,
            catalogs,
            out,
            stats_out,
        } => classify(vehicles, catalogs, out, stats_out),
        Command::Generate {
            vehicles,
            out_dir,
            target,
            min_per_vehicle,
            today,
        } => generate(vehicles, out_dir, target, min_per_vehicle, today),
        Command::Backfill {
            vehicles,
            out,
            per_vehicle,
        } => backfill(vehicles, out, per_vehicle),
        Command::Synthesize {
            database,
            out,
            start_year,
            end_year,
        } => synthesize(database, out, start_year, end_year),
    }
}

fn classify(
    vehicles_path: PathBuf,
    catalogs: PathBuf,
    out: PathBuf,
    stats_out: Option<PathBuf>,
) -> Result<(), CliError> {
    let vehicles = read_vehicles(&vehicles_path)?;
    let mut classifier = BodyClassClassifier::from_dir(&catalogs);

    let classified = classifier.classify_vehicles(&vehicles, Utc::now());
    write_json(&out, &classified)?;

    info!(
        vehicles = classified.len(),
        out = %out.display(),
        "classification written"
    );

    if let Some(stats_path) = stats_out {
        write_json(&stats_path, classifier.stats())?;
        info!(out = %stats_path.display(), "classification stats written");
    }

    Ok(())
}

fn generate(
    vehicles_path: PathBuf,
    out_dir: PathBuf,
    target: u64,
    min_per_vehicle: u64,
    today: Option<NaiveDate>,
) -> Result<(), CliError> {
    let vehicles = read_vehicles(&vehicles_path)?;

    let engine = GenerationEngine::new(GenerateOptions {
        out_dir,
        target_count: target,
        min_per_vehicle,
        today,
    });
    let result = engine.run(&vehicles)?;

    info!(
        run_dir = %result.run_dir.display(),
        records = result.report.records_generated,
        "generation run written"
    );

    Ok(())
}

fn backfill(vehicles_path: PathBuf, out: PathBuf, per_vehicle: u64) -> Result<(), CliError> {
    let vehicles = read_vehicles(&vehicles_path)?;
    validate_vehicles(&vehicles)?;

    let today = Utc::now().date_naive();
    let mut rng = rand::rng();

    let mut records = Vec::with_capacity(vehicles.len() * per_vehicle as usize);
    for vehicle in &vehicles {
        for _ in 0..per_vehicle {
            records.push(backfill_record(vehicle, today, &mut rng));
        }
    }

    write_json(&out, &records)?;
    info!(
        vehicles = vehicles.len(),
        records = records.len(),
        out = %out.display(),
        "backfill records written"
    );

    Ok(())
}

fn synthesize(
    database_path: PathBuf,
    out: PathBuf,
    start_year: i32,
    end_year: i32,
) -> Result<(), CliError> {
    let payload = fs::read_to_string(&database_path).map_err(|source| CliError::Io {
        path: database_path.clone(),
        source,
    })?;
    let database: HistoricalDatabase =
        serde_json::from_str(&payload).map_err(|source| CliError::Json {
            path: database_path,
            source,
        })?;

    let vehicles = synthesize_vehicles(&database, start_year, end_year);
    write_json(&out, &vehicles)?;

    info!(
        vehicles = vehicles.len(),
        out = %out.display(),
        "synthetic vehicles written"
    );

    Ok(())
}

fn read_vehicles(path: &PathBuf) -> Result<Vec<VehicleRecord>, CliError> {
    let payload = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&payload).map_err(|source| CliError::Json {
        path: path.clone(),
        source,
    })
}

fn write_json<T: serde::Serialize>(path: &PathBuf, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_vec_pretty(value).map_err(|source| CliError::Json {
        path: path.clone(),
        source,
    })?;
    fs::write(path, payload).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })
}
