use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Options for a batch generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where run artifacts are written.
    pub out_dir: PathBuf,
    /// Total record count to apportion across the vehicle population.
    pub target_count: u64,
    /// Minimum records allocated to every vehicle.
    pub min_per_vehicle: u64,
    /// Generation date for service-date offsets; `None` means today.
    /// Pinning it makes a run fully reproducible.
    pub today: Option<NaiveDate>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("out"),
            target_count: 15_000,
            min_per_vehicle: 5,
            today: None,
        }
    }
}

/// Allocation spread across the vehicle population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationSummary {
    pub min_allocated: u64,
    pub max_allocated: u64,
    pub avg_allocated: f64,
}

/// Report for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub record_version: String,
    pub vehicles: u64,
    pub records_generated: u64,
    pub allocation: AllocationSummary,
    pub duration_ms: u64,
    pub bytes_written: u64,
}
