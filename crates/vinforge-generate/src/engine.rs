use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use vinforge_core::{validate_vehicles, OwnershipRecord, VehicleRecord, RECORD_VERSION};

use crate::allocate::distribute_records;
use crate::errors::GenerationError;
use crate::model::{AllocationSummary, GenerateOptions, GenerationReport};
use crate::ownership::OwnershipGenerator;

/// Result of a batch generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub run_dir: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for generating ownership records from a vehicle population.
///
/// A run is either completed or safely restartable from scratch: the
/// per-vehicle generators are seeded from stable identifiers, so re-running
/// the same population and options reproduces the same records.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self, vehicles: &[VehicleRecord]) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        validate_vehicles(vehicles)?;

        let run_id = uuid::Uuid::new_v4().to_string();
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%SZ").to_string();
        let run_dir = self
            .options
            .out_dir
            .join(format!("{timestamp}__run_{run_id}"));
        std::fs::create_dir_all(&run_dir)?;

        let today = self
            .options
            .today
            .unwrap_or_else(|| chrono::Utc::now().date_naive());

        let allocations = distribute_records(
            vehicles,
            self.options.target_count,
            self.options.min_per_vehicle,
        )?;

        info!(
            run_id = %run_id,
            vehicles = vehicles.len(),
            target = self.options.target_count,
            "generation started"
        );

        let mut records: Vec<OwnershipRecord> =
            Vec::with_capacity(self.options.target_count as usize);
        for (processed, allocation) in allocations.iter().enumerate() {
            let mut generator =
                OwnershipGenerator::for_vehicle(&allocation.vehicle.vehicle_id, today);
            for index in 0..allocation.count {
                records.push(generator.generate(&allocation.vehicle, index as u32));
            }

            if (processed + 1) % 100 == 0 {
                info!(
                    vehicles_processed = processed + 1,
                    records = records.len(),
                    "generation progress"
                );
            }
        }

        let records_path = run_dir.join("ownership_records.json");
        let payload = serde_json::to_vec_pretty(&records)?;
        std::fs::write(&records_path, &payload)?;

        let counts: Vec<u64> = allocations.iter().map(|allocation| allocation.count).collect();
        let report = GenerationReport {
            run_id: run_id.clone(),
            record_version: RECORD_VERSION.to_string(),
            vehicles: vehicles.len() as u64,
            records_generated: records.len() as u64,
            allocation: AllocationSummary {
                min_allocated: counts.iter().copied().min().unwrap_or(0),
                max_allocated: counts.iter().copied().max().unwrap_or(0),
                avg_allocated: if counts.is_empty() {
                    0.0
                } else {
                    counts.iter().sum::<u64>() as f64 / counts.len() as f64
                },
            },
            duration_ms: start.elapsed().as_millis() as u64,
            bytes_written: payload.len() as u64,
        };

        let report_path = run_dir.join("generation_report.json");
        std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;

        info!(
            run_id = %run_id,
            records_generated = report.records_generated,
            duration_ms = report.duration_ms,
            bytes_written = report.bytes_written,
            "generation completed"
        );

        Ok(GenerationResult { run_dir, report })
    }
}
