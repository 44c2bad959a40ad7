use serde::Serialize;

use vinforge_core::VehicleRecord;

use crate::errors::GenerationError;

/// Record count assigned to one vehicle by the batch allocator.
#[derive(Debug, Clone, Serialize)]
pub struct Allocation {
    pub vehicle: VehicleRecord,
    pub count: u64,
}

/// Apportions `target` records across the vehicle population proportionally
/// to each vehicle's `instance_count` weight, with a fixed minimum per
/// vehicle.
///
/// Rounding error between the proportional allocations and the exact target
/// is corrected one unit at a time against the largest-weighted vehicles,
/// never reducing any vehicle below the minimum. The returned allocations
/// always sum to exactly `target`, ordered by descending weight.
pub fn distribute_records(
    vehicles: &[VehicleRecord],
    target: u64,
    min_per_vehicle: u64,
) -> Result<Vec<Allocation>, GenerationError> {
    if vehicles.is_empty() {
        return Err(GenerationError::InvalidInput(
            "no vehicles to allocate records to".to_string(),
        ));
    }

    let floor = min_per_vehicle.saturating_mul(vehicles.len() as u64);
    if target < floor {
        return Err(GenerationError::InvalidInput(format!(
            "target {target} is below the minimum floor of {floor} ({} vehicles x {min_per_vehicle})",
            vehicles.len()
        )));
    }

    let total_weight: u64 = vehicles.iter().map(weight).sum();

    let mut allocations: Vec<Allocation> = vehicles
        .iter()
        .map(|vehicle| {
            let proportion = weight(vehicle) as f64 / total_weight as f64;
            let proportional = (target as f64 * proportion) as u64;
            Allocation {
                vehicle: vehicle.clone(),
                count: proportional.max(min_per_vehicle),
            }
        })
        .collect();

    // Largest-weighted vehicles absorb the rounding error. The sort is
    // stable, so equal weights keep input order and the result stays
    // deterministic.
    allocations.sort_by(|a, b| weight(&b.vehicle).cmp(&weight(&a.vehicle)));

    let len = allocations.len();
    let mut current: u64 = allocations.iter().map(|allocation| allocation.count).sum();

    let mut cursor = 0;
    while current < target {
        allocations[cursor % len].count += 1;
        current += 1;
        cursor += 1;
    }
    while current > target {
        let slot = &mut allocations[cursor % len];
        if slot.count > min_per_vehicle {
            slot.count -= 1;
            current -= 1;
        }
        cursor += 1;
    }

    Ok(allocations)
}

fn weight(vehicle: &VehicleRecord) -> u64 {
    vehicle.instance_count.max(1)
}
