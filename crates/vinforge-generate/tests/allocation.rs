use vinforge_core::VehicleRecord;
use vinforge_generate::{distribute_records, GenerationError};

fn vehicle(id: &str, instance_count: u64) -> VehicleRecord {
    VehicleRecord {
        vehicle_id: id.to_string(),
        manufacturer: "Ford".to_string(),
        model: "Mustang".to_string(),
        year: 1967,
        body_class: None,
        instance_count,
        data_source: None,
    }
}

#[test]
fn allocations_sum_exactly_to_target() {
    let vehicles = vec![
        vehicle("a", 700),
        vehicle("b", 150),
        vehicle("c", 90),
        vehicle("d", 45),
        vehicle("e", 9),
        vehicle("f", 3),
        vehicle("g", 1),
    ];

    for target in [35_u64, 100, 1_000, 15_000, 15_001, 14_999] {
        let allocations = distribute_records(&vehicles, target, 5).expect("allocate");
        let sum: u64 = allocations.iter().map(|allocation| allocation.count).sum();
        assert_eq!(sum, target, "target {target}");
        assert!(allocations
            .iter()
            .all(|allocation| allocation.count >= 5));
    }
}

#[test]
fn rounding_error_lands_on_the_largest_weights() {
    let vehicles = vec![vehicle("small", 1), vehicle("large", 99)];
    let allocations = distribute_records(&vehicles, 101, 1).expect("allocate");

    // Sorted by descending weight; the large vehicle absorbs the extra unit.
    assert_eq!(allocations[0].vehicle.vehicle_id, "large");
    assert!(allocations[0].count > allocations[1].count);
    let sum: u64 = allocations.iter().map(|allocation| allocation.count).sum();
    assert_eq!(sum, 101);
}

#[test]
fn minimum_allocation_is_never_undercut() {
    // Every vehicle's proportional share would be far below the minimum.
    let mut vehicles: Vec<VehicleRecord> = (0..10)
        .map(|i| vehicle(&format!("v{i}"), 1))
        .collect();
    vehicles.push(vehicle("whale", 10_000));

    let allocations = distribute_records(&vehicles, 100, 5).expect("allocate");
    assert!(allocations.iter().all(|allocation| allocation.count >= 5));
    let sum: u64 = allocations.iter().map(|allocation| allocation.count).sum();
    assert_eq!(sum, 100);
}

#[test]
fn target_below_minimum_floor_is_rejected() {
    let vehicles = vec![vehicle("a", 1), vehicle("b", 1), vehicle("c", 1)];
    let result = distribute_records(&vehicles, 10, 5);
    assert!(matches!(result, Err(GenerationError::InvalidInput(_))));
}

#[test]
fn empty_population_is_rejected() {
    let result = distribute_records(&[], 100, 5);
    assert!(matches!(result, Err(GenerationError::InvalidInput(_))));
}

#[test]
fn allocation_is_deterministic_across_calls() {
    let vehicles = vec![
        vehicle("a", 10),
        vehicle("b", 10),
        vehicle("c", 7),
        vehicle("d", 3),
    ];

    let first = distribute_records(&vehicles, 500, 5).expect("allocate");
    let second = distribute_records(&vehicles, 500, 5).expect("allocate");

    let first_counts: Vec<(String, u64)> = first
        .iter()
        .map(|allocation| (allocation.vehicle.vehicle_id.clone(), allocation.count))
        .collect();
    let second_counts: Vec<(String, u64)> = second
        .iter()
        .map(|allocation| (allocation.vehicle.vehicle_id.clone(), allocation.count))
        .collect();
    assert_eq!(first_counts, second_counts);
}
