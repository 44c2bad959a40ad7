use vinforge_core::{OwnershipRecord, VehicleRecord};

#[test]
fn vehicle_defaults_apply_on_deserialize() {
    let json = r#"{
      "vehicle_id": "synth-ford-mustang-1967",
      "manufacturer": "Ford",
      "model": "Mustang",
      "year": 1967
    }"#;

    let vehicle: VehicleRecord = serde_json::from_str(json).expect("deserialize vehicle");
    assert_eq!(vehicle.instance_count, 1);
    assert!(vehicle.body_class.is_none());
    assert!(vehicle.data_source.is_none());
}

#[test]
fn ownership_record_round_trips() {
    let record = OwnershipRecord {
        vin: "7R01C100000".to_string(),
        vehicle_id: "synth-ford-mustang-1967".to_string(),
        manufacturer: "Ford".to_string(),
        model: "Mustang".to_string(),
        year: 1967,
        body_class: "Sports Car".to_string(),
        condition_rating: 3,
        condition_description: "Good".to_string(),
        mileage: 88_000,
        mileage_verified: true,
        registered_state: "CA".to_string(),
        registration_status: "Historic".to_string(),
        title_status: "Clean".to_string(),
        exterior_color: "Candy Apple Red".to_string(),
        factory_options: vec!["Power Steering".to_string()],
        estimated_value: 42_000,
        matching_numbers: false,
        last_service_date: chrono::NaiveDate::from_ymd_opt(2024, 6, 1),
    };

    let json = serde_json::to_string(&record).expect("serialize record");
    let back: OwnershipRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(back, record);
}

#[test]
fn omitted_service_date_stays_absent() {
    let json = r#"{
      "vin": "1FAABCDEF5GL123456",
      "vehicle_id": "ford-f-150-2020",
      "manufacturer": "Ford",
      "model": "F-150",
      "year": 2020,
      "body_class": "Pickup",
      "condition_rating": 8,
      "condition_description": "Good",
      "mileage": 45000,
      "mileage_verified": true,
      "registered_state": "TX",
      "registration_status": "Current",
      "title_status": "Clean",
      "exterior_color": "White",
      "estimated_value": 23000,
      "matching_numbers": false
    }"#;

    let record: OwnershipRecord = serde_json::from_str(json).expect("deserialize record");
    assert!(record.last_service_date.is_none());
    assert!(record.factory_options.is_empty());

    let out = serde_json::to_string(&record).expect("serialize record");
    assert!(!out.contains("last_service_date"));
}
