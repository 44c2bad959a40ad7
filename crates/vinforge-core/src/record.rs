use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One synthetic ownership/condition record, keyed externally by VIN.
///
/// Records are produced on demand by the generators and never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OwnershipRecord {
    pub vin: String,
    /// Link back to the vehicle reference row.
    pub vehicle_id: String,
    pub manufacturer: String,
    pub model: String,
    pub year: i32,
    pub body_class: String,
    /// 1 (Project) through 5 (Concours) for seeded records; backfill records
    /// use the 1-10 scale of the body-class-conditioned distribution.
    pub condition_rating: u8,
    pub condition_description: String,
    pub mileage: u64,
    pub mileage_verified: bool,
    pub registered_state: String,
    pub registration_status: String,
    pub title_status: String,
    pub exterior_color: String,
    #[serde(default)]
    pub factory_options: Vec<String>,
    pub estimated_value: u64,
    pub matching_numbers: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_service_date: Option<NaiveDate>,
}
