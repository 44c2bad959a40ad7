use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One vehicle reference row as fetched from the external store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VehicleRecord {
    /// Stable identifier, also the generator seed key.
    pub vehicle_id: String,
    pub manufacturer: String,
    pub model: String,
    /// Model year. Any value is accepted; classification handles the full
    /// historical span including pre-1930 vehicles.
    pub year: i32,
    /// Body class when already known; `None` until classification runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_class: Option<String>,
    /// Known population size, used as the allocation weight.
    #[serde(default = "default_instance_count")]
    pub instance_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
}

fn default_instance_count() -> u64 {
    1
}

/// A vehicle record enriched with the classifier's output, in the shape the
/// external store expects for a bulk update.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ClassifiedVehicle {
    #[serde(flatten)]
    pub vehicle: VehicleRecord,
    pub body_class: String,
    pub body_class_match_type: String,
    pub body_class_updated_at: DateTime<Utc>,
}
