//! Core contracts and helpers for Vinforge.
//!
//! This crate defines the canonical vehicle and ownership-record types,
//! validation helpers, and the shared error type used by the classifier,
//! the generator, and the CLI.

pub mod error;
pub mod record;
pub mod validation;
pub mod vehicle;

pub use error::{Error, Result};
pub use record::OwnershipRecord;
pub use validation::validate_vehicles;
pub use vehicle::{ClassifiedVehicle, VehicleRecord};

/// Current contract version for emitted record artifacts.
pub const RECORD_VERSION: &str = "0.1";
