//! Deterministic synthetic ownership-record generation for Vinforge.
//!
//! Each vehicle gets a generator seeded from its stable identifier; the
//! seeded sequence is consumed in a fixed draw order so that re-running a
//! batch reproduces byte-identical records. A second, unseeded VIN strategy
//! backfills vehicles that need realistic-looking but non-reproducible
//! records; the two strategies are deliberately kept separate.

pub mod allocate;
pub mod backfill;
pub mod engine;
pub mod errors;
pub mod model;
pub mod ownership;
pub mod sequence;
pub mod synthesize;
pub mod vin;

pub use allocate::{distribute_records, Allocation};
pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport};
pub use ownership::OwnershipGenerator;
pub use sequence::SeededSequence;
pub use synthesize::{synthesize_vehicles, HistoricalDatabase};
