//! Rule-based body-class classification for Vinforge.
//!
//! The classifier assigns a body class (Sedan, Coupe, Pickup, ...) to a
//! (manufacturer, model, year) triple through five cascading tiers of
//! decreasing specificity: historical overrides, exact model matches, regex
//! patterns, manufacturer defaults, and a year/keyword fallback heuristic.
//! Rule catalogs are loaded once at construction and a missing or malformed
//! catalog disables its tier with a warning instead of failing.

pub mod catalog;
pub mod classifier;
mod heuristics;
pub mod stats;

pub use catalog::{
    HistoricalOverride, ManufacturerDefaults, OverrideCatalog, PatternCatalog, Taxonomy,
};
pub use classifier::{BodyClassClassifier, Classification, MatchType};
pub use stats::ClassificationStats;
