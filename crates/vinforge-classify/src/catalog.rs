use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Standard catalog file names, matching the layout under `data/catalogs/`.
pub const OVERRIDES_FILE: &str = "historical_overrides.json";
pub const PATTERNS_FILE: &str = "body_class_patterns.json";
pub const TAXONOMY_FILE: &str = "body_class_taxonomy.json";

/// One historical override: the highest-priority rule tier.
///
/// Matches on case-insensitive manufacturer + model equality with the year
/// falling inclusively inside `year_range`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalOverride {
    pub manufacturer: String,
    pub model: String,
    /// Inclusive `[min, max]` production years.
    pub year_range: [i32; 2],
    pub body_class: String,
}

/// Catalog of historical overrides, in authoring order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverrideCatalog {
    #[serde(default)]
    pub overrides: Vec<HistoricalOverride>,
}

/// Exact-match and regex rules for one body class.
///
/// Entries are arrays rather than keyed maps so catalog order, which breaks
/// ties between body classes, survives serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyClassPatterns {
    pub body_class: String,
    #[serde(default)]
    pub exact_matches: Vec<String>,
    #[serde(default)]
    pub regex_patterns: Vec<String>,
}

/// Model-name (or substring) default for one manufacturer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDefault {
    /// Exact model name or a substring key such as "F-Series".
    pub model: String,
    pub body_class: String,
}

/// Per-manufacturer model defaults, keyed on catalogued spelling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManufacturerDefaults {
    pub manufacturer: String,
    #[serde(default)]
    pub models: Vec<ModelDefault>,
}

/// The pattern catalog: exact matches, regex patterns, and manufacturer
/// defaults for the middle three rule tiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatternCatalog {
    #[serde(default)]
    pub patterns: Vec<BodyClassPatterns>,
    #[serde(default)]
    pub manufacturer_defaults: Vec<ManufacturerDefaults>,
}

/// Descriptive body-class metadata. Loaded for reporting only; never
/// consulted during matching.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Taxonomy {
    #[serde(default)]
    pub body_classes: Vec<TaxonomyEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub era: Option<String>,
}

/// Loads a catalog file, degrading to the empty catalog on any failure.
///
/// A missing or malformed file disables the tiers that catalog feeds;
/// classification then falls through to lower tiers rather than erroring.
pub(crate) fn load_catalog<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "catalog not readable, tier disabled");
            return T::default();
        }
    };

    match serde_json::from_str(&text) {
        Ok(catalog) => catalog,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "catalog malformed, tier disabled");
            T::default()
        }
    }
}
