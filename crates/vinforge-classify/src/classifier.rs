use std::path::Path;

use chrono::{DateTime, Utc};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::warn;

use vinforge_core::{ClassifiedVehicle, VehicleRecord};

use crate::catalog::{
    self, OverrideCatalog, PatternCatalog, Taxonomy, OVERRIDES_FILE, PATTERNS_FILE, TAXONOMY_FILE,
};
use crate::heuristics::fallback_body_class;
use crate::stats::ClassificationStats;

/// Which rule tier produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    HistoricalOverride,
    ExactMatch,
    RegexMatch,
    ManufacturerDefault,
    Fallback,
}

impl MatchType {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::HistoricalOverride => "historical_override",
            MatchType::ExactMatch => "exact_match",
            MatchType::RegexMatch => "regex_match",
            MatchType::ManufacturerDefault => "manufacturer_default",
            MatchType::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one classify call. Produced fresh per call; never cached
/// across distinct identities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub body_class: String,
    pub match_type: MatchType,
}

/// Compiled regex tier for one body class, in catalog order.
struct RegexTier {
    body_class: String,
    patterns: Vec<Regex>,
}

/// Exact-match tier for one body class; model names pre-lowercased.
struct ExactTier {
    body_class: String,
    models: Vec<String>,
}

/// Tiered body-class classifier.
///
/// Rule catalogs are immutable for the lifetime of the instance; tier
/// evaluation order is fixed and a tier is only consulted when every higher
/// tier produced no match. `classify` never fails: absence of data at a
/// tier is a reason to fall through, not an error.
pub struct BodyClassClassifier {
    overrides: Vec<crate::catalog::HistoricalOverride>,
    exact_tiers: Vec<ExactTier>,
    regex_tiers: Vec<RegexTier>,
    manufacturer_defaults: Vec<crate::catalog::ManufacturerDefaults>,
    taxonomy: Taxonomy,
    stats: ClassificationStats,
}

impl BodyClassClassifier {
    /// Builds a classifier from already-loaded catalogs.
    pub fn new(overrides: OverrideCatalog, patterns: PatternCatalog, taxonomy: Taxonomy) -> Self {
        let exact_tiers = patterns
            .patterns
            .iter()
            .map(|entry| ExactTier {
                body_class: entry.body_class.clone(),
                models: entry
                    .exact_matches
                    .iter()
                    .map(|model| model.to_lowercase())
                    .collect(),
            })
            .collect();

        let regex_tiers = patterns
            .patterns
            .iter()
            .map(|entry| RegexTier {
                body_class: entry.body_class.clone(),
                patterns: compile_patterns(&entry.body_class, &entry.regex_patterns),
            })
            .collect();

        Self {
            overrides: overrides.overrides,
            exact_tiers,
            regex_tiers,
            manufacturer_defaults: patterns.manufacturer_defaults,
            taxonomy,
            stats: ClassificationStats::default(),
        }
    }

    /// Loads the three standard catalog files from `dir`.
    ///
    /// Missing or malformed files disable their tiers with a warning;
    /// construction itself never fails.
    pub fn from_dir(dir: &Path) -> Self {
        let overrides: OverrideCatalog = catalog::load_catalog(&dir.join(OVERRIDES_FILE));
        let patterns: PatternCatalog = catalog::load_catalog(&dir.join(PATTERNS_FILE));
        let taxonomy: Taxonomy = catalog::load_catalog(&dir.join(TAXONOMY_FILE));
        Self::new(overrides, patterns, taxonomy)
    }

    /// Classifies one vehicle identity. First matching tier wins and
    /// short-circuits the rest; the fallback tier always produces a class.
    pub fn classify(&mut self, manufacturer: &str, model: &str, year: i32) -> Classification {
        let manufacturer = manufacturer.trim();
        let model = model.trim();

        let (body_class, match_type) = if let Some(class) =
            self.check_override(manufacturer, model, year)
        {
            (class, MatchType::HistoricalOverride)
        } else if let Some(class) = self.check_exact(model) {
            (class, MatchType::ExactMatch)
        } else if let Some(class) = self.check_regex(model) {
            (class, MatchType::RegexMatch)
        } else if let Some(class) = self.check_manufacturer_default(manufacturer, model) {
            (class, MatchType::ManufacturerDefault)
        } else {
            (
                fallback_body_class(model, year).to_string(),
                MatchType::Fallback,
            )
        };

        self.stats.record(match_type, &body_class);

        Classification {
            body_class,
            match_type,
        }
    }

    /// Classifies a batch and produces the write-back rows for the external
    /// store: body class, match type, and an update timestamp.
    pub fn classify_vehicles(
        &mut self,
        vehicles: &[VehicleRecord],
        now: DateTime<Utc>,
    ) -> Vec<ClassifiedVehicle> {
        vehicles
            .iter()
            .map(|vehicle| {
                let classification =
                    self.classify(&vehicle.manufacturer, &vehicle.model, vehicle.year);
                ClassifiedVehicle {
                    vehicle: vehicle.clone(),
                    body_class: classification.body_class,
                    body_class_match_type: classification.match_type.as_str().to_string(),
                    body_class_updated_at: now,
                }
            })
            .collect()
    }

    /// Lifetime counters for this instance.
    pub fn stats(&self) -> &ClassificationStats {
        &self.stats
    }

    /// Descriptive taxonomy metadata, for reporting only.
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Case-insensitivity here is Unicode-aware, like the other tiers, so
    /// overrides for non-ASCII marques ("Škoda") match any casing.
    fn check_override(&self, manufacturer: &str, model: &str, year: i32) -> Option<String> {
        let manufacturer_lower = manufacturer.to_lowercase();
        let model_lower = model.to_lowercase();
        self.overrides
            .iter()
            .find(|entry| {
                entry.manufacturer.to_lowercase() == manufacturer_lower
                    && entry.model.to_lowercase() == model_lower
                    && entry.year_range[0] <= year
                    && year <= entry.year_range[1]
            })
            .map(|entry| entry.body_class.clone())
    }

    fn check_exact(&self, model: &str) -> Option<String> {
        let model_lower = model.to_lowercase();
        self.exact_tiers
            .iter()
            .find(|tier| tier.models.iter().any(|entry| *entry == model_lower))
            .map(|tier| tier.body_class.clone())
    }

    fn check_regex(&self, model: &str) -> Option<String> {
        for tier in &self.regex_tiers {
            if tier.patterns.iter().any(|pattern| pattern.is_match(model)) {
                return Some(tier.body_class.clone());
            }
        }
        None
    }

    /// Manufacturer lookup is case-sensitive on the catalogued spelling.
    /// Within a manufacturer, exact model equality wins over substring
    /// containment of the catalog key inside the model name. The
    /// containment direction is key-in-model ("F-Series" matches "F-150"),
    /// not model-in-key; downstream data depends on this.
    fn check_manufacturer_default(&self, manufacturer: &str, model: &str) -> Option<String> {
        let defaults = self
            .manufacturer_defaults
            .iter()
            .find(|entry| entry.manufacturer == manufacturer)?;

        if let Some(exact) = defaults.models.iter().find(|entry| entry.model == model) {
            return Some(exact.body_class.clone());
        }

        let model_lower = model.to_lowercase();
        defaults
            .models
            .iter()
            .find(|entry| model_lower.contains(&entry.model.to_lowercase()))
            .map(|entry| entry.body_class.clone())
    }
}

/// Compiles one body class's patterns case-insensitively for unanchored
/// containment search. A malformed pattern is skipped with a warning.
fn compile_patterns(body_class: &str, patterns: &[String]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| {
            match RegexBuilder::new(pattern).case_insensitive(true).build() {
                Ok(regex) => Some(regex),
                Err(err) => {
                    warn!(
                        body_class = %body_class,
                        pattern = %pattern,
                        error = %err,
                        "skipping malformed regex pattern"
                    );
                    None
                }
            }
        })
        .collect()
}
