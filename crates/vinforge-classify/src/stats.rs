use std::collections::BTreeMap;

use serde::Serialize;

use crate::classifier::MatchType;

/// Lifetime counters for one classifier instance.
///
/// Counters are mutated on every classify call and reset only by
/// constructing a new classifier. They feed reports; they never feed back
/// into classification decisions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassificationStats {
    pub total: u64,
    pub by_match_type: BTreeMap<String, u64>,
    pub by_body_class: BTreeMap<String, u64>,
}

impl ClassificationStats {
    pub(crate) fn record(&mut self, match_type: MatchType, body_class: &str) {
        self.total += 1;
        *self
            .by_match_type
            .entry(match_type.as_str().to_string())
            .or_insert(0) += 1;
        *self
            .by_body_class
            .entry(body_class.to_string())
            .or_insert(0) += 1;
    }

    /// Count for one match type, zero when the tier never fired.
    pub fn match_type_count(&self, match_type: MatchType) -> u64 {
        self.by_match_type
            .get(match_type.as_str())
            .copied()
            .unwrap_or(0)
    }
}
