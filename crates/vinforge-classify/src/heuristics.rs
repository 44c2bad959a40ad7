/// Keyword groups for the fallback tier, checked in this order.
const PICKUP_KEYWORDS: [&str; 5] = ["truck", "pickup", "150", "250", "350"];
const VAN_KEYWORDS: [&str; 3] = ["van", "caravan", "voyager"];
const SPORTS_KEYWORDS: [&str; 5] = ["sport", "gt", "gto", "ss", "r/t"];
const WAGON_KEYWORDS: [&str; 2] = ["wagon", "estate"];
const EARLY_ROADSTER_KEYWORDS: [&str; 3] = ["roadster", "speedster", "racer"];

/// Fallback heuristic: a pure function of year and model-name keywords with
/// no catalog dependency. Always produces a body class.
pub(crate) fn fallback_body_class(model: &str, year: i32) -> &'static str {
    let model_lower = model.to_lowercase();

    // Most pre-1930 vehicles were touring cars or roadsters.
    if year < 1930 {
        if contains_any(&model_lower, &EARLY_ROADSTER_KEYWORDS) {
            return "Roadster";
        }
        return "Touring Car";
    }

    if contains_any(&model_lower, &PICKUP_KEYWORDS) {
        return "Pickup";
    }
    if contains_any(&model_lower, &VAN_KEYWORDS) {
        return "Van";
    }
    if contains_any(&model_lower, &SPORTS_KEYWORDS) {
        return "Sports Car";
    }
    if contains_any(&model_lower, &WAGON_KEYWORDS) {
        return "Wagon";
    }

    // Most common body class overall.
    "Sedan"
}

fn contains_any(model_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| model_lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pre_1930_splits_roadster_from_touring_car() {
        assert_eq!(fallback_body_class("Speedster", 1925), "Roadster");
        assert_eq!(fallback_body_class("Model T", 1920), "Touring Car");
        // Boundary: 1930 leaves the historical branch.
        assert_eq!(fallback_body_class("Model A", 1930), "Sedan");
    }

    #[test]
    fn keyword_groups_apply_in_fixed_order() {
        // "Sport Truck" hits the pickup group before the sports group.
        assert_eq!(fallback_body_class("Sport Truck", 1995), "Pickup");
        assert_eq!(fallback_body_class("Grand Caravan", 1995), "Van");
        assert_eq!(fallback_body_class("GTO", 1969), "Sports Car");
        assert_eq!(fallback_body_class("Country Estate", 1972), "Wagon");
    }

    #[test]
    fn defaults_to_sedan() {
        assert_eq!(fallback_body_class("Fairlane", 1962), "Sedan");
    }
}
