use chrono::{Datelike, Duration, NaiveDate};

use vinforge_core::{OwnershipRecord, VehicleRecord};

use crate::sequence::SeededSequence;
use crate::vin::{post_1981_vin, pre_1981_vin};

/// Geographic weighting for the registered state.
const STATE_WEIGHTS: [(&str, f64); 8] = [
    ("CA", 15.0),
    ("TX", 8.0),
    ("FL", 7.0),
    ("AZ", 5.0),
    ("OH", 4.0),
    ("MI", 4.0),
    ("NY", 3.0),
    ("PA", 3.0),
];

/// Period-appropriate exterior palettes.
const PRE_1970_COLORS: [&str; 6] = [
    "Wimbledon White",
    "Candy Apple Red",
    "Springtime Yellow",
    "Arcadian Blue",
    "Ivy Gold",
    "Silver Smoke Gray",
];
const POST_1970_COLORS: [&str; 6] = [
    "Bright Red",
    "Black",
    "White",
    "Silver Metallic",
    "Dark Blue Metallic",
    "Green Metallic",
];

const FACTORY_OPTIONS: [&str; 8] = [
    "Power Steering",
    "Power Disc Brakes",
    "Air Conditioning",
    "GT Equipment Group",
    "Interior Decor Group",
    "Rally Pac Gauges",
    "AM/FM Radio",
    "Tinted Glass",
];

/// Deterministic per-vehicle record generator.
///
/// One instance per vehicle, seeded from the vehicle's stable identifier.
/// Every `generate` call consumes the seeded sequence in a fixed draw order
/// (VIN, condition, mileage, state, color, options, value, flags, service
/// date); reordering draws changes that record and every record after it,
/// so any new attribute must be appended at the end of the order.
pub struct OwnershipGenerator {
    seq: SeededSequence,
    today: NaiveDate,
}

impl OwnershipGenerator {
    /// Seeds a generator from the vehicle's stable identifier. The seed is
    /// mandatory by construction; there is no unseeded variant of this type.
    pub fn for_vehicle(vehicle_id: &str, today: NaiveDate) -> Self {
        Self {
            seq: SeededSequence::from_key(vehicle_id),
            today,
        }
    }

    /// Produces the record for one instance index.
    pub fn generate(&mut self, vehicle: &VehicleRecord, index: u32) -> OwnershipRecord {
        let year = vehicle.year;

        // 1980 and earlier use the short pre-standard format.
        let vin = if year <= 1980 {
            pre_1981_vin(&mut self.seq, year, index)
        } else {
            post_1981_vin(&vehicle.manufacturer, year, index)
        };

        let (condition_rating, condition_description) = self.draw_condition();
        let mileage = self.draw_mileage(year);
        let registered_state = self.draw_state();
        let exterior_color = self.draw_color(year);
        let factory_options = self.draw_options(condition_rating);
        let estimated_value = self.draw_value(condition_rating, mileage, factory_options.len());

        let mileage_verified = self.seq.next_f64() > 0.2;
        let registration_status = if self.seq.next_f64() > 0.55 {
            "Active"
        } else {
            "Historic"
        };
        let title_status = if self.seq.next_f64() > 0.1 {
            "Clean"
        } else {
            "Rebuilt"
        };
        let matching_numbers = self.seq.next_f64() > 0.4;

        let days_ago = (self.seq.next_f64() * 180.0) as i64;
        let last_service_date = self.today - Duration::days(days_ago);

        OwnershipRecord {
            vin,
            vehicle_id: vehicle.vehicle_id.clone(),
            manufacturer: vehicle.manufacturer.clone(),
            model: vehicle.model.clone(),
            year,
            body_class: vehicle
                .body_class
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            condition_rating,
            condition_description: condition_description.to_string(),
            mileage,
            mileage_verified,
            registered_state,
            registration_status: registration_status.to_string(),
            title_status: title_status.to_string(),
            exterior_color: exterior_color.to_string(),
            factory_options,
            estimated_value,
            matching_numbers,
            last_service_date: Some(last_service_date),
        }
    }

    /// Five-tier condition via a cumulative-probability roll:
    /// 5% Concours, 15% Excellent, 35% Good, 30% Fair, 15% Project.
    fn draw_condition(&mut self) -> (u8, &'static str) {
        let roll = self.seq.next_f64();
        if roll < 0.05 {
            (5, "Concours")
        } else if roll < 0.20 {
            (4, "Excellent")
        } else if roll < 0.55 {
            (3, "Good")
        } else if roll < 0.85 {
            (2, "Fair")
        } else {
            (1, "Project")
        }
    }

    /// Age-scaled base mileage times a band multiplier:
    /// 20% low, 50% medium, 25% high, 5% very high.
    fn draw_mileage(&mut self, year: i32) -> u64 {
        let age = f64::from(self.today.year() - year);
        let avg_miles_per_year = 5_000.0 + self.seq.next_f64() * 7_000.0;
        let base_mileage = age * avg_miles_per_year;

        let roll = self.seq.next_f64();
        let multiplier = if roll < 0.20 {
            0.3
        } else if roll < 0.70 {
            0.8
        } else if roll < 0.95 {
            1.5
        } else {
            2.5
        };

        (base_mileage * multiplier) as u64
    }

    /// Weighted discrete choice by cumulative subtraction over the fixed
    /// state table.
    fn draw_state(&mut self) -> String {
        let total_weight: f64 = STATE_WEIGHTS.iter().map(|(_, weight)| weight).sum();
        let mut roll = self.seq.next_f64() * total_weight;

        for (code, weight) in STATE_WEIGHTS {
            roll -= weight;
            if roll <= 0.0 {
                return code.to_string();
            }
        }
        "CA".to_string()
    }

    fn draw_color(&mut self, year: i32) -> &'static str {
        let palette = if year < 1970 {
            &PRE_1970_COLORS
        } else {
            &POST_1970_COLORS
        };
        palette[self.seq.next_index(palette.len())]
    }

    /// Better condition preserves more original options. Duplicates are
    /// suppressed while keeping first-drawn order.
    fn draw_options(&mut self, condition_rating: u8) -> Vec<String> {
        let option_count = (f64::from(condition_rating) * self.seq.next_f64() * 3.0) as usize;
        let mut selected = Vec::new();

        for _ in 0..option_count.min(FACTORY_OPTIONS.len()) {
            let option = FACTORY_OPTIONS[self.seq.next_index(FACTORY_OPTIONS.len())];
            if !selected.iter().any(|existing| existing == option) {
                selected.push(option.to_string());
            }
        }

        selected
    }

    /// Condition-tier base value, adjusted for mileage bracket and option
    /// count, with a final ±10% variance draw.
    fn draw_value(&mut self, condition_rating: u8, mileage: u64, option_count: usize) -> u64 {
        let base_value: f64 = match condition_rating {
            5 => 100_000.0,
            4 => 65_000.0,
            3 => 40_000.0,
            2 => 25_000.0,
            _ => 15_000.0,
        };

        let mut value = base_value;
        if mileage < 50_000 {
            value *= 1.2;
        } else if mileage > 150_000 {
            value *= 0.8;
        }

        value += option_count as f64 * 2_000.0;
        value *= 0.9 + self.seq.next_f64() * 0.2;

        value as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(year: i32) -> VehicleRecord {
        VehicleRecord {
            vehicle_id: "synth-ford-mustang-1967".to_string(),
            manufacturer: "Ford".to_string(),
            model: "Mustang".to_string(),
            year,
            body_class: Some("Sports Car".to_string()),
            instance_count: 10,
            data_source: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid date")
    }

    #[test]
    fn condition_rating_and_description_stay_paired() {
        let mut generator = OwnershipGenerator::for_vehicle("pairing", today());
        for index in 0..50 {
            let record = generator.generate(&vehicle(1967), index);
            let expected = match record.condition_rating {
                5 => "Concours",
                4 => "Excellent",
                3 => "Good",
                2 => "Fair",
                _ => "Project",
            };
            assert_eq!(record.condition_description, expected);
        }
    }

    #[test]
    fn options_are_unique_and_from_the_catalog() {
        let mut generator = OwnershipGenerator::for_vehicle("options", today());
        for index in 0..50 {
            let record = generator.generate(&vehicle(1967), index);
            let mut seen = std::collections::HashSet::new();
            for option in &record.factory_options {
                assert!(FACTORY_OPTIONS.contains(&option.as_str()));
                assert!(seen.insert(option.clone()), "duplicate option {option}");
            }
        }
    }

    #[test]
    fn service_date_is_at_most_179_days_back() {
        let mut generator = OwnershipGenerator::for_vehicle("service", today());
        for index in 0..50 {
            let record = generator.generate(&vehicle(1967), index);
            let date = record.last_service_date.expect("seeded records have one");
            let days_back = (today() - date).num_days();
            assert!((0..=179).contains(&days_back), "offset {days_back}");
        }
    }

    #[test]
    fn registered_state_comes_from_the_weight_table() {
        let mut generator = OwnershipGenerator::for_vehicle("states", today());
        for index in 0..50 {
            let record = generator.generate(&vehicle(1967), index);
            assert!(STATE_WEIGHTS
                .iter()
                .any(|(code, _)| *code == record.registered_state));
        }
    }

    #[test]
    fn palette_follows_the_1970_era_split() {
        let mut classic = OwnershipGenerator::for_vehicle("palette-classic", today());
        let record = classic.generate(&vehicle(1969), 0);
        assert!(PRE_1970_COLORS.contains(&record.exterior_color.as_str()));

        let mut modern = OwnershipGenerator::for_vehicle("palette-modern", today());
        let record = modern.generate(&vehicle(1970), 0);
        assert!(POST_1970_COLORS.contains(&record.exterior_color.as_str()));
    }
}
