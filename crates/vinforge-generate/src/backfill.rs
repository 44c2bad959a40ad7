//! Unseeded backfill strategy for vehicles that need records without a
//! reproducibility requirement.
//!
//! This is a second, deliberately separate VIN strategy: it draws from a
//! caller-supplied [`rand::Rng`] instead of the seeded sequence, derives the
//! WMI prefix from a manufacturer lookup table, and shapes condition and
//! value with body-class-conditioned distributions. Do not unify it with
//! [`crate::ownership::OwnershipGenerator`]; the two make different
//! determinism guarantees.

use chrono::{Datelike, NaiveDate};
use rand::Rng;

use vinforge_core::{OwnershipRecord, VehicleRecord};

/// World Manufacturer Identifier prefixes, with `1XX` for anything
/// uncatalogued.
const WMI_TABLE: [(&str, &str); 16] = [
    ("Ford", "1FA"),
    ("Lincoln", "1LN"),
    ("Mercury", "1ME"),
    ("Chevrolet", "1GC"),
    ("Buick", "1G4"),
    ("Cadillac", "1GY"),
    ("Pontiac", "1G2"),
    ("Oldsmobile", "1G3"),
    ("GMC", "1GT"),
    ("Dodge", "1B3"),
    ("Chrysler", "1C3"),
    ("Plymouth", "1P3"),
    ("Jeep", "1J4"),
    ("Ram", "1D7"),
    ("Tesla", "5YJ"),
    ("Rivian", "7JR"),
];

const DEFAULT_WMI: &str = "1XX";

/// Characters legal in the descriptor section and plant code.
const VIN_CHARSET: &str = "ABCDEFGHJKLMNPRSTUVWXYZ0123456789";
const PLANT_CHARSET: &str = "ABCDEFGHJKLMNPRSTUVWXYZ";

/// Year codes cover 1950-2025; out-of-table years fall back to `X`.
const YEAR_CODE_ALPHABET: &str = "ABCDEFGHJKLMNPRSTVWXY123456789";
const YEAR_TABLE_START: i32 = 1950;
const YEAR_TABLE_END: i32 = 2025;

/// US states weighted roughly by population.
const STATE_WEIGHTS: [(&str, f64); 50] = [
    ("CA", 15.0),
    ("TX", 8.0),
    ("FL", 7.0),
    ("NY", 6.0),
    ("PA", 5.0),
    ("IL", 5.0),
    ("OH", 4.0),
    ("GA", 4.0),
    ("NC", 4.0),
    ("MI", 4.0),
    ("NJ", 3.0),
    ("VA", 3.0),
    ("WA", 3.0),
    ("AZ", 3.0),
    ("MA", 3.0),
    ("TN", 3.0),
    ("IN", 3.0),
    ("MO", 2.0),
    ("MD", 2.0),
    ("WI", 2.0),
    ("CO", 2.0),
    ("MN", 2.0),
    ("SC", 2.0),
    ("AL", 2.0),
    ("LA", 2.0),
    ("KY", 2.0),
    ("OR", 2.0),
    ("OK", 2.0),
    ("CT", 1.0),
    ("UT", 1.0),
    ("IA", 1.0),
    ("NV", 1.0),
    ("AR", 1.0),
    ("MS", 1.0),
    ("KS", 1.0),
    ("NM", 1.0),
    ("NE", 1.0),
    ("WV", 1.0),
    ("ID", 1.0),
    ("HI", 1.0),
    ("NH", 1.0),
    ("ME", 1.0),
    ("RI", 1.0),
    ("MT", 1.0),
    ("DE", 1.0),
    ("SD", 1.0),
    ("ND", 1.0),
    ("AK", 1.0),
    ("VT", 1.0),
    ("WY", 1.0),
];

const TITLE_WEIGHTS: [(&str, f64); 7] = [
    ("Clean", 0.75),
    ("Salvage", 0.08),
    ("Rebuilt", 0.06),
    ("Flood", 0.03),
    ("Theft Recovery", 0.03),
    ("Lemon", 0.02),
    ("Junk", 0.03),
];

const MODERN_COLORS: [&str; 12] = [
    "White", "Black", "Silver", "Gray", "Red", "Blue", "Green", "Yellow", "Orange", "Brown",
    "Tan", "Beige",
];
const CLASSIC_COLORS: [&str; 10] = [
    "White",
    "Black",
    "Red",
    "Blue",
    "Green",
    "Yellow",
    "Cream",
    "Tan",
    "Turquoise",
    "Pink",
];

const REGISTRATION_STATUSES: [&str; 3] = ["Current", "Expired", "Pending"];

/// Condition tier weights for one body class: Excellent, Good, Fair, Poor.
fn condition_weights(body_class: &str) -> [f64; 4] {
    match body_class {
        "Sedan" => [0.2, 0.5, 0.25, 0.05],
        "Coupe" => [0.25, 0.45, 0.25, 0.05],
        "Convertible" => [0.3, 0.4, 0.25, 0.05],
        "Pickup" => [0.15, 0.45, 0.3, 0.1],
        "SUV" => [0.2, 0.5, 0.25, 0.05],
        "Van" => [0.1, 0.4, 0.35, 0.15],
        "Wagon" => [0.25, 0.45, 0.25, 0.05],
        _ => [0.2, 0.5, 0.25, 0.05],
    }
}

const CONDITION_NAMES: [&str; 4] = ["Excellent", "Good", "Fair", "Poor"];

/// Synthetic but realistic-looking 17-character VIN from the WMI table.
pub fn backfill_vin<R: Rng + ?Sized>(manufacturer: &str, year: i32, rng: &mut R) -> String {
    let wmi = WMI_TABLE
        .iter()
        .find(|(name, _)| *name == manufacturer)
        .map(|(_, wmi)| *wmi)
        .unwrap_or(DEFAULT_WMI);

    let descriptor: String = (0..6).map(|_| pick_char(VIN_CHARSET, rng)).collect();
    let check_digit = rng.random_range(0..=9);
    let year_code = year_code_for(year);
    let plant = pick_char(PLANT_CHARSET, rng);
    let serial = rng.random_range(100_000..=999_999);

    format!("{wmi}{descriptor}{check_digit}{year_code}{plant}{serial}")
}

fn year_code_for(year: i32) -> char {
    if !(YEAR_TABLE_START..=YEAR_TABLE_END).contains(&year) {
        return 'X';
    }
    let alphabet: Vec<char> = YEAR_CODE_ALPHABET.chars().collect();
    let index = ((year - YEAR_TABLE_START).rem_euclid(alphabet.len() as i32)) as usize;
    alphabet[index]
}

fn pick_char<R: Rng + ?Sized>(charset: &str, rng: &mut R) -> char {
    let chars: Vec<char> = charset.chars().collect();
    chars[rng.random_range(0..chars.len())]
}

fn weighted_choice<'a, R: Rng + ?Sized>(choices: &[(&'a str, f64)], rng: &mut R) -> &'a str {
    let total: f64 = choices.iter().map(|(_, weight)| weight).sum();
    let roll = rng.random_range(0.0..total);
    let mut upto = 0.0;
    for (value, weight) in choices {
        if upto + weight >= roll {
            return value;
        }
        upto += weight;
    }
    choices[choices.len() - 1].0
}

/// One backfill record with body-class-conditioned condition, mileage, and
/// value distributions. Not reproducible across runs by design.
pub fn backfill_record<R: Rng + ?Sized>(
    vehicle: &VehicleRecord,
    today: NaiveDate,
    rng: &mut R,
) -> OwnershipRecord {
    let body_class = vehicle
        .body_class
        .clone()
        .unwrap_or_else(|| "Sedan".to_string());

    let vin = backfill_vin(&vehicle.manufacturer, vehicle.year, rng);
    let registered_state = weighted_choice(&STATE_WEIGHTS, rng).to_string();

    let weights = condition_weights(&body_class);
    let condition_choices: Vec<(&str, f64)> = CONDITION_NAMES
        .iter()
        .copied()
        .zip(weights)
        .collect();
    let condition = weighted_choice(&condition_choices, rng);

    // Condition on a 1-10 scale, unlike the seeded generator's 1-5 tiers.
    let condition_rating = match condition {
        "Excellent" => rng.random_range(9..=10),
        "Good" => rng.random_range(7..=8),
        "Fair" => rng.random_range(4..=6),
        _ => rng.random_range(1..=3),
    };

    let age = (today.year() - vehicle.year).max(0) as f64;
    let avg_miles_per_year = match condition {
        "Excellent" => 8_000.0,
        "Good" => 12_000.0,
        "Fair" => 15_000.0,
        _ => 18_000.0,
    };
    let mileage = ((age * avg_miles_per_year * rng.random_range(0.7..1.3)) as u64).max(100);

    let title_status = weighted_choice(&TITLE_WEIGHTS, rng).to_string();

    let exterior_color = if vehicle.year < 1970 {
        CLASSIC_COLORS[rng.random_range(0..CLASSIC_COLORS.len())]
    } else {
        MODERN_COLORS[rng.random_range(0..MODERN_COLORS.len())]
    };

    let base_value = match condition {
        "Excellent" => 35_000.0,
        "Good" => 25_000.0,
        "Fair" => 15_000.0,
        _ => 8_000.0,
    };
    // Classics appreciate with age; modern vehicles depreciate.
    let age_factor = if vehicle.year < 1980 {
        1.0 + age * 0.02
    } else {
        (1.0 - age * 0.05).max(0.2)
    };
    let mileage_factor = (1.0 - (mileage as f64 / 200_000.0) * 0.3).max(0.5);
    let estimated_value =
        ((base_value * age_factor * mileage_factor * rng.random_range(0.9..1.1)) as u64).max(1_000);

    OwnershipRecord {
        vin,
        vehicle_id: vehicle.vehicle_id.clone(),
        manufacturer: vehicle.manufacturer.clone(),
        model: vehicle.model.clone(),
        year: vehicle.year,
        body_class,
        condition_rating,
        condition_description: condition.to_string(),
        mileage,
        mileage_verified: rng.random_bool(0.6),
        registered_state,
        registration_status: REGISTRATION_STATUSES[rng.random_range(0..REGISTRATION_STATUSES.len())]
            .to_string(),
        title_status,
        exterior_color: exterior_color.to_string(),
        factory_options: Vec::new(),
        estimated_value,
        matching_numbers: rng.random_bool(0.3),
        last_service_date: None,
    }
}
