use crate::sequence::SeededSequence;

/// VIN year-code alphabet, 1981 epoch. Skips I, O, Q and Z, U, 0 per the
/// standard; `(year - 1980) mod len` indexes into it.
pub const YEAR_CODE_ALPHABET: &str = "ABCDEFGHJKLMNPRSTVWXY123456789";

/// Plant letters available to the pre-1981 format.
const PRE_1981_PLANTS: [char; 5] = ['R', 'F', 'T', 'D', 'A'];

/// Pre-1981 manufacturer-specific short code, e.g. `7R01C100042`.
///
/// Consumes exactly one draw from the sequence (the plant letter); callers
/// rely on that when replaying a record.
pub fn pre_1981_vin(seq: &mut SeededSequence, year: i32, index: u32) -> String {
    let year_digit = year.rem_euclid(10);
    let plant = PRE_1981_PLANTS[seq.next_index(PRE_1981_PLANTS.len())];
    let serial = 100_000 + u64::from(index);
    format!("{year_digit}{plant}01C{serial:06}")
}

/// Post-1981 17-character code, e.g. `1FOBP40E9BF100042`.
///
/// Fully determined by (manufacturer, year, index); consumes no draws.
pub fn post_1981_vin(manufacturer: &str, year: i32, index: u32) -> String {
    let mfr_code = manufacturer_code(manufacturer);
    let year_code = year_code_for(year);
    let serial = 100_000 + u64::from(index);
    format!("1{mfr_code}BP40E9{year_code}F{serial:06}")
}

/// Two-letter manufacturer code: uppercased, then truncated to two
/// characters and padded with `X` for short names. Uppercasing happens
/// before truncation because it can expand a character ('ß' becomes "SS"),
/// and the code must stay exactly two characters for the VIN length.
fn manufacturer_code(manufacturer: &str) -> String {
    let mut code: String = manufacturer.to_uppercase().chars().take(2).collect();
    while code.chars().count() < 2 {
        code.push('X');
    }
    code
}

fn year_code_for(year: i32) -> char {
    let alphabet: Vec<char> = YEAR_CODE_ALPHABET.chars().collect();
    let index = (year - 1980).rem_euclid(alphabet.len() as i32) as usize;
    alphabet[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pre_1981_shape_and_serial_offset() {
        let mut seq = SeededSequence::new(7);
        let vin = pre_1981_vin(&mut seq, 1967, 0);
        assert_eq!(vin.len(), 11);
        assert!(vin.starts_with('7'));
        assert!(vin.ends_with("100000"));
        assert!(vin.contains("01C"));
    }

    #[test]
    fn post_1981_shape_is_17_characters() {
        let vin = post_1981_vin("Ford", 2020, 42);
        assert_eq!(vin.len(), 17);
        assert!(vin.starts_with("1FO"));
        assert!(vin.ends_with("100042"));
    }

    #[test]
    fn year_code_walks_the_1981_epoch_alphabet() {
        // 1981 is the first post-era year and maps to 'B'.
        assert_eq!(year_code_for(1981), 'B');
        assert_eq!(year_code_for(1982), 'C');
        // The alphabet wraps after 30 years.
        assert_eq!(year_code_for(2011), 'B');
    }

    #[test]
    fn short_manufacturer_names_are_padded() {
        assert_eq!(manufacturer_code("Q"), "QX");
        assert_eq!(manufacturer_code("Chevrolet"), "CH");
    }

    #[test]
    fn expanding_uppercase_never_lengthens_the_code() {
        // 'ß' uppercases to "SS"; the code must still be two characters.
        assert_eq!(manufacturer_code("ß"), "SS");
        assert_eq!(manufacturer_code("ßmw"), "SS");
        assert_eq!(post_1981_vin("ß", 2001, 0).chars().count(), 17);
    }

    #[test]
    fn pre_1981_consumes_exactly_one_draw() {
        let mut with_vin = SeededSequence::new(1234);
        pre_1981_vin(&mut with_vin, 1970, 0);

        let mut reference = SeededSequence::new(1234);
        reference.next_f64();

        assert_eq!(with_vin.next_f64(), reference.next_f64());
    }
}
