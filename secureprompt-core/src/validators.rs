// File: secureprompt-core/src/validators.rs
//! Programmatic validation functions for specific sensitive data types.
//!
//! Regex rules only describe the shape of a value. These checks reject
//! matches whose digits cannot belong to a real identifier, which keeps order
//! numbers and timestamps from being redacted as personal data.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;
use once_cell::sync::Lazy;

/// Validates a US SSN in "XXX-XX-XXXX" form against the known invalid ranges.
pub fn is_valid_ssn_programmatically(ssn: &str) -> bool {
    let mut parts = ssn.split('-');

    let (Some(area), Some(group), Some(serial), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if area.len() != 3 || group.len() != 2 || serial.len() != 4 {
        return false;
    }

    let Some(area_num) = area.parse::<u16>().ok() else { return false; };
    let Some(group_num) = group.parse::<u8>().ok() else { return false; };
    let Some(serial_num) = serial.parse::<u16>().ok() else { return false; };

    let invalid_area = (area_num == 0) || (area_num == 666) || (area_num >= 900);
    !(invalid_area || group_num == 0 || serial_num == 0)
}

/// Province codes that can open an Indonesian NIK.
static NIK_PROVINCE_CODES: Lazy<HashSet<u32>> = Lazy::new(|| {
    let mut set = HashSet::new();
    set.extend([11, 12, 13, 14, 15, 16, 17, 18, 19, 21]);
    set.extend(31..=36);
    set.extend([51, 52, 53]);
    set.extend(61..=65);
    set.extend(71..=76);
    set.extend([81, 82]);
    set.extend(91..=97);
    set
});

/// Validates the structure of a 16-digit Indonesian NIK.
///
/// Layout: province (2), regency (2), district (2), birth day (2, plus 40
/// for women), birth month (2), birth year (2), serial (4).
pub fn is_valid_nik_programmatically(nik: &str) -> bool {
    const NIK_LENGTH: usize = 16;

    if nik.len() != NIK_LENGTH || !nik.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let field = |range: std::ops::Range<usize>| nik[range].parse::<u32>().unwrap_or(0);

    if !NIK_PROVINCE_CODES.contains(&field(0..2)) {
        return false;
    }

    let day = field(6..8);
    let day = if day > 40 { day - 40 } else { day };
    let month = field(8..10);
    let serial = field(12..16);

    (1..=31).contains(&day) && (1..=12).contains(&month) && serial != 0
}

/// Validates a number using the Luhn algorithm.
///
/// The Luhn algorithm, also known as the Mod 10 algorithm, is a simple checksum
/// formula used to validate a variety of identification numbers, such as
/// credit card numbers.
pub fn is_valid_luhn(num_str: &str) -> bool {
    let mut sum = 0;
    let mut alternate = false;

    for c in num_str.chars().rev() {
        let Some(mut digit) = c.to_digit(10) else { return false; };

        if alternate {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        alternate = !alternate;
    }

    sum % 10 == 0
}

/// Strips separators from a card number and applies the Luhn check.
pub fn is_valid_credit_card_programmatically(cc_number: &str) -> bool {
    let digits: String = cc_number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 13 {
        return false;
    }
    is_valid_luhn(&digits)
}
