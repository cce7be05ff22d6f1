//! Checksum validation for Brazilian individual taxpayer identifiers (CPF).
//!
//! A CPF carries nine base digits followed by two check digits. Each check
//! digit is a weighted modulo-11 sum over the digits before it, so a valid
//! identifier is self-verifying and no lookup is needed.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Number of digits in a normalized CPF.
pub const CPF_LENGTH: usize = 11;

const BASE_LENGTH: usize = 9;
const FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Returns `true` when `input` encodes a CPF whose check digits match its base.
///
/// Formatting characters (dots, dashes, spaces, anything that is not a decimal
/// digit) are ignored. Blank input, a digit count other than eleven, digits
/// outside ASCII and sequences of one repeated digit are all rejected.
pub fn validate(input: &str) -> bool {
    if input.trim().is_empty() {
        return false;
    }

    let digits = normalize(input);
    if digits.chars().count() != CPF_LENGTH || !digits.is_ascii() {
        return false;
    }

    let bytes = digits.as_bytes();
    if bytes.iter().all(|&digit| digit == bytes[0]) {
        return false;
    }

    let (base, supplied) = digits.split_at(BASE_LENGTH);
    let mut base_digits = [0u8; BASE_LENGTH];
    for (slot, byte) in base_digits.iter_mut().zip(base.bytes()) {
        *slot = byte - b'0';
    }

    let [first, second] = check_digits(&base_digits);
    let computed = [char::from(b'0' + first), char::from(b'0' + second)];
    supplied.chars().eq(computed)
}

/// Same as [`validate`], treating an absent identifier as invalid.
pub fn validate_optional(input: Option<&str>) -> bool {
    input.is_some_and(validate)
}

/// Keeps only the decimal digits of `input`, in their original order.
///
/// Any Unicode decimal digit (general category `Nd`) is kept so that it counts
/// toward the length; other numerals such as superscripts are dropped.
pub fn normalize(input: &str) -> String {
    input.chars().filter(|&c| is_decimal_digit(c)).collect()
}

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Computes both check digits for a nine-digit base.
///
/// Every element of `base` must be in `0..=9`.
pub fn check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = check_digit(base, &FIRST_WEIGHTS);

    let mut extended = [0u8; 10];
    extended[..BASE_LENGTH].copy_from_slice(base);
    extended[BASE_LENGTH] = first;
    let second = check_digit(&extended, &SECOND_WEIGHTS);

    [first, second]
}

fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&digit, &weight)| u32::from(digit) * weight)
        .sum();

    // A remainder of 10 has no single-digit representation and wraps to 0.
    match (sum * 10) % 11 {
        10 => 0,
        remainder => remainder as u8,
    }
}
