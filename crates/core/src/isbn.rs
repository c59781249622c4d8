//! ISBN checksum validation.
//!
//! Accepts ISBN-10 and ISBN-13 with optional hyphen or space separators.
//! Only the checksum and shape are verified; registration-group semantics
//! are out of scope.

/// Check whether `raw` is a checksum-valid ISBN-10 or ISBN-13.
///
/// # Examples
///
/// ```
/// use libris_core::isbn::is_valid;
/// assert!(is_valid("978-0-441-01359-3"));
/// assert!(is_valid("0-441-17271-7"));
/// assert!(!is_valid("978-0-441-01359-0"));
/// ```
pub fn is_valid(raw: &str) -> bool {
    let normalized: Vec<char> = raw
        .chars()
        .filter(|c| *c != '-' && *c != ' ')
        .collect();

    match normalized.len() {
        10 => is_valid_isbn10(&normalized),
        13 => is_valid_isbn13(&normalized),
        _ => false,
    }
}

/// ISBN-10: nine digits plus a check character (digit or `X` = 10);
/// the weighted sum with weights 10..1 must be divisible by 11.
fn is_valid_isbn10(chars: &[char]) -> bool {
    let mut sum: u32 = 0;
    for (i, c) in chars.iter().enumerate() {
        let value = match c.to_digit(10) {
            Some(d) => d,
            // 'X' is only legal as the check character.
            None if (*c == 'X' || *c == 'x') && i == 9 => 10,
            None => return false,
        };
        sum += value * (10 - i as u32);
    }
    sum % 11 == 0
}

/// ISBN-13: a 978/979-prefixed EAN-13; alternating 1/3 weights must sum
/// to a multiple of 10.
fn is_valid_isbn13(chars: &[char]) -> bool {
    if !(chars.starts_with(&['9', '7', '8']) || chars.starts_with(&['9', '7', '9'])) {
        return false;
    }
    let mut sum: u32 = 0;
    for (i, c) in chars.iter().enumerate() {
        let Some(d) = c.to_digit(10) else {
            return false;
        };
        sum += d * if i % 2 == 0 { 1 } else { 3 };
    }
    sum % 10 == 0
}
