//! Checksums and Entropy
//!
//! The Luhn check digit algorithm (credit cards, IMEI), IMEISV-to-IMEI
//! conversion built on it, and Shannon entropy for eyeballing how random an
//! identifier actually is.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};

use libm::log2;

/// Run the Luhn check over a decimal digit string.
///
/// Walking from the rightmost digit, every second digit is doubled and
/// digit-summed before adding. Returns the validity flag together with the
/// running total divided by ten, so a valid `35956805108414` yields
/// `(true, 6.0)` and the off-by-one `35956805108413` yields `(false, 5.9)`.
/// Any non-digit character poisons the total and fails the check.
pub fn luhn_digits(digits: &str) -> (bool, f64) {
    let total = digits.chars().rev().enumerate().fold(0.0, |acc, (i, c)| {
        let d = c.to_digit(10).map_or(f64::NAN, f64::from);
        if i % 2 == 0 {
            acc + d
        } else {
            // doubling a single digit sums to at most 9 + 9; the digit sum
            // of 2d is 2d - 9 once it spills into two digits
            let doubled = d * 2.0;
            acc + if doubled > 9.0 { doubled - 9.0 } else { doubled }
        }
    });
    (total % 10.0 == 0.0, total / 10.0)
}

/// [`luhn_digits`] over the decimal rendering of a number
pub fn luhn(n: u64) -> (bool, f64) {
    luhn_digits(&n.to_string())
}

/// Convert a 16-digit IMEISV into a 15-digit IMEI.
///
/// Takes the leading 14 digits (TAC + serial) and appends the Luhn check
/// digit. When the prefix does not produce a clean check, the input is
/// returned unchanged.
pub fn imeisv_to_imei(n: &str) -> String {
    let prefix: String = n.chars().take(14).collect();
    let (valid, check) = luhn_digits(&prefix);
    if valid {
        format!("{}{}", prefix, check as u64)
    } else {
        n.to_string()
    }
}

/// Shannon entropy of a string in bits per symbol.
///
/// `"0123"` measures 2.0; a single repeated character measures 0.0.
pub fn shannon(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }
    let mut counts: BTreeMap<char, u32> = BTreeMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    let len = s.chars().count() as f64;
    counts.values().fold(0.0, |h, &n| {
        let p = f64::from(n) / len;
        h - p * log2(p)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luhn_known_values() {
        assert_eq!(luhn(35956805108414), (true, 6.0));
        assert_eq!(luhn(35956805108413), (false, 5.9));
    }

    #[test]
    fn luhn_rejects_non_digits() {
        let (valid, _) = luhn_digits("1234x");
        assert!(!valid);
    }

    #[test]
    fn imeisv_conversion() {
        assert_eq!(imeisv_to_imei("3595680510841401"), "359568051084146");
        assert_eq!(imeisv_to_imei("86488102222183"), "864881022221836");
        // Prefix that fails the check comes back untouched
        assert_eq!(imeisv_to_imei("3595680510841399"), "3595680510841399");
    }

    #[test]
    fn entropy_of_uniform_alphabets() {
        assert_eq!(shannon("0"), 0.0);
        assert_eq!(shannon("01"), 1.0);
        assert_eq!(shannon("0123"), 2.0);
        assert_eq!(shannon("01234567"), 3.0);
        assert_eq!(shannon("0123456789abcdef"), 4.0);
    }

    #[test]
    fn entropy_of_skewed_string() {
        // Rosetta Code reference value for "1223334444"
        let h = shannon("1223334444");
        assert!((h - 1.846439).abs() < 1e-6);
    }
}
