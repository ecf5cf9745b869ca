//! Bit Manipulation Helpers
//!
//! Single-bit operations on `u32` words plus binary-string round trips.
//! Bit positions count from 0 at the least significant end. Positions at or
//! beyond the word width address no bit: reads give 0, writes hand the word
//! back unchanged.

use alloc::format;
use alloc::string::String;

fn bit_mask(n: u32) -> u32 {
    1u32.checked_shl(n).unwrap_or(0)
}

/// Value of the bit at position `n` of `b`, either 0 or 1
pub fn get_bit_at(b: u32, n: u32) -> u32 {
    b.checked_shr(n).unwrap_or(0) & 1
}

/// `b` with the bit at position `n` set to 1
pub fn set_bit_at(b: u32, n: u32) -> u32 {
    b | bit_mask(n)
}

/// `b` with the bit at position `n` cleared to 0
pub fn clear_bit_at(b: u32, n: u32) -> u32 {
    b & !bit_mask(n)
}

/// `b` with the bit at position `n` flipped
pub fn invert_bit_at(b: u32, n: u32) -> u32 {
    b ^ bit_mask(n)
}

/// True iff the bit at position `n` is 1
pub fn has_bit_at(b: u32, n: u32) -> bool {
    get_bit_at(b, n) == 1
}

/// Render a number as its binary digits, e.g. `11` → `"1011"`
pub fn num_to_bin_string(n: u32) -> String {
    format!("{n:b}")
}

/// Parse a plain binary digit string, e.g. `"1011"` → `11`.
///
/// `None` for anything that is not pure binary digits. For the signed,
/// `0b`-prefixed textual form see [`crate::parse::parse_binary_str`].
pub fn bin_string_to_num(s: &str) -> Option<u32> {
    u32::from_str_radix(s, 2).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_bit_ops() {
        assert_eq!(get_bit_at(0b1000, 3), 1);
        assert_eq!(get_bit_at(0b1000, 2), 0);
        assert_eq!(set_bit_at(0b1010, 2), 0b1110);
        assert_eq!(set_bit_at(0b1010, 0), 0b1011);
        assert_eq!(clear_bit_at(0b1110, 2), 0b1010);
        assert_eq!(invert_bit_at(0b1010, 1), 0b1000);
        assert_eq!(invert_bit_at(0b1000, 1), 0b1010);
        assert!(has_bit_at(0b1000, 3));
        assert!(!has_bit_at(0b1000, 6));
    }

    #[test]
    fn positions_past_the_word_width_are_inert() {
        assert_eq!(get_bit_at(u32::MAX, 32), 0);
        assert_eq!(set_bit_at(0b1010, 32), 0b1010);
        assert_eq!(clear_bit_at(u32::MAX, 40), u32::MAX);
        assert_eq!(invert_bit_at(0b1010, 99), 0b1010);
        assert!(!has_bit_at(u32::MAX, 32));
    }

    #[test]
    fn binary_string_round_trip() {
        assert_eq!(num_to_bin_string(11), "1011");
        assert_eq!(bin_string_to_num("1011"), Some(11));
        assert_eq!(bin_string_to_num(&num_to_bin_string(u32::MAX)), Some(u32::MAX));
        assert_eq!(bin_string_to_num("10x1"), None);
    }
}
