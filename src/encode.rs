//! Hex Encoding
//!
//! Conversions between byte buffers and their hexadecimal renderings.
//! Decoding is strict: the length must be even and every character a hex
//! digit, with the error carrying the offset of the first offender.

use alloc::string::String;
use alloc::vec::Vec;

use crate::errors::{ToolkitError, ToolkitResult};

/// Decode a hex string into bytes.
///
/// Accepts upper and lower case. `"0AFF"` → `[0x0A, 0xFF]`.
pub fn hex_to_bytes(hex: &str) -> ToolkitResult<Vec<u8>> {
    let chars: Vec<char> = hex.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(ToolkitError::OddHexLength { len: chars.len() });
    }
    let mut bytes = Vec::with_capacity(chars.len() / 2);
    for (i, pair) in chars.chunks(2).enumerate() {
        let hi = pair[0]
            .to_digit(16)
            .ok_or(ToolkitError::InvalidHexDigit { offset: i * 2 })?;
        let lo = pair[1]
            .to_digit(16)
            .ok_or(ToolkitError::InvalidHexDigit { offset: i * 2 + 1 })?;
        bytes.push((hi * 16 + lo) as u8);
    }
    Ok(bytes)
}

/// Encode bytes as uppercase hex, two characters per byte, with an optional
/// separator between bytes.
///
/// `bytes_to_hex(&[10, 255], Some(':'))` → `"0A:FF"`.
pub fn bytes_to_hex(bytes: &[u8], separator: Option<char>) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            if let Some(sep) = separator {
                out.push(sep);
            }
        }
        let hi = b >> 4;
        let lo = b & 0x0F;
        out.push(char::from_digit(u32::from(hi), 16).unwrap_or('0').to_ascii_uppercase());
        out.push(char::from_digit(u32::from(lo), 16).unwrap_or('0').to_ascii_uppercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn decoding() {
        assert_eq!(hex_to_bytes("0AFF").unwrap(), vec![0x0A, 0xFF]);
        assert_eq!(hex_to_bytes("0aff").unwrap(), vec![0x0A, 0xFF]);
        assert_eq!(hex_to_bytes("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn decoding_rejects_odd_length() {
        assert_eq!(
            hex_to_bytes("ABC"),
            Err(ToolkitError::OddHexLength { len: 3 })
        );
    }

    #[test]
    fn decoding_reports_bad_digit_offset() {
        assert_eq!(
            hex_to_bytes("0AZF"),
            Err(ToolkitError::InvalidHexDigit { offset: 2 })
        );
        assert_eq!(
            hex_to_bytes("0A0Z"),
            Err(ToolkitError::InvalidHexDigit { offset: 3 })
        );
    }

    #[test]
    fn encoding() {
        assert_eq!(bytes_to_hex(&[10, 255], None), "0AFF");
        assert_eq!(bytes_to_hex(&[10, 255], Some(':')), "0A:FF");
        assert_eq!(bytes_to_hex(&[], Some(':')), "");
        assert_eq!(bytes_to_hex(&[0], None), "00");
    }

    #[test]
    fn round_trip() {
        let bytes = vec![0x00, 0x7F, 0x80, 0xFF];
        assert_eq!(hex_to_bytes(&bytes_to_hex(&bytes, None)).unwrap(), bytes);
    }
}
