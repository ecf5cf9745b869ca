//! Numeric Classification and Parsing
//!
//! ## Overview
//!
//! Telemetry payloads rarely agree on how a number looks. This module
//! classifies and parses the four textual forms seen in the wild:
//!
//! - decimal: optionally signed, optionally fractional (`"42"`, `"-3.25"`)
//! - hexadecimal: `0x`/`0X` prefixed, optionally signed (`"0x1A"`, `"-0xff"`)
//! - binary: `0b`/`0B` prefixed, optionally signed (`"0b1011"`)
//! - exponential: `mantissa[eE]exponent` (`"1.2e5"`, `"-12E-3"`)
//!
//! Input arrives as a [`Token`], a closed sum over the value shapes a
//! dynamic payload can take. Classification ([`parses_as_num`]) is separate
//! from parsing ([`parse_num_or`]) so callers can gate cheaply before
//! committing to a default value.
//!
//! ## Parsing precedence
//!
//! When more than one form could match, the first successful parse wins, in
//! the order binary → hex → exponential → plain decimal. Each sub-parser
//! reports success explicitly via `Option`, so a legitimately parsed zero
//! from an early form is a final answer and does not fall through to later
//! forms. See DESIGN.md for the history behind this ordering.
//!
//! ## Leniency rules
//!
//! - A list is never numeric, even a single-element one. Naive coercion
//!   would happily read `[123]` as `123`; this module will not.
//! - Text that matches none of the four grammars still classifies as numeric
//!   when the whole trimmed string reads as a finite float. This is what
//!   admits short exponentials like `"1e5"` whose one-digit mantissa the
//!   exponential grammar rejects.
//! - Failure never panics: classification returns `false`, parsing returns
//!   the caller-supplied default.

use libm::{pow, trunc};

/// A value to be classified or parsed.
///
/// The closed set of shapes a dynamically typed payload value can take on
/// its way into the numeric parser. Anything structured beyond a flat list
/// is by definition not numeric and has no variant here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    /// Textual candidate, e.g. `"0x1A"` or `"-3.25"`
    Text(&'a str),
    /// Already-numeric candidate; only finite values classify
    Num(f64),
    /// A list of readings. Never numeric, regardless of arity.
    List(&'a [f64]),
}

impl<'a> From<&'a str> for Token<'a> {
    fn from(s: &'a str) -> Self {
        Token::Text(s)
    }
}

impl From<f64> for Token<'_> {
    fn from(n: f64) -> Self {
        Token::Num(n)
    }
}

impl<'a> From<&'a [f64]> for Token<'a> {
    fn from(xs: &'a [f64]) -> Self {
        Token::List(xs)
    }
}

/// Largest integer losslessly representable in an `f64` (2^53 - 1)
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn split_sign(s: &str) -> (f64, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a signed `0b`/`0B` prefixed binary string, e.g. `"-0b101"` → `-5.0`.
///
/// Digits accumulate into an `f64`, so inputs wider than 53 bits lose
/// precision rather than overflow.
pub fn parse_binary_str(s: &str) -> Option<f64> {
    let (sign, rest) = split_sign(s);
    let digits = rest.strip_prefix("0b").or_else(|| rest.strip_prefix("0B"))?;
    if !all_digits(digits) || digits.bytes().any(|b| b > b'1') {
        return None;
    }
    let value = digits
        .bytes()
        .fold(0.0, |acc, b| acc * 2.0 + f64::from(b - b'0'));
    Some(sign * value)
}

/// Parse a signed `0x`/`0X` prefixed hex string, e.g. `"0x1A"` → `26.0`.
pub fn parse_hex_str(s: &str) -> Option<f64> {
    let (sign, rest) = split_sign(s);
    let digits = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X"))?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = digits.chars().fold(0.0, |acc, c| {
        acc * 16.0 + f64::from(c.to_digit(16).unwrap_or(0))
    });
    Some(sign * value)
}

/// The exponential grammar wants at least one digit on each side of the
/// optional dot, so the shortest accepted mantissa is two characters.
fn scan_mantissa(s: &str) -> Option<f64> {
    let (_, rest) = split_sign(s);
    let well_formed = match rest.split_once('.') {
        Some((int, frac)) => all_digits(int) && all_digits(frac),
        None => rest.len() >= 2 && all_digits(rest),
    };
    if well_formed {
        s.parse::<f64>().ok()
    } else {
        None
    }
}

/// Parse an exponential string such as `"1.2e5"` or `"-12E-3"`.
pub fn parse_expo_str(s: &str) -> Option<f64> {
    let at = s.find(|c| c == 'e' || c == 'E')?;
    let mantissa = scan_mantissa(&s[..at])?;
    let (exp_sign, exp_digits) = split_sign(&s[at + 1..]);
    if !all_digits(exp_digits) {
        return None;
    }
    let exponent: f64 = exp_digits.parse().ok()?;
    Some(mantissa * pow(10.0, exp_sign * exponent))
}

fn is_decimal_form(s: &str) -> bool {
    let (_, rest) = split_sign(s);
    match rest.split_once('.') {
        Some((int, frac)) => all_digits(frac) && (int.is_empty() || all_digits(int)),
        None => all_digits(rest),
    }
}

fn coerces_to_finite(s: &str) -> bool {
    s.trim().parse::<f64>().map_or(false, |v| v.is_finite())
}

/// Will the token read as a number (float or int)?
pub fn parses_as_num(token: Token<'_>) -> bool {
    match token {
        Token::Num(n) => n.is_finite(),
        Token::List(_) => false,
        Token::Text(s) => {
            is_decimal_form(s)
                || parse_hex_str(s).is_some()
                || parse_binary_str(s).is_some()
                || parse_expo_str(s).is_some()
                || coerces_to_finite(s)
        }
    }
}

/// Parse the token as a float, or hand back `default` when classification
/// fails. Precedence: binary → hex → exponential → decimal.
pub fn parse_num_or(default: f64, token: Token<'_>) -> f64 {
    if !parses_as_num(token) {
        return default;
    }
    match token {
        Token::Num(n) => n,
        Token::List(_) => default,
        Token::Text(s) => parse_binary_str(s)
            .or_else(|| parse_hex_str(s))
            .or_else(|| parse_expo_str(s))
            .or_else(|| s.trim().parse::<f64>().ok())
            .unwrap_or(default),
    }
}

/// Will the token read as a number with no fractional component?
pub fn parses_as_int(token: Token<'_>) -> bool {
    if !parses_as_num(token) {
        return false;
    }
    let v = parse_num_or(f64::NAN, token);
    v == trunc(v)
}

/// Parse the token as an integer-valued float, or hand back `default`.
///
/// The value is returned as `f64` because hex and exponential forms parse
/// to magnitudes beyond any fixed-width integer; callers that need a machine
/// integer should range-check before casting.
pub fn parse_int_or(default: f64, token: Token<'_>) -> f64 {
    if parses_as_int(token) {
        parse_num_or(default, token)
    } else {
        default
    }
}

/// Will the token read as a float that actually carries decimals?
pub fn parses_as_float_with_decimals(token: Token<'_>) -> bool {
    if !parses_as_num(token) {
        return false;
    }
    parse_num_or(f64::NAN, token) % 1.0 != 0.0
}

/// Convert text to a number only when it is safe to do so.
///
/// Strings with a meaningful leading zero (`"007"`, `"0x1A"`) stay text, as
/// do magnitudes above [`MAX_SAFE_INTEGER`] which would silently lose digits.
/// `None` means "keep the original".
pub fn maybe_number(s: &str) -> Option<f64> {
    if s.len() > 1 && s.starts_with('0') && !s.starts_with("0.") {
        return None;
    }
    let p = s.trim().parse::<f64>().ok()?;
    if p > MAX_SAFE_INTEGER {
        return None;
    }
    Some(p)
}

/// Convert `"true"`/`"false"` to a boolean; anything else is `None`.
pub fn maybe_bool(s: &str) -> Option<bool> {
    match s {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
