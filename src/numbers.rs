//! Assorted Numeric Helpers
//!
//! Rounding, integer division pairs, quadratic roots, linear extrapolation,
//! human-readable byte counts, and English number names. All pure, all
//! `libm`-backed so they work without std.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use libm::{fabs, floor, log, log10, pow, round, sqrt};

/// Round to the given number of decimal places
pub fn p_round(precision: i32, n: f64) -> f64 {
    let factor = pow(10.0, f64::from(precision));
    round(n * factor) / factor
}

/// Round to the given number of significant digits
pub fn to_precision(x: f64, digits: i32) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    let magnitude = floor(log10(fabs(x))) as i32;
    let shift = digits - 1 - magnitude;
    // Powers of ten are exact in an f64 up to 1e22; scaling in the exact
    // direction keeps results like 120000 from coming back as 119999.99…
    if shift >= 0 {
        let factor = pow(10.0, f64::from(shift));
        round(x * factor) / factor
    } else {
        let factor = pow(10.0, f64::from(-shift));
        round(x / factor) * factor
    }
}

/// Quotient (floored) and remainder of `dividend / divisor`
pub fn div_mod(dividend: f64, divisor: f64) -> (f64, f64) {
    (floor(dividend / divisor), dividend % divisor)
}

/// Positive root of `ax² + bx - c = 0` via the quadratic formula
pub fn factorize(a: f64, b: f64, c: f64) -> f64 {
    (-b + sqrt(pow(b, 2.0) - 4.0 * a * (-c))) / (2.0 * a)
}

/// Chop the fractional bits off a number, truncating toward zero.
///
/// Unlike a floor, `-1.123` becomes `-1`, not `-2`.
pub fn to_int(n: f64) -> i32 {
    n as i32
}

/// Strict even test
pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// Is `x` an exact multiple of `n`?
pub fn is_divisible_by(n: i64, x: i64) -> bool {
    x % n == 0
}

/// Distinguish `-0.0` from `0.0`
pub fn is_negative_zero(x: f64) -> bool {
    x == 0.0 && x.is_sign_negative()
}

/// Reverse the decimal rendering of a number and read it back.
///
/// `123.456` becomes `654.321`. Signed input reverses into nonsense and
/// comes back as `NaN`.
pub fn num_reverse(n: f64) -> f64 {
    let reversed: String = format!("{n}").chars().rev().collect();
    reversed.parse().unwrap_or(f64::NAN)
}

/// Given two coordinates on a line through the origin with the same slope,
/// extrapolate the y value at `x3`.
///
/// A horizontal pair pins y; a vertical pair has no answer.
pub fn extrapolate(p1: (f64, f64), p2: (f64, f64), x3: f64) -> Option<(f64, f64)> {
    let ((x1, y1), (x2, y2)) = (p1, p2);
    if y1 == y2 {
        return Some((x3, y1));
    }
    if x1 == x2 {
        return None;
    }
    Some((x3, x3 * ((y2 - y1) / (x2 - x1))))
}

/// Format a byte count as a human-readable string with the given number of
/// significant digits, e.g. `format_bytes(2, 1536.0)` → `"1.5 kB"`.
pub fn format_bytes(precision: i32, bytes: f64) -> String {
    if bytes == 0.0 {
        return "0".to_string();
    }
    const K: f64 = 1024.0;
    const SIZES: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
    let digits = if precision > 0 { precision } else { 2 };
    // Finite f64 values can exceed 1024^8; saturate at the largest unit
    let i = (floor(log(bytes) / log(K)) as usize).min(SIZES.len() - 1);
    let scaled = to_precision(bytes / pow(K, i as f64), digits);
    format!("{} {}", scaled, SIZES[i])
}

const UNITS: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const BIG: [&str; 7] = [
    "", "thousand", "million", "billion", "trillion", "quadrillion", "quintillion",
];

/// Spell a number out in English, e.g. `1234` →
/// `"one thousand, two hundred and thirty four"`.
pub fn english_number(value: i64) -> String {
    if value < 0 {
        // unsigned_abs keeps i64::MIN representable
        format!("negative {}", english_unsigned(value.unsigned_abs()))
    } else {
        english_unsigned(value as u64)
    }
}

fn english_unsigned(value: u64) -> String {
    if value < 20 {
        return UNITS[value as usize].to_string();
    }
    if value < 100 {
        let (q, r) = (value / 10, value % 10);
        return format!("{} {}", TENS[q as usize], UNITS[r as usize]).replacen(" zero", "", 1);
    }
    if value < 1000 {
        let (q, r) = (value / 100, value % 100);
        return format!("{} hundred and {}", english_unsigned(q), english_unsigned(r))
            .replacen(" and zero", "", 1);
    }

    // Break into thousands chunks, name each, then stitch them back together
    // from the most significant end.
    let mut chunks = Vec::new();
    let mut rest = value;
    while rest != 0 {
        chunks.push(rest % 1000);
        rest /= 1000;
    }
    let mut text: Vec<String> = Vec::new();
    for (i, &chunk) in chunks.iter().enumerate() {
        if chunk > 0 {
            if i == 0 {
                text.push(english_unsigned(chunk));
            } else {
                text.push(format!("{} {}", english_unsigned(chunk), BIG[i]));
            }
            if i == 0 && chunk < 100 {
                text.push("and".to_string());
            }
        }
    }
    text.reverse();
    text.join(", ").replacen(", and,", " and", 1)
}
