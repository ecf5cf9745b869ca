//! String Helpers
//!
//! Character-level utilities: padding, alphabet membership tests,
//! interleaving, prefix work. Everything is char-based rather than
//! byte-based so multi-byte UTF-8 input does not split mid-character.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Decimal digits, the building block for the membership tests below
pub const NUMERIC_CHARS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Characters that may appear in a signed float rendering
pub const FLOAT_CHARS: [char; 12] =
    ['.', '-', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Pad `s` on the left with `pad` to a total of `width` characters.
///
/// A string already at or beyond the width keeps only its last `width`
/// characters, mirroring how fixed-width device fields truncate.
pub fn left_pad_with_to(pad: char, width: usize, s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() >= width {
        chars[chars.len() - width..].iter().collect()
    } else {
        core::iter::repeat(pad)
            .take(width - chars.len())
            .chain(chars.into_iter())
            .collect()
    }
}

/// Does the string consist solely of characters from the allowed set?
/// Empty strings pass vacuously.
pub fn only_includes(allowed: &[char], s: &str) -> bool {
    s.chars().all(|c| allowed.contains(&c))
}

/// Nothing but decimal digits, and at least one of them
pub fn is_only_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Nothing but ASCII letters and digits, and at least one of them
pub fn is_alpha_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Drop every character that could not appear in a signed float
pub fn strip_non_float_chars(s: &str) -> String {
    s.chars().filter(|c| FLOAT_CHARS.contains(c)).collect()
}

/// Remove a single leading `c` if present
pub fn strip_leading_char(c: char, s: &str) -> &str {
    s.strip_prefix(c).unwrap_or(s)
}

/// Remove a single trailing `c` if present
pub fn strip_trailing_char(c: char, s: &str) -> &str {
    s.strip_suffix(c).unwrap_or(s)
}

/// Interleave with the joiner leading: `interleave('|', "abc")` → `"|a|b|c"`
pub fn interleave(joiner: char, s: &str) -> String {
    s.chars().flat_map(|c| [joiner, c]).collect()
}

/// Interleave with the string leading: `interleave_after('|', "abc")` → `"a|b|c"`
pub fn interleave_after(joiner: char, s: &str) -> String {
    let mut out = String::new();
    for (i, c) in s.chars().enumerate() {
        if i > 0 {
            out.push(joiner);
        }
        out.push(c);
    }
    out
}

/// Non-overlapping occurrences of a substring
pub fn count_substring(needle: &str, haystack: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Reverse a string character-wise
pub fn string_reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Longest common prefix of all the given strings.
/// No strings, or any empty string, yields `""`.
pub fn longest_common_prefix(strings: &[&str]) -> String {
    let mut first = match strings.first() {
        Some(s) => s.chars(),
        None => return String::new(),
    };
    let mut rests: Vec<_> = strings[1..].iter().map(|s| s.chars()).collect();
    let mut prefix = String::new();
    while let Some(c) = first.next() {
        if rests.iter_mut().all(|it| it.next() == Some(c)) {
            prefix.push(c);
        } else {
            break;
        }
    }
    prefix
}

/// Wrap the string in double quotes when it contains the delimiter,
/// the CSV-field trick
pub fn quote_if_contains(delim: char, s: &str) -> String {
    if s.contains(delim) {
        format!("\"{s}\"")
    } else {
        String::from(s)
    }
}
