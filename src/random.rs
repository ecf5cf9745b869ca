//! IDs and Randomness
//!
//! Base-36 random id strings mixed with the wall clock, bounded random
//! integers, and small stateful id producers. Nothing here is
//! cryptographic; the ids are for log correlation and widget keys, not
//! secrets.
//!
//! Only available with the `std` feature (wall clock and thread-local RNG).

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return String::from("0");
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    // Only ASCII from the table above
    String::from_utf8(out).unwrap_or_default()
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// A pseudo-random base-36 string.
///
/// Two random 31-bit draws, the second XOR-mixed with the current wall
/// clock in milliseconds so consecutive calls differ even under a weak
/// RNG seed.
pub fn make_random_string() -> String {
    let mut rng = rand::rng();
    let a: u64 = rng.random_range(0..1u64 << 31);
    let b: u64 = rng.random_range(0..1u64 << 31);
    let mixed = b ^ now_millis();
    let mut s = to_base36(a);
    s.push_str(&to_base36(mixed));
    s
}

/// A random id string, the full [`make_random_string`] output
pub fn random_id() -> String {
    make_random_string()
}

/// A random id truncated to `len` characters.
///
/// Shorter ids collide sooner; keep this for human-facing handles.
pub fn random_id_sized(len: usize) -> String {
    make_random_string().chars().take(len).collect()
}

/// A random integer in `[min, max)`.
///
/// A degenerate range (`min >= max`) has nothing to draw from and
/// collapses to `min`.
pub fn rand_int_between(min: i64, max: i64) -> i64 {
    if min >= max {
        return min;
    }
    rand::rng().random_range(min..max)
}

/// Randomly `-1` or `1`, for flipping signs
pub fn rand_sign() -> i64 {
    if rand::rng().random_range(0..2) == 0 {
        -1
    } else {
        1
    }
}

/// A non-repeating random selection of `len` characters from `seed`.
///
/// Characters are drawn without replacement, so the result never uses a
/// seed position twice. Asking for more characters than the seed holds
/// returns a permutation of the whole seed.
pub fn rand_subset(seed: &str, len: usize) -> String {
    let mut pool: Vec<char> = seed.chars().collect();
    let mut rng = rand::rng();
    let mut out = String::new();
    for _ in 0..len.min(pool.len()) {
        let i = rng.random_range(0..pool.len());
        out.push(pool.remove(i));
    }
    out
}

/// An endless iterator of increasing ids.
///
/// `IdGen::new(None)` counts from 0; `IdGen::new(Some(n))` resumes after
/// an already-used id and starts at `n + 1`.
#[derive(Debug, Clone)]
pub struct IdGen {
    next: u64,
}

impl IdGen {
    /// Start counting at 0, or at `n + 1` when resuming from `n`
    pub fn new(resume_after: Option<u64>) -> Self {
        IdGen {
            next: resume_after.map_or(0, |n| n + 1),
        }
    }
}

impl Iterator for IdGen {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let id = self.next;
        self.next += 1;
        Some(id)
    }
}

/// A counter that returns its value, then increments.
///
/// The first call to [`Counter::tick`] returns the start value itself.
#[derive(Debug, Clone)]
pub struct Counter {
    value: u64,
}

impl Counter {
    /// A counter starting at `start`
    pub fn new(start: u64) -> Self {
        Counter { value: start }
    }

    /// Current value, post-incrementing
    pub fn tick(&mut self) -> u64 {
        let v = self.value;
        self.value += 1;
        v
    }
}

/// A random id drawn once and handed out unchanged on every call
#[derive(Debug, Clone)]
pub struct StickyId {
    id: String,
}

impl StickyId {
    /// Draw the id now; it never changes afterwards
    pub fn new() -> Self {
        StickyId { id: random_id() }
    }

    /// The id this instance was born with
    pub fn get(&self) -> &str {
        &self.id
    }
}

impl Default for StickyId {
    fn default() -> Self {
        Self::new()
    }
}
