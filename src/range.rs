//! Range Generation
//!
//! An inclusive stepping range that always yields its first bound and walks
//! toward the second, whichever direction that is. A negative step size is
//! silently used as its magnitude; a zero or non-finite step is the one
//! piece of caller misuse this crate refuses outright.

use alloc::vec::Vec;

use libm::fabs;

use crate::errors::{ToolkitError, ToolkitResult};

/// Iterator over an inclusive range, stepping from `begin` toward `end`
#[derive(Debug, Clone)]
pub struct StepRange {
    next: f64,
    end: f64,
    step: f64,
    ascending: bool,
}

impl Iterator for StepRange {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let in_range = if self.ascending {
            self.next <= self.end
        } else {
            self.next >= self.end
        };
        if !in_range {
            return None;
        }
        let value = self.next;
        self.next = if self.ascending {
            value + self.step
        } else {
            value - self.step
        };
        Some(value)
    }
}

/// Build an inclusive stepping range.
///
/// It does not matter which bound is larger; the iterator steps from the
/// first toward the second. The step magnitude is what counts.
pub fn step_range(begin: f64, end: f64, step: f64) -> ToolkitResult<StepRange> {
    if step == 0.0 || !step.is_finite() {
        return Err(ToolkitError::InvalidStep { step });
    }
    if !begin.is_finite() || !end.is_finite() {
        return Err(ToolkitError::NonFiniteBound { begin, end });
    }
    Ok(StepRange {
        next: begin,
        end,
        step: fabs(step),
        ascending: end >= begin,
    })
}

/// Collect an inclusive stepping range into a vector
pub fn range(begin: f64, end: f64, step: f64) -> ToolkitResult<Vec<f64>> {
    Ok(step_range(begin, end, step)?.collect())
}

/// Inclusive integer range stepping by one, in either direction
pub fn range2(m: i64, n: i64) -> Vec<i64> {
    if n >= m {
        (m..=n).collect()
    } else {
        (n..=m).rev().collect()
    }
}

/// `[0, n)` as a vector
pub fn i_range(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

/// Values of a clock face of size `max`, in clock order starting at `start`.
///
/// `clock(12, 4)` → `[4, 5, …, 12, 1, 2, 3]`
pub fn clock(max: i64, start: i64) -> Vec<i64> {
    let mut face = range2(start, max);
    if start > 1 {
        face.extend(range2(1, start - 1));
    }
    face
}
