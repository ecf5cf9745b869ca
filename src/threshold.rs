//! Boundary and Band Crossing Detection
//!
//! Stateless predicates over a `(previous, current)` pair of scalar readings.
//! The caller owns the history; nothing here remembers anything between
//! calls, which keeps the predicates safe to evaluate anywhere, including
//! interrupt context.
//!
//! Crossing semantics are strict: a reading sitting exactly on a boundary is
//! neither above nor below it, so `prev == b` or `cur == b` never counts as
//! a crossing. Band entry/exit additionally requires the relevant endpoint
//! to actually occupy the closed band; a jump that clears the whole band in
//! one step touches neither predicate. That is threshold semantics working
//! as intended, not a gap.

/// True iff the pair rose through `boundary`: `prev < boundary < cur`.
pub fn did_rise_through(boundary: f64, prev: f64, cur: f64) -> bool {
    prev < boundary && boundary < cur
}

/// True iff the pair fell through `boundary`: `prev > boundary > cur`.
pub fn did_fall_through(boundary: f64, prev: f64, cur: f64) -> bool {
    prev > boundary && boundary > cur
}

/// A closed interval `[lower, upper]` watched for entry and exit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Band {
    lower: f64,
    upper: f64,
}

impl Band {
    /// Build a band from two bounds, in either order.
    pub fn new(a: f64, b: f64) -> Self {
        let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
        Self { lower, upper }
    }

    /// Lower bound (inclusive)
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound (inclusive)
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Is the value inside the closed band?
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// True iff `cur` sits inside the band and the pair arrived through a
    /// bound: rising through the lower bound or falling through the upper.
    pub fn did_enter(&self, prev: f64, cur: f64) -> bool {
        self.contains(cur)
            && (did_fall_through(self.upper, prev, cur)
                || did_rise_through(self.lower, prev, cur))
    }

    /// True iff `prev` sat inside the band and the pair left through a
    /// bound: rising through the upper bound or falling through the lower.
    pub fn did_exit(&self, prev: f64, cur: f64) -> bool {
        self.contains(prev)
            && (did_rise_through(self.upper, prev, cur)
                || did_fall_through(self.lower, prev, cur))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rise_detection() {
        assert!(did_rise_through(10.0, 9.0, 11.0));
        assert!(!did_rise_through(10.0, 11.0, 12.0)); // was above, went up
        assert!(!did_rise_through(10.0, 8.0, 9.5)); // stayed below
        assert!(!did_rise_through(10.0, 11.0, 9.0)); // wrong direction
        assert!(!did_rise_through(10.0, 10.0, 11.0)); // started on the line
    }

    #[test]
    fn fall_detection() {
        assert!(did_fall_through(10.0, 11.0, 9.0));
        assert!(!did_fall_through(10.0, 9.0, 8.0)); // was below, went down
        assert!(!did_fall_through(10.0, 12.0, 11.0)); // stayed above
        assert!(!did_fall_through(10.0, 9.0, 11.0)); // wrong direction
    }

    #[test]
    fn band_bounds_normalize() {
        let band = Band::new(20.0, 10.0);
        assert_eq!(band.lower(), 10.0);
        assert_eq!(band.upper(), 20.0);
        assert!(band.contains(10.0));
        assert!(band.contains(20.0));
        assert!(!band.contains(20.1));
    }

    #[test]
    fn band_entry_from_either_side() {
        let band = Band::new(10.0, 20.0);
        assert!(band.did_enter(9.0, 15.0)); // rose in from below
        assert!(band.did_enter(21.0, 15.0)); // fell in from above
        assert!(!band.did_enter(15.0, 16.0)); // was already inside
        assert!(!band.did_enter(9.0, 9.5)); // never arrived
    }

    #[test]
    fn band_exit_through_either_bound() {
        let band = Band::new(10.0, 20.0);
        assert!(band.did_exit(15.0, 21.0)); // out through the top
        assert!(band.did_exit(15.0, 9.0)); // out through the bottom
        assert!(!band.did_exit(21.0, 22.0)); // was never inside
        assert!(!band.did_exit(15.0, 16.0)); // still inside
    }

    #[test]
    fn clean_jump_over_band_is_ignored() {
        let band = Band::new(10.0, 20.0);
        assert!(!band.did_enter(9.0, 21.0));
        assert!(!band.did_exit(9.0, 21.0));
        assert!(!band.did_enter(21.0, 9.0));
        assert!(!band.did_exit(21.0, 9.0));
    }
}
