//! Pass-Through Tracing
//!
//! Debug-log a value without breaking the expression it sits in. Handy in
//! the middle of combinator chains. Uses the `log` facade, so output goes
//! wherever the host application routed it. Available with the `std`
//! feature.

use core::fmt::Debug;

/// Log `x` under `tag` at debug level and hand it straight back
pub fn trace_inline<T: Debug>(tag: &str, x: T) -> T {
    log::debug!("{tag} {x:?}");
    x
}

/// A reusable tagged tracer: `trace("parse")` gives a pass-through
/// function that logs everything flowing through it
pub fn trace<T: Debug>(tag: &str) -> impl Fn(T) -> T + '_ {
    move |x| trace_inline(tag, x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_pass_through_unchanged() {
        assert_eq!(trace_inline("t", 42), 42);
        assert_eq!(trace_inline("t", "abc"), "abc");
    }

    #[test]
    fn tagged_tracer_is_reusable() {
        let t = trace("pipeline");
        assert_eq!(t(1), 1);
        assert_eq!(t(2), 2);
    }
}
