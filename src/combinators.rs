//! Function Combinators
//!
//! The handful of higher-order helpers the rest of the crate composes
//! pipelines out of. All return `impl Fn` closures so they stay zero-cost
//! at the call site.

/// Right-to-left composition: `compose(f, g)(x)` is `f(g(x))`
pub fn compose<A, B, C>(f: impl Fn(B) -> C, g: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |x| f(g(x))
}

/// A predicate that holds only when both given predicates hold
pub fn both<T>(p1: impl Fn(&T) -> bool, p2: impl Fn(&T) -> bool) -> impl Fn(&T) -> bool {
    move |x| p1(x) && p2(x)
}

/// Invert a predicate
pub fn complement<T>(p: impl Fn(&T) -> bool) -> impl Fn(&T) -> bool {
    move |x| !p(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition_applies_right_first() {
        let add_then_double = compose(|x: i32| x * 2, |x: i32| x + 1);
        assert_eq!(add_then_double(3), 8);
    }

    #[test]
    fn both_requires_both() {
        let even_and_positive = both(|x: &i32| x % 2 == 0, |x: &i32| *x > 0);
        assert!(even_and_positive(&4));
        assert!(!even_and_positive(&3));
        assert!(!even_and_positive(&-4));
    }

    #[test]
    fn complement_inverts() {
        let odd = complement(|x: &i32| x % 2 == 0);
        assert!(odd(&3));
        assert!(!odd(&4));
    }
}
