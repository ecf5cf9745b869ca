//! Slice and Set Helpers
//!
//! Order-preserving set operations, column-wise views over row-major data,
//! and a few counting helpers the standard iterator adapters do not cover
//! directly. Set operations keep first-seen order rather than sorting,
//! which matters when the input order is meaningful (sensor priority lists,
//! id sequences).

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;

fn dedup_in_order<T: Ord + Clone>(xs: &[T]) -> Vec<T> {
    let mut seen = BTreeSet::new();
    xs.iter()
        .filter(|x| seen.insert((*x).clone()))
        .cloned()
        .collect()
}

/// Unique elements common to both slices, in first-seen order of `a`
pub fn intersection<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let bs: BTreeSet<&T> = b.iter().collect();
    dedup_in_order(a).into_iter().filter(|x| bs.contains(x)).collect()
}

/// Unique elements of `a` that do not appear in `b`
pub fn difference<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let bs: BTreeSet<&T> = b.iter().collect();
    dedup_in_order(a).into_iter().filter(|x| !bs.contains(x)).collect()
}

/// Unique elements from both slices, `a` first
pub fn union<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut all = a.to_vec();
    all.extend_from_slice(b);
    dedup_in_order(&all)
}

/// Elements unique to one side or the other
pub fn symmetric_diff<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    difference(&union(a, b), &intersection(a, b))
}

/// Loose equality: same length and every element of each side appears in
/// the other, position ignored
pub fn same_elements<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len()
        && a.iter().all(|x| b.contains(x))
        && b.iter().all(|x| a.contains(x))
}

/// Are all elements equal to the first one? Empty slices qualify.
pub fn all_equal<T: PartialEq>(xs: &[T]) -> bool {
    xs.windows(2).all(|w| w[0] == w[1])
}

/// Occurrences of `target` in the slice
pub fn count_occurrences<T: PartialEq>(target: &T, xs: &[T]) -> usize {
    xs.iter().filter(|x| *x == target).count()
}

/// Occurrences satisfying the predicate
pub fn count_by<T>(pred: impl Fn(&T) -> bool, xs: &[T]) -> usize {
    xs.iter().filter(|x| pred(x)).count()
}

/// Drop every n-th element (1-based), keeping the rest in order.
/// With `n == 0` there is no n-th element and everything survives.
pub fn drop_every_nth<T: Clone>(n: usize, xs: &[T]) -> Vec<T> {
    if n == 0 {
        return xs.to_vec();
    }
    xs.iter()
        .enumerate()
        .filter(|(i, _)| (i + 1) % n != 0)
        .map(|(_, x)| x.clone())
        .collect()
}

/// Keep only the elements at the given indexes, in slice order
pub fn pick_indexes<T: Clone>(indexes: &[usize], xs: &[T]) -> Vec<T> {
    xs.iter()
        .enumerate()
        .filter(|(i, _)| indexes.contains(i))
        .map(|(_, x)| x.clone())
        .collect()
}

/// Remove the element at `index`, returning it with the leftover vector.
/// An out-of-range index removes nothing.
pub fn remove_at<T: Clone>(index: usize, xs: &[T]) -> (Option<T>, Vec<T>) {
    if index >= xs.len() {
        return (None, xs.to_vec());
    }
    let mut rest = xs.to_vec();
    let removed = rest.remove(index);
    (Some(removed), rest)
}

/// Pair up equally-positioned elements, interleaved flat, truncated to the
/// shorter input: `zip_flat(&[1, 2, 3], &[7, 8])` → `[1, 7, 2, 8]`
pub fn zip_flat<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter()
        .zip(b.iter())
        .flat_map(|(x, y)| [x.clone(), y.clone()])
        .collect()
}

/// Elements at position `i` of every row
pub fn column_at<T: Clone>(rows: &[Vec<T>], i: usize) -> Vec<T> {
    rows.iter().filter_map(|row| row.get(i).cloned()).collect()
}

/// Row-major to column-major. Column count follows the first row.
pub fn transpose<T: Clone>(rows: &[Vec<T>]) -> Vec<Vec<T>> {
    match rows.first() {
        None => Vec::new(),
        Some(first) => (0..first.len()).map(|i| column_at(rows, i)).collect(),
    }
}

/// Reduce each column of row-major data with `f`
pub fn column_reduce<T: Clone>(rows: &[Vec<T>], f: impl Fn(T, T) -> T) -> Vec<T> {
    transpose(rows)
        .into_iter()
        .filter_map(|col| col.into_iter().reduce(&f))
        .collect()
}

/// Elements that appear more than once across all groups, first-seen order
pub fn find_shared<T: Ord + Clone>(groups: &[Vec<T>]) -> Vec<T> {
    let mut counts: BTreeMap<&T, usize> = BTreeMap::new();
    for x in groups.iter().flatten() {
        *counts.entry(x).or_insert(0) += 1;
    }
    let mut seen = BTreeSet::new();
    groups
        .iter()
        .flatten()
        .filter(|x| counts[*x] > 1 && seen.insert((*x).clone()))
        .cloned()
        .collect()
}
