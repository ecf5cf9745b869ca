//! JSON Deep Helpers
//!
//! Structural tools over [`serde_json::Value`] trees: recursive merging,
//! fallback-based path lookup, and leaf enumeration. Objects are the only
//! containers that recurse; arrays count as leaves everywhere except the
//! merge, where two arrays concatenate.

use alloc::string::String;
use alloc::vec::Vec;

use serde_json::Value;

/// Merge `r` into `l`, recursively, returning the combined tree.
///
/// Keys present in both sides resolve as follows: two objects merge deeply,
/// two arrays concatenate, anything else takes the right-hand value. Inputs
/// that are not both objects come back as a clone of `l`.
pub fn merge_deep(l: &Value, r: &Value) -> Value {
    let (Value::Object(lm), Value::Object(rm)) = (l, r) else {
        return l.clone();
    };
    let mut out = lm.clone();
    for (key, rv) in rm {
        let merged = match (lm.get(key), rv) {
            (Some(lv @ Value::Object(_)), Value::Object(_)) => merge_deep(lv, rv),
            (Some(Value::Array(la)), Value::Array(ra)) => {
                let mut combined = la.clone();
                combined.extend(ra.iter().cloned());
                Value::Array(combined)
            }
            _ => rv.clone(),
        };
        out.insert(key.clone(), merged);
    }
    Value::Object(out)
}

/// Walk `path` into `value`, returning the node found or `fallback`.
///
/// Each segment indexes an object by key; on arrays a segment that parses
/// as an index is used positionally. Any miss along the way short-circuits
/// to the fallback. An explicit JSON `null` at the path is a found value,
/// not a miss.
pub fn path_or<'a>(fallback: &'a Value, path: &[&str], value: &'a Value) -> &'a Value {
    let mut cursor = value;
    for segment in path {
        let next = match cursor {
            Value::Object(map) => map.get(*segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        match next {
            Some(v) => cursor = v,
            None => return fallback,
        }
    }
    cursor
}

/// Flatten a tree into `(path, leaf)` pairs, depth-first in key order.
///
/// Arrays are leaves here; only objects contribute path segments.
pub fn value_to_paths(value: &Value) -> Vec<(Vec<String>, Value)> {
    let mut out = Vec::new();
    collect_paths(value, &mut Vec::new(), &mut out);
    out
}

fn collect_paths(value: &Value, path: &mut Vec<String>, out: &mut Vec<(Vec<String>, Value)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                path.push(key.clone());
                collect_paths(child, path, out);
                path.pop();
            }
        }
        leaf => out.push((path.clone(), leaf.clone())),
    }
}

/// Rebuild the tree with every leaf replaced by `f(leaf)`.
pub fn visit_leaves(value: &Value, f: &impl Fn(&Value) -> Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), visit_leaves(v, f)))
                .collect(),
        ),
        leaf => f(leaf),
    }
}
