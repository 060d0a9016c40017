use std::collections::HashSet;

use itertools::Itertools;

pub fn contains(arr: &[String], value: &str) -> bool {
    arr.iter().any(|item| item.as_str() == value)
}

/// Distinct values in first-seen order.
pub fn uniq(slice: &[String]) -> Vec<String> {
    slice.iter().unique().cloned().collect()
}

/// Items of `slice1` that do not appear in `slice2`. Order of `slice1` is
/// preserved, duplicates are kept.
pub fn difference(slice1: &[String], slice2: &[String]) -> Vec<String> {
    let exclude: HashSet<&str> = slice2.iter().map(String::as_str).collect();
    slice1
        .iter()
        .filter(|item| !exclude.contains(item.as_str()))
        .cloned()
        .collect()
}

/// Whether every item of `a` appears in `b`. An empty `a` trivially does.
pub fn contains_all(a: &[String], b: &[String]) -> bool {
    a.iter().all(|value| b.contains(value))
}
