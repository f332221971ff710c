//! Iteration idioms: indexed traversal, transforms, map and parallel traversal.

use std::collections::HashMap;

/// Pair each value with its zero-based index.
pub fn indexed<T: Copy>(values: &[T]) -> Vec<(usize, T)> {
    values.iter().copied().enumerate().collect()
}

/// Square every number eagerly. Overflow saturates at `i64::MAX`.
pub fn squares(numbers: &[i64]) -> Vec<i64> {
    lazy_squares(numbers).collect()
}

/// Square every number on demand.
pub fn lazy_squares(numbers: &[i64]) -> impl Iterator<Item = i64> + '_ {
    numbers.iter().map(|n| n.saturating_mul(*n))
}

/// Every key/value pair of `map` exactly once.
///
/// Order follows the map's internal layout and is unspecified; compare
/// results as sets, or sort them before display.
pub fn map_pairs(map: &HashMap<String, i64>) -> Vec<(&str, i64)> {
    map.iter().map(|(key, value)| (key.as_str(), *value)).collect()
}

/// Walk two slices in lockstep, stopping at the end of the shorter one.
pub fn zip_shortest<'a, A, B>(left: &'a [A], right: &'a [B]) -> Vec<(&'a A, &'a B)> {
    left.iter().zip(right).collect()
}

/// Count from zero up to (excluding) `limit` with a condition-driven loop.
pub fn count_while(limit: u32) -> Vec<u32> {
    let mut counts = Vec::with_capacity(limit as usize);
    let mut count = 0;
    while count < limit {
        counts.push(count);
        count += 1;
    }
    counts
}
