//! Bisection search over a sorted slice.
//!
//! The slice must be sorted non-decreasing under the probed order. That is a
//! precondition, not a checked condition. Absence is reported as `None`.

use std::cmp::Ordering;

mod bisection;

/// Returns the position of an occurrence of `target` in sorted `data`.
pub fn search<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    bisection::bisect(data, &mut |probe| probe.cmp(target))
}

/// Returns the position of the element on which `probe` answers `Equal`.
///
/// `probe` reports how its argument compares to the sought value, the same
/// calling convention as `slice::binary_search_by`.
pub fn search_by<T, F: FnMut(&T) -> Ordering>(data: &[T], mut probe: F) -> Option<usize> {
    bisection::bisect(data, &mut probe)
}
