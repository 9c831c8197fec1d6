//! Out-of-place quicksort with a three-way partition.
//!
//! Returns a freshly allocated sorted vector and leaves the input untouched.
//! Elements equal to the pivot collect in a single group and never recurse,
//! so heavily duplicated inputs finish early, and the partition copies in
//! input order, which makes the sort stable.

use std::cmp::Ordering;

mod quicksort;

pub fn sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    quicksort::quicksort(data, &mut |a, b| a.lt(b))
}

pub fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(data: &[T], mut compare: F) -> Vec<T> {
    quicksort::quicksort(data, &mut |a, b| compare(a, b) == Ordering::Less)
}
