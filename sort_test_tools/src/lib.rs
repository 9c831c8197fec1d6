//! Shared trait seams, input-pattern generators and property suites for the
//! sort and search implementations in this workspace.
//!
//! Implementation crates adapt themselves to [`Sort`] or [`Search`] in their
//! integration tests and call [`instantiate_sort_tests!`] or
//! [`instantiate_search_tests!`] to pick up the full suite.

use std::cmp::Ordering;

pub mod patterns;

#[doc(hidden)]
pub use paste;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &[T]) -> Vec<T>
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &[T], compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

pub trait Search {
    fn name() -> String;

    fn search<T>(arr: &[T], target: &T) -> Option<usize>
    where
        T: Ord;

    /// `probe` reports how its argument compares to the sought value, the
    /// same calling convention as `slice::binary_search_by`.
    fn search_by<T, F>(arr: &[T], probe: F) -> Option<usize>
    where
        F: FnMut(&T) -> Ordering;
}
