//! Comparison-sort and bisection-search implementations behind shared trait
//! seams, with std baselines for the tests and benches to compare against.

pub use sort_test_tools::{Search, Sort};

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(arr: &[T]) -> Vec<T>
            where
                T: Ord + Clone,
            {
                sort(arr)
            }

            fn sort_by<T, F>(arr: &[T], compare: F) -> Vec<T>
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare)
            }
        }
    };
}

macro_rules! search_impl {
    ($name:expr) => {
        pub struct SearchImpl;

        impl crate::Search for SearchImpl {
            fn name() -> String {
                $name.into()
            }

            fn search<T>(arr: &[T], target: &T) -> Option<usize>
            where
                T: Ord,
            {
                search(arr, target)
            }

            fn search_by<T, F>(arr: &[T], probe: F) -> Option<usize>
            where
                F: FnMut(&T) -> std::cmp::Ordering,
            {
                search_by(arr, probe)
            }
        }
    };
}

pub mod search;
pub mod sort;
