use sort_test_tools::{instantiate_sort_tests, Sort};

struct SortImpl {}

impl Sort for SortImpl {
    fn name() -> String {
        "threeway_quicksort".into()
    }

    fn sort<T>(arr: &[T]) -> Vec<T>
    where
        T: Ord + Clone,
    {
        threeway_quicksort::sort(arr)
    }

    fn sort_by<T, F>(arr: &[T], compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        threeway_quicksort::sort_by(arr, compare)
    }
}

instantiate_sort_tests!(SortImpl);
