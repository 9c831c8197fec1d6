use sort_test_tools::{instantiate_search_tests, Search};

struct SearchImpl {}

impl Search for SearchImpl {
    fn name() -> String {
        "bisection".into()
    }

    fn search<T>(arr: &[T], target: &T) -> Option<usize>
    where
        T: Ord,
    {
        bisection_search::search(arr, target)
    }

    fn search_by<T, F>(arr: &[T], probe: F) -> Option<usize>
    where
        F: FnMut(&T) -> std::cmp::Ordering,
    {
        bisection_search::search_by(arr, probe)
    }
}

instantiate_search_tests!(SearchImpl);
