use std::cmp::Ordering;

sort_impl!("threeway_quicksort");

pub fn sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    threeway_quicksort::sort(data)
}

pub fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(data: &[T], compare: F) -> Vec<T> {
    threeway_quicksort::sort_by(data, compare)
}
