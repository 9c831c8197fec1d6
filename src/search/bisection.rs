use std::cmp::Ordering;

search_impl!("bisection");

pub fn search<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    bisection_search::search(data, target)
}

pub fn search_by<T, F: FnMut(&T) -> Ordering>(data: &[T], probe: F) -> Option<usize> {
    bisection_search::search_by(data, probe)
}
