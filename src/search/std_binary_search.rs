use std::cmp::Ordering;

search_impl!("rust_std_binary_search");

pub fn search<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    data.binary_search(target).ok()
}

pub fn search_by<T, F: FnMut(&T) -> Ordering>(data: &[T], probe: F) -> Option<usize> {
    data.binary_search_by(probe).ok()
}
