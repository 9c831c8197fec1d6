use std::cmp::Ordering;

sort_impl!("rust_std_stable");

pub fn sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    let mut out = data.to_vec();
    out.sort();
    out
}

pub fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(data: &[T], compare: F) -> Vec<T> {
    let mut out = data.to_vec();
    out.sort_by(compare);
    out
}
