pub mod std_stable;
pub mod std_unstable;
pub mod threeway_quicksort;
