//! Prints a sequence, its sorted form, and a present and an absent search.

fn main() {
    let numbers = vec![64, 34, 25, 12, 22, 11, 90];
    println!("Original: {numbers:?}");

    let sorted_numbers = threeway_quicksort::sort(&numbers);
    println!("Sorted: {sorted_numbers:?}");

    match bisection_search::search(&sorted_numbers, &25) {
        Some(index) => println!("Found 25 at index: {index}"),
        None => println!("25 not found"),
    }

    let target = 6;
    match bisection_search::search(&sorted_numbers, &target) {
        Some(index) => println!("Searching for {target}: found at index {index}"),
        None => println!("Searching for {target}: not found"),
    }
}
