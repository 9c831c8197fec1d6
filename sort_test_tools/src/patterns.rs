//! Input-shape generators used by the property suites and benches.
//!
//! The random patterns are deterministic within a process. The seed is drawn
//! once, or taken from the `OVERRIDE_SEED` environment variable to reproduce
//! a failing run; assertion messages print it.

use std::env;
use std::ops::Range;

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Seed shared by all pattern generators in this process.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => seed.parse().expect("OVERRIDE_SEED must be a u64"),
        Err(_) => thread_rng().gen(),
    })
}

// Mix the length into the seed so different sizes don't share a prefix.
fn rng_for(len: usize) -> StdRng {
    StdRng::seed_from_u64(random_init_seed() ^ (len as u64).rotate_left(32))
}

/// Full-range random values.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = rng_for(len);

    (0..len).map(|_| rng.gen()).collect()
}

/// Random values drawn uniformly from `range`. Narrow ranges yield many
/// duplicates.
pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    let mut rng = rng_for(len);

    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Zipfian-distributed ranks in `1..=len`, low ranks heavily repeated.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = rng_for(len);
    let dist = ZipfDistribution::new(len, exponent).expect("valid zipf parameters");

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// 0, 1, 2 ... already sorted.
pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

/// len-1, len-2 ... fully reversed.
pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// A single repeated value.
pub fn all_equal(len: usize) -> Vec<i32> {
    vec![5; len]
}

/// Alternating ascending and descending runs of `saw_length` elements.
pub fn saw_mixed(len: usize, saw_length: usize) -> Vec<i32> {
    let saw_length = saw_length.max(1);
    let mut out = Vec::with_capacity(len);
    let mut up = true;

    while out.len() < len {
        let run_len = saw_length.min(len - out.len()) as i32;
        let start = out.len() as i32;

        if up {
            out.extend(start..start + run_len);
        } else {
            out.extend((start..start + run_len).rev());
        }
        up = !up;
    }

    out
}

/// Rises to the middle, then falls.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut out: Vec<i32> = (0..(len / 2) as i32).collect();
    out.extend((0..((len + 1) / 2) as i32).rev());

    out
}
