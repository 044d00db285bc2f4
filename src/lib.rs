pub mod harness;
pub mod heapsort;

mod array;
mod disjoint_sets;
mod error;
mod forest;
mod naive;
mod path_compression;
mod rank_heuristic;

pub use array::ArrayDisjointSet;
pub use disjoint_sets::{DisjointSets, ParseVariantError, Variant};
pub use error::DisjointSetError;
pub use forest::Link;
pub use heapsort::{cartesian_sum, heap_sort, smallest_sums};
pub use naive::NaiveUnionFind;
pub use path_compression::PathCompressionUnionFind;
pub use rank_heuristic::RankHeuristicUnionFind;

#[cfg(test)]
fn bench<F: FnOnce()>(name: &str, num_tabs: usize, f: F) {
    use std::time::{Duration, Instant};
    let start = Instant::now();
    f();
    let elapsed = start.elapsed();

    print!("BENCH `{}` :", name);
    for _ in 0..num_tabs {
        print!("\t");
    }

    if elapsed < Duration::from_millis(1) {
        println!(
            "{} {:03} nanos",
            elapsed.as_micros(),
            elapsed.as_nanos() % 1000,
        );
    } else if elapsed < Duration::from_secs(1) {
        println!(
            "{} {:03} micros",
            elapsed.as_millis(),
            elapsed.as_micros() % 1000,
        );
    } else {
        println!(
            "{} {:03} millis",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
        );
    }
}

/// `union_roots(find(i), find(i - 1))` for every `i`: the worst case for the
/// naive variant.
#[cfg(test)]
fn union_all(sets: &mut dyn DisjointSets) {
    for i in 1..sets.len() {
        let root1 = sets.find(i).unwrap();
        let root2 = sets.find(i - 1).unwrap();
        sets.union_roots(root1, root2).unwrap();
    }
}

#[cfg(test)]
fn find_all(sets: &mut dyn DisjointSets) {
    for i in 0..sets.len() {
        sets.find(i).unwrap();
    }
}

#[cfg(test)]
fn bench_disjoint_sets(variants: &[Variant], n: usize, find_rounds: usize) {
    for &variant in variants {
        let mut sets = variant.build(n);
        let tabs = if variant == Variant::Naive { 3 } else { 1 };

        bench(&format!("{}::union_all", variant), tabs, || union_all(&mut *sets));
        bench(&format!("{}::find_all", variant), tabs, || {
            for _ in 0..find_rounds {
                find_all(&mut *sets);
            }
        });
        assert_eq!(sets.set_count(), 1);
    }
    println!();
}

#[cfg(test)]
fn bench_shuffled_unions(n: usize) {
    use rand::prelude::*;

    let mut rng = SmallRng::from_entropy();
    let pairs: Vec<_> = (0..n)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect();

    for variant in Variant::ALL {
        let mut sets = variant.build(n);
        let mut merged = 0;
        let tabs = if variant == Variant::Naive { 3 } else { 1 };

        bench(&format!("{}::union(random)", variant), tabs, || {
            for &(a, b) in pairs.iter() {
                if sets.union(a, b).unwrap() {
                    merged += 1;
                }
            }
        });
        assert_eq!(sets.set_count(), n - merged);
    }
    println!();
}

#[cfg(test)]
fn bench_heap_sort(n: usize) {
    use rand::prelude::*;

    let mut rng = SmallRng::from_entropy();
    let a: Vec<i64> = (0..n).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect();
    let b: Vec<i64> = (0..n).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect();

    let mut sums = cartesian_sum(&a, &b).unwrap();
    let mut expected = sums.clone();

    bench("heap_sort(cartesian_sum)", 1, || heap_sort(&mut sums));
    bench("slice::sort_unstable", 1, || expected.sort_unstable());
    assert_eq!(sums, expected);
    println!();
}

#[test]
pub fn main() {
    const MEDIUM_SIZE: usize = 2048;

    bench_disjoint_sets(&Variant::ALL, MEDIUM_SIZE, 3);
    bench_shuffled_unions(1 << 16);
    bench_heap_sort(512);
}

#[test]
#[ignore = "allocates and walks ten million elements per variant"]
pub fn large_size() {
    const LARGE_SIZE: usize = 10_240_000;

    bench_disjoint_sets(
        &[Variant::RankHeuristic, Variant::PathCompression],
        LARGE_SIZE,
        2,
    );
}
