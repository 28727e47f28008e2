extern crate criterion;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use solvers::stones::{count_after, count_after_memoized};

pub fn bench_stones(c: &mut Criterion) {
    let stones = [125u64, 17];

    let mut group = c.benchmark_group("stones");
    for &blinks in &[10u32, 15, 20, 25] {
        group.bench_with_input(
            BenchmarkId::new("lifespan queue", blinks),
            &blinks,
            |b, &blinks| b.iter(|| count_after(black_box(&stones), blinks)),
        );
        group.bench_with_input(
            BenchmarkId::new("memoized", blinks),
            &blinks,
            |b, &blinks| b.iter(|| count_after_memoized(black_box(&stones), blinks)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_stones);
criterion_main!(benches);
