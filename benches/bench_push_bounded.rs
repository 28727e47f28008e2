extern crate criterion;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use predicate_queue::PriorityQueue;

mod generators;
use crate::generators::{gen_random_usizes, get_random_strings};

pub fn bench_push_bounded(c: &mut Criterion) {
    let stream = gen_random_usizes(100_000, 11);

    let mut group = c.benchmark_group("push_bounded_usize");
    for &max_count in &[10, 100, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(max_count),
            &max_count,
            |b, &max_count| {
                b.iter_batched(
                    || PriorityQueue::new(false, Vec::with_capacity(max_count)),
                    |mut queue| {
                        for &v in stream.iter() {
                            black_box(queue.push_bounded(v, max_count));
                        }
                        queue
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();

    let mut group = c.benchmark_group("push_bounded_string");
    let stream = get_random_strings(20_000, 12);
    for &max_count in &[10, 100, 1_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(max_count),
            &max_count,
            |b, &max_count| {
                b.iter_batched(
                    || PriorityQueue::new(false, Vec::with_capacity(max_count)),
                    |mut queue| {
                        for v in stream.iter().cloned() {
                            black_box(queue.push_bounded(v, max_count));
                        }
                        queue
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_push_bounded);
criterion_main!(benches);
