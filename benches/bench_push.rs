extern crate criterion;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use predicate_queue::PriorityQueue;

mod generators;
use crate::generators::{gen_random_usizes, generate_worst_push_data, get_random_strings};

pub fn bench_push(c: &mut Criterion) {
    let base_values = gen_random_usizes(500_000, 7);
    let extra = gen_random_usizes(1000, 20);

    let mut group = c.benchmark_group("push_usizes_random");
    for &size in &[100_000, 200_000, 300_000, 400_000, 500_000] {
        assert!(base_values.len() >= size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_queue = PriorityQueue::new(true, base_values[..size].to_vec());
            b.iter_batched(
                || base_queue.clone(),
                |mut queue| {
                    for &v in extra.iter() {
                        queue.push(v);
                    }
                    queue
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();

    let mut group = c.benchmark_group("push_strings_random");
    let base_values = get_random_strings(50_000, 7);
    let extra = get_random_strings(1000, 20);

    for &size in &[10_000, 20_000, 30_000, 40_000, 50_000] {
        assert!(base_values.len() >= size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_queue = PriorityQueue::new(true, base_values[..size].to_vec());
            b.iter_batched(
                || base_queue.clone(),
                |mut queue| {
                    for v in extra.iter().cloned() {
                        queue.push(v);
                    }
                    queue
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();

    let base_values = gen_random_usizes(520_000, 7);
    let (base_values, extra) = generate_worst_push_data(base_values, 20_000, 987987);

    let mut group = c.benchmark_group("push_usizes_worst");
    for &size in &[100_000, 200_000, 300_000, 400_000, 500_000] {
        assert!(base_values.len() >= size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_queue = PriorityQueue::new(true, base_values[..size].to_vec());
            b.iter_batched(
                || base_queue.clone(),
                |mut queue| {
                    for &v in extra.iter() {
                        queue.push(v);
                    }
                    queue
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push);
criterion_main!(benches);
