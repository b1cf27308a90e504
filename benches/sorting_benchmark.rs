use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;
use stratasort::prelude::*;

fn bench_intervals(c: &mut Criterion) {
    let mut group = c.benchmark_group("Interval Sort");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;

    let intervals: Vec<[i64; 2]> = (0..count)
        .map(|_| [rng.random_range(0..10_000), rng.random_range(0..10_000)])
        .collect();

    let by_start_end = rule(|iv: &[i64; 2]| vec![iv[0].into(), iv[1].into()]);

    group.bench_function("stratasort (in-place)", |b| {
        b.iter_batched(
            || intervals.clone(),
            |mut data| stratasort_mut(black_box(&mut data), &by_start_end, &[]).unwrap(),
            BatchSize::SmallInput,
        )
    });

    // Hand-rolled comparator with the same semantics
    group.bench_function("slice::sort_by (stable)", |b| {
        b.iter_batched(
            || intervals.clone(),
            |mut data| data.sort_by(|x, y| (x[0], x[1]).cmp(&(y[0], y[1]))),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_heavy_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("Heavy Duplicates");
    group.sample_size(10);

    // Few distinct keys, so most of the work is tie handling
    let mut rng = rand::rng();
    let count = 10_000;

    let records: Vec<(i64, i64)> = (0..count)
        .map(|_| (rng.random_range(0..8), rng.random_range(0..8)))
        .collect();

    let by_pair = rule(|p: &(i64, i64)| vec![p.0.into(), p.1.into()]);

    group.bench_function("stratasort (in-place)", |b| {
        b.iter_batched(
            || records.clone(),
            |mut data| stratasort_mut(black_box(&mut data), &by_pair, &[]).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort_by (stable)", |b| {
        b.iter_batched(
            || records.clone(),
            |mut data| data.sort_by(|x, y| (x.0, x.1).cmp(&(y.0, y.1))),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_intervals, bench_heavy_duplicates);
criterion_main!(benches);
