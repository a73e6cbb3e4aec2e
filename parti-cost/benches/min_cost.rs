use criterion::{criterion_group, criterion_main, Criterion};
use parti_cost::{find_min_sums_and_partitions, generate_partitions};
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("generate partitions of 20", |b| {
        b.iter(|| generate_partitions(black_box(20)))
    });
    c.bench_function("min cost partitions of 20", |b| {
        b.iter(|| find_min_sums_and_partitions(black_box(20)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
