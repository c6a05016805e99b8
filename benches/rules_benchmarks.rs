use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fizzbuzz_check::rules::{expected, expected_line};

fn bench_expected(c: &mut Criterion) {
    let mut group = c.benchmark_group("expected");

    for &start in &[1i64, 1_000_000_000, 1_000_000_000_000_000] {
        group.throughput(Throughput::Elements(1_000));
        group.bench_with_input(BenchmarkId::new("start", start), &start, |b, &start| {
            b.iter(|| {
                for n in start..start + 1_000 {
                    black_box(expected(black_box(n)));
                }
            })
        });
    }

    group.finish();
}

fn bench_matches(c: &mut Criterion) {
    let lines: Vec<String> = (1..=1_000).map(expected_line).collect();

    c.bench_function("matches_1000", |b| {
        b.iter(|| {
            for (n, line) in (1i64..).zip(&lines) {
                black_box(expected(n).matches(black_box(line.as_bytes())));
            }
        })
    });
}

criterion_group!(rules_benches, bench_expected, bench_matches);
criterion_main!(rules_benches);
