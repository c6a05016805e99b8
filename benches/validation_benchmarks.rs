use std::hint::black_box;
use std::io::{self, Cursor};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fizzbuzz_check::rules::expected_line;
use fizzbuzz_check::validate_stream;

/// Generate candidate output with the first `lines` numbers
fn generate_output(lines: i64, scenario: &str) -> Vec<u8> {
    let mut content = String::new();
    for n in 1..=lines {
        match scenario {
            // Single bad line at the very end, so the whole input is read
            "error_at_end" if n == lines => content.push_str("oops\n"),
            "crlf" => {
                content.push_str(&expected_line(n));
                content.push_str("\r\n");
            }
            _ => {
                content.push_str(&expected_line(n));
                content.push('\n');
            }
        }
    }
    content.into_bytes()
}

/// Benchmark validation scalability with different input sizes
fn bench_validation_scalability(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000, 1_000_000];

    let mut group = c.benchmark_group("validation_scalability");

    for &size in &sizes {
        let content = generate_output(size, "all_valid");
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::new("lines", size), &content, |b, content| {
            b.iter(|| {
                let summary = validate_stream(Cursor::new(black_box(content)), io::sink());
                black_box(summary)
            })
        });
    }

    group.finish();
}

/// Benchmark how quickly a failing input is rejected
fn bench_failure_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation_failure_position");

    for scenario in ["error_at_end", "crlf"] {
        let content = generate_output(100_000, scenario);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("scenario", scenario),
            &content,
            |b, content| {
                b.iter(|| {
                    let summary = validate_stream(Cursor::new(black_box(content)), io::sink());
                    black_box(summary)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    validation_benches,
    bench_validation_scalability,
    bench_failure_position
);

criterion_main!(validation_benches);
