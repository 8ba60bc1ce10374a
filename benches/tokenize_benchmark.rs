//! Benchmark for tokenizing and parsing DELETE statements.
//!
//! Measures the performance of:
//! 1. Tokenizing statements of increasing length
//! 2. Full parses, including table and clause extraction

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use delete_lexer::{Grammar, parse_delete, tokenize};
use std::hint::black_box;

/// Build a DELETE statement whose IN list holds `n` quoted values.
fn delete_with_in_list(n: usize) -> String {
    let values: Vec<String> = (0..n).map(|i| format!("'value_{i}'")).collect();
    format!(
        "DELETE LOW_PRIORITY FROM `events` WHERE id IN ({}) ORDER BY created_at LIMIT 100",
        values.join(", ")
    )
}

fn benchmark_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    let grammar = Grammar::mysql_delete();

    for n in [1, 10, 100, 1000] {
        let sql = delete_with_in_list(n);
        group.throughput(Throughput::Bytes(sql.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &sql, |b, sql| {
            b.iter(|| tokenize(black_box(sql), black_box(&grammar)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_delete");

    group.bench_function("simple", |b| {
        b.iter(|| parse_delete(black_box("DELETE FROM user WHERE id = 1")).unwrap());
    });

    let sql = delete_with_in_list(100);
    group.bench_function("in_list_100", |b| {
        b.iter(|| parse_delete(black_box(&sql)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, benchmark_tokenize, benchmark_parse);
criterion_main!(benches);
