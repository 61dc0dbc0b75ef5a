//! Valuation Benchmarks
//!
//! Measures the request path of `/run` without HTTP:
//! - Lenient body parsing
//! - Asset classification and valuation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use appraisal_core::valuation::{self, ValuationRequest};

fn bench_valuation(c: &mut Criterion) {
    let mut group = c.benchmark_group("valuation");

    for asset in ["Lakeside Villa", "Farmland plot", "property"] {
        group.bench_with_input(BenchmarkId::new("run", asset), asset, |b, asset| {
            b.iter(|| black_box(valuation::run(black_box(asset))))
        });
    }

    let long_description = "a quiet apartment near the river ".repeat(64);
    group.bench_function("run_long_description", |b| {
        b.iter(|| black_box(valuation::run(black_box(&long_description))))
    });

    group.finish();
}

fn bench_request_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_parsing");

    group.bench_function("valid_body", |b| {
        let body = br#"{"asset": "Lakeside Villa"}"#;
        b.iter(|| black_box(ValuationRequest::from_slice_lenient(black_box(body))))
    });

    group.bench_function("malformed_body", |b| {
        let body = b"{\"asset\": ";
        b.iter(|| black_box(ValuationRequest::from_slice_lenient(black_box(body))))
    });

    group.finish();
}

criterion_group!(benches, bench_valuation, bench_request_parsing);
criterion_main!(benches);
