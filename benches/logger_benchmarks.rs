//! Criterion benchmarks for rust_dual_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_dual_logger::prelude::*;
use std::io;
use std::panic::Location;

// ============================================================================
// Registry Creation Benchmarks
// ============================================================================

fn bench_registry_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("without_sinks", |b| {
        b.iter(|| black_box(Registry::without_sinks()));
    });

    group.bench_function("dual_sinks", |b| {
        b.iter(|| {
            let registry = Registry::builder()
                .text(io::sink(), true)
                .json(io::sink(), true)
                .build();
            black_box(registry)
        });
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let text = Registry::builder().text(io::sink(), true).build();
    let json = Registry::builder().json(io::sink(), true).build();
    let dual = Registry::builder()
        .text(io::sink(), true)
        .json(io::sink(), true)
        .build();

    group.bench_function("text", |b| {
        b.iter(|| text.info(black_box("request served"), &[Attr::int("status", 200)]));
    });

    group.bench_function("json", |b| {
        b.iter(|| json.info(black_box("request served"), &[Attr::int("status", 200)]));
    });

    group.bench_function("dual", |b| {
        b.iter(|| dual.info(black_box("request served"), &[Attr::int("status", 200)]));
    });

    group.bench_function("formatted", |b| {
        b.iter(|| dual.infof(format_args!("request {} served", black_box(42))));
    });

    group.bench_function("filtered_out", |b| {
        b.iter(|| dual.debug(black_box("never written"), &[Attr::int("status", 200)]));
    });

    group.finish();
}

// ============================================================================
// Derived Logger Benchmarks
// ============================================================================

fn bench_derived(c: &mut Criterion) {
    let mut group = c.benchmark_group("derived");
    group.throughput(Throughput::Elements(1));

    let registry = Registry::builder()
        .text(io::sink(), false)
        .json(io::sink(), false)
        .build();
    let base = registry.default_logger();

    group.bench_function("with", |b| {
        b.iter(|| black_box(base.with(&[Attr::string("service", "api")])));
    });

    group.bench_function("with_group", |b| {
        b.iter(|| black_box(base.with_group("request")));
    });

    let nested = base
        .with(&[Attr::string("service", "api")])
        .with_group("request")
        .with(&[Attr::string("id", "abc")])
        .with_group("db");

    group.bench_function("nested_dispatch", |b| {
        b.iter(|| nested.warn(black_box("slow query"), &[Attr::int("ms", 1200)]));
    });

    group.finish();
}

// ============================================================================
// Encoding Benchmarks
// ============================================================================

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    let options = HandlerOptions::default().with_source(true);
    let text = TextHandler::new(io::sink(), options.clone());
    let json = JsonHandler::new(io::sink(), options);

    for attr_count in [0usize, 4, 16] {
        let attrs: Vec<Attr> = (0..attr_count)
            .map(|i| Attr::int(format!("key{}", i), i as isize))
            .collect();
        let record =
            Record::new(Level::INFO, "encoded", Some(Location::caller())).with_attrs(&attrs);

        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("text_{}_attrs", attr_count), |b| {
            b.iter(|| black_box(text.format_record(&record)));
        });
        group.bench_function(format!("json_{}_attrs", attr_count), |b| {
            b.iter(|| black_box(json.format_record(&record)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_registry_creation,
    bench_dispatch,
    bench_derived,
    bench_encoding
);
criterion_main!(benches);
