//! Generation benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rawgen_bench::synthetic_schema;
use rawgen_codegen::php::PhpConventions;
use rawgen_codegen::{Generator, GeneratorConfig, NameTable, TargetKind};
use rawgen_schema::{SchemaIr, validate_ir};
use std::hint::black_box;

fn benchmark_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for size in [10usize, 100, 500] {
        let ir = SchemaIr::from_schema(&synthetic_schema(size / 5, size));
        group.throughput(Throughput::Elements(ir.len() as u64));

        for target in [TargetKind::Php, TargetKind::Rust] {
            for parallel in [false, true] {
                let config = GeneratorConfig::new().target(target).parallel(parallel);
                let id = format!("{target:?}/{}", if parallel { "parallel" } else { "sequential" });
                group.bench_with_input(BenchmarkId::new(id, size), &ir, |b, ir| {
                    b.iter(|| Generator::new(black_box(ir), &config).generate().unwrap())
                });
            }
        }
    }

    group.finish();
}

fn benchmark_front_end(c: &mut Criterion) {
    let schema = synthetic_schema(20, 100);
    let ir = SchemaIr::from_schema(&schema);

    c.bench_function("flatten", |b| {
        b.iter(|| SchemaIr::from_schema(black_box(&schema)))
    });

    c.bench_function("validate", |b| b.iter(|| validate_ir(black_box(&ir)).unwrap()));

    c.bench_function("name_table", |b| {
        b.iter(|| NameTable::build(black_box(&ir), &PhpConventions).unwrap())
    });
}

criterion_group!(benches, benchmark_generate, benchmark_front_end);
criterion_main!(benches);
