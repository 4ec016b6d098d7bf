//! Benchmarks for resume2latex core operations.
//!
//! Run with: cargo bench
//!
//! Results include 95% confidence intervals via Criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use resume2latex::core::{assembler, checker, escape, parser, types::ResumeRecord};

fn bench_escape(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_latex");
    for size in [64, 256, 1024, 4096] {
        let input: String = "R&D 50% $5 #1 a_b {x} ~^\\ "
            .chars()
            .cycle()
            .take(size)
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| black_box(escape::escape_latex(black_box(input))));
        });
    }
    group.finish();
}

fn bench_assemble(c: &mut Criterion) {
    let record = ResumeRecord::template();
    c.bench_function("assemble_template", |b| {
        b.iter(|| black_box(assembler::assemble(black_box(&record))));
    });
}

fn bench_parse(c: &mut Criterion) {
    let json = serde_json::to_string(&ResumeRecord::template()).unwrap();
    c.bench_function("parse_record_json", |b| {
        b.iter(|| {
            let record = parser::parse_record(black_box(&json), parser::RecordFormat::Json).unwrap();
            black_box(record);
        });
    });
}

fn bench_check(c: &mut Criterion) {
    let latex = assembler::assemble(&ResumeRecord::template());
    let mut group = c.benchmark_group("check_latex");
    for copies in [1, 10, 50] {
        let doc = latex.repeat(copies);
        group.bench_with_input(BenchmarkId::from_parameter(copies), &doc, |b, doc| {
            b.iter(|| black_box(checker::check_latex(black_box(doc))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_escape, bench_assemble, bench_parse, bench_check);
criterion_main!(benches);
