use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastcalc::{Config, load_u64_le, parse_number, parse_number_le, process};
use std::hint::black_box;

const ROWS: usize = 1_000_000;

fn process_benchmark(c: &mut Criterion) {
    let data = generate::measurements(ROWS, 42).expect("generating input");

    let mut group = c.benchmark_group("fastcalc");
    group.sample_size(20);
    group.throughput(Throughput::Bytes(data.len() as u64));

    for workers in [1, rayon::current_num_threads()] {
        let cfg = Config::default().with_workers(workers);
        group.bench_with_input(BenchmarkId::new("process", workers), &cfg, |b, cfg| {
            b.iter(|| black_box(process(black_box(&data), cfg).unwrap()))
        });
    }

    group.finish();
}

fn parse_benchmark(c: &mut Criterion) {
    let words = [load_u64_le(b"1.2\nAbc;"), load_u64_le(b"-12.3\nAb")];

    c.bench_function("parse_number", |b| {
        b.iter(|| parse_number(black_box(b"1.2")) + parse_number(black_box(b"-12.3")))
    });
    c.bench_function("parse_number_le", |b| {
        b.iter(|| parse_number_le(black_box(words[0])).0 + parse_number_le(black_box(words[1])).0)
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = process_benchmark, parse_benchmark,
);

criterion_main!(benches);
