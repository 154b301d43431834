use chiasma::alignment::{align, Aligner, Scoring};
use chiasma::sequence::Strand;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn generate_strand(length: usize, seed: u8) -> Strand {
    let bases = b"ATGC";
    let mut symbols = Vec::with_capacity(length);
    for i in 0..length {
        symbols.push(bases[(i + seed as usize) % 4]);
    }
    Strand::new(symbols)
}

fn bench_short_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment/short");

    for length in [10, 25, 50, 100].iter() {
        let strand1 = generate_strand(*length, 1);
        let strand2 = generate_strand(*length, 2);

        group.bench_with_input(BenchmarkId::from_parameter(length), length, |b, _| {
            b.iter(|| align(black_box(&strand1), black_box(&strand2)));
        });
    }

    group.finish();
}

fn bench_medium_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment/medium");

    for length in [250, 500, 1000].iter() {
        let strand1 = generate_strand(*length, 1);
        let strand2 = generate_strand(*length, 2);

        group.bench_with_input(BenchmarkId::from_parameter(length), length, |b, _| {
            b.iter(|| align(black_box(&strand1), black_box(&strand2)));
        });
    }

    group.finish();
}

fn bench_identical_strands(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment/identical");

    for length in [100, 500, 1000].iter() {
        let strand = generate_strand(*length, 1);

        group.bench_with_input(BenchmarkId::from_parameter(length), length, |b, _| {
            b.iter(|| align(black_box(&strand), black_box(&strand)));
        });
    }

    group.finish();
}

fn bench_worst_case(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment/no_matches");

    for length in [50, 100, 200].iter() {
        let strand1 = Strand::new(vec![b'A'; *length]);
        let strand2 = Strand::new(vec![b'T'; *length]);

        group.bench_with_input(BenchmarkId::from_parameter(length), length, |b, _| {
            b.iter(|| align(black_box(&strand1), black_box(&strand2)));
        });
    }

    group.finish();
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment/strategy");
    let aligner = Aligner::new(Scoring::default());

    // Kept small so the recursive strategy stays well inside stack limits.
    for length in [25, 50, 100].iter() {
        let strand1 = generate_strand(*length, 1);
        let strand2 = generate_strand(*length, 3);

        group.bench_with_input(BenchmarkId::new("tabular", length), length, |b, _| {
            b.iter(|| aligner.align(black_box(&strand1), black_box(&strand2)));
        });
        group.bench_with_input(BenchmarkId::new("recursive", length), length, |b, _| {
            b.iter(|| aligner.align_recursive(black_box(&strand1), black_box(&strand2)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_short_alignment,
    bench_medium_alignment,
    bench_identical_strands,
    bench_worst_case,
    bench_strategies
);
criterion_main!(benches);
