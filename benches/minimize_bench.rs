//! Benchmark suite for Quine-McCluskey minimization
//!
//! Measures the full pipeline (combination plus covering) over functions of
//! growing literal count. The dense case stresses the combination phase (many
//! merges per level); the sparse case stresses the covering phase.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qmc_logic::BoolFunction;

/// Every third row of the truth table: merges poorly, many prime implicants
fn sparse_minterms(literal_count: usize) -> Vec<u32> {
    (0..(1u32 << literal_count)).step_by(3).collect()
}

/// Every even row: collapses quickly into wide implicants
fn dense_minterms(literal_count: usize) -> Vec<u32> {
    (0..(1u32 << literal_count)).filter(|m| m % 2 == 0).collect()
}

fn bench_minimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize");

    for literal_count in [4usize, 6, 8, 10] {
        let sparse = sparse_minterms(literal_count);
        group.bench_with_input(
            BenchmarkId::new("sparse", literal_count),
            &sparse,
            |b, minterms| {
                b.iter(|| {
                    let f = BoolFunction::from_minterms(literal_count, minterms).unwrap();
                    black_box(f.minimize())
                })
            },
        );

        let dense = dense_minterms(literal_count);
        group.bench_with_input(
            BenchmarkId::new("dense", literal_count),
            &dense,
            |b, minterms| {
                b.iter(|| {
                    let f = BoolFunction::from_minterms(literal_count, minterms).unwrap();
                    black_box(f.minimize())
                })
            },
        );
    }

    group.finish();
}

fn bench_with_dont_cares(c: &mut Criterion) {
    c.bench_function("minimize/8-literal with dont-cares", |b| {
        b.iter(|| {
            let mut f = BoolFunction::new(8).unwrap();
            for m in (0..256u32).step_by(5) {
                f.add_minterm(m).unwrap();
            }
            for m in (1..256u32).step_by(7) {
                f.add_dont_care(m).unwrap();
            }
            black_box(f.minimize())
        })
    });
}

criterion_group!(benches, bench_minimize, bench_with_dont_cares);
criterion_main!(benches);
