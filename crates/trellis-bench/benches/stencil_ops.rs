//! Criterion micro-benchmarks for neighbourhood queries.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use trellis_bench::reference_field;
use trellis_core::Point2;
use trellis_stencil::{hex_stencil, Stencil};

/// Benchmark: full-neighbourhood counting at all 10K cells.
fn bench_moore_count_10k(c: &mut Criterion) {
    let field = reference_field(42);
    let stencil = Stencil::moore();

    c.bench_function("moore_count_10k", |b| {
        b.iter(|| {
            let mut live = 0usize;
            for y in 0..100 {
                for x in 0..100 {
                    live += stencil.count_matching(&field, Point2::new(x, y), true);
                }
            }
            black_box(live);
        });
    });
}

/// Benchmark: orthogonal neighbour collection at all 10K cells.
fn bench_orthogonal_neighbours_10k(c: &mut Criterion) {
    let field = reference_field(42);
    let stencil = Stencil::orthogonal();

    c.bench_function("orthogonal_neighbours_10k", |b| {
        b.iter(|| {
            for y in 0..100 {
                for x in 0..100 {
                    let neighbours = stencil.neighbours(&field, Point2::new(x, y));
                    black_box(&neighbours);
                }
            }
        });
    });
}

/// Benchmark: hexagonal counting over the same field read as an axial
/// rhombus.
fn bench_hex_count_10k(c: &mut Criterion) {
    let field = reference_field(42);
    let stencil = hex_stencil();

    c.bench_function("hex_count_10k", |b| {
        b.iter(|| {
            let mut live = 0usize;
            for r in 0..100 {
                for q in 0..100 {
                    live += stencil.count_matching(&field, Point2::new(q, r), true);
                }
            }
            black_box(live);
        });
    });
}

criterion_group!(
    benches,
    bench_moore_count_10k,
    bench_orthogonal_neighbours_10k,
    bench_hex_count_10k
);
criterion_main!(benches);
