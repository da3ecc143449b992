//! Benchmarks for the generation pipeline on a representative 5x5 maze.
//!
//! The cot benchmark covers the full parse -> walls -> render chain; the
//! sampler benchmark covers the multi-path random walks, which dominate when
//! a maze offers several detours.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazetok::{cot, distractor};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const ADJ: &str = "(1,1) <--> (1,2) ; (1,2) <--> (2,2) ; (4,4) <--> (4,3) ; \
    (4,1) <--> (4,2) ; (2,3) <--> (3,3) ; (1,3) <--> (0,3) ; (0,3) <--> (0,2) ; \
    (4,3) <--> (4,2) ; (2,1) <--> (2,0) ; (3,1) <--> (3,0) ; (3,3) <--> (4,3) ; \
    (0,0) <--> (0,1) ; (4,1) <--> (4,0) ; (1,1) <--> (0,1) ; (2,4) <--> (1,4) ; \
    (2,2) <--> (3,2) ; (1,3) <--> (1,4) ; (0,4) <--> (1,4) ; (0,1) <--> (0,2) ; \
    (2,0) <--> (1,0) ; (1,0) <--> (0,0) ; (3,1) <--> (3,2) ; (2,4) <--> (3,4) ; \
    (3,3) <--> (3,4) ; ";
const PATH: &str = "(3,3) (3,4) (2,4) (1,4) (1,3)";

fn bench_generate_cot(c: &mut Criterion) {
    c.bench_function("generate_cot_5x5", |b| {
        b.iter(|| {
            cot::generate_from_strs(
                black_box(ADJ),
                black_box("(3,3)"),
                black_box("(1,3)"),
                black_box(PATH),
            )
        });
    });
}

fn bench_wrong_paths(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0x5EED);
    c.bench_function("sample_wrong_paths_5x5", |b| {
        b.iter(|| {
            distractor::sample_wrong_paths_from_strs(
                black_box(ADJ),
                black_box("(3,3)"),
                black_box(PATH),
                black_box(3),
                &mut rng,
            )
        });
    });
}

criterion_group!(benches, bench_generate_cot, bench_wrong_paths);
criterion_main!(benches);
