extern crate criterion;
extern crate immutable_slice;
extern crate rand;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use immutable_slice::slice;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LEN: usize = 100_000;
const SEED: u64 = 88004802264174740;

fn random_values(len: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..len).map(|_| rng.gen_range(0, 64)).collect()
}

fn bench_edits(c: &mut Criterion) {
    let s = random_values(LEN);
    let elems = random_values(LEN / 10);

    c.bench_function("slice::append", |b| {
        b.iter(|| slice::append(black_box(&s), black_box(&elems)))
    });
    c.bench_function("slice::insert", |b| {
        b.iter(|| slice::insert(black_box(&s), black_box(LEN / 2), black_box(&elems)))
    });
    c.bench_function("slice::replace", |b| {
        b.iter(|| slice::replace(black_box(&s), black_box(LEN / 4), black_box(LEN / 2), black_box(&elems)))
    });
    c.bench_function("slice::delete", |b| {
        b.iter(|| slice::delete(black_box(&s), black_box(LEN / 4), black_box(LEN / 2)))
    });
    c.bench_function("slice::delete_func", |b| {
        b.iter(|| slice::delete_func(black_box(&s), |x| x % 2 == 0))
    });
}

fn bench_reorder(c: &mut Criterion) {
    let s = random_values(LEN);

    c.bench_function("slice::compact", |b| b.iter(|| slice::compact(black_box(&s))));
    c.bench_function("slice::reverse", |b| b.iter(|| slice::reverse(black_box(&s))));
    c.bench_function("slice::sort", |b| b.iter(|| slice::sort(black_box(&s))));
    c.bench_function("slice::sort_stable_func", |b| {
        b.iter(|| slice::sort_stable_func(black_box(&s), |x, y| x.cmp(y)))
    });
}

criterion_group!(
    benches,
    bench_edits,
    bench_reorder
);
criterion_main!(benches);
