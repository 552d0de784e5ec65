use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seqkit_arr::{op, range, slice_clamped, take_last, Pipe};
use seqkit_utils::bench::{criterion_config, random_numbers};

pub fn slicing(c: &mut Criterion) {
    let input = random_numbers(10_000);
    let mut group = c.benchmark_group("slice");

    group.bench_function("slice 100 out of 10k", |b| {
        b.iter(|| slice_clamped(black_box(&input), 5000, 5100))
    });

    group.bench_function("slice with out-of-range bounds", |b| {
        b.iter(|| slice_clamped(black_box(&input), -50, 20_000).len())
    });

    group.bench_function("take_last 100 out of 10k", |b| {
        b.iter(|| take_last(black_box(&input), 100usize))
    });

    group.bench_function("piped skip/take", |b| {
        b.iter(|| {
            black_box(&input)
                .pipe(op::skip(5000usize))
                .pipe(op::take(100usize))
        })
    });

    group.finish();
}

pub fn ranges(c: &mut Criterion) {
    c.bench_function("range 0..10k", |b| {
        b.iter(|| range(black_box(0), black_box(10_000)))
    });
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = slicing, ranges
}
criterion_main!(benches);
