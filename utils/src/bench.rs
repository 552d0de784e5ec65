use std::time::Duration;

use criterion::Criterion;

/// The criterion configuration used by every benchmark of the workspace.
pub fn criterion_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .warm_up_time(Duration::from_millis(500))
        .configure_from_args()
}

/// `count` pseudo-random numbers in `[0, 2^32)`, from a linear congruential
/// generator with a fixed seed so that runs are comparable.
pub fn random_numbers(count: usize) -> Vec<u64> {
    const A: u64 = 1664525;
    const C: u64 = 1013904223;
    const M: u64 = 1 << 32;

    let mut state: u64 = 1337;
    (0..count)
        .map(|_| {
            state = (A * state + C) % M;
            state
        })
        .collect()
}

/// `count` strictly ascending numbers, one in each consecutive block of
/// `stride` values.
pub fn sparse_sorted(count: usize, stride: u64) -> Vec<u64> {
    random_numbers(count)
        .into_iter()
        .enumerate()
        .map(|(i, r)| i as u64 * stride + r % stride)
        .collect()
}
