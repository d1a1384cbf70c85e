//! Factoring various semi-primes derived from Mersenne numbers.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num::BigInt;
use parallel_trial_division::config::FactorizerConfig;
use parallel_trial_division::core::cancellation_token::CancellationToken;
use parallel_trial_division::core::progress::NoopProgress;
use parallel_trial_division::{factor_parallel, factor_serial};

const M13: u64 = (1 << 13) - 1;
const M17: u64 = (1 << 17) - 1;
const M19: u64 = (1 << 19) - 1;
const M31: u64 = (1 << 31) - 1;

const N0: u64 = M13 * M17;
const N1: u64 = M13 * M19;
const N2: u64 = M13 * M31;
const N3: u64 = M17 * M19;
const N4: u64 = M17 * M31;
const N5: u64 = M19 * M31;

fn bench_factorization(c: &mut Criterion) {
    let config = FactorizerConfig::default();
    let cancel = CancellationToken::new();

    let mut group = c.benchmark_group("Factorization");
    for i in [N0, N1, N2, N3, N4, N5].iter() {
        let n = BigInt::from(*i);
        group.bench_with_input(BenchmarkId::new("Serial", i), &n, |b, n| {
            b.iter(|| factor_serial(n, &NoopProgress, &cancel).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("Parallel", i), &n, |b, n| {
            b.iter(|| factor_parallel(n, &config, &NoopProgress, &cancel).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_factorization);
criterion_main!(benches);
