//! Benchmark for the asynchronous Try adapters.
//!
//! All benchmarks run on one shared multi-thread runtime through
//! `criterion::to_async()`.

use criterion::{Criterion, criterion_group, criterion_main};
use fun::control::Outcome;
use std::hint::black_box;

fn benchmark_try_async(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let mut group = criterion.benchmark_group("try_async");

    group.bench_function("ready_future", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            black_box(Outcome::try_async(|| async { black_box(42) }).await)
        });
    });

    group.bench_function("yielding_future", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            let outcome = Outcome::try_async(|| async {
                tokio::task::yield_now().await;
                black_box(42)
            })
            .await;
            black_box(outcome)
        });
    });

    group.bench_function("bind_async_chain", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            let outcome = Outcome::value(black_box(1))
                .bind_async(|x| Outcome::try_async(move || async move { x + 1 }))
                .await
                .bind_async(|x| Outcome::try_async(move || async move { x * 2 }))
                .await;
            black_box(outcome)
        });
    });

    group.finish();
}

fn benchmark_try_blocking(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    criterion.bench_function("try_blocking", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            black_box(Outcome::try_blocking(|| black_box(42)).await)
        });
    });
}

criterion_group!(benches, benchmark_try_async, benchmark_try_blocking);
criterion_main!(benches);
